//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::cart::CartCommands;
use crate::cli::commands::catalog::CatalogCommands;
use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::configure::ConfigureArgs;
use crate::cli::commands::init::InitArgs;
use crate::cli::commands::profiles::ProfilesCommands;
use crate::cli::commands::validate::ValidateArgs;

#[derive(Parser, Debug)]
#[command(
    name = "sartor",
    version,
    about = "A terminal fitting room for made-to-measure suits",
    long_about = "Sartor walks a customer through a suit order step by step: fabric, color,\n\
                  style and details, measurements, review. Every choice is validated against\n\
                  the shop catalog and priced on the spot; a finished configuration is\n\
                  submitted to the cart as an immutable line item."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "auto")]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new sartor workspace in a directory
    Init(InitArgs),
    /// Configure a suit, step by step or from flags
    Configure(ConfigureArgs),
    /// Inspect the shop catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),
    /// Manage saved measurement profiles
    #[command(subcommand)]
    Profiles(ProfilesCommands),
    /// Inspect submitted line items
    #[command(subcommand)]
    Cart(CartCommands),
    /// Validate workspace files against their schemas
    Validate(ValidateArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pick a format based on the command (table for lists, YAML otherwise)
    Auto,
    /// Aligned table
    Table,
    /// Tab-separated values
    Tsv,
    /// YAML document
    Yaml,
    /// Pretty-printed JSON
    Json,
}
