//! `sartor init` command - scaffold a new workspace

use clap::Args;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::{Config, Workspace};
use crate::schema::{TemplateContext, TemplateGenerator};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Catalog display name
    #[arg(long)]
    pub name: Option<String>,

    /// Skip the sample measurement profile
    #[arg(long)]
    pub no_sample_profile: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    fs::create_dir_all(&args.path).into_diagnostic()?;
    let workspace = Workspace::init(&args.path)?;

    let config = Config::load(None);
    let generator = TemplateGenerator::new().map_err(|e| miette::miette!("{}", e))?;

    let mut ctx = TemplateContext::new(EntityId::new(EntityPrefix::Msr), config.author().to_string())
        .with_currency(config.currency())
        .with_default_suit_type(config.default_suit_type().to_string());
    if let Some(name) = &args.name {
        ctx = ctx.with_title(name);
    }

    let config_path = workspace.config_file();
    fs::write(
        &config_path,
        generator.generate_config(&ctx).map_err(|e| miette::miette!("{}", e))?,
    )
    .into_diagnostic()?;

    // Never clobber a catalog that was already in the directory
    let catalog_path = workspace.catalog_file();
    if catalog_path.exists() {
        println!(
            "{} Kept existing catalog: {}",
            style("!").yellow().bold(),
            style(catalog_path.display()).dim()
        );
    } else {
        fs::write(
            &catalog_path,
            generator.generate_catalog(&ctx).map_err(|e| miette::miette!("{}", e))?,
        )
        .into_diagnostic()?;
    }

    println!(
        "{} Initialized sartor workspace: {}",
        style("✓").green().bold(),
        style(workspace.root().display()).cyan()
    );
    println!("  {}", style(config_path.display()).dim());
    println!("  {}", style(catalog_path.display()).dim());

    if !args.no_sample_profile {
        let profile_ctx = TemplateContext::new(
            EntityId::new(EntityPrefix::Msr),
            config.author().to_string(),
        )
        .with_title("Sample fit")
        .with_measurements(180.0, 98.0, 84.0);
        let profile_path = workspace
            .profiles_dir()
            .join(format!("{}.sartor.yaml", profile_ctx.id));
        fs::write(
            &profile_path,
            generator
                .generate_profile(&profile_ctx)
                .map_err(|e| miette::miette!("{}", e))?,
        )
        .into_diagnostic()?;
        println!("  {}", style(profile_path.display()).dim());
    }

    println!();
    println!("Next steps:");
    println!("  1. Review the starter catalog in catalog.sartor.yaml");
    println!("  2. Add real measurements under profiles/");
    println!("  3. Run 'sartor configure' to fit your first suit");

    Ok(())
}
