//! `sartor completions` command - shell completion scripts

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use miette::Result;

use crate::cli::Cli;

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "sartor", &mut std::io::stdout());
    Ok(())
}
