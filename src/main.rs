use clap::Parser;
use miette::Result;
use sartor::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => sartor::cli::commands::init::run(args),
        Commands::Configure(args) => sartor::cli::commands::configure::run(args, &cli.global),
        Commands::Catalog(cmd) => sartor::cli::commands::catalog::run(cmd, &cli.global),
        Commands::Profiles(cmd) => sartor::cli::commands::profiles::run(cmd, &cli.global),
        Commands::Cart(cmd) => sartor::cli::commands::cart::run(cmd, &cli.global),
        Commands::Validate(args) => sartor::cli::commands::validate::run(args),
        Commands::Completions(args) => sartor::cli::commands::completions::run(args),
    }
}
