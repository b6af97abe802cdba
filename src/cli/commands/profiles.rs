//! `sartor profiles` commands - saved measurement profiles

use clap::{Args, Subcommand};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::boundary::{MeasurementLookup, ProfileDir};
use crate::cli::helpers::truncate_str;
use crate::cli::output::effective_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Entity, Workspace};

#[derive(Subcommand, Debug)]
pub enum ProfilesCommands {
    /// List profiles on file
    List(ListArgs),
    /// Show one profile by id, id prefix, or name
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// List profiles visible to this user instead of the configured author
    #[arg(long)]
    pub user: Option<String>,

    /// Ignore ownership and list every profile
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Profile id, id prefix, or name fragment
    pub query: String,

    /// Search profiles visible to this user instead of the configured author
    #[arg(long)]
    pub user: Option<String>,
}

pub fn run(cmd: ProfilesCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ProfilesCommands::List(args) => run_list(args, global),
        ProfilesCommands::Show(args) => run_show(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::discover()?;
    let config = Config::load(Some(&workspace));
    let store = ProfileDir::new(workspace.profiles_dir());

    let user = if args.all {
        String::new()
    } else {
        args.user.unwrap_or_else(|| config.author().to_string())
    };

    // Scan once so unparseable files can be reported alongside the list
    let scan = store.scan()?;
    for (path, err) in &scan.skipped {
        eprintln!(
            "{} Skipped {}: {}",
            style("!").yellow().bold(),
            path.display(),
            err
        );
    }

    let profiles: Vec<_> = scan
        .profiles
        .into_iter()
        .filter(|p| p.visible_to(&user))
        .collect();

    match effective_format(global.output, true) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&profiles).into_diagnostic()?;
            println!("{}", json);
            return Ok(());
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&profiles).into_diagnostic()?;
            print!("{}", yaml);
            return Ok(());
        }
        _ => {}
    }

    if profiles.is_empty() {
        println!("No measurement profiles found.");
        println!(
            "{}",
            style(format!(
                "Add YAML files under {} or rerun 'sartor init'",
                store.dir().display()
            ))
            .dim()
        );
        return Ok(());
    }

    println!(
        "{:<32} {:<24} {:>7} {:>7} {:>7}  {:<12}",
        "ID", "NAME", "HEIGHT", "CHEST", "WAIST", "AUTHOR"
    );
    println!("{}", "-".repeat(94));

    for profile in &profiles {
        println!(
            "{:<32} {:<24} {:>7.1} {:>7.1} {:>7.1}  {:<12}",
            profile.id.to_string(),
            truncate_str(&profile.name, 24),
            profile.height_cm,
            profile.chest_cm,
            profile.waist_cm,
            truncate_str(&profile.author, 12)
        );
    }

    println!();
    println!("{} profile(s) found", style(profiles.len()).cyan());

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::discover()?;
    let config = Config::load(Some(&workspace));
    let store = ProfileDir::new(workspace.profiles_dir());

    let user = args.user.unwrap_or_else(|| config.author().to_string());
    let profile = store.find_profile(&user, &args.query)?;

    match global.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&profile).into_diagnostic()?;
            println!("{}", json);
            return Ok(());
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&profile).into_diagnostic()?;
            print!("{}", yaml);
            return Ok(());
        }
        _ => {}
    }

    println!("{}", style("─".repeat(60)).dim());
    println!(
        "{}  {}",
        style(profile.id.to_string()).cyan(),
        style(&profile.name).bold()
    );
    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {:.1} cm", style("Height").bold(), profile.height_cm);
    println!("{}: {:.1} cm", style("Chest").bold(), profile.chest_cm);
    println!("{}: {:.1} cm", style("Waist").bold(), profile.waist_cm);
    if let Some(sleeve) = profile.sleeve_cm {
        println!("{}: {:.1} cm", style("Sleeve").bold(), sleeve);
    }
    if let Some(shoulder) = profile.shoulder_cm {
        println!("{}: {:.1} cm", style("Shoulder").bold(), shoulder);
    }
    if let Some(inseam) = profile.inseam_cm {
        println!("{}: {:.1} cm", style("Inseam").bold(), inseam);
    }
    if let Some(notes) = &profile.notes {
        println!();
        println!("{}", style("Notes").bold());
        for line in notes.lines() {
            println!("  {}", line);
        }
    }
    println!("{}", style("─".repeat(60)).dim());
    println!(
        "{}",
        style(format!(
            "Author: {} | Created: {}",
            if profile.author.is_empty() {
                "-"
            } else {
                &profile.author
            },
            profile.created.format("%Y-%m-%d %H:%M")
        ))
        .dim()
    );

    Ok(())
}
