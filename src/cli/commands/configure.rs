//! `sartor configure` command - the guided fitting flow
//!
//! Without flags this walks the five steps interactively. With any
//! selection flag it runs one-shot: apply every flag, price, and either
//! preview, dry-run, or submit.

use clap::Args;
use console::style;
use dialoguer::{theme::ColorfulTheme, Select};
use miette::{miette, IntoDiagnostic, Result};

use crate::boundary::{
    CartBoundary, CartDir, DisplaySnapshot, MeasurementLookup, ProfileDir, Provenance,
};
use crate::catalog::{
    load_catalog, ButtonCount, DetailOption, Lapel, Lining, OptionCatalog, Pocket, SuitType,
    Vent,
};
use crate::cli::helpers::{format_delta, format_price};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Advance, Config, Configurator, Step, Workspace};

#[derive(Args, Debug)]
pub struct ConfigureArgs {
    /// Suit type (two-piece or three-piece)
    #[arg(long)]
    pub suit_type: Option<String>,

    /// Fabric id
    #[arg(long)]
    pub fabric: Option<String>,

    /// Color id
    #[arg(long)]
    pub color: Option<String>,

    /// Style id
    #[arg(long)]
    pub style: Option<String>,

    /// Buttons (one, two, three)
    #[arg(long)]
    pub buttons: Option<String>,

    /// Lapel (notch, peak, shawl)
    #[arg(long)]
    pub lapel: Option<String>,

    /// Vent (center, side, none)
    #[arg(long)]
    pub vent: Option<String>,

    /// Pockets (flap, jetted, patch)
    #[arg(long)]
    pub pocket: Option<String>,

    /// Lining (full, half, unlined)
    #[arg(long)]
    pub lining: Option<String>,

    /// Measurement profile (id, id prefix, or name)
    #[arg(long)]
    pub profile: Option<String>,

    /// Submit straight to the cart
    #[arg(long)]
    pub submit: bool,

    /// Validate and price only; write nothing
    #[arg(long)]
    pub dry_run: bool,
}

impl ConfigureArgs {
    fn one_shot(&self) -> bool {
        self.suit_type.is_some()
            || self.fabric.is_some()
            || self.color.is_some()
            || self.style.is_some()
            || self.buttons.is_some()
            || self.lapel.is_some()
            || self.vent.is_some()
            || self.pocket.is_some()
            || self.lining.is_some()
            || self.profile.is_some()
            || self.submit
            || self.dry_run
    }
}

pub fn run(args: ConfigureArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::discover()?;
    let config = Config::load(Some(&workspace));
    let catalog = load_catalog(&workspace.catalog_file())?;
    let profiles = ProfileDir::new(workspace.profiles_dir());
    let cart = CartDir::new(workspace.cart_dir());

    let mut session = Configurator::new(&catalog);
    session.set_suit_type(config.default_suit_type());

    if args.one_shot() {
        run_one_shot(args, global, &config, &catalog, &profiles, &cart, &mut session)
    } else {
        run_wizard(&config, &catalog, &profiles, &cart, &mut session)
    }
}

// ============================================================================
// One-shot mode
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn run_one_shot(
    args: ConfigureArgs,
    global: &GlobalOpts,
    config: &Config,
    catalog: &OptionCatalog,
    profiles: &ProfileDir,
    cart: &CartDir,
    session: &mut Configurator,
) -> Result<()> {
    if let Some(raw) = &args.suit_type {
        let suit_type: SuitType = raw.parse().map_err(|e: String| miette!("{}", e))?;
        session.set_suit_type(suit_type);
    }

    if let Some(id) = &args.fabric {
        session.select_fabric(id).map_err(|err| {
            let ids: Vec<&str> = catalog.fabrics.iter().map(|f| f.id.as_str()).collect();
            miette!(help = format!("Available fabrics: {}", ids.join(", ")), "{}", err)
        })?;
    }

    if let Some(id) = &args.color {
        session.select_color(id).map_err(|err| {
            let ids: Vec<&str> = catalog.colors.iter().map(|c| c.id.as_str()).collect();
            miette!(help = format!("Available colors: {}", ids.join(", ")), "{}", err)
        })?;
    }

    if let Some(id) = &args.style {
        session.select_style(id).map_err(|err| {
            let ids: Vec<&str> = catalog.styles.iter().map(|s| s.id.as_str()).collect();
            miette!(help = format!("Available styles: {}", ids.join(", ")), "{}", err)
        })?;
    }

    if let Some(raw) = &args.buttons {
        let buttons: ButtonCount = raw.parse().map_err(|e: String| miette!("{}", e))?;
        session.set_buttons(buttons);
    }
    if let Some(raw) = &args.lapel {
        let lapel: Lapel = raw.parse().map_err(|e: String| miette!("{}", e))?;
        session.set_lapel(lapel);
    }
    if let Some(raw) = &args.vent {
        let vent: Vent = raw.parse().map_err(|e: String| miette!("{}", e))?;
        session.set_vent(vent);
    }
    if let Some(raw) = &args.pocket {
        let pocket: Pocket = raw.parse().map_err(|e: String| miette!("{}", e))?;
        session.set_pocket(pocket);
    }
    if let Some(raw) = &args.lining {
        let lining: Lining = raw.parse().map_err(|e: String| miette!("{}", e))?;
        session.set_lining(lining);
    }

    if let Some(query) = &args.profile {
        let profile = profiles.find_profile(config.author(), query)?;
        session.choose_measurements(profile.to_ref());
    }

    let missing = session.missing();
    if !missing.is_empty() && (args.submit || args.dry_run) {
        let names: Vec<String> = missing.iter().map(|m| m.to_string()).collect();
        return Err(miette!(
            help = "See 'sartor catalog list' and 'sartor profiles list' for what's available",
            "Configuration incomplete; still required: {}",
            names.join(", ")
        ));
    }

    if missing.is_empty() {
        let item = session.finalize().map_err(|e| miette!("{}", e))?;

        let machine_output = matches!(global.output, OutputFormat::Json | OutputFormat::Yaml);
        match global.output {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&item).into_diagnostic()?;
                println!("{}", json);
            }
            OutputFormat::Yaml => {
                let yaml = serde_yml::to_string(&item).into_diagnostic()?;
                print!("{}", yaml);
            }
            _ => {
                print_review(session);
            }
        }

        if args.dry_run {
            if !machine_output {
                println!("{}", style("Dry run; nothing was written.").dim());
            }
            return Ok(());
        }

        if args.submit {
            let receipt = cart.submit(
                &item,
                Provenance {
                    author: config.author().to_string(),
                    catalog_fingerprint: catalog.fingerprint().to_string(),
                    display: DisplaySnapshot::from_state(session.state()),
                },
            )?;
            if machine_output {
                // keep stdout machine-readable
                eprintln!("Added to cart: {}", receipt.id);
            } else {
                println!(
                    "{} Added to cart: {}",
                    style("✓").green().bold(),
                    style(receipt.id.to_string()).cyan()
                );
                println!("  {}", style(receipt.path.display()).dim());
            }
            return Ok(());
        }

        if !machine_output {
            println!("{}", style("Rerun with --submit to add it to the cart.").dim());
        }
        return Ok(());
    }

    // Partial preview: show what's there, flag what isn't
    print_review(session);
    println!();
    for gap in &missing {
        println!("  {} {}", style("!").yellow().bold(), gap.reason());
    }
    println!(
        "{}",
        style("Complete the selection and rerun with --submit.").dim()
    );

    Ok(())
}

// ============================================================================
// Interactive wizard
// ============================================================================

fn run_wizard(
    config: &Config,
    catalog: &OptionCatalog,
    profiles: &ProfileDir,
    cart: &CartDir,
    session: &mut Configurator,
) -> Result<()> {
    if catalog.name.is_empty() {
        println!("{}", style("Sartor fitting room").bold());
    } else {
        println!(
            "{} {}",
            style("Sartor fitting room:").bold(),
            style(&catalog.name).cyan()
        );
    }

    loop {
        println!();
        println!(
            "{}  {}",
            style(format!(
                "Step {} of {}: {}",
                session.position(),
                Step::all().len(),
                session.step().title()
            ))
            .bold(),
            style(format!("[{}]", format_price(session.price()))).dim()
        );

        match session.step() {
            Step::Fabric => {
                prompt_suit_type(session, catalog)?;
                prompt_fabric(session, catalog)?;
            }
            Step::Color => prompt_color(session, catalog)?,
            Step::Style => {
                prompt_style(session, catalog)?;
                prompt_details(session, catalog)?;
            }
            Step::Measurements => prompt_measurements(session, config, profiles)?,
            Step::Review => {
                print_review(session);
                println!();
                let choice = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Ready?")
                    .items(&["Add to cart", "Go back and change something", "Abandon"])
                    .default(0)
                    .interact()
                    .into_diagnostic()?;

                match choice {
                    0 => match session.next_step() {
                        Ok(Advance::ReadyToSubmit) => {
                            return submit_from_wizard(session, config, catalog, cart);
                        }
                        Ok(Advance::Moved(_)) => continue,
                        Err(blocked) => {
                            println!("  {} {}", style("!").yellow().bold(), blocked);
                            continue;
                        }
                    },
                    1 => {
                        prompt_jump_back(session)?;
                        continue;
                    }
                    _ => {
                        println!("Abandoned; nothing was written.");
                        return Ok(());
                    }
                }
            }
        }

        // Validate and move on; a failed check re-prompts the same step
        match session.next_step() {
            Ok(_) => {}
            Err(blocked) => {
                println!("  {} {}", style("!").yellow().bold(), blocked);
            }
        }
    }
}

fn prompt_suit_type(session: &mut Configurator, catalog: &OptionCatalog) -> Result<()> {
    let items: Vec<String> = SuitType::all()
        .iter()
        .map(|st| format!("{} ({})", st.label(), format_price(catalog.base_price(*st))))
        .collect();
    let default = SuitType::all()
        .iter()
        .position(|st| *st == session.state().suit_type)
        .unwrap_or(0);

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Suit type")
        .items(&items)
        .default(default)
        .interact()
        .into_diagnostic()?;
    session.set_suit_type(SuitType::all()[choice]);
    Ok(())
}

fn prompt_fabric(session: &mut Configurator, catalog: &OptionCatalog) -> Result<()> {
    let items: Vec<String> = catalog
        .fabrics
        .iter()
        .map(|f| format!("{} ({})", f.name, format_delta(f.price_delta)))
        .collect();
    let default = session
        .state()
        .fabric
        .as_ref()
        .and_then(|chosen| catalog.fabrics.iter().position(|f| f.id == chosen.id))
        .unwrap_or(0);

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Fabric")
        .items(&items)
        .default(default)
        .interact()
        .into_diagnostic()?;
    let id = catalog.fabrics[choice].id.clone();
    session.select_fabric(&id).map_err(|e| miette!("{}", e))?;
    Ok(())
}

fn prompt_color(session: &mut Configurator, catalog: &OptionCatalog) -> Result<()> {
    let items: Vec<String> = catalog
        .colors
        .iter()
        .map(|c| format!("{} ({})", c.name, c.value))
        .collect();
    let default = session
        .state()
        .color
        .as_ref()
        .and_then(|chosen| catalog.colors.iter().position(|c| c.id == chosen.id))
        .unwrap_or(0);

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Color")
        .items(&items)
        .default(default)
        .interact()
        .into_diagnostic()?;
    let id = catalog.colors[choice].id.clone();
    session.select_color(&id).map_err(|e| miette!("{}", e))?;
    Ok(())
}

fn prompt_style(session: &mut Configurator, catalog: &OptionCatalog) -> Result<()> {
    let items: Vec<String> = catalog
        .styles
        .iter()
        .map(|s| match &s.description {
            Some(description) => format!("{} - {}", s.name, description),
            None => s.name.clone(),
        })
        .collect();
    let default = session
        .state()
        .style
        .as_ref()
        .and_then(|chosen| catalog.styles.iter().position(|s| s.id == chosen.id))
        .unwrap_or(0);

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Style")
        .items(&items)
        .default(default)
        .interact()
        .into_diagnostic()?;
    let id = catalog.styles[choice].id.clone();
    session.select_style(&id).map_err(|e| miette!("{}", e))?;
    Ok(())
}

fn prompt_details(session: &mut Configurator, catalog: &OptionCatalog) -> Result<()> {
    let buttons: ButtonCount =
        pick_detail("Buttons", &catalog.details.buttons, &session.state().details.buttons.to_string())?;
    session.set_buttons(buttons);

    let lapel: Lapel =
        pick_detail("Lapel", &catalog.details.lapels, &session.state().details.lapel.to_string())?;
    session.set_lapel(lapel);

    let vent: Vent =
        pick_detail("Vent", &catalog.details.vents, &session.state().details.vent.to_string())?;
    session.set_vent(vent);

    let pocket: Pocket =
        pick_detail("Pockets", &catalog.details.pockets, &session.state().details.pocket.to_string())?;
    session.set_pocket(pocket);

    let lining: Lining =
        pick_detail("Lining", &catalog.details.linings, &session.state().details.lining.to_string())?;
    session.set_lining(lining);

    Ok(())
}

fn pick_detail<T: std::str::FromStr<Err = String>>(
    prompt: &str,
    options: &[DetailOption],
    current_id: &str,
) -> Result<T> {
    let items: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
    let default = options.iter().position(|o| o.id == current_id).unwrap_or(0);

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()
        .into_diagnostic()?;
    options[choice].id.parse().map_err(|e: String| miette!("{}", e))
}

fn prompt_measurements(
    session: &mut Configurator,
    config: &Config,
    profiles: &ProfileDir,
) -> Result<()> {
    let on_file = profiles.list_profiles(config.author())?;
    if on_file.is_empty() {
        return Err(miette!(
            help = "Add one under profiles/ (sartor init writes a sample) and run configure again",
            "No measurement profiles on file for {}",
            config.author()
        ));
    }

    let items: Vec<String> = on_file.iter().map(|p| p.to_ref().summary()).collect();
    let default = session
        .state()
        .measurements
        .as_ref()
        .and_then(|chosen| on_file.iter().position(|p| p.id == chosen.id))
        .unwrap_or(0);

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Measurement profile")
        .items(&items)
        .default(default)
        .interact()
        .into_diagnostic()?;
    session.choose_measurements(on_file[choice].to_ref());
    Ok(())
}

fn prompt_jump_back(session: &mut Configurator) -> Result<()> {
    let earlier: Vec<Step> = Step::all()
        .iter()
        .copied()
        .filter(|step| step.index() < session.step().index())
        .collect();
    let items: Vec<&str> = earlier.iter().map(|step| step.title()).collect();

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Jump back to")
        .items(&items)
        .default(0)
        .interact()
        .into_diagnostic()?;
    session
        .jump_to(earlier[choice])
        .map_err(|e| miette!("{}", e))?;
    Ok(())
}

fn submit_from_wizard(
    session: &Configurator,
    config: &Config,
    catalog: &OptionCatalog,
    cart: &CartDir,
) -> Result<()> {
    let item = session.finalize().map_err(|e| miette!("{}", e))?;
    let receipt = cart.submit(
        &item,
        Provenance {
            author: config.author().to_string(),
            catalog_fingerprint: catalog.fingerprint().to_string(),
            display: DisplaySnapshot::from_state(session.state()),
        },
    )?;

    println!();
    println!(
        "{} Added to cart: {}",
        style("✓").green().bold(),
        style(receipt.id.to_string()).cyan()
    );
    println!("  {}", style(receipt.path.display()).dim());
    println!(
        "  {}: {}",
        style("Total").bold(),
        style(format_price(item.price)).bold()
    );
    Ok(())
}

// ============================================================================
// Shared display
// ============================================================================

fn print_review(session: &Configurator) {
    let state = session.state();

    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Your configuration").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("Suit type").bold(), state.suit_type.label());
    println!(
        "{}: {}",
        style("Fabric").bold(),
        state
            .fabric
            .as_ref()
            .map(|f| f.name.as_str())
            .unwrap_or("(not selected)")
    );
    println!(
        "{}: {}",
        style("Color").bold(),
        state
            .color
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("(not selected)")
    );
    println!(
        "{}: {}",
        style("Style").bold(),
        state
            .style
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("(not selected)")
    );
    println!(
        "{}: {}, {}, {}, {}, {}",
        style("Details").bold(),
        state.details.buttons.label(),
        state.details.lapel.label(),
        state.details.vent.label(),
        state.details.pocket.label(),
        state.details.lining.label()
    );
    println!(
        "{}: {}",
        style("Measurements").bold(),
        state
            .measurements
            .as_ref()
            .map(|m| m.summary())
            .unwrap_or_else(|| "(not selected)".to_string())
    );

    println!();
    let breakdown = session.breakdown();
    for (i, line) in breakdown.lines.iter().enumerate() {
        let amount = if i == 0 {
            format_price(line.amount)
        } else {
            format_delta(line.amount)
        };
        println!("  {:<34} {:>12}", line.label, amount);
    }
    println!("  {:<34} {:>12}", "", "-".repeat(12));
    println!(
        "{}",
        style(format!(
            "  {:<34} {:>12}",
            "Total",
            format_price(breakdown.total)
        ))
        .bold()
    );
}
