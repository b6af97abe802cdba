//! `sartor catalog` commands - inspect what the shop offers

use clap::{Args, Subcommand};
use console::style;
use miette::{miette, IntoDiagnostic, Result};

use crate::catalog::{
    load_catalog, ButtonCount, Color, DetailOption, Fabric, Lapel, Lining, OptionCatalog,
    Pocket, Style, SuitType, Vent,
};
use crate::cli::helpers::{format_delta, format_price};
use crate::cli::output::effective_format;
use crate::cli::table::{CellValue, ColumnDef, TableConfig, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Workspace;

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List everything on offer with its price effect
    List(ListArgs),
    /// Show one catalog entry by id or name
    Show(ShowArgs),
    /// Show the detail axes and their offered values
    Details,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Wrap table output to this width
    #[arg(long)]
    pub wrap: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Entry id or name fragment
    pub query: String,
}

pub fn run(cmd: CatalogCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CatalogCommands::List(args) => run_list(args, global),
        CatalogCommands::Show(args) => run_show(args),
        CatalogCommands::Details => run_details(),
    }
}

fn load() -> Result<OptionCatalog> {
    let workspace = Workspace::discover()?;
    let catalog = load_catalog(&workspace.catalog_file())?;
    Ok(catalog)
}

const FABRIC_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("name", "NAME"),
    ColumnDef::new("effect", "PRICE EFFECT"),
    ColumnDef::new("description", "DESCRIPTION"),
];

const COLOR_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("name", "NAME"),
    ColumnDef::new("value", "VALUE"),
];

const STYLE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("name", "NAME"),
    ColumnDef::new("effect", "PRICE EFFECT"),
    ColumnDef::new("description", "DESCRIPTION"),
];

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let catalog = load()?;

    let format = effective_format(global.output, true);
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&catalog).into_diagnostic()?;
            println!("{}", json);
            return Ok(());
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&catalog).into_diagnostic()?;
            print!("{}", yaml);
            return Ok(());
        }
        _ => {}
    }

    let config = if let Some(width) = args.wrap {
        TableConfig::with_wrap(width)
    } else {
        TableConfig::default()
    };

    if !catalog.name.is_empty() {
        println!("{}", style(&catalog.name).bold());
        println!();
    }

    println!(
        "Base price: {} two-piece / {} three-piece",
        style(format_price(catalog.base_price(SuitType::TwoPiece))).bold(),
        style(format_price(catalog.base_price(SuitType::ThreePiece))).bold()
    );
    println!();

    println!("{}", style("Fabrics").bold());
    let rows: Vec<TableRow> = catalog.fabrics.iter().map(fabric_to_row).collect();
    TableFormatter::new(FABRIC_COLUMNS)
        .with_config(config.clone())
        .output(&rows, format);
    println!();

    println!("{}", style("Colors").bold());
    let rows: Vec<TableRow> = catalog.colors.iter().map(color_to_row).collect();
    TableFormatter::new(COLOR_COLUMNS)
        .with_config(config.clone())
        .output(&rows, format);
    println!();

    println!("{}", style("Styles").bold());
    let rows: Vec<TableRow> = catalog.styles.iter().map(style_to_row).collect();
    TableFormatter::new(STYLE_COLUMNS)
        .with_config(config)
        .output(&rows, format);
    println!();

    println!(
        "{} fabric(s), {} color(s), {} style(s) on offer",
        style(catalog.fabrics.len()).cyan(),
        style(catalog.colors.len()).cyan(),
        style(catalog.styles.len()).cyan()
    );
    println!(
        "{}",
        style(format!("Catalog fingerprint: {}", catalog.fingerprint())).dim()
    );

    Ok(())
}

fn fabric_to_row(fabric: &Fabric) -> TableRow {
    TableRow::new()
        .cell("id", CellValue::Text(fabric.id.clone()))
        .cell("name", CellValue::Text(fabric.name.clone()))
        .cell("effect", CellValue::Delta(fabric.price_delta))
        .cell(
            "description",
            CellValue::Text(fabric.description.clone().unwrap_or_else(|| "-".to_string())),
        )
}

fn color_to_row(color: &Color) -> TableRow {
    TableRow::new()
        .cell("id", CellValue::Text(color.id.clone()))
        .cell("name", CellValue::Text(color.name.clone()))
        .cell("value", CellValue::Text(color.value.clone()))
}

fn style_to_row(entry: &Style) -> TableRow {
    TableRow::new()
        .cell("id", CellValue::Text(entry.id.clone()))
        .cell("name", CellValue::Text(entry.name.clone()))
        .cell("effect", CellValue::Delta(entry.price_delta))
        .cell(
            "description",
            CellValue::Text(entry.description.clone().unwrap_or_else(|| "-".to_string())),
        )
}

enum CatalogEntry<'a> {
    Fabric(&'a Fabric),
    Color(&'a Color),
    Style(&'a Style),
}

fn run_show(args: ShowArgs) -> Result<()> {
    let catalog = load()?;
    let entry = find_entry(&catalog, &args.query)?;

    println!("{}", style("─".repeat(60)).dim());
    match entry {
        CatalogEntry::Fabric(fabric) => {
            println!("{}  {}", style(&fabric.id).cyan(), style(&fabric.name).bold());
            println!("{}", style("─".repeat(60)).dim());
            println!("{}: fabric", style("Kind").bold());
            println!(
                "{}: {}",
                style("Price effect").bold(),
                format_delta(fabric.price_delta)
            );
            if let Some(description) = &fabric.description {
                println!("{}: {}", style("Description").bold(), description);
            }
        }
        CatalogEntry::Color(color) => {
            println!("{}  {}", style(&color.id).cyan(), style(&color.name).bold());
            println!("{}", style("─".repeat(60)).dim());
            println!("{}: color", style("Kind").bold());
            println!("{}: {}", style("Value").bold(), color.value);
        }
        CatalogEntry::Style(entry) => {
            println!("{}  {}", style(&entry.id).cyan(), style(&entry.name).bold());
            println!("{}", style("─".repeat(60)).dim());
            println!("{}: style", style("Kind").bold());
            println!(
                "{}: {}",
                style("Price effect").bold(),
                format_delta(entry.price_delta)
            );
            if let Some(description) = &entry.description {
                println!("{}: {}", style("Description").bold(), description);
            }
        }
    }
    println!("{}", style("─".repeat(60)).dim());

    Ok(())
}

fn find_entry<'a>(catalog: &'a OptionCatalog, query: &str) -> Result<CatalogEntry<'a>> {
    let needle = query.to_lowercase();
    let mut matches: Vec<CatalogEntry<'a>> = Vec::new();

    for fabric in &catalog.fabrics {
        if fabric.id == needle || fabric.name.to_lowercase().contains(&needle) {
            matches.push(CatalogEntry::Fabric(fabric));
        }
    }
    for color in &catalog.colors {
        if color.id == needle || color.name.to_lowercase().contains(&needle) {
            matches.push(CatalogEntry::Color(color));
        }
    }
    for entry in &catalog.styles {
        if entry.id == needle || entry.name.to_lowercase().contains(&needle) {
            matches.push(CatalogEntry::Style(entry));
        }
    }

    match matches.len() {
        0 => Err(miette!(
            "No catalog entry matching '{}'. Try 'sartor catalog list'",
            query
        )),
        1 => Ok(matches.remove(0)),
        n => {
            let names: Vec<&str> = matches
                .iter()
                .map(|m| match m {
                    CatalogEntry::Fabric(f) => f.id.as_str(),
                    CatalogEntry::Color(c) => c.id.as_str(),
                    CatalogEntry::Style(s) => s.id.as_str(),
                })
                .collect();
            Err(miette!(
                "Ambiguous query '{}': {} entries match ({})",
                query,
                n,
                names.join(", ")
            ))
        }
    }
}

fn run_details() -> Result<()> {
    let catalog = load()?;

    print_axis("buttons", &catalog.details.buttons, &ButtonCount::default().to_string());
    print_axis("lapels", &catalog.details.lapels, &Lapel::default().to_string());
    print_axis("vents", &catalog.details.vents, &Vent::default().to_string());
    print_axis("pockets", &catalog.details.pockets, &Pocket::default().to_string());
    print_axis("linings", &catalog.details.linings, &Lining::default().to_string());

    Ok(())
}

fn print_axis(name: &str, options: &[DetailOption], default_id: &str) {
    println!("{}", style(name).bold());
    for opt in options {
        let marker = if opt.id == default_id { " (default)" } else { "" };
        println!("  {:<10} {}{}", style(&opt.id).cyan(), opt.name, marker);
    }
    println!();
}
