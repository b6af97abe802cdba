//! `sartor cart` commands - submitted line items

use clap::{Args, Subcommand};
use console::style;
use miette::{miette, IntoDiagnostic, Result};
use std::path::{Path, PathBuf};

use crate::boundary::{CartDir, CartRecord};
use crate::cli::helpers::{format_price, truncate_str};
use crate::cli::output::effective_format;
use crate::cli::table::{CellValue, ColumnDef, TableConfig, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{matches_query, Workspace};

#[derive(Subcommand, Debug)]
pub enum CartCommands {
    /// List submitted line items, newest first
    List(ListArgs),
    /// Show one line item record
    Show(ShowArgs),
    /// Export line items as CSV
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Wrap table output to this width
    #[arg(long)]
    pub wrap: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Line item id, id prefix, or summary fragment
    pub query: String,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to a file instead of stdout
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
}

pub fn run(cmd: CartCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CartCommands::List(args) => run_list(args, global),
        CartCommands::Show(args) => run_show(args, global),
        CartCommands::Export(args) => run_export(args),
    }
}

const CART_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("submitted", "SUBMITTED"),
    ColumnDef::new("summary", "SUMMARY"),
    ColumnDef::new("price", "PRICE"),
];

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::discover()?;
    let cart = CartDir::new(workspace.cart_dir());

    let scan = cart.scan().into_diagnostic()?;
    for (path, err) in &scan.skipped {
        eprintln!(
            "{} Skipped {}: {}",
            style("!").yellow().bold(),
            path.display(),
            err
        );
    }

    let format = effective_format(global.output, true);
    match format {
        OutputFormat::Json => {
            let records: Vec<&CartRecord> = scan.records.iter().map(|(_, r)| r).collect();
            let json = serde_json::to_string_pretty(&records).into_diagnostic()?;
            println!("{}", json);
            return Ok(());
        }
        OutputFormat::Yaml => {
            let records: Vec<&CartRecord> = scan.records.iter().map(|(_, r)| r).collect();
            let yaml = serde_yml::to_string(&records).into_diagnostic()?;
            print!("{}", yaml);
            return Ok(());
        }
        _ => {}
    }

    if scan.records.is_empty() {
        println!("The cart is empty.");
        println!("{}", style("Submit a configuration with: sartor configure").dim());
        return Ok(());
    }

    let config = if let Some(width) = args.wrap {
        TableConfig::with_wrap(width)
    } else {
        TableConfig::default()
    };

    let rows: Vec<TableRow> = scan
        .records
        .iter()
        .map(|(_, record)| {
            TableRow::new()
                .cell("id", CellValue::Text(record.item.correlation_id.to_string()))
                .cell("submitted", CellValue::Date(record.submitted_at))
                .cell(
                    "summary",
                    CellValue::Text(truncate_str(&record.display.summary, 44)),
                )
                .cell("price", CellValue::Price(record.item.price))
        })
        .collect();

    TableFormatter::new(CART_COLUMNS).with_config(config).output(&rows, format);

    let total: i64 = scan.records.iter().map(|(_, r)| r.item.price).sum();
    println!();
    println!(
        "{} line item(s), {} total",
        style(scan.records.len()).cyan(),
        style(format_price(total)).bold()
    );

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::discover()?;
    let cart = CartDir::new(workspace.cart_dir());

    let (path, record) = find_record(&cart, &args.query)?;

    match global.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&record).into_diagnostic()?;
            println!("{}", json);
            return Ok(());
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&record).into_diagnostic()?;
            print!("{}", yaml);
            return Ok(());
        }
        _ => {}
    }

    print_record(&path, &record);
    Ok(())
}

fn find_record(cart: &CartDir, query: &str) -> Result<(PathBuf, CartRecord)> {
    let scan = cart.scan().into_diagnostic()?;

    let mut matches: Vec<(PathBuf, CartRecord)> = scan
        .records
        .into_iter()
        .filter(|(_, record)| matches_query(record, query))
        .collect();

    match matches.len() {
        0 => Err(miette!(
            "No line item matching '{}'. See 'sartor cart list'",
            query
        )),
        1 => Ok(matches.remove(0)),
        _ => {
            let candidates: Vec<String> = matches
                .iter()
                .map(|(_, r)| r.item.correlation_id.to_string())
                .collect();
            Err(miette!(
                "Ambiguous query '{}': matches {}",
                query,
                candidates.join(", ")
            ))
        }
    }
}

fn print_record(path: &Path, record: &CartRecord) {
    let item = &record.item;

    println!("{}", style("─".repeat(60)).dim());
    println!(
        "{}  {}",
        style(item.correlation_id.to_string()).cyan(),
        style(&record.display.summary).bold()
    );
    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("Suit type").bold(), item.suit_type.label());
    println!(
        "{}: {} ({})",
        style("Fabric").bold(),
        record.display.fabric,
        item.fabric_id
    );
    println!(
        "{}: {} ({})",
        style("Color").bold(),
        record.display.color,
        item.color_id
    );
    println!(
        "{}: {} ({})",
        style("Style").bold(),
        record.display.style,
        item.style_id
    );
    println!(
        "{}: {} buttons, {} lapel, {} vent, {} pockets, {} lining",
        style("Details").bold(),
        item.details.buttons,
        item.details.lapel,
        item.details.vent,
        item.details.pocket,
        item.details.lining
    );
    println!(
        "{}: {} ({})",
        style("Measurements").bold(),
        record.display.measurements,
        item.measurement_profile_id
    );
    println!();
    println!("{}: {}", style("Price").bold(), style(format_price(item.price)).bold());
    println!("{}", style("─".repeat(60)).dim());
    let fingerprint = if record.catalog_fingerprint.is_empty() {
        "-".to_string()
    } else {
        truncate_str(&record.catalog_fingerprint, 15)
    };
    println!(
        "{}",
        style(format!(
            "Author: {} | Submitted: {} | Catalog: {}",
            if record.author.is_empty() { "-" } else { &record.author },
            record.submitted_at.format("%Y-%m-%d %H:%M"),
            fingerprint
        ))
        .dim()
    );
    println!("{}", style(path.display()).dim());
}

fn run_export(args: ExportArgs) -> Result<()> {
    let workspace = Workspace::discover()?;
    let cart = CartDir::new(workspace.cart_dir());
    let scan = cart.scan().into_diagnostic()?;

    match &args.file {
        Some(path) => {
            let writer = csv::Writer::from_path(path).into_diagnostic()?;
            write_csv(writer, &scan.records)?;
            println!(
                "{} Exported {} line item(s) to {}",
                style("✓").green().bold(),
                style(scan.records.len()).cyan(),
                style(path.display()).dim()
            );
        }
        None => {
            let writer = csv::Writer::from_writer(std::io::stdout());
            write_csv(writer, &scan.records)?;
        }
    }

    Ok(())
}

fn write_csv<W: std::io::Write>(
    mut writer: csv::Writer<W>,
    records: &[(PathBuf, CartRecord)],
) -> Result<()> {
    writer
        .write_record([
            "correlation_id",
            "submitted_at",
            "author",
            "suit_type",
            "fabric_id",
            "color_id",
            "style_id",
            "buttons",
            "lapel",
            "vent",
            "pocket",
            "lining",
            "measurement_profile_id",
            "price_minor_units",
            "catalog_fingerprint",
        ])
        .into_diagnostic()?;

    for (_, record) in records {
        let item = &record.item;
        writer
            .write_record([
                item.correlation_id.to_string(),
                record.submitted_at.to_rfc3339(),
                record.author.clone(),
                item.suit_type.to_string(),
                item.fabric_id.clone(),
                item.color_id.clone(),
                item.style_id.clone(),
                item.details.buttons.to_string(),
                item.details.lapel.to_string(),
                item.details.vent.to_string(),
                item.details.pocket.to_string(),
                item.details.lining.to_string(),
                item.measurement_profile_id.to_string(),
                item.price.to_string(),
                record.catalog_fingerprint.clone(),
            ])
            .into_diagnostic()?;
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
