//! Column-based table rendering for list commands

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tabled::builder::Builder;
use tabled::settings::{Style, Width};

use crate::cli::helpers::{format_delta, format_price};
use crate::cli::OutputFormat;

/// A column in a list table
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
}

impl ColumnDef {
    pub const fn new(key: &'static str, header: &'static str) -> Self {
        Self { key, header }
    }
}

/// A single cell value, rendered per its kind
#[derive(Debug, Clone)]
pub enum CellValue {
    Text(String),
    Price(i64),
    Delta(i64),
    Date(DateTime<Utc>),
}

impl CellValue {
    fn render(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Price(amount) => format_price(*amount),
            CellValue::Delta(amount) => format_delta(*amount),
            CellValue::Date(dt) => dt.format("%Y-%m-%d").to_string(),
        }
    }
}

/// One row of cells, keyed by column
#[derive(Debug, Default)]
pub struct TableRow {
    cells: HashMap<&'static str, CellValue>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, key: &'static str, value: CellValue) -> Self {
        self.cells.insert(key, value);
        self
    }

    fn get(&self, key: &str) -> String {
        self.cells
            .get(key)
            .map(CellValue::render)
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Table rendering options
#[derive(Debug, Default, Clone)]
pub struct TableConfig {
    /// Wrap the table to this total width
    pub wrap: Option<usize>,
}

impl TableConfig {
    pub fn with_wrap(width: usize) -> Self {
        Self { wrap: Some(width) }
    }
}

/// Renders rows against a fixed column set
pub struct TableFormatter {
    columns: &'static [ColumnDef],
    config: TableConfig,
}

impl TableFormatter {
    pub fn new(columns: &'static [ColumnDef]) -> Self {
        Self {
            columns,
            config: TableConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Print the rows in the given format (Table or Tsv)
    pub fn output(&self, rows: &[TableRow], format: OutputFormat) {
        match format {
            OutputFormat::Tsv => {
                let headers: Vec<&str> = self.columns.iter().map(|c| c.header).collect();
                println!("{}", headers.join("\t"));
                for row in rows {
                    let cells: Vec<String> =
                        self.columns.iter().map(|c| row.get(c.key)).collect();
                    println!("{}", cells.join("\t"));
                }
            }
            _ => {
                let mut builder = Builder::default();
                builder.push_record(self.columns.iter().map(|c| c.header.to_string()));
                for row in rows {
                    builder.push_record(self.columns.iter().map(|c| row.get(c.key)));
                }
                let mut table = builder.build();
                table.with(Style::sharp());
                if let Some(width) = self.config.wrap {
                    table.with(Width::wrap(width));
                }
                println!("{}", table);
            }
        }
    }
}
