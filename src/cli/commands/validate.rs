//! `sartor validate` command - check workspace files against schemas

use console::style;
use miette::Result;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::core::workspace::{Workspace, CATALOG_FILE};
use crate::core::EntityPrefix;
use crate::schema::registry::{SchemaKind, SchemaRegistry};
use crate::schema::validator::{Validator, ValidatorError};

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Paths to validate (default: entire workspace)
    #[arg()]
    pub paths: Vec<PathBuf>,

    /// Only validate one kind of file (catalog, profile, lineitem)
    #[arg(long, short = 'k')]
    pub kind: Option<String>,

    /// Continue validation after first error
    #[arg(long)]
    pub keep_going: bool,

    /// Show summary only, don't show individual errors
    #[arg(long)]
    pub summary: bool,
}

/// Validation statistics
#[derive(Default)]
struct ValidationStats {
    files_checked: usize,
    files_passed: usize,
    files_failed: usize,
    total_errors: usize,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let workspace = Workspace::discover()?;
    let registry = SchemaRegistry::default();
    let validator = Validator::new(&registry);

    let mut stats = ValidationStats::default();
    let mut had_error = false;

    let files_to_validate: Vec<PathBuf> = if args.paths.is_empty() {
        get_all_workspace_files(&workspace)
    } else {
        expand_paths(&args.paths)
    };

    let kind_filter: Option<SchemaKind> = match args.kind.as_deref() {
        Some(raw) => Some(parse_kind(raw)?),
        None => None,
    };

    println!(
        "{} Validating {} file(s)...\n",
        style("→").blue(),
        files_to_validate.len()
    );

    for path in &files_to_validate {
        if !path.to_string_lossy().ends_with(".sartor.yaml") {
            continue;
        }

        let filename = path.file_name().unwrap_or_default().to_string_lossy();
        let kind = schema_kind_for(&filename);

        // Skip if filtering by kind and this doesn't match
        if let Some(filter) = kind_filter {
            if kind != Some(filter) {
                continue;
            }
        }

        stats.files_checked += 1;

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                if !args.summary {
                    println!("{} {} - {}", style("✗").red(), path.display(), e);
                }
                stats.files_failed += 1;
                stats.total_errors += 1;
                had_error = true;
                if !args.keep_going {
                    break;
                }
                continue;
            }
        };

        // Skip files we have no schema for
        let kind = match kind {
            Some(k) => k,
            None => {
                if !args.summary {
                    println!(
                        "{} {} - {}",
                        style("?").yellow(),
                        path.display(),
                        "unknown file kind (skipped)"
                    );
                }
                stats.files_checked -= 1;
                continue;
            }
        };

        match validator.iter_errors(&content, &filename, kind) {
            Ok(_) => {
                stats.files_passed += 1;
                if !args.summary {
                    println!("{} {}", style("✓").green(), path.display());
                }
            }
            Err(e) => {
                stats.files_failed += 1;
                stats.total_errors += match &e {
                    ValidatorError::Violations(v) => v.violation_count(),
                    _ => 1,
                };
                had_error = true;

                if !args.summary {
                    println!(
                        "{} {} - {} error(s)",
                        style("✗").red(),
                        path.display(),
                        match &e {
                            ValidatorError::Violations(v) => v.violation_count(),
                            _ => 1,
                        }
                    );

                    // Print detailed error using miette
                    let report = miette::Report::new(e);
                    println!("{:?}", report);
                }

                if !args.keep_going {
                    break;
                }
            }
        }
    }

    // Print summary
    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Validation Summary").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Files checked:  {}", style(stats.files_checked).cyan());
    println!("  Files passed:   {}", style(stats.files_passed).green());
    println!("  Files failed:   {}", style(stats.files_failed).red());
    println!("  Total errors:   {}", style(stats.total_errors).red());
    println!();

    if had_error {
        if stats.files_failed == 1 {
            Err(miette::miette!("Validation failed: 1 file has errors"))
        } else {
            Err(miette::miette!(
                "Validation failed: {} files have errors",
                stats.files_failed
            ))
        }
    } else {
        println!(
            "{} All files passed validation!",
            style("✓").green().bold()
        );
        Ok(())
    }
}

/// Which schema applies to a workspace filename
fn schema_kind_for(filename: &str) -> Option<SchemaKind> {
    if filename == CATALOG_FILE {
        return Some(SchemaKind::Catalog);
    }
    EntityPrefix::from_filename(filename).map(SchemaKind::for_prefix)
}

fn parse_kind(raw: &str) -> Result<SchemaKind> {
    match raw.to_lowercase().as_str() {
        "catalog" => Ok(SchemaKind::Catalog),
        "profile" | "msr" => Ok(SchemaKind::Profile),
        "lineitem" | "line-item" | "lni" => Ok(SchemaKind::LineItem),
        other => Err(miette::miette!(
            "Unknown file kind: {}. Use catalog, profile, or lineitem",
            other
        )),
    }
}

/// Get all .sartor.yaml files in the workspace
fn get_all_workspace_files(workspace: &Workspace) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(workspace.root())
        .into_iter()
        .filter_entry(|e| {
            // Skip dot directories such as .sartor and .git
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') || e.depth() == 0
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.to_string_lossy().ends_with(".sartor.yaml") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}

/// Expand paths - a directory stands for every .sartor.yaml file in it
fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                if entry.path().to_string_lossy().ends_with(".sartor.yaml") {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else if path.exists() {
            files.push(path.clone());
        }
    }

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_kind_for_filenames() {
        assert_eq!(schema_kind_for("catalog.sartor.yaml"), Some(SchemaKind::Catalog));
        assert_eq!(
            schema_kind_for("MSR-01JD3X9M7Q2V4B8N0C5T1R6W2Y.sartor.yaml"),
            Some(SchemaKind::Profile)
        );
        assert_eq!(
            schema_kind_for("LNI-01JD3X9M7Q2V4B8N0C5T1R6W2Y.sartor.yaml"),
            Some(SchemaKind::LineItem)
        );
        assert_eq!(schema_kind_for("notes.sartor.yaml"), None);
    }

    #[test]
    fn test_parse_kind_accepts_aliases() {
        assert_eq!(parse_kind("catalog").unwrap(), SchemaKind::Catalog);
        assert_eq!(parse_kind("MSR").unwrap(), SchemaKind::Profile);
        assert_eq!(parse_kind("line-item").unwrap(), SchemaKind::LineItem);
        assert!(parse_kind("bom").is_err());
    }
}
