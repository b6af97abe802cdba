//! Catalog loading and semantic checks
//!
//! Parsing catches shape errors with labeled spans; the checks here catch
//! the mistakes a structurally valid file can still contain (duplicate ids,
//! empty categories, detail ids outside the closed enums). The loader also
//! fingerprints the source bytes so cart records can name the exact catalog
//! they were priced against.

use std::collections::HashSet;
use std::path::Path;

use miette::Diagnostic;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::catalog::details::DetailAxis;
use crate::catalog::{OptionCatalog, SuitType};
use crate::yaml::{parse_yaml, YamlError};

#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),

    #[error("Catalog {filename} offers no {category}")]
    #[diagnostic(help("Add at least one entry under `{category}:`"))]
    EmptyCategory {
        filename: String,
        category: &'static str,
    },

    #[error("Duplicate id '{id}' under {category} in {filename}")]
    DuplicateId {
        filename: String,
        category: &'static str,
        id: String,
    },

    #[error("Unknown {axis} option '{id}' in {filename}")]
    #[diagnostic(help("Detail option ids are fixed; see `sartor catalog details`"))]
    UnknownDetailOption {
        filename: String,
        axis: DetailAxis,
        id: String,
    },

    #[error("Negative base price for {suit_type} in {filename}")]
    NegativeBasePrice {
        filename: String,
        suit_type: SuitType,
    },
}

/// Load and check a catalog file
pub fn load_catalog(path: &Path) -> Result<OptionCatalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(YamlError::from)?;
    parse_catalog(&content, &path.display().to_string())
}

/// Parse catalog YAML, run semantic checks, and stamp the fingerprint
pub fn parse_catalog(content: &str, filename: &str) -> Result<OptionCatalog, CatalogError> {
    let mut catalog: OptionCatalog = parse_yaml(content, filename)?;
    catalog.details.fill_empty_axes();
    check_catalog(&catalog, filename)?;
    catalog.set_fingerprint(hex_digest(content));
    Ok(catalog)
}

fn check_catalog(catalog: &OptionCatalog, filename: &str) -> Result<(), CatalogError> {
    for suit_type in SuitType::all() {
        if catalog.base_prices.for_type(*suit_type) < 0 {
            return Err(CatalogError::NegativeBasePrice {
                filename: filename.to_string(),
                suit_type: *suit_type,
            });
        }
    }

    check_category(
        filename,
        "fabrics",
        catalog.fabrics.iter().map(|f| f.id.as_str()),
    )?;
    check_category(
        filename,
        "colors",
        catalog.colors.iter().map(|c| c.id.as_str()),
    )?;
    check_category(
        filename,
        "styles",
        catalog.styles.iter().map(|s| s.id.as_str()),
    )?;

    if let Some((axis, id)) = catalog.details.unknown_ids().into_iter().next() {
        return Err(CatalogError::UnknownDetailOption {
            filename: filename.to_string(),
            axis,
            id,
        });
    }

    Ok(())
}

fn check_category<'a>(
    filename: &str,
    category: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    let mut count = 0usize;

    for id in ids {
        count += 1;
        if !seen.insert(id.to_string()) {
            return Err(CatalogError::DuplicateId {
                filename: filename.to_string(),
                category,
                id: id.to_string(),
            });
        }
    }

    if count == 0 {
        return Err(CatalogError::EmptyCategory {
            filename: filename.to_string(),
            category,
        });
    }

    Ok(())
}

fn hex_digest(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
