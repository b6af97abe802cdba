//! Cart boundary
//!
//! Finalized line items leave the configurator through this trait, one
//! submit call per item. The file-backed cart writes each item as a YAML
//! record under `cart/`, wrapping the wire shape with provenance: when it
//! was submitted, by whom, against which catalog, and display snapshots so
//! a record reads on its own.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::entity::{scan_dir, DirScan, Entity};
use crate::core::identity::EntityId;
use crate::core::line_item::ConfiguredLineItem;
use crate::core::selection::SelectionState;

/// Human-readable snapshots stored beside the wire item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySnapshot {
    /// One line for lists, e.g. "Two-piece suit, Cashmere blend, Midnight navy"
    pub summary: String,
    pub fabric: String,
    pub color: String,
    pub style: String,
    pub measurements: String,
}

impl DisplaySnapshot {
    pub fn from_state(state: &SelectionState) -> Self {
        let fabric = state
            .fabric
            .as_ref()
            .map(|f| f.name.clone())
            .unwrap_or_default();
        let color = state
            .color
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let style = state
            .style
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_default();
        let measurements = state
            .measurements
            .as_ref()
            .map(|m| m.summary())
            .unwrap_or_default();

        Self {
            summary: format!("{}, {}, {}", state.suit_type.label(), fabric, color),
            fabric,
            color,
            style,
            measurements,
        }
    }
}

/// What the caller stamps onto a submission
#[derive(Debug, Clone)]
pub struct Provenance {
    pub author: String,
    pub catalog_fingerprint: String,
    pub display: DisplaySnapshot,
}

/// One submitted line item, as stored in the cart directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartRecord {
    pub item: ConfiguredLineItem,

    pub submitted_at: DateTime<Utc>,

    #[serde(default)]
    pub author: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub catalog_fingerprint: String,

    #[serde(default)]
    pub display: DisplaySnapshot,
}

impl Entity for CartRecord {
    const PREFIX: &'static str = "LNI";

    fn id(&self) -> &EntityId {
        &self.item.correlation_id
    }

    fn display_name(&self) -> &str {
        &self.display.summary
    }

    fn created(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    fn author(&self) -> &str {
        &self.author
    }
}

/// Receipt returned by a successful submission
#[derive(Debug, Clone)]
pub struct CartReceipt {
    pub id: EntityId,
    pub path: PathBuf,
}

#[derive(Debug, Error, Diagnostic)]
pub enum SubmitError {
    #[error("Cannot write cart record to {path}")]
    #[diagnostic(help("The selection is untouched; fix the path and submit again"))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot encode cart record")]
    Encode(#[from] serde_yml::Error),
}

/// Where finalized line items go
pub trait CartBoundary {
    fn submit(
        &self,
        item: &ConfiguredLineItem,
        provenance: Provenance,
    ) -> Result<CartReceipt, SubmitError>;
}

/// Result of scanning the cart directory, newest first
pub type CartScan = DirScan<CartRecord>;

/// File-backed cart over a `cart/` directory
#[derive(Debug, Clone)]
pub struct CartDir {
    dir: PathBuf,
}

impl CartDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read every parseable record; a missing directory is an empty cart
    pub fn scan(&self) -> std::io::Result<CartScan> {
        scan_dir(&self.dir)
    }
}

impl CartBoundary for CartDir {
    fn submit(
        &self,
        item: &ConfiguredLineItem,
        provenance: Provenance,
    ) -> Result<CartReceipt, SubmitError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| SubmitError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let record = CartRecord {
            item: item.clone(),
            submitted_at: Utc::now(),
            author: provenance.author,
            catalog_fingerprint: provenance.catalog_fingerprint,
            display: provenance.display,
        };

        let path = self
            .dir
            .join(format!("{}.sartor.yaml", item.correlation_id));
        let yaml = serde_yml::to_string(&record)?;
        std::fs::write(&path, yaml).map_err(|source| SubmitError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(CartReceipt {
            id: item.correlation_id.clone(),
            path,
        })
    }
}
