//! Entity trait - common interface for stored records
//!
//! Measurement profiles and cart records share the same file shape
//! (one YAML record per `*.sartor.yaml` file) and the same lookup
//! rules. The trait plus the free functions here keep directory scans
//! and query matching identical across both stores.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

use crate::core::identity::EntityId;
use crate::yaml::{parse_yaml_file, YamlError};

/// Common trait for records stored as workspace files
pub trait Entity: Serialize + DeserializeOwned {
    /// The record kind prefix (e.g. "MSR", "LNI")
    const PREFIX: &'static str;

    /// Get the record's unique ID
    fn id(&self) -> &EntityId;

    /// Get the name shown in lists
    fn display_name(&self) -> &str;

    /// Get the creation timestamp
    fn created(&self) -> DateTime<Utc>;

    /// Get the author
    fn author(&self) -> &str;

    /// Whether `user` should see this record
    ///
    /// An empty author means the record is shared; an empty user means
    /// no scoping at all.
    fn visible_to(&self, user: &str) -> bool {
        user.is_empty() || self.author().is_empty() || self.author() == user
    }
}

/// Result of scanning a directory of entity files
#[derive(Debug)]
pub struct DirScan<T> {
    /// Parsed records with their file paths, newest first
    pub records: Vec<(PathBuf, T)>,
    /// Files that did not parse, for caller-side warnings
    pub skipped: Vec<(PathBuf, YamlError)>,
}

impl<T> Default for DirScan<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Read every `*.sartor.yaml` record under `dir`, newest first
///
/// A missing directory is an empty store, not an error. Files that do
/// not parse are collected in `skipped` instead of aborting the scan.
pub fn scan_dir<T: Entity + 'static>(dir: &Path) -> Result<DirScan<T>, std::io::Error> {
    let mut scan = DirScan::default();
    if !dir.exists() {
        return Ok(scan);
    }

    for entry in walkdir::WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|err| {
            err.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "walk failed")
            })
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.path().to_string_lossy().ends_with(".sartor.yaml") {
            continue;
        }

        match parse_yaml_file::<T>(entry.path()) {
            Ok(record) => scan.records.push((entry.path().to_path_buf(), record)),
            Err(err) => scan.skipped.push((entry.path().to_path_buf(), err)),
        }
    }

    // newest first, same ordering everywhere
    scan.records
        .sort_by(|(_, a), (_, b)| b.created().cmp(&a.created()));
    Ok(scan)
}

/// Match a record against an exact id, an id prefix, or a
/// case-insensitive fragment of its display name
pub fn matches_query<T: Entity>(record: &T, query: &str) -> bool {
    let id_str = record.id().to_string();
    id_str == query
        || id_str.starts_with(&query.to_uppercase())
        || record
            .display_name()
            .to_lowercase()
            .contains(&query.to_lowercase())
}
