//! Measurement lookup boundary
//!
//! The configurator never owns measurement data; it reads saved profiles
//! through this trait and stores only a denormalized reference. The
//! file-backed store reads `profiles/*.sartor.yaml`, skipping files that
//! do not parse (the scan reports them so callers can warn).

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::entity::{matches_query, scan_dir, Entity};
use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::selection::MeasurementRef;
use crate::yaml::YamlError;

/// A saved body-measurement profile, one per file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementProfile {
    pub id: EntityId,

    /// Label the owner knows it by, e.g. "After tailor visit 2026"
    pub name: String,

    pub height_cm: f64,
    pub chest_cm: f64,
    pub waist_cm: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleeve_cm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoulder_cm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inseam_cm: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created: DateTime<Utc>,

    /// Owner; empty means the profile is visible to everyone
    #[serde(default)]
    pub author: String,
}

impl MeasurementProfile {
    pub fn new(
        name: impl Into<String>,
        height_cm: f64,
        chest_cm: f64,
        waist_cm: f64,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(EntityPrefix::Msr),
            name: name.into(),
            height_cm,
            chest_cm,
            waist_cm,
            sleeve_cm: None,
            shoulder_cm: None,
            inseam_cm: None,
            notes: None,
            created: Utc::now(),
            author: author.into(),
        }
    }

    /// The denormalized handle a selection carries
    pub fn to_ref(&self) -> MeasurementRef {
        MeasurementRef {
            id: self.id.clone(),
            name: self.name.clone(),
            height_cm: self.height_cm,
            chest_cm: self.chest_cm,
            waist_cm: self.waist_cm,
        }
    }
}

impl Entity for MeasurementProfile {
    const PREFIX: &'static str = "MSR";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn created(&self) -> DateTime<Utc> {
        self.created
    }

    fn author(&self) -> &str {
        &self.author
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum LookupError {
    #[error("No measurement profile matching '{query}'")]
    #[diagnostic(help("See what's on file with 'sartor profiles list'"))]
    NotFound { query: String },

    #[error("Ambiguous profile query '{query}': matches {}", candidates.join(", "))]
    #[diagnostic(help("Use more of the id, or the full name"))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },

    #[error("Cannot read profiles from {dir}")]
    Unreadable {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read access to a user's saved measurement profiles
pub trait MeasurementLookup {
    /// Profiles visible to `user`; empty user means no scoping
    fn list_profiles(&self, user: &str) -> Result<Vec<MeasurementProfile>, LookupError>;

    /// Resolve `query` as an exact id, id prefix, or name fragment
    fn find_profile(&self, user: &str, query: &str)
        -> Result<MeasurementProfile, LookupError>;
}

/// Result of scanning the profiles directory
#[derive(Debug, Default)]
pub struct ProfileScan {
    pub profiles: Vec<MeasurementProfile>,
    /// Files that did not parse, for caller-side warnings
    pub skipped: Vec<(PathBuf, YamlError)>,
}

/// File-backed profile store over a `profiles/` directory
#[derive(Debug, Clone)]
pub struct ProfileDir {
    dir: PathBuf,
}

impl ProfileDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read every parseable profile, collecting parse failures per file
    ///
    /// A missing directory is an empty store, not an error.
    pub fn scan(&self) -> Result<ProfileScan, LookupError> {
        let scan = scan_dir::<MeasurementProfile>(&self.dir).map_err(|source| {
            LookupError::Unreadable {
                dir: self.dir.clone(),
                source,
            }
        })?;

        Ok(ProfileScan {
            profiles: scan.records.into_iter().map(|(_, p)| p).collect(),
            skipped: scan.skipped,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl MeasurementLookup for ProfileDir {
    fn list_profiles(&self, user: &str) -> Result<Vec<MeasurementProfile>, LookupError> {
        let scan = self.scan()?;
        Ok(scan
            .profiles
            .into_iter()
            .filter(|p| p.visible_to(user))
            .collect())
    }

    fn find_profile(
        &self,
        user: &str,
        query: &str,
    ) -> Result<MeasurementProfile, LookupError> {
        let profiles = self.list_profiles(user)?;

        let mut matches: Vec<MeasurementProfile> = profiles
            .into_iter()
            .filter(|p| matches_query(p, query))
            .collect();

        match matches.len() {
            0 => Err(LookupError::NotFound {
                query: query.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(LookupError::Ambiguous {
                query: query.to_string(),
                candidates: matches
                    .iter()
                    .map(|p| format!("{} ({})", p.name, p.id))
                    .collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_profile(dir: &Path, profile: &MeasurementProfile) {
        let path = dir.join(format!("{}.sartor.yaml", profile.id));
        let yaml = serde_yml::to_string(profile).unwrap();
        std::fs::write(path, yaml).unwrap();
    }

    fn seeded_dir() -> (tempfile::TempDir, ProfileDir, MeasurementProfile) {
        let dir = tempfile::tempdir().unwrap();
        let own = MeasurementProfile::new("Work suit fit", 182.0, 100.0, 86.0, "alex");
        let other = MeasurementProfile::new("Loaner fit", 175.0, 96.0, 82.0, "sam");
        let shared = MeasurementProfile::new("House block", 180.0, 98.0, 84.0, "");
        write_profile(dir.path(), &own);
        write_profile(dir.path(), &other);
        write_profile(dir.path(), &shared);
        let store = ProfileDir::new(dir.path());
        (dir, store, own)
    }

    #[test]
    fn test_missing_directory_is_empty_store() {
        let store = ProfileDir::new("/nonexistent/profiles");
        assert!(store.list_profiles("").unwrap().is_empty());
    }

    #[test]
    fn test_user_scoping_by_author() {
        let (_dir, store, _own) = seeded_dir();

        // unscoped sees everything
        assert_eq!(store.list_profiles("").unwrap().len(), 3);

        // alex sees their own plus the unowned one
        let names: Vec<String> = store
            .list_profiles("alex")
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Work suit fit".to_string()));
        assert!(names.contains(&"House block".to_string()));
    }

    #[test]
    fn test_find_by_id_prefix_and_name() {
        let (_dir, store, own) = seeded_dir();

        let by_id = store.find_profile("", &own.id.to_string()).unwrap();
        assert_eq!(by_id.id, own.id);

        let prefix = &own.id.to_string()[..12];
        let by_prefix = store.find_profile("", prefix).unwrap();
        assert_eq!(by_prefix.id, own.id);

        let by_name = store.find_profile("alex", "work suit").unwrap();
        assert_eq!(by_name.id, own.id);
    }

    #[test]
    fn test_ambiguous_query_lists_candidates() {
        let (_dir, store, _own) = seeded_dir();
        let err = store.find_profile("", "fit").unwrap_err();
        match err {
            LookupError::Ambiguous { candidates, .. } => {
                assert_eq!(candidates.len(), 2);
            }
            other => panic!("expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_query_not_found() {
        let (_dir, store, _own) = seeded_dir();
        let err = store.find_profile("", "tuxedo").unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));
    }

    #[test]
    fn test_scan_reports_unparseable_files() {
        let (dir, store, _own) = seeded_dir();
        std::fs::write(
            dir.path().join("MSR-BROKEN.sartor.yaml"),
            "name: [unclosed",
        )
        .unwrap();

        let scan = store.scan().unwrap();
        assert_eq!(scan.profiles.len(), 3);
        assert_eq!(scan.skipped.len(), 1);
        assert!(scan.skipped[0].0.ends_with("MSR-BROKEN.sartor.yaml"));
    }

    #[test]
    fn test_to_ref_carries_display_fields() {
        let profile = MeasurementProfile::new("Work suit fit", 182.0, 100.0, 86.0, "alex");
        let r = profile.to_ref();
        assert_eq!(r.id, profile.id);
        assert_eq!(r.name, "Work suit fit");
        assert_eq!(r.height_cm, 182.0);
    }
}
