//! Entity identity - prefixed ULID identifiers
//!
//! Stored records carry ids of the form `PREFIX-ULID` (e.g.
//! `LNI-01JD3X9M7Q2V4B8N0C5T1R6W2Y`). The prefix names the record kind,
//! the ULID makes ids sortable by creation time.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ulid::Ulid;

/// Record kind prefixes used in ids and filenames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityPrefix {
    /// Measurement profile (MSR)
    Msr,
    /// Configured line item in the cart (LNI)
    Lni,
}

impl EntityPrefix {
    /// All known prefixes
    pub fn all() -> &'static [EntityPrefix] {
        &[EntityPrefix::Msr, EntityPrefix::Lni]
    }

    /// The uppercase prefix string used in ids
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Msr => "MSR",
            EntityPrefix::Lni => "LNI",
        }
    }

    /// Infer the prefix from a record filename (e.g. `LNI-....sartor.yaml`)
    pub fn from_filename(name: &str) -> Option<EntityPrefix> {
        let stem = name.strip_suffix(".sartor.yaml")?;
        let prefix = stem.split('-').next()?;
        prefix.parse().ok()
    }
}

impl std::fmt::Display for EntityPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntityPrefix {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MSR" => Ok(EntityPrefix::Msr),
            "LNI" => Ok(EntityPrefix::Lni),
            _ => Err(IdParseError::UnknownPrefix(s.to_string())),
        }
    }
}

/// Errors from parsing entity ids
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    #[error("Unknown entity prefix: {0}")]
    UnknownPrefix(String),

    #[error("Malformed entity id: {0} (expected PREFIX-ULID)")]
    Malformed(String),

    #[error("Invalid ULID in entity id: {0}")]
    BadUlid(String),
}

/// A prefixed ULID identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId {
    prefix: EntityPrefix,
    ulid: Ulid,
}

impl EntityId {
    /// Generate a fresh id for the given record kind
    pub fn new(prefix: EntityPrefix) -> Self {
        Self {
            prefix,
            ulid: Ulid::new(),
        }
    }

    /// The record kind this id belongs to
    pub fn prefix(&self) -> EntityPrefix {
        self.prefix
    }

    /// The ULID portion
    pub fn ulid(&self) -> Ulid {
        self.ulid
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.prefix.as_str(), self.ulid)
    }
}

impl std::str::FromStr for EntityId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix_str, ulid_str) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::Malformed(s.to_string()))?;
        let prefix: EntityPrefix = prefix_str.parse()?;
        let ulid: Ulid = ulid_str
            .parse()
            .map_err(|_| IdParseError::BadUlid(s.to_string()))?;
        Ok(Self { prefix, ulid })
    }
}

impl Serialize for EntityId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
