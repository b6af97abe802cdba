//! Style catalog entries

use serde::{Deserialize, Serialize};

/// A selectable structural style (cut silhouette)
///
/// Current catalogs carry no style price deltas; the field exists so a
/// future nonzero delta is a data change, not a shape change. The pricing
/// formula already includes the term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Opaque catalog id (e.g. "classic")
    pub id: String,

    /// Display name
    pub name: String,

    /// Detailed description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Signed price adjustment in minor currency units (always 0 today)
    #[serde(default)]
    pub price_delta: i64,
}

impl Style {
    /// Create a style entry with a zero price delta
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price_delta: 0,
        }
    }
}
