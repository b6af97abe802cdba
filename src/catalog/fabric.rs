//! Fabric catalog entries

use serde::{Deserialize, Serialize};

/// A selectable fabric and its price adjustment
///
/// `price_delta` is a signed amount in minor currency units added to the
/// garment's base price; a negative delta marks a cheaper alternative to
/// the base cloth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fabric {
    /// Opaque catalog id (e.g. "wool-super120")
    pub id: String,

    /// Display name
    pub name: String,

    /// Detailed description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Signed price adjustment in minor currency units
    #[serde(default)]
    pub price_delta: i64,
}

impl Fabric {
    /// Create a fabric entry with the given id, name and price delta
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_delta: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price_delta,
        }
    }
}
