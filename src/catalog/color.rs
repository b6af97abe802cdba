//! Color catalog entries

use serde::{Deserialize, Serialize};

/// A selectable color
///
/// Colors carry no price delta in current catalogs; they are display
/// metadata plus an opaque id the cart boundary understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Opaque catalog id (e.g. "navy")
    pub id: String,

    /// Display name
    pub name: String,

    /// Display color value (hex, e.g. "#1B2A41")
    pub value: String,
}

impl Color {
    /// Create a color entry
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}
