//! Option catalog - the read-only data a fitting session configures against
//!
//! A catalog lists the fabrics, colors, styles, and detail options on offer,
//! plus the base price per garment type. It is loaded once per session from
//! `catalog.sartor.yaml` and never mutated afterward.

pub mod color;
pub mod details;
pub mod fabric;
pub mod loader;
pub mod style;

pub use color::Color;
pub use details::{
    ButtonCount, DetailAxis, DetailOption, DetailOptions, Lapel, Lining, Pocket, Vent,
};
pub use fabric::Fabric;
pub use loader::{load_catalog, parse_catalog, CatalogError};
pub use style::Style;

use serde::{Deserialize, Serialize};

/// Garment type, the key into the base price table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum SuitType {
    #[default]
    TwoPiece,
    ThreePiece,
}

impl SuitType {
    pub fn all() -> &'static [SuitType] {
        &[SuitType::TwoPiece, SuitType::ThreePiece]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SuitType::TwoPiece => "Two-piece suit",
            SuitType::ThreePiece => "Three-piece suit",
        }
    }
}

impl std::fmt::Display for SuitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuitType::TwoPiece => write!(f, "two-piece"),
            SuitType::ThreePiece => write!(f, "three-piece"),
        }
    }
}

impl std::str::FromStr for SuitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "two-piece" | "two_piece" | "two" | "2" => Ok(SuitType::TwoPiece),
            "three-piece" | "three_piece" | "three" | "3" => Ok(SuitType::ThreePiece),
            _ => Err(format!(
                "Invalid suit type: {}. Use two-piece or three-piece",
                s
            )),
        }
    }
}

/// Base price per garment type, in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePrices {
    pub two_piece: i64,
    pub three_piece: i64,
}

impl BasePrices {
    pub fn for_type(&self, suit_type: SuitType) -> i64 {
        match suit_type {
            SuitType::TwoPiece => self.two_piece,
            SuitType::ThreePiece => self.three_piece,
        }
    }
}

/// The full set of selectable options for one storefront
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionCatalog {
    /// Display name, e.g. "House catalog FW26"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    pub base_prices: BasePrices,

    pub fabrics: Vec<Fabric>,

    pub colors: Vec<Color>,

    pub styles: Vec<Style>,

    #[serde(default)]
    pub details: DetailOptions,

    /// SHA-256 of the source file, set by the loader
    #[serde(skip)]
    fingerprint: String,
}

impl OptionCatalog {
    pub fn fabric(&self, id: &str) -> Option<&Fabric> {
        self.fabrics.iter().find(|f| f.id == id)
    }

    pub fn color(&self, id: &str) -> Option<&Color> {
        self.colors.iter().find(|c| c.id == id)
    }

    pub fn style(&self, id: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.id == id)
    }

    pub fn base_price(&self, suit_type: SuitType) -> i64 {
        self.base_prices.for_type(suit_type)
    }

    /// Hex SHA-256 of the catalog source, for cart provenance
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub(crate) fn set_fingerprint(&mut self, fingerprint: String) {
        self.fingerprint = fingerprint;
    }
}
