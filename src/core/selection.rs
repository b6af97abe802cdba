//! Selection state - the partially-filled configuration a session mutates
//!
//! Catalog picks are stored by value, cloned at selection time, so a state
//! (and anything snapshotted from it) stays meaningful even if the catalog
//! file changes on disk mid-session. Only `fabric`, `color`, `style`, and
//! `measurements` may be absent; the detail choices always carry a value
//! per axis.

use serde::{Deserialize, Serialize};

use crate::catalog::{
    ButtonCount, Color, Fabric, Lapel, Lining, Pocket, Style, SuitType, Vent,
};
use crate::core::identity::EntityId;

/// One choice per detail axis, never absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailSelections {
    pub buttons: ButtonCount,
    pub lapel: Lapel,
    pub vent: Vent,
    pub pocket: Pocket,
    pub lining: Lining,
}

/// Denormalized handle on a chosen measurement profile
///
/// Carries just enough to display and submit; the full profile stays in
/// `profiles/` behind the lookup boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRef {
    pub id: EntityId,
    pub name: String,
    pub height_cm: f64,
    pub chest_cm: f64,
    pub waist_cm: f64,
}

impl MeasurementRef {
    /// One-line display, e.g. "After tailor visit (182/100/86 cm)"
    pub fn summary(&self) -> String {
        format!(
            "{} ({:.0}/{:.0}/{:.0} cm)",
            self.name, self.height_cm, self.chest_cm, self.waist_cm
        )
    }
}

/// The in-progress configuration
///
/// Created when a session opens, discarded on hand-off or abandonment,
/// never persisted in between. `base_price` follows the suit type; the
/// session is the only writer.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub suit_type: SuitType,
    pub fabric: Option<Fabric>,
    pub color: Option<Color>,
    pub style: Option<Style>,
    pub details: DetailSelections,
    pub measurements: Option<MeasurementRef>,
    pub base_price: i64,
}

impl SelectionState {
    pub fn new(suit_type: SuitType, base_price: i64) -> Self {
        Self {
            suit_type,
            fabric: None,
            color: None,
            style: None,
            details: DetailSelections::default(),
            measurements: None,
            base_price,
        }
    }
}
