//! Line item finalization
//!
//! Freezes a complete selection into the immutable record the cart
//! understands. The snapshot is by value: later mutation of the live
//! session cannot reach into an item already built. No I/O happens here;
//! handing the item to the cart is the boundary's job.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::SuitType;
use crate::core::identity::{EntityId, EntityPrefix};
use crate::core::pricing::quote_price;
use crate::core::selection::{DetailSelections, SelectionState};
use crate::core::validator::{join_missing, missing_selections, MissingSelection};

/// Finalization refused because requirements are unmet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinalizeError {
    #[error("Configuration incomplete; still required: {}", join_missing(missing))]
    Incomplete { missing: Vec<MissingSelection> },
}

/// The immutable, cart-ready output of a fitting session
///
/// Field names follow the cart wire contract (camelCase keys). References
/// to catalog entries and the measurement profile go by id; display
/// snapshots live in the cart record around this, not in here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfiguredLineItem {
    /// Fresh LNI id minted at finalization
    pub correlation_id: EntityId,

    pub suit_type: SuitType,

    pub fabric_id: String,

    pub color_id: String,

    pub style_id: String,

    pub details: DetailSelections,

    pub measurement_profile_id: EntityId,

    /// Quoted total at the moment of finalization, minor units
    pub price: i64,
}

/// Freeze a complete state into a line item
///
/// An incomplete state is refused with the full list of unmet
/// requirements, not just the first.
pub fn finalize(state: &SelectionState) -> Result<ConfiguredLineItem, FinalizeError> {
    match (&state.fabric, &state.color, &state.style, &state.measurements) {
        (Some(fabric), Some(color), Some(style), Some(measurements)) => {
            Ok(ConfiguredLineItem {
                correlation_id: EntityId::new(EntityPrefix::Lni),
                suit_type: state.suit_type,
                fabric_id: fabric.id.clone(),
                color_id: color.id.clone(),
                style_id: style.id.clone(),
                details: state.details,
                measurement_profile_id: measurements.id.clone(),
                price: quote_price(state),
            })
        }
        _ => Err(FinalizeError::Incomplete {
            missing: missing_selections(state),
        }),
    }
}
