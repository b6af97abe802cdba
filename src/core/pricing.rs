//! Price derivation
//!
//! The quoted price is a pure function of the selection state:
//! base price for the suit type, plus the fabric delta, plus the style
//! delta. Unselected terms contribute zero. All amounts are minor
//! currency units.

use crate::core::selection::SelectionState;

/// Derive the quoted total for the current state
pub fn quote_price(state: &SelectionState) -> i64 {
    state.base_price
        + state.fabric.as_ref().map(|f| f.price_delta).unwrap_or(0)
        + state.style.as_ref().map(|s| s.price_delta).unwrap_or(0)
}

/// One line of the review display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLine {
    pub label: String,
    pub amount: i64,
}

/// Itemized quote; the lines always sum to the total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub lines: Vec<PriceLine>,
    pub total: i64,
}

/// Itemize the quote for review and cart displays
pub fn price_breakdown(state: &SelectionState) -> PriceBreakdown {
    let mut lines = vec![PriceLine {
        label: state.suit_type.label().to_string(),
        amount: state.base_price,
    }];

    if let Some(fabric) = &state.fabric {
        lines.push(PriceLine {
            label: fabric.name.clone(),
            amount: fabric.price_delta,
        });
    }

    if let Some(style) = &state.style {
        if style.price_delta != 0 {
            lines.push(PriceLine {
                label: style.name.clone(),
                amount: style.price_delta,
            });
        }
    }

    PriceBreakdown {
        lines,
        total: quote_price(state),
    }
}
