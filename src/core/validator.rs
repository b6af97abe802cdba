//! Per-step validation
//!
//! Pure checks over the selection state. Each step gates on the field it
//! collects; the review step re-checks everything and reports the complete
//! list of unmet requirements, not just the first.

use thiserror::Error;

use crate::core::selection::SelectionState;
use crate::core::sequencer::Step;

/// A required selection the state does not hold yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSelection {
    Fabric,
    Color,
    Style,
    Measurements,
}

impl MissingSelection {
    /// Sentence used as a blocked-step reason
    pub fn reason(&self) -> &'static str {
        match self {
            MissingSelection::Fabric => "no fabric selected yet",
            MissingSelection::Color => "no color selected yet",
            MissingSelection::Style => "no style selected yet",
            MissingSelection::Measurements => "no measurement profile chosen yet",
        }
    }
}

impl std::fmt::Display for MissingSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingSelection::Fabric => write!(f, "fabric"),
            MissingSelection::Color => write!(f, "color"),
            MissingSelection::Style => write!(f, "style"),
            MissingSelection::Measurements => write!(f, "measurements"),
        }
    }
}

/// A transition the validator refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot leave the {step} step: {reason}")]
pub struct StepBlocked {
    pub step: Step,
    pub reason: String,
}

/// Check whether `step` is satisfied by the current state
pub fn check_step(step: Step, state: &SelectionState) -> Result<(), StepBlocked> {
    match step {
        Step::Fabric => require(step, state.fabric.is_some(), MissingSelection::Fabric),
        Step::Color => require(step, state.color.is_some(), MissingSelection::Color),
        Step::Style => require(step, state.style.is_some(), MissingSelection::Style),
        Step::Measurements => require(
            step,
            state.measurements.is_some(),
            MissingSelection::Measurements,
        ),
        Step::Review => {
            let missing = missing_selections(state);
            if missing.is_empty() {
                Ok(())
            } else {
                Err(StepBlocked {
                    step,
                    reason: format!("still required: {}", join_missing(&missing)),
                })
            }
        }
    }
}

/// Every unmet requirement, in step order
pub fn missing_selections(state: &SelectionState) -> Vec<MissingSelection> {
    let mut missing = Vec::new();
    if state.fabric.is_none() {
        missing.push(MissingSelection::Fabric);
    }
    if state.color.is_none() {
        missing.push(MissingSelection::Color);
    }
    if state.style.is_none() {
        missing.push(MissingSelection::Style);
    }
    if state.measurements.is_none() {
        missing.push(MissingSelection::Measurements);
    }
    missing
}

/// Comma-joined list for messages
pub fn join_missing(missing: &[MissingSelection]) -> String {
    missing
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn require(step: Step, satisfied: bool, missing: MissingSelection) -> Result<(), StepBlocked> {
    if satisfied {
        Ok(())
    } else {
        Err(StepBlocked {
            step,
            reason: missing.reason().to_string(),
        })
    }
}
