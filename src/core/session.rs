//! Fitting session - one customization from open to hand-off
//!
//! A `Configurator` binds a selection state and a step sequencer to one
//! loaded catalog. Every update operation goes through here, and each one
//! reprices synchronously before returning, so the stored quote is never
//! stale. Sessions share nothing; drop one and its state is gone.

use thiserror::Error;

use crate::catalog::{ButtonCount, Lapel, Lining, OptionCatalog, Pocket, SuitType, Vent};
use crate::core::line_item::{finalize, ConfiguredLineItem, FinalizeError};
use crate::core::pricing::{price_breakdown, quote_price, PriceBreakdown};
use crate::core::selection::{MeasurementRef, SelectionState};
use crate::core::sequencer::{Advance, Step, StepSequencer};
use crate::core::validator::{missing_selections, MissingSelection, StepBlocked};

/// A selection that names no catalog entry; the state is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No {category} with id '{id}' in the catalog")]
pub struct UnknownOption {
    pub category: &'static str,
    pub id: String,
}

/// One guided customization session against a loaded catalog
#[derive(Debug)]
pub struct Configurator<'a> {
    catalog: &'a OptionCatalog,
    state: SelectionState,
    sequencer: StepSequencer,
    price: i64,
}

impl<'a> Configurator<'a> {
    /// Open a session at the first step with the default suit type
    pub fn new(catalog: &'a OptionCatalog) -> Self {
        let suit_type = SuitType::default();
        let state = SelectionState::new(suit_type, catalog.base_price(suit_type));
        let price = quote_price(&state);
        Self {
            catalog,
            state,
            sequencer: StepSequencer::new(),
            price,
        }
    }

    /// Switch garment type; the only operation that rewrites the base price
    pub fn set_suit_type(&mut self, suit_type: SuitType) {
        self.state.suit_type = suit_type;
        self.state.base_price = self.catalog.base_price(suit_type);
        self.reprice();
    }

    pub fn select_fabric(&mut self, id: &str) -> Result<(), UnknownOption> {
        match self.catalog.fabric(id) {
            Some(fabric) => {
                self.state.fabric = Some(fabric.clone());
                self.reprice();
                Ok(())
            }
            None => Err(UnknownOption {
                category: "fabric",
                id: id.to_string(),
            }),
        }
    }

    pub fn select_color(&mut self, id: &str) -> Result<(), UnknownOption> {
        match self.catalog.color(id) {
            Some(color) => {
                self.state.color = Some(color.clone());
                self.reprice();
                Ok(())
            }
            None => Err(UnknownOption {
                category: "color",
                id: id.to_string(),
            }),
        }
    }

    pub fn select_style(&mut self, id: &str) -> Result<(), UnknownOption> {
        match self.catalog.style(id) {
            Some(style) => {
                self.state.style = Some(style.clone());
                self.reprice();
                Ok(())
            }
            None => Err(UnknownOption {
                category: "style",
                id: id.to_string(),
            }),
        }
    }

    pub fn set_buttons(&mut self, buttons: ButtonCount) {
        self.state.details.buttons = buttons;
        self.reprice();
    }

    pub fn set_lapel(&mut self, lapel: Lapel) {
        self.state.details.lapel = lapel;
        self.reprice();
    }

    pub fn set_vent(&mut self, vent: Vent) {
        self.state.details.vent = vent;
        self.reprice();
    }

    pub fn set_pocket(&mut self, pocket: Pocket) {
        self.state.details.pocket = pocket;
        self.reprice();
    }

    pub fn set_lining(&mut self, lining: Lining) {
        self.state.details.lining = lining;
        self.reprice();
    }

    /// Attach a measurement profile found through the lookup boundary
    pub fn choose_measurements(&mut self, profile: MeasurementRef) {
        self.state.measurements = Some(profile);
        self.reprice();
    }

    /// Quoted total, kept current by every update operation
    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        price_breakdown(&self.state)
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn catalog(&self) -> &OptionCatalog {
        self.catalog
    }

    pub fn step(&self) -> Step {
        self.sequencer.current()
    }

    pub fn position(&self) -> usize {
        self.sequencer.position()
    }

    pub fn is_terminal(&self) -> bool {
        self.sequencer.is_terminal()
    }

    pub fn visited(&self, step: Step) -> bool {
        self.sequencer.visited(step)
    }

    /// Validate the current step and move forward
    pub fn next_step(&mut self) -> Result<Advance, StepBlocked> {
        self.sequencer.advance(&self.state)
    }

    /// Step back without validation
    pub fn back(&mut self) -> Option<Step> {
        self.sequencer.retreat()
    }

    /// Revisit an earlier step
    pub fn jump_to(&mut self, step: Step) -> Result<Step, StepBlocked> {
        self.sequencer.jump_to(step)
    }

    pub fn missing(&self) -> Vec<MissingSelection> {
        missing_selections(&self.state)
    }

    /// Freeze the current state into a cart-ready line item
    pub fn finalize(&self) -> Result<ConfiguredLineItem, FinalizeError> {
        finalize(&self.state)
    }

    fn reprice(&mut self) {
        self.price = quote_price(&self.state);
    }
}
