//! Core module - the configurator engine and fundamental types

pub mod config;
pub mod entity;
pub mod identity;
pub mod line_item;
pub mod pricing;
pub mod selection;
pub mod sequencer;
pub mod session;
pub mod validator;
pub mod workspace;

pub use config::Config;
pub use entity::{matches_query, scan_dir, DirScan, Entity};
pub use identity::{EntityId, EntityPrefix, IdParseError};
pub use line_item::{finalize, ConfiguredLineItem, FinalizeError};
pub use pricing::{price_breakdown, quote_price, PriceBreakdown, PriceLine};
pub use selection::{DetailSelections, MeasurementRef, SelectionState};
pub use sequencer::{Advance, Step, StepSequencer};
pub use session::{Configurator, UnknownOption};
pub use validator::{check_step, missing_selections, MissingSelection, StepBlocked};
pub use workspace::{Workspace, WorkspaceError};
