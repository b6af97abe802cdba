//! External collaborators
//!
//! The configurator touches the outside world in exactly two places:
//! reading saved measurement profiles and handing finished line items to
//! the cart. Both are traits with file-backed implementations.

pub mod cart;
pub mod measurements;

pub use cart::{
    CartBoundary, CartDir, CartReceipt, CartRecord, CartScan, DisplaySnapshot, Provenance,
    SubmitError,
};
pub use measurements::{
    LookupError, MeasurementLookup, MeasurementProfile, ProfileDir, ProfileScan,
};
