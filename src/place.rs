//! Place records: loading and derived accessors.
//!
//! A [`Place`] wraps one parsed record document and answers the questions the
//! audit rules ask of it (precision class, accuracy range, names, references).
//! Accessors are pure and never fail on a record that loaded successfully.

mod model;
mod record;
pub mod zotero;

pub use model::{Connection, Feature, Geometry, Location, Name, Reference};
pub use record::{AccuracyBounds, OwnedReference, Place, NO_ACCURACY, UNLOCATED};
