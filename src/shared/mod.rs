//! Geteilte Typen für schichtübergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die Binary und Library gemeinsam nutzen.

pub mod options;

pub use options::MapOptions;
pub use options::{MAX_EXPANSIONS, SNAP_RADIUS};
