//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die sowohl `app` als auch die Binary nutzen.

pub mod options;

pub use options::WayfinderOptions;
pub use options::{HISTORY_DEPTH, PICK_RADIUS};
