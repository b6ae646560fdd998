//! JSON Import/Export für Ausstellungspläne.
//!
//! Das Dokument bündelt Hallen, Marker und Navigations-Nodes in drei Listen
//! (`halls`, `markers`, `navigationNodes`) mit camelCase-Feldnamen.

mod document;
pub mod parser;
pub mod writer;

pub use parser::parse_floor_plan;
pub use writer::write_floor_plan;
