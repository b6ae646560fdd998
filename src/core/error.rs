//! Fehler bei Mutationen des Navigationsgraphen.

use super::{HallId, MarkerId, NodeId};
use thiserror::Error;

/// Abgelehnte Graph- oder Marker-Mutation.
///
/// Die Wegsuche selbst kennt keine Fehler; dieser Typ betrifft nur den
/// Editier-Layer (`FloorPlan`), der Invarianten beim Schreiben schützt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphEditError {
    #[error("Node {0} kann nicht mit sich selbst verbunden werden")]
    SelfLoop(NodeId),
    #[error("Node {0} existiert nicht")]
    UnknownNode(NodeId),
    #[error("Marker {0} existiert nicht")]
    UnknownMarker(MarkerId),
    #[error("Halle {0} existiert nicht")]
    UnknownHall(HallId),
    #[error("Nodes {a} und {b} liegen in verschiedenen Hallen")]
    CrossHall { a: NodeId, b: NodeId },
    #[error("Halle {hall} hat bereits einen Kiosk-Marker ({existing})")]
    DuplicateKiosk { hall: HallId, existing: MarkerId },
    #[error("ID {0} ist bereits vergeben")]
    DuplicateId(String),
}
