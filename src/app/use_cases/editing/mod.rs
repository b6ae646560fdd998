//! Use-Case-Funktionen für das Editieren des Navigationsgraphen (Admin).
//!
//! Aufgeteilt nach Operation:
//! - `add_node`: Neuen Node hinzufügen (mit Auto-Connect)
//! - `delete_node`: Node samt Verweisen löschen
//! - `move_node`: Node verschieben
//! - `connect`: Verbindungen erstellen (inkl. Connect-Tool-Flow)
//! - `disconnect`: Verbindungen entfernen
//! - `entry_point`: Eingangs-Markierung
//! - `markers`: Map-Marker-Operationen
//!
//! Jede wirksame Mutation legt vorher einen Undo-Snapshot an und verwirft
//! danach die aktive Route. Abgelehnte Änderungen lassen den State unberührt.

mod add_node;
mod connect;
mod delete_node;
mod disconnect;
mod entry_point;
mod markers;
mod move_node;

pub use add_node::add_node_at_position;
pub use connect::{connect_nodes, connect_tool_pick_node};
pub use delete_node::delete_node;
pub use disconnect::disconnect_nodes;
pub use entry_point::set_entry_point;
pub use markers::{create_marker, remove_marker, update_marker};
pub use move_node::move_node;

use crate::app::AppState;
use crate::core::{FloorPlan, GraphEditError};
use std::sync::Arc;

/// Prüft eine Mutation zuerst lesend und wendet sie erst danach an.
///
/// Schlägt `check` fehl, bleibt der State unverändert (kein Undo-Eintrag).
/// Sonst folgt Snapshot, `Arc::make_mut` und `apply`. `apply` darf nur
/// Operationen ausführen, die `check` bereits abgesichert hat.
fn commit_edit<T>(
    state: &mut AppState,
    action: &str,
    check: impl FnOnce(&FloorPlan) -> Result<(), GraphEditError>,
    apply: impl FnOnce(&mut FloorPlan) -> Result<T, GraphEditError>,
) -> Option<T> {
    let Some(floor_plan) = state.floor_plan.as_deref() else {
        log::warn!("{} nicht möglich: kein Floor-Plan geladen", action);
        return None;
    };
    if let Err(e) = check(floor_plan) {
        log::warn!("{} abgelehnt: {}", action, e);
        return None;
    }

    // Undo-Snapshot VOR Mutation
    state.record_undo_snapshot();
    let floor_plan_arc = state.floor_plan.as_mut()?;
    let result = apply(Arc::make_mut(floor_plan_arc));
    state.invalidate_route();
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{} trotz Vorprüfung fehlgeschlagen: {}", action, e);
            None
        }
    }
}
