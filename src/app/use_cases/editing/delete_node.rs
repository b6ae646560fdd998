//! Use-Case: Node löschen.

use crate::app::AppState;
use crate::core::NodeId;
use std::sync::Arc;

/// Löscht einen Node. Alle Verweise anderer Nodes auf ihn werden im selben
/// Schritt entfernt, damit keine hängenden Verbindungen entstehen.
pub fn delete_node(state: &mut AppState, node_id: &NodeId) {
    let Some(floor_plan) = state.floor_plan.as_deref() else {
        log::warn!("Löschen nicht möglich: kein Floor-Plan geladen");
        return;
    };
    if !floor_plan.contains_node(node_id) {
        log::debug!("Node {} existiert nicht", node_id);
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let Some(floor_plan_arc) = state.floor_plan.as_mut() else {
        return;
    };
    let floor_plan = Arc::make_mut(floor_plan_arc);
    let removed = floor_plan.remove_node(node_id);

    if state.editor.connect_source_node.as_ref() == Some(node_id) {
        state.editor.connect_source_node = None;
    }
    state.invalidate_route();

    if let Some(node) = removed {
        log::info!(
            "Node {} gelöscht ({} Verbindung(en) entfernt)",
            node.id,
            node.connections.len()
        );
    }
}
