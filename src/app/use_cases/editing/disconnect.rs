//! Use-Case: Verbindung zwischen zwei Nodes entfernen.

use crate::app::AppState;
use crate::core::NodeId;
use std::sync::Arc;

/// Entfernt die Verbindung zwischen `a` und `b` in beiden Richtungen.
pub fn disconnect_nodes(state: &mut AppState, a: &NodeId, b: &NodeId) {
    let Some(floor_plan) = state.floor_plan.as_deref() else {
        log::warn!("Trennen nicht möglich: kein Floor-Plan geladen");
        return;
    };

    let linked = floor_plan.node(a).is_some_and(|n| n.is_connected_to(b))
        || floor_plan.node(b).is_some_and(|n| n.is_connected_to(a));
    if !linked {
        log::debug!("Keine Verbindung {}↔{} vorhanden", a, b);
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let Some(floor_plan_arc) = state.floor_plan.as_mut() else {
        return;
    };
    let floor_plan = Arc::make_mut(floor_plan_arc);
    floor_plan.disconnect_nodes(a, b);
    state.invalidate_route();

    log::info!("Verbindung {}↔{} entfernt", a, b);
}
