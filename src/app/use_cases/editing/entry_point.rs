use crate::app::AppState;
use crate::core::NodeId;
use std::sync::Arc;

/// Setzt oder entfernt die Eingangs-Markierung eines Nodes.
pub fn set_entry_point(state: &mut AppState, node_id: &NodeId, is_entry_point: bool) {
    let Some(node) = state.floor_plan.as_deref().and_then(|fp| fp.node(node_id)) else {
        log::warn!("Node {} existiert nicht", node_id);
        return;
    };
    if node.is_entry_point == is_entry_point {
        return;
    }

    state.record_undo_snapshot();

    let Some(floor_plan_arc) = state.floor_plan.as_mut() else {
        return;
    };
    Arc::make_mut(floor_plan_arc).set_entry_point(node_id, is_entry_point);
    state.invalidate_route();

    log::info!("Node {}: Eingang = {}", node_id, is_entry_point);
}
