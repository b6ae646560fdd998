//! Use-Case: Node verschieben.

use crate::app::AppState;
use crate::core::NodeId;
use glam::Vec2;
use std::sync::Arc;

/// Verschiebt einen Node an eine neue Position.
pub fn move_node(state: &mut AppState, node_id: &NodeId, position: Vec2) {
    let Some(floor_plan) = state.floor_plan.as_deref() else {
        log::warn!("Verschieben nicht möglich: kein Floor-Plan geladen");
        return;
    };
    let Some(node) = floor_plan.node(node_id) else {
        log::warn!("Node {} existiert nicht", node_id);
        return;
    };
    if node.position == position {
        log::debug!("Node {} bereits an Zielposition", node_id);
        return;
    }

    state.record_undo_snapshot();

    let Some(floor_plan_arc) = state.floor_plan.as_mut() else {
        return;
    };
    Arc::make_mut(floor_plan_arc).update_node_position(node_id, position);
    state.invalidate_route();

    log::info!(
        "Node {} nach ({:.1}, {:.1}) verschoben",
        node_id,
        position.x,
        position.y
    );
}
