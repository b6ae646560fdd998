//! Use-Case: Verbindungen erstellen (direkt und über Connect-Tool).

use super::commit_edit;
use crate::app::AppState;
use crate::core::NodeId;
use glam::Vec2;

/// Verbindet zwei Nodes in beiden Richtungen.
///
/// Bereits vollständig verbundene Paare sind ein No-Op ohne Undo-Eintrag.
pub fn connect_nodes(state: &mut AppState, a: &NodeId, b: &NodeId) {
    let already_connected = state.floor_plan.as_deref().is_some_and(|plan| {
        let forward = plan.node(a).is_some_and(|n| n.is_connected_to(b));
        let backward = plan.node(b).is_some_and(|n| n.is_connected_to(a));
        forward && backward
    });
    if already_connected {
        log::debug!("Verbindung {}↔{} existiert bereits", a, b);
        return;
    }

    let connected = commit_edit(
        state,
        "Verbinden",
        |plan| plan.check_connection(a, b),
        |plan| plan.connect_nodes(a, b),
    );
    if connected.is_some() {
        log::info!("Verbindung {}↔{} erstellt", a, b);
    }
}

/// Connect-Tool: Node an Position in der aktuellen Halle picken.
///
/// Beim ersten Klick wird der Startknoten gesetzt, beim zweiten wird
/// verbunden und der Startknoten zurückgesetzt. Ein Klick ins Leere oder
/// erneut auf den Startknoten bricht ab.
pub fn connect_tool_pick_node(state: &mut AppState, position: Vec2) {
    let (Some(floor_plan), Some(hall_id)) =
        (state.floor_plan.as_deref(), state.viewer.current_hall.as_ref())
    else {
        return;
    };

    let Some(node_id) = floor_plan.pick_node(hall_id, position, state.options.pick_radius) else {
        state.editor.connect_source_node = None;
        log::debug!("Connect-Tool: kein Node gefunden, Start zurückgesetzt");
        return;
    };

    match state.editor.connect_source_node.take() {
        Some(source_id) if source_id == node_id => {
            log::debug!("Connect-Tool: Startknoten {} abgewählt", source_id);
        }
        Some(source_id) => connect_nodes(state, &source_id, &node_id),
        None => {
            log::info!("Connect-Tool: Startknoten {} gewählt", node_id);
            state.editor.connect_source_node = Some(node_id);
        }
    }
}
