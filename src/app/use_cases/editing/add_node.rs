//! Use-Case: Neuen Node an einer Position der aktuellen Halle hinzufügen.

use super::commit_edit;
use crate::app::AppState;
use crate::core::{GraphEditError, NavigationNode};
use glam::Vec2;

/// Fügt einen neuen Node in der aktuellen Halle hinzu.
///
/// Ist ein Connect-Startknoten gesetzt und Auto-Connect aktiv, wird der
/// neue Node mit ihm verbunden und selbst zum neuen Startknoten. So lassen
/// sich Gänge Klick für Klick zeichnen.
pub fn add_node_at_position(state: &mut AppState, position: Vec2) {
    let Some(hall_id) = state.viewer.current_hall.clone() else {
        log::warn!("Kein Node hinzufügbar: keine Halle gewählt");
        return;
    };

    let connect_from = state
        .editor
        .connect_source_node
        .clone()
        .filter(|_| state.options.auto_connect_new_nodes);

    let added = commit_edit(
        state,
        "Node hinzufügen",
        |plan| {
            plan.check_known_hall(Some(&hall_id))?;
            let Some(from_id) = &connect_from else {
                return Ok(());
            };
            let from = plan
                .node(from_id)
                .ok_or_else(|| GraphEditError::UnknownNode(from_id.clone()))?;
            if from.hall_id != hall_id {
                return Err(GraphEditError::CrossHall {
                    a: from_id.clone(),
                    b: plan.next_node_id(),
                });
            }
            Ok(())
        },
        |plan| {
            let new_id = plan.next_node_id();
            plan.add_node(NavigationNode::new(new_id.clone(), position, hall_id.clone()))?;
            if let Some(from_id) = &connect_from {
                plan.connect_nodes(from_id, &new_id)?;
            }
            Ok(new_id)
        },
    );

    let Some(new_id) = added else {
        return;
    };

    match &connect_from {
        Some(from_id) => log::info!(
            "Node {} an ({:.1}, {:.1}) hinzugefügt, verbunden mit {}",
            new_id,
            position.x,
            position.y,
            from_id
        ),
        None => log::info!(
            "Node {} an ({:.1}, {:.1}) hinzugefügt",
            new_id,
            position.x,
            position.y
        ),
    }

    if state.options.auto_connect_new_nodes {
        state.editor.connect_source_node = Some(new_id);
    }
}
