//! Use-Cases für Map-Marker-Operationen.

use super::commit_edit;
use crate::app::AppState;
use crate::core::{MapMarker, MarkerId};
use std::sync::Arc;

/// Legt einen neuen Marker an. Doppelte IDs, unbekannte Hallen und ein
/// zweiter Kiosk in derselben Halle werden abgelehnt.
pub fn create_marker(state: &mut AppState, marker: MapMarker) {
    let marker_id = marker.id.clone();
    let category = marker.category;
    let created = commit_edit(
        state,
        "Marker anlegen",
        |plan| {
            plan.check_known_hall(marker.hall_id.as_ref())?;
            plan.check_new_marker(&marker)
        },
        |plan| plan.add_marker(marker.clone()),
    );
    if created.is_some() {
        log::info!(
            "Marker {} erstellt (Kategorie: {})",
            marker_id,
            category.label()
        );
    }
}

/// Ersetzt einen bestehenden Marker mit gleicher ID. Unbekannte Hallen und
/// ein zweiter Kiosk werden abgelehnt.
pub fn update_marker(state: &mut AppState, marker: MapMarker) {
    let marker_id = marker.id.clone();
    let updated = commit_edit(
        state,
        "Marker aktualisieren",
        |plan| plan.check_marker_update(&marker),
        |plan| plan.update_marker(marker.clone()),
    );
    if updated.is_some() {
        log::info!("Marker {} aktualisiert", marker_id);
    }
}

/// Entfernt einen Marker. War er ausgewählt, wird die Auswahl verworfen.
pub fn remove_marker(state: &mut AppState, marker_id: &MarkerId) {
    let exists = state
        .floor_plan
        .as_deref()
        .is_some_and(|fp| fp.find_marker(marker_id).is_some());
    if !exists {
        log::debug!("Marker {} existiert nicht", marker_id);
        return;
    }

    // Undo-Snapshot VOR Mutation
    state.record_undo_snapshot();

    let Some(floor_plan_arc) = state.floor_plan.as_mut() else {
        return;
    };
    Arc::make_mut(floor_plan_arc).remove_marker(marker_id);

    if state.viewer.selected_marker.as_ref() == Some(marker_id) {
        state.viewer.selected_marker = None;
    }
    state.invalidate_route();

    log::info!("Marker {} entfernt", marker_id);
}
