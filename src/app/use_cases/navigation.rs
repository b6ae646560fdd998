//! Use-Case: Ziel-Marker wählen und Route vom Kiosk berechnen.

use crate::app::AppState;
use crate::core::{FloorPlan, MapMarker, MarkerId};
use crate::pathfinding::{plan_route, NavigationRoute};

/// Berechnet die Route vom Kiosk der Ziel-Halle zum Marker.
///
/// Arbeitet auf einem frischen Node-Snapshot der Halle; `None` wenn die
/// Halle keinen Kiosk hat oder kein Weg existiert.
pub fn route_to_marker(floor_plan: &FloorPlan, destination: &MapMarker) -> Option<NavigationRoute> {
    let hall_id = destination.hall_id.as_ref()?;
    let origin = floor_plan.kiosk_marker(hall_id);
    if origin.is_none() {
        log::debug!("Halle {} hat keinen Kiosk-Marker", hall_id);
    }

    let nodes = floor_plan.nodes_in_hall(hall_id);
    plan_route(origin, destination, &nodes)
}

/// Wählt einen Marker als Ziel und setzt die aktive Route.
///
/// Liegt der Marker in einer anderen Halle, wird zu dieser gewechselt und
/// der Connect-Startknoten verworfen.
/// "Kein Weg" ist kein Fehler: Auswahl bleibt bestehen, Route ist `None`.
pub fn select_marker(state: &mut AppState, marker_id: &MarkerId) {
    let Some(floor_plan) = state.floor_plan.as_deref() else {
        log::warn!("Marker-Auswahl nicht möglich: kein Floor-Plan geladen");
        return;
    };

    let Some(destination) = floor_plan.find_marker(marker_id) else {
        log::warn!("Marker {} existiert nicht", marker_id);
        return;
    };

    let route = route_to_marker(floor_plan, destination);
    match &route {
        Some(route) => log::info!(
            "Route zu {} berechnet: {} Node(s), Länge {:.1}",
            marker_id,
            route.node_ids.len(),
            route.total_length()
        ),
        None => log::info!("Keine Route zu {} gefunden", marker_id),
    }

    if let Some(hall_id) = destination.hall_id.clone() {
        if state.viewer.current_hall.as_ref() != Some(&hall_id) {
            // Connect-Start gehört zur alten Halle
            state.editor.connect_source_node = None;
            state.viewer.current_hall = Some(hall_id);
        }
    }
    state.viewer.selected_marker = Some(marker_id.clone());
    state.viewer.active_route = route;
}
