//! Pfad-Komposition: Kiosk-Marker → Ziel-Marker als Node-Sequenz.

use super::{find_closest_node, find_path};
use crate::core::{MapMarker, NavigationNode, NodeId};

/// Berechnet die Node-Sequenz vom Kiosk (`origin`) zum Ziel-Marker.
///
/// - ohne Kiosk (`None`) → leerer Vec
/// - es zählen nur Nodes aus der Halle des Ziel-Markers; ein Ziel ohne
///   Halle findet daher keine Nodes
/// - Start und Ziel werden unabhängig auf ihren nächsten Node aufgelöst
///
/// Die Marker-Mittelpunkte selbst sind nicht Teil der Sequenz; siehe
/// [`super::NavigationRoute`] für die zeichenbare Linie.
pub fn calculate_navigation_path(
    origin: Option<&MapMarker>,
    destination: &MapMarker,
    nodes: &[NavigationNode],
) -> Vec<NodeId> {
    let Some(origin) = origin else {
        return Vec::new();
    };

    let hall_nodes: Vec<NavigationNode> = nodes
        .iter()
        .filter(|n| destination.hall_id.as_ref() == Some(&n.hall_id))
        .cloned()
        .collect();

    let start = find_closest_node(&origin.area(), &hall_nodes);
    let end = find_closest_node(&destination.area(), &hall_nodes);

    let (Some(start), Some(end)) = (start, end) else {
        log::debug!(
            "Keine Navigations-Nodes in Halle von Marker {}",
            destination.id
        );
        return Vec::new();
    };

    find_path(&start.id, &end.id, &hall_nodes)
}
