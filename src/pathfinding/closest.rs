//! Nearest-Node-Auflösung: Rechteck (Marker) → nächster Navigations-Node.

use crate::core::{FloorRect, NavigationNode};

/// Findet den Node mit der geringsten euklidischen Distanz zum Mittelpunkt
/// von `area`.
///
/// Gleichstände gewinnt der erste Node in Eingabereihenfolge. Eine leere
/// Liste liefert `None` (kein Fehler: "keine Route möglich").
pub fn find_closest_node<'a>(
    area: &FloorRect,
    nodes: &'a [NavigationNode],
) -> Option<&'a NavigationNode> {
    let center = area.center();

    let mut closest = None;
    let mut min_distance = f32::INFINITY;

    for node in nodes {
        let distance = node.position.distance(center);
        if distance < min_distance {
            min_distance = distance;
            closest = Some(node);
        }
    }

    closest
}
