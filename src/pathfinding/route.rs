//! Zeichenbare Route: Kiosk-Mittelpunkt → Node-Positionen → Ziel-Mittelpunkt.

use super::calculate_navigation_path;
use crate::core::{MapMarker, NavigationNode, NodeId};
use glam::Vec2;
use std::collections::HashMap;

/// Ergebnis einer Routenberechnung für die Darstellungsschicht.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRoute {
    /// Node-Sequenz aus der Wegsuche
    pub node_ids: Vec<NodeId>,
    /// Polylinie inkl. der beiden Marker-Mittelpunkte
    pub points: Vec<Vec2>,
}

impl NavigationRoute {
    /// Setzt die Polylinie aus Marker-Mittelpunkten und Node-Positionen zusammen.
    ///
    /// `None` bei leerer Node-Sequenz oder wenn eine ID nicht in `nodes` liegt.
    pub fn compose(
        origin: &MapMarker,
        destination: &MapMarker,
        node_ids: Vec<NodeId>,
        nodes: &[NavigationNode],
    ) -> Option<Self> {
        if node_ids.is_empty() {
            return None;
        }

        let positions: HashMap<&NodeId, Vec2> = nodes.iter().map(|n| (&n.id, n.position)).collect();

        let mut points = Vec::with_capacity(node_ids.len() + 2);
        points.push(origin.center());
        for id in &node_ids {
            points.push(*positions.get(id)?);
        }
        points.push(destination.center());

        Some(Self { node_ids, points })
    }

    /// Gesamtlänge der Polylinie.
    pub fn total_length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

/// Wegsuche + Komposition in einem Schritt.
pub fn plan_route(
    origin: Option<&MapMarker>,
    destination: &MapMarker,
    nodes: &[NavigationNode],
) -> Option<NavigationRoute> {
    let origin = origin?;
    let node_ids = calculate_navigation_path(Some(origin), destination, nodes);
    NavigationRoute::compose(origin, destination, node_ids, nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FloorRect, HallId, MarkerCategory};
    use approx::assert_relative_eq;

    fn marker(id: &str, category: MarkerCategory, x: f32) -> MapMarker {
        MapMarker::new(
            id,
            id,
            category,
            FloorRect::new(x, -5.0, 10.0, 10.0),
            Some(HallId::from("h")),
        )
    }

    #[test]
    fn route_points_wrap_nodes_with_marker_centers() {
        let nodes = vec![
            NavigationNode::new("a", Vec2::new(10.0, 0.0), "h").with_connections(["b"]),
            NavigationNode::new("b", Vec2::new(40.0, 0.0), "h").with_connections(["a"]),
        ];
        let kiosk = marker("kiosk", MarkerCategory::Kiosk, 0.0);
        let dest = marker("dest", MarkerCategory::Stand, 45.0);

        let route = plan_route(Some(&kiosk), &dest, &nodes).expect("Route erwartet");
        assert_eq!(
            route.points,
            vec![
                Vec2::new(5.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(40.0, 0.0),
                Vec2::new(50.0, 0.0),
            ]
        );
        assert_relative_eq!(route.total_length(), 45.0);
    }

    #[test]
    fn no_route_without_kiosk_or_nodes() {
        let dest = marker("dest", MarkerCategory::Stand, 45.0);
        let kiosk = marker("kiosk", MarkerCategory::Kiosk, 0.0);

        assert!(plan_route(None, &dest, &[]).is_none());
        assert!(plan_route(Some(&kiosk), &dest, &[]).is_none());
    }

    #[test]
    fn compose_rejects_unknown_ids() {
        let kiosk = marker("kiosk", MarkerCategory::Kiosk, 0.0);
        let dest = marker("dest", MarkerCategory::Stand, 45.0);
        let route = NavigationRoute::compose(&kiosk, &dest, vec![NodeId::from("ghost")], &[]);
        assert!(route.is_none());
    }
}
