//! Integrationstests für die Wegsuche über die öffentliche API.

use approx::assert_relative_eq;
use glam::Vec2;
use hall_wayfinder::{
    calculate_navigation_path, find_closest_node, find_path, path_length, FloorRect, HallId,
    MapMarker, MarkerCategory, NavigationNode, NodeId,
};

fn node(id: &str, x: f32, y: f32, connections: &[&str]) -> NavigationNode {
    NavigationNode::new(id, Vec2::new(x, y), "h1").with_connections(connections.iter().copied())
}

fn ids(path: &[NodeId]) -> Vec<&str> {
    path.iter().map(|id| id.as_str()).collect()
}

fn marker(id: &str, category: MarkerCategory, center: Vec2, hall: &str) -> MapMarker {
    MapMarker::new(
        id,
        id,
        category,
        FloorRect::new(center.x - 5.0, center.y - 5.0, 10.0, 10.0),
        Some(HallId::from(hall)),
    )
}

/// Quadrat A(0,0) B(10,0) C(0,10) D(10,10) mit zwei gleich langen Wegen A→D.
fn square() -> Vec<NavigationNode> {
    vec![
        node("A", 0.0, 0.0, &["B", "C"]),
        node("B", 10.0, 0.0, &["A", "D"]),
        node("C", 0.0, 10.0, &["A", "D"]),
        node("D", 10.0, 10.0, &["B", "C"]),
    ]
}

#[test]
fn closest_node_has_no_strictly_closer_rival() {
    let nodes: Vec<NavigationNode> = (0..25)
        .map(|i| {
            let x = (i % 5) as f32 * 13.0;
            let y = (i / 5) as f32 * 7.0;
            node(&format!("n{i}"), x, y, &[])
        })
        .collect();

    for rect in [
        FloorRect::new(0.0, 0.0, 4.0, 4.0),
        FloorRect::new(20.0, 9.0, 30.0, 2.0),
        FloorRect::new(-100.0, 40.0, 10.0, 10.0),
    ] {
        let center = rect.center();
        let found = find_closest_node(&rect, &nodes).expect("Node erwartet");
        assert!(nodes.iter().any(|n| n.id == found.id));
        let best = found.position.distance(center);
        assert!(nodes.iter().all(|n| n.position.distance(center) >= best));
    }
}

#[test]
fn closest_node_of_empty_list_is_none() {
    assert!(find_closest_node(&FloorRect::new(0.0, 0.0, 1.0, 1.0), &[]).is_none());
}

#[test]
fn same_start_and_end_needs_no_lookup() {
    let path = find_path(&NodeId::from("X"), &NodeId::from("X"), &[]);
    assert_eq!(ids(&path), vec!["X"]);
}

#[test]
fn line_graph_returns_full_path() {
    let nodes = vec![
        node("A", 0.0, 0.0, &["B"]),
        node("B", 10.0, 0.0, &["A", "C"]),
        node("C", 20.0, 0.0, &["B"]),
    ];

    let path = find_path(&NodeId::from("A"), &NodeId::from("C"), &nodes);

    assert_eq!(ids(&path), vec!["A", "B", "C"]);
    assert_relative_eq!(path_length(&path, &nodes).expect("Länge"), 20.0);
}

#[test]
fn disconnected_components_have_no_path() {
    let nodes = vec![
        node("A", 0.0, 0.0, &["B"]),
        node("B", 10.0, 0.0, &["A"]),
        node("C", 50.0, 0.0, &["D"]),
        node("D", 60.0, 0.0, &["C"]),
    ];
    assert!(find_path(&NodeId::from("A"), &NodeId::from("C"), &nodes).is_empty());
}

#[test]
fn equal_routes_are_deterministic_and_minimal() {
    let nodes = square();
    let (a, d) = (NodeId::from("A"), NodeId::from("D"));

    let first = find_path(&a, &d, &nodes);
    let second = find_path(&a, &d, &nodes);

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert_relative_eq!(path_length(&first, &nodes).expect("Länge"), 20.0);
}

#[test]
fn navigation_without_origin_is_empty() {
    let nodes = square();
    let dest = marker("dest", MarkerCategory::Stand, Vec2::new(10.0, 10.0), "h1");
    assert!(calculate_navigation_path(None, &dest, &nodes).is_empty());
}

#[test]
fn navigation_ignores_closer_nodes_of_other_halls() {
    let mut nodes = square();
    nodes.push(NavigationNode::new("foreign-a", Vec2::new(0.5, 0.5), "h2"));
    nodes.push(NavigationNode::new("foreign-d", Vec2::new(9.5, 9.5), "h2"));

    let origin = marker("kiosk", MarkerCategory::Kiosk, Vec2::new(0.5, 0.5), "h1");
    let dest = marker("dest", MarkerCategory::Stand, Vec2::new(9.5, 9.5), "h1");

    let path = calculate_navigation_path(Some(&origin), &dest, &nodes);

    assert_eq!(path.first().map(NodeId::as_str), Some("A"));
    assert_eq!(path.last().map(NodeId::as_str), Some("D"));
    assert!(path.iter().all(|id| !id.as_str().starts_with("foreign")));
}

#[test]
fn single_node_hall_routes_to_that_node() {
    let nodes = vec![node("only", 5.0, 5.0, &[])];
    let origin = marker("kiosk", MarkerCategory::Kiosk, Vec2::new(0.0, 0.0), "h1");
    let dest = marker("dest", MarkerCategory::Food, Vec2::new(20.0, 20.0), "h1");

    let path = calculate_navigation_path(Some(&origin), &dest, &nodes);
    assert_eq!(ids(&path), vec!["only"]);
}
