//! Integrationstests für den Command-Fluss über den AppController:
//! Laden, Marker-Auswahl mit Route, Admin-Editing, Undo/Redo.

use approx::assert_relative_eq;
use glam::Vec2;
use hall_wayfinder::{
    find_path, path_length, AppCommand, AppController, AppState, FloorRect, HallId, MapMarker,
    MarkerCategory, MarkerId, NodeId,
};

fn fixture_path() -> String {
    format!(
        "{}/tests/fixtures/sample_hall.json",
        env!("CARGO_MANIFEST_DIR")
    )
}

fn loaded() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_command(
            &mut state,
            AppCommand::LoadFloorPlan {
                path: fixture_path(),
            },
        )
        .expect("Fixture sollte laden");
    (controller, state)
}

fn admin() -> (AppController, AppState) {
    let (mut controller, mut state) = loaded();
    controller
        .handle_command(&mut state, AppCommand::SetAdminMode { enabled: true })
        .expect("Admin-Modus");
    (controller, state)
}

fn run(controller: &mut AppController, state: &mut AppState, command: AppCommand) {
    controller
        .handle_command(state, command)
        .expect("Command sollte ohne Fehler durchlaufen");
}

fn select(controller: &mut AppController, state: &mut AppState, marker_id: &str) {
    run(
        controller,
        state,
        AppCommand::SelectMarker {
            marker_id: MarkerId::from(marker_id),
        },
    );
}

fn node_ids(state: &AppState) -> Vec<String> {
    state
        .floor_plan
        .as_deref()
        .map(|fp| fp.nodes_iter().map(|n| n.id.to_string()).collect())
        .unwrap_or_default()
}

#[test]
fn test_load_sets_first_hall_and_logs_command() {
    let (_, state) = loaded();

    assert_eq!(state.viewer.current_hall, Some(HallId::from("h1")));
    assert_eq!(state.node_count(), 9);
    assert_eq!(state.connection_count(), 8);
    assert!(!state.can_undo());
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::LoadFloorPlan { .. })
    ));
}

#[test]
fn test_load_missing_file_returns_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_command(
        &mut state,
        AppCommand::LoadFloorPlan {
            path: "/nonexistent/hall.json".to_string(),
        },
    );

    assert!(result.is_err());
    assert!(state.floor_plan.is_none());
}

#[test]
fn test_select_marker_route_matches_find_path() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, "s1");

    let route = state
        .viewer
        .active_route
        .clone()
        .expect("Route vom Kiosk erwartet");
    let plan = state.floor_plan.as_deref().expect("Plan geladen");
    let hall_nodes = plan.nodes_in_hall(&HallId::from("h1"));

    let direct = find_path(&NodeId::from("n1"), &NodeId::from("n6"), &hall_nodes);
    assert_eq!(route.node_ids, direct);
    assert_relative_eq!(
        path_length(&route.node_ids, &hall_nodes).expect("Länge"),
        600.0
    );

    // Kiosk-Mittelpunkt vorne, Ziel-Mittelpunkt hinten
    assert_eq!(route.points.first(), Some(&Vec2::new(50.0, 50.0)));
    assert_eq!(route.points.last(), Some(&Vec2::new(450.0, 300.0)));
}

#[test]
fn test_select_marker_in_hall_without_kiosk_has_no_route() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, "s2");

    assert_eq!(state.viewer.selected_marker, Some(MarkerId::from("s2")));
    assert_eq!(state.viewer.current_hall, Some(HallId::from("h2")));
    assert!(state.viewer.active_route.is_none());
}

#[test]
fn test_select_unreachable_marker_has_no_route() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, "s3");

    assert_eq!(state.viewer.selected_marker, Some(MarkerId::from("s3")));
    assert!(state.viewer.active_route.is_none());
}

#[test]
fn test_editing_requires_admin_mode() {
    let (mut controller, mut state) = loaded();
    let log_len = state.command_log.len();

    run(
        &mut controller,
        &mut state,
        AppCommand::DeleteNode {
            node_id: NodeId::from("n5"),
        },
    );

    assert_eq!(state.node_count(), 9);
    assert_eq!(state.command_log.len(), log_len);
}

#[test]
fn test_delete_node_cascades_and_undo_restores() {
    let (mut controller, mut state) = admin();

    run(
        &mut controller,
        &mut state,
        AppCommand::DeleteNode {
            node_id: NodeId::from("n5"),
        },
    );

    let plan = state.floor_plan.as_deref().expect("Plan");
    assert_eq!(plan.node_count(), 8);
    assert!(plan.validate().is_empty());
    assert!(plan
        .nodes_iter()
        .all(|n| !n.is_connected_to(&NodeId::from("n5"))));

    run(&mut controller, &mut state, AppCommand::Undo);
    assert_eq!(state.node_count(), 9);
    assert!(node_ids(&state).contains(&"n5".to_string()));

    run(&mut controller, &mut state, AppCommand::Redo);
    assert_eq!(state.node_count(), 8);
}

#[test]
fn test_disconnect_removes_both_directions() {
    let (mut controller, mut state) = admin();

    run(
        &mut controller,
        &mut state,
        AppCommand::DisconnectNodes {
            a: NodeId::from("n2"),
            b: NodeId::from("n5"),
        },
    );

    let plan = state.floor_plan.as_deref().expect("Plan");
    let n2 = plan.node(&NodeId::from("n2")).expect("n2");
    let n5 = plan.node(&NodeId::from("n5")).expect("n5");
    assert!(!n2.is_connected_to(&n5.id));
    assert!(!n5.is_connected_to(&n2.id));
    assert_eq!(plan.connection_count(), 7);
}

#[test]
fn test_connect_tool_makes_isolated_stand_reachable() {
    let (mut controller, mut state) = admin();

    run(
        &mut controller,
        &mut state,
        AppCommand::ConnectToolPick {
            position: Vec2::new(801.0, 499.0),
        },
    );
    assert_eq!(state.editor.connect_source_node, Some(NodeId::from("n7")));

    run(
        &mut controller,
        &mut state,
        AppCommand::ConnectToolPick {
            position: Vec2::new(452.0, 248.0),
        },
    );
    assert!(state.editor.connect_source_node.is_none());

    select(&mut controller, &mut state, "s3");
    let route = state.viewer.active_route.as_ref().expect("Route erwartet");
    assert_eq!(route.node_ids.first().map(NodeId::as_str), Some("n1"));
    assert_eq!(route.node_ids.last().map(NodeId::as_str), Some("n7"));
}

#[test]
fn test_connect_tool_click_into_void_resets_source() {
    let (mut controller, mut state) = admin();

    run(
        &mut controller,
        &mut state,
        AppCommand::ConnectToolPick {
            position: Vec2::new(50.0, 50.0),
        },
    );
    assert_eq!(state.editor.connect_source_node, Some(NodeId::from("n1")));

    run(
        &mut controller,
        &mut state,
        AppCommand::ConnectToolPick {
            position: Vec2::new(600.0, 150.0),
        },
    );
    assert!(state.editor.connect_source_node.is_none());
    assert!(!state.can_undo());
}

#[test]
fn test_add_node_chains_from_connect_source() {
    let (mut controller, mut state) = admin();
    state.editor.connect_source_node = Some(NodeId::from("n7"));

    run(
        &mut controller,
        &mut state,
        AppCommand::AddNode {
            position: Vec2::new(700.0, 500.0),
        },
    );
    run(
        &mut controller,
        &mut state,
        AppCommand::AddNode {
            position: Vec2::new(600.0, 400.0),
        },
    );

    let plan = state.floor_plan.as_deref().expect("Plan");
    assert_eq!(plan.node_count(), 11);
    let first = plan.node(&NodeId::from("node-10")).expect("node-10");
    assert!(first.is_connected_to(&NodeId::from("n7")));
    assert!(first.is_connected_to(&NodeId::from("node-11")));
    assert_eq!(first.hall_id, HallId::from("h1"));
    assert_eq!(
        state.editor.connect_source_node,
        Some(NodeId::from("node-11"))
    );
    assert!(plan.validate().is_empty());
}

#[test]
fn test_mutation_invalidates_active_route() {
    let (mut controller, mut state) = admin();
    select(&mut controller, &mut state, "s1");
    assert!(state.viewer.active_route.is_some());

    run(
        &mut controller,
        &mut state,
        AppCommand::MoveNode {
            node_id: NodeId::from("n3"),
            position: Vec2::new(460.0, 60.0),
        },
    );

    assert!(state.viewer.active_route.is_none());
    assert_eq!(state.viewer.selected_marker, Some(MarkerId::from("s1")));
}

#[test]
fn test_second_kiosk_is_rejected_without_undo_entry() {
    let (mut controller, mut state) = admin();

    run(
        &mut controller,
        &mut state,
        AppCommand::CreateMarker {
            marker: MapMarker::new(
                "k2",
                "Zweiter Kiosk",
                MarkerCategory::Kiosk,
                FloorRect::new(300.0, 300.0, 20.0, 20.0),
                Some(HallId::from("h1")),
            ),
        },
    );

    let plan = state.floor_plan.as_deref().expect("Plan");
    assert_eq!(plan.marker_count(), 5);
    assert!(!state.can_undo());
}

#[test]
fn test_kiosk_in_second_hall_enables_route_there() {
    let (mut controller, mut state) = admin();

    run(
        &mut controller,
        &mut state,
        AppCommand::CreateMarker {
            marker: MapMarker::new(
                "k2",
                "Sie sind hier",
                MarkerCategory::Kiosk,
                FloorRect::new(0.0, 0.0, 20.0, 20.0),
                Some(HallId::from("h2")),
            ),
        },
    );
    select(&mut controller, &mut state, "s2");

    let route = state.viewer.active_route.as_ref().expect("Route erwartet");
    let ids: Vec<&str> = route.node_ids.iter().map(NodeId::as_str).collect();
    assert_eq!(ids, vec!["m1", "m2"]);
}

#[test]
fn test_remove_selected_marker_clears_selection() {
    let (mut controller, mut state) = admin();
    select(&mut controller, &mut state, "f1");

    run(
        &mut controller,
        &mut state,
        AppCommand::RemoveMarker {
            marker_id: MarkerId::from("f1"),
        },
    );

    assert!(state.viewer.selected_marker.is_none());
    assert!(state.viewer.active_route.is_none());

    run(&mut controller, &mut state, AppCommand::Undo);
    let plan = state.floor_plan.as_deref().expect("Plan");
    assert!(plan.find_marker(&MarkerId::from("f1")).is_some());
}

#[test]
fn test_set_entry_point_and_undo() {
    let (mut controller, mut state) = admin();
    let n2 = NodeId::from("n2");

    run(
        &mut controller,
        &mut state,
        AppCommand::SetEntryPoint {
            node_id: n2.clone(),
            is_entry_point: true,
        },
    );
    let is_entry = |state: &AppState| {
        state
            .floor_plan
            .as_deref()
            .and_then(|fp| fp.node(&n2))
            .is_some_and(|n| n.is_entry_point)
    };
    assert!(is_entry(&state));

    run(&mut controller, &mut state, AppCommand::Undo);
    assert!(!is_entry(&state));
}

#[test]
fn test_save_and_reload_through_controller() {
    let (mut controller, mut state) = admin();
    run(
        &mut controller,
        &mut state,
        AppCommand::DeleteNode {
            node_id: NodeId::from("n7"),
        },
    );

    let out = std::env::temp_dir().join(format!(
        "hall_wayfinder_flow_{}.json",
        std::process::id()
    ));
    let out_path = out.display().to_string();
    run(
        &mut controller,
        &mut state,
        AppCommand::SaveFloorPlan {
            path: out_path.clone(),
        },
    );

    let mut reloaded = AppState::new();
    run(
        &mut controller,
        &mut reloaded,
        AppCommand::LoadFloorPlan { path: out_path },
    );
    assert_eq!(node_ids(&reloaded), node_ids(&state));
    assert_eq!(reloaded.connection_count(), state.connection_count());

    let _ = std::fs::remove_file(out);
}

#[test]
fn test_marker_for_unknown_hall_is_rejected() {
    let (mut controller, mut state) = admin();

    run(
        &mut controller,
        &mut state,
        AppCommand::CreateMarker {
            marker: MapMarker::new(
                "s9",
                "Nirgendwo",
                MarkerCategory::Stand,
                FloorRect::new(0.0, 0.0, 10.0, 10.0),
                Some(HallId::from("h9")),
            ),
        },
    );

    assert_eq!(state.floor_plan.as_deref().map(|fp| fp.marker_count()), Some(5));
    assert!(!state.can_undo());
}

fn marker(state: &AppState, marker_id: &str) -> MapMarker {
    state
        .floor_plan
        .as_deref()
        .and_then(|fp| fp.find_marker(&MarkerId::from(marker_id)))
        .cloned()
        .expect("Marker im Fixture")
}

#[test]
fn test_selecting_marker_in_other_hall_resets_connect_source() {
    let (mut controller, mut state) = admin();

    run(
        &mut controller,
        &mut state,
        AppCommand::AddNode {
            position: Vec2::new(700.0, 100.0),
        },
    );
    assert_eq!(
        state.editor.connect_source_node,
        Some(NodeId::from("node-10"))
    );

    select(&mut controller, &mut state, "s2");
    assert_eq!(state.viewer.current_hall, Some(HallId::from("h2")));
    assert!(state.editor.connect_source_node.is_none());

    run(
        &mut controller,
        &mut state,
        AppCommand::AddNode {
            position: Vec2::new(300.0, 300.0),
        },
    );

    let plan = state.floor_plan.as_deref().expect("Plan");
    assert_eq!(plan.node_count(), 11);
    let added = plan.node(&NodeId::from("node-11")).expect("node-11");
    assert_eq!(added.hall_id, HallId::from("h2"));
    assert!(added.connections.is_empty());
    assert!(plan.validate().is_empty());
}

#[test]
fn test_selecting_marker_in_same_hall_keeps_connect_source() {
    let (mut controller, mut state) = admin();
    state.editor.connect_source_node = Some(NodeId::from("n7"));

    select(&mut controller, &mut state, "s1");

    assert_eq!(state.editor.connect_source_node, Some(NodeId::from("n7")));
}

#[test]
fn test_update_marker_and_undo() {
    let (mut controller, mut state) = admin();
    let original = marker(&state, "s1");
    let renamed = MapMarker {
        name: "TechCorp GmbH".to_string(),
        x: 440.0,
        ..original.clone()
    };

    run(
        &mut controller,
        &mut state,
        AppCommand::UpdateMarker {
            marker: renamed.clone(),
        },
    );
    assert_eq!(marker(&state, "s1"), renamed);
    assert!(state.can_undo());

    run(&mut controller, &mut state, AppCommand::Undo);
    assert_eq!(marker(&state, "s1"), original);
}

#[test]
fn test_update_marker_into_unknown_hall_is_rejected() {
    let (mut controller, mut state) = admin();
    let original = marker(&state, "s2");

    run(
        &mut controller,
        &mut state,
        AppCommand::UpdateMarker {
            marker: MapMarker {
                hall_id: Some(HallId::from("nowhere")),
                ..original.clone()
            },
        },
    );

    assert_eq!(marker(&state, "s2"), original);
    assert!(!state.can_undo());
}
