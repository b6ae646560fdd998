//! Hall Wayfinder Library.
//! Navigationsgraph, Wegsuche und Editier-Layer für Messehallen-Pläne,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod pathfinding;
pub mod shared;

pub use app::{AppCommand, AppController, AppState, EditorState, ViewerState};
pub use core::{
    FloorPlan, FloorRect, GraphEditError, GraphIssue, Hall, HallId, MapMarker, MarkerCategory,
    MarkerId, NavigationNode, NodeId,
};
pub use core::{SpatialIndex, SpatialMatch};
pub use json::{parse_floor_plan, write_floor_plan};
pub use pathfinding::{
    calculate_navigation_path, find_closest_node, find_path, path_length, plan_route,
    NavigationRoute,
};
pub use shared::WayfinderOptions;
