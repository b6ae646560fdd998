//! Core-Domänentypen: Nodes, Marker, Hallen, FloorPlan, Spatial-Index.

pub mod error;
/// Core-Datenmodelle für den Hallenplan
///
/// - FloorPlan: Container für Hallen, Marker und Navigations-Nodes
/// - NavigationNode: Wegpunkt mit Position und Verbindungen
/// - MapMarker: Point of Interest (Stand, Einrichtung, Kiosk)
pub mod floor_plan;
pub mod geometry;
pub mod hall;
pub mod ids;
pub mod map_marker;
pub mod node;
pub mod spatial;

pub use error::GraphEditError;
pub use floor_plan::{FloorPlan, GraphIssue};
pub use geometry::FloorRect;
pub use hall::Hall;
pub use ids::{HallId, MarkerId, NodeId};
pub use map_marker::{MapMarker, MarkerCategory};
pub use node::NavigationNode;
pub use spatial::{SpatialIndex, SpatialMatch};
