//! Wegfindung über den Navigationsgraphen einer Halle.
//!
//! Reine Funktionen über Snapshots:
//! - `closest`: Marker-Rechteck → nächster Node
//! - `dijkstra`: kürzester Weg zwischen zwei Node-IDs
//! - `navigation`: Kiosk → Ziel-Marker als Node-Sequenz
//! - `route`: zeichenbare Polylinie für die Darstellung

mod closest;
mod dijkstra;
mod navigation;
mod route;

pub use closest::find_closest_node;
pub use dijkstra::{find_path, path_length};
pub use navigation::calculate_navigation_path;
pub use route::{plan_route, NavigationRoute};
