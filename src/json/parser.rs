//! Parser für Ausstellungsplan-Dokumente (JSON).

use super::document::FloorPlanDocument;
use crate::core::{FloorPlan, Hall, MapMarker, NavigationNode};
use anyhow::{Context, Result};

/// Parsed einen FloorPlan aus einem JSON-String.
///
/// Doppelte IDs und ein zweiter Kiosk pro Halle brechen den Import ab.
/// Hängende oder einseitige Verbindungen werden übernommen und nur als
/// Warnung geloggt; die Wegsuche ignoriert sie ohnehin.
pub fn parse_floor_plan(json_content: &str) -> Result<FloorPlan> {
    let document: FloorPlanDocument =
        serde_json::from_str(json_content).context("Ungültiges Floor-Plan-JSON")?;

    let mut plan = FloorPlan::new();

    for record in document.halls {
        let hall = Hall::from(record);
        let hall_id = hall.id.clone();
        plan.add_hall(hall)
            .with_context(|| format!("Halle {} nicht importierbar", hall_id))?;
    }

    for record in document.markers {
        let marker = MapMarker::from(record);
        let marker_id = marker.id.clone();
        plan.add_marker(marker)
            .with_context(|| format!("Marker {} nicht importierbar", marker_id))?;
    }

    plan.add_nodes(document.navigation_nodes.into_iter().map(NavigationNode::from))
        .context("Navigations-Nodes nicht importierbar")?;

    let issues = plan.validate();
    if !issues.is_empty() {
        log::warn!("{} Auffälligkeit(en) im Navigationsgraphen", issues.len());
        for issue in &issues {
            log::debug!("Graph-Befund: {:?}", issue);
        }
    }

    log::info!(
        "Floor-Plan geladen: {} Halle(n), {} Marker, {} Node(s), {} Verbindung(en)",
        plan.halls.len(),
        plan.marker_count(),
        plan.node_count(),
        plan.connection_count()
    );

    Ok(plan)
}
