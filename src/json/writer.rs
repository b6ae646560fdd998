//! Writer für Ausstellungsplan-Dokumente (JSON).

use super::document::{FloorPlanDocument, HallRecord, MarkerRecord, NodeRecord};
use crate::core::FloorPlan;
use anyhow::{Context, Result};

/// Schreibt einen FloorPlan als formatiertes JSON.
///
/// Reihenfolge von Hallen, Markern, Nodes und Verbindungen bleibt erhalten.
pub fn write_floor_plan(plan: &FloorPlan) -> Result<String> {
    let document = FloorPlanDocument {
        halls: plan.halls.iter().map(HallRecord::from).collect(),
        markers: plan.markers().iter().map(MarkerRecord::from).collect(),
        navigation_nodes: plan.nodes_iter().map(NodeRecord::from).collect(),
    };

    serde_json::to_string_pretty(&document).context("Floor-Plan nicht serialisierbar")
}
