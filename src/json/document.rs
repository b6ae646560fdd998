//! Serde-Abbild des JSON-Dokuments (getrennt von den Domänentypen).

use crate::core::{FloorRect, Hall, HallId, MapMarker, MarkerCategory, NavigationNode, NodeId};
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FloorPlanDocument {
    #[serde(default)]
    pub halls: Vec<HallRecord>,
    #[serde(default)]
    pub markers: Vec<MarkerRecord>,
    #[serde(default)]
    pub navigation_nodes: Vec<NodeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct HallRecord {
    pub id: String,
    pub name: String,
    pub width: f32,
    pub height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct MarkerRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: MarkerCategory,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hall_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stand_number: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NodeRecord {
    pub id: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub connections: Vec<String>,
    pub hall_id: String,
    #[serde(default)]
    pub is_entry_point: bool,
}

impl From<HallRecord> for Hall {
    fn from(record: HallRecord) -> Self {
        Hall {
            id: HallId::new(record.id),
            name: record.name,
            width: record.width,
            height: record.height,
            background_image: record.background_image,
        }
    }
}

impl From<&Hall> for HallRecord {
    fn from(hall: &Hall) -> Self {
        Self {
            id: hall.id.to_string(),
            name: hall.name.clone(),
            width: hall.width,
            height: hall.height,
            background_image: hall.background_image.clone(),
        }
    }
}

impl From<MarkerRecord> for MapMarker {
    fn from(record: MarkerRecord) -> Self {
        let area = FloorRect::new(record.x, record.y, record.width, record.height);
        let mut marker = MapMarker::new(
            record.id,
            record.name,
            record.category,
            area,
            record.hall_id.map(HallId::new),
        );
        marker.description = record.description;
        marker.stand_number = record.stand_number;
        marker
    }
}

impl From<&MapMarker> for MarkerRecord {
    fn from(marker: &MapMarker) -> Self {
        Self {
            id: marker.id.to_string(),
            name: marker.name.clone(),
            description: marker.description.clone(),
            category: marker.category,
            x: marker.x,
            y: marker.y,
            width: marker.width,
            height: marker.height,
            hall_id: marker.hall_id.as_ref().map(ToString::to_string),
            stand_number: marker.stand_number.clone(),
        }
    }
}

impl From<NodeRecord> for NavigationNode {
    fn from(record: NodeRecord) -> Self {
        NavigationNode::new(record.id, Vec2::new(record.x, record.y), record.hall_id)
            .with_connections(record.connections.into_iter().map(NodeId::new))
            .with_entry_point(record.is_entry_point)
    }
}

impl From<&NavigationNode> for NodeRecord {
    fn from(node: &NavigationNode) -> Self {
        Self {
            id: node.id.to_string(),
            x: node.position.x,
            y: node.position.y,
            connections: node.connections.iter().map(ToString::to_string).collect(),
            hall_id: node.hall_id.to_string(),
            is_entry_point: node.is_entry_point,
        }
    }
}
