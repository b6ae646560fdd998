//! Navigations-Node: Wegpunkt im Hallen-Koordinatensystem.

use super::{HallId, NodeId};
use glam::Vec2;
use indexmap::IndexSet;

/// Ein Wegpunkt des Navigationsgraphen einer Halle.
///
/// Verbindungen sind per Konvention symmetrisch (A kennt B ⇔ B kennt A).
/// Der Node selbst erzwingt das nicht; `FloorPlan::connect_nodes` und
/// `FloorPlan::disconnect_nodes` pflegen immer beide Seiten.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationNode {
    /// Eindeutige, stabile ID
    pub id: NodeId,
    /// Position im Hallen-Koordinatensystem (gleicher Raum wie Marker)
    pub position: Vec2,
    /// IDs der direkt verbundenen Nodes (Einfügereihenfolge bleibt erhalten)
    pub connections: IndexSet<NodeId>,
    /// Halle, zu der der Node gehört
    pub hall_id: HallId,
    /// Eingangs-Markierung (nur informativ, ohne Einfluss auf die Wegsuche)
    pub is_entry_point: bool,
}

impl NavigationNode {
    /// Erstellt einen unverbundenen Node.
    pub fn new(id: impl Into<NodeId>, position: Vec2, hall_id: impl Into<HallId>) -> Self {
        Self {
            id: id.into(),
            position,
            connections: IndexSet::new(),
            hall_id: hall_id.into(),
            is_entry_point: false,
        }
    }

    /// Builder: setzt die Verbindungsliste (z.B. für Tests und Import).
    pub fn with_connections<I, T>(mut self, connections: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        self.connections = connections.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: markiert den Node als Eingang.
    pub fn with_entry_point(mut self, is_entry_point: bool) -> Self {
        self.is_entry_point = is_entry_point;
        self
    }

    /// Prüft ob eine direkte Verbindung zu `other` eingetragen ist.
    pub fn is_connected_to(&self, other: &NodeId) -> bool {
        self.connections.contains(other)
    }

    /// Euklidische Distanz zu einem anderen Node.
    pub fn distance_to(&self, other: &NavigationNode) -> f32 {
        self.position.distance(other.position)
    }
}
