//! Der FloorPlan: Hallen, Marker und Navigationsgraph mit Spatial-Index.
//!
//! Alle Graph-Mutationen laufen über diese Struktur, damit Verbindungen
//! immer symmetrisch bleiben und gelöschte Nodes keine hängenden
//! Referenzen hinterlassen. Die Wegsuche bekommt nur Snapshots
//! (`nodes_in_hall`) und mutiert nie.

use super::{GraphEditError, Hall, HallId, MapMarker, MarkerId, NavigationNode, NodeId};
use super::{SpatialIndex, SpatialMatch};
use glam::Vec2;
use indexmap::IndexMap;

/// Befund aus [`FloorPlan::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    /// `from` verweist auf einen nicht existierenden Node
    DanglingConnection { from: NodeId, to: NodeId },
    /// `from` kennt `to`, aber nicht umgekehrt
    AsymmetricConnection { from: NodeId, to: NodeId },
    /// Node verweist auf sich selbst
    SelfLoop(NodeId),
    /// Verbindung zwischen Nodes verschiedener Hallen
    CrossHallConnection { from: NodeId, to: NodeId },
}

/// Vollständiger Ausstellungsplan (alle Hallen).
#[derive(Debug, Clone, Default)]
pub struct FloorPlan {
    /// Alle Hallen in Anlage-Reihenfolge
    pub halls: Vec<Hall>,
    /// Alle Marker aller Hallen
    markers: Vec<MapMarker>,
    /// Alle Navigations-Nodes, indexiert nach ID (Einfügereihenfolge bleibt erhalten)
    nodes: IndexMap<NodeId, NavigationNode>,
    /// Persistenter Spatial-Index fuer Pick-Abfragen im Editor
    spatial_index: SpatialIndex,
}

impl FloorPlan {
    /// Erstellt einen leeren FloorPlan.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Hallen ─────────────────────────────────────────────────────

    /// Fügt eine Halle hinzu.
    pub fn add_hall(&mut self, hall: Hall) -> Result<(), GraphEditError> {
        if self.find_hall(&hall.id).is_some() {
            return Err(GraphEditError::DuplicateId(hall.id.to_string()));
        }
        self.halls.push(hall);
        Ok(())
    }

    /// Findet eine Halle per ID.
    pub fn find_hall(&self, hall_id: &HallId) -> Option<&Hall> {
        self.halls.iter().find(|h| &h.id == hall_id)
    }

    /// Entfernt eine Halle inklusive ihrer Nodes und Marker.
    pub fn remove_hall(&mut self, hall_id: &HallId) -> Option<Hall> {
        let index = self.halls.iter().position(|h| &h.id == hall_id)?;
        let hall = self.halls.remove(index);

        let node_ids: Vec<NodeId> = self
            .nodes
            .values()
            .filter(|n| &n.hall_id == hall_id)
            .map(|n| n.id.clone())
            .collect();
        for id in &node_ids {
            self.strip_references_to(id);
            self.nodes.shift_remove(id);
        }
        self.markers.retain(|m| !m.is_in_hall(hall_id));
        self.rebuild_spatial_index();

        log::info!(
            "Halle {} entfernt ({} Node(s) kaskadiert)",
            hall_id,
            node_ids.len()
        );
        Some(hall)
    }

    // ── Nodes ──────────────────────────────────────────────────────

    /// Fügt einen Node hinzu. Verbindungen werden unverändert übernommen
    /// (Import); neue Kanten bitte über [`FloorPlan::connect_nodes`] anlegen.
    pub fn add_node(&mut self, node: NavigationNode) -> Result<(), GraphEditError> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphEditError::DuplicateId(node.id.to_string()));
        }
        self.nodes.insert(node.id.clone(), node);
        self.rebuild_spatial_index();
        Ok(())
    }

    /// Fügt mehrere Nodes hinzu und baut den Spatial-Index nur einmal neu auf.
    ///
    /// Alles oder nichts: bei einer doppelten ID werden die in diesem Aufruf
    /// eingefügten Nodes wieder entfernt.
    pub fn add_nodes(
        &mut self,
        nodes: impl IntoIterator<Item = NavigationNode>,
    ) -> Result<(), GraphEditError> {
        let len_before = self.nodes.len();
        for node in nodes {
            if self.nodes.contains_key(&node.id) {
                self.nodes.truncate(len_before);
                return Err(GraphEditError::DuplicateId(node.id.to_string()));
            }
            self.nodes.insert(node.id.clone(), node);
        }
        self.rebuild_spatial_index();
        Ok(())
    }

    /// Berechnet die nächste freie Node-ID (`node-<n>`).
    pub fn next_node_id(&self) -> NodeId {
        let mut n = self.nodes.len() + 1;
        loop {
            let candidate = NodeId::new(format!("node-{n}"));
            if !self.nodes.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Gibt einen Node per ID zurück.
    pub fn node(&self, node_id: &NodeId) -> Option<&NavigationNode> {
        self.nodes.get(node_id)
    }

    /// Prüft ob ein Node existiert.
    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// Iterator über alle Nodes in Einfügereihenfolge (read-only).
    pub fn nodes_iter(&self) -> impl Iterator<Item = &NavigationNode> {
        self.nodes.values()
    }

    /// Snapshot aller Nodes einer Halle in Einfügereihenfolge.
    pub fn nodes_in_hall(&self, hall_id: &HallId) -> Vec<NavigationNode> {
        self.nodes
            .values()
            .filter(|n| &n.hall_id == hall_id)
            .cloned()
            .collect()
    }

    /// Snapshot aller Nodes aller Hallen.
    pub fn node_snapshot(&self) -> Vec<NavigationNode> {
        self.nodes.values().cloned().collect()
    }

    /// Gibt die Anzahl der Nodes zurück.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl ungerichteter Verbindungen (A↔B zählt einmal).
    pub fn connection_count(&self) -> usize {
        let mut pairs = std::collections::HashSet::new();
        for node in self.nodes.values() {
            for other in &node.connections {
                let pair = if node.id <= *other {
                    (node.id.clone(), other.clone())
                } else {
                    (other.clone(), node.id.clone())
                };
                pairs.insert(pair);
            }
        }
        pairs.len()
    }

    /// Verschiebt einen Node.
    pub fn update_node_position(&mut self, node_id: &NodeId, new_position: Vec2) -> bool {
        let Some(node) = self.nodes.get_mut(node_id) else {
            return false;
        };

        if node.position == new_position {
            return true;
        }

        node.position = new_position;
        self.rebuild_spatial_index();
        true
    }

    /// Setzt oder entfernt die Eingangs-Markierung eines Nodes.
    pub fn set_entry_point(&mut self, node_id: &NodeId, is_entry_point: bool) -> bool {
        match self.nodes.get_mut(node_id) {
            Some(node) => {
                node.is_entry_point = is_entry_point;
                true
            }
            None => false,
        }
    }

    /// Prüft, ob `a` und `b` verbunden werden dürfen, ohne etwas zu ändern.
    pub fn check_connection(&self, a: &NodeId, b: &NodeId) -> Result<(), GraphEditError> {
        if a == b {
            return Err(GraphEditError::SelfLoop(a.clone()));
        }
        let node_a = self
            .nodes
            .get(a)
            .ok_or_else(|| GraphEditError::UnknownNode(a.clone()))?;
        let node_b = self
            .nodes
            .get(b)
            .ok_or_else(|| GraphEditError::UnknownNode(b.clone()))?;
        if node_a.hall_id != node_b.hall_id {
            return Err(GraphEditError::CrossHall {
                a: a.clone(),
                b: b.clone(),
            });
        }
        Ok(())
    }

    /// Verbindet zwei Nodes in beiden Richtungen.
    ///
    /// Gibt `Ok(false)` zurück, wenn die Kante bereits vollständig existierte.
    /// Eine halbseitige Kante (Altdaten) wird dabei vervollständigt.
    pub fn connect_nodes(&mut self, a: &NodeId, b: &NodeId) -> Result<bool, GraphEditError> {
        self.check_connection(a, b)?;

        let mut changed = false;
        if let Some(node) = self.nodes.get_mut(a) {
            changed |= node.connections.insert(b.clone());
        }
        if let Some(node) = self.nodes.get_mut(b) {
            changed |= node.connections.insert(a.clone());
        }
        Ok(changed)
    }

    /// Trennt zwei Nodes in beiden Richtungen. Gibt `true` zurück, wenn
    /// mindestens eine Richtung entfernt wurde.
    pub fn disconnect_nodes(&mut self, a: &NodeId, b: &NodeId) -> bool {
        let mut removed = false;
        if let Some(node) = self.nodes.get_mut(a) {
            removed |= node.connections.shift_remove(b);
        }
        if let Some(node) = self.nodes.get_mut(b) {
            removed |= node.connections.shift_remove(a);
        }
        removed
    }

    /// Entfernt einen Node; vorher wird seine ID aus allen Verbindungslisten
    /// gestrichen (Kaskade).
    pub fn remove_node(&mut self, node_id: &NodeId) -> Option<NavigationNode> {
        if !self.nodes.contains_key(node_id) {
            return None;
        }
        self.strip_references_to(node_id);
        let removed = self.nodes.shift_remove(node_id);
        self.rebuild_spatial_index();
        removed
    }

    fn strip_references_to(&mut self, node_id: &NodeId) {
        for node in self.nodes.values_mut() {
            node.connections.shift_remove(node_id);
        }
    }

    // ── Spatial ────────────────────────────────────────────────────

    /// Baut den persistenten Spatial-Index aus den aktuellen Nodes neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_node_map(&self.nodes);
    }

    /// Findet den nächstgelegenen Node (hallenübergreifend).
    pub fn nearest_node(&self, query: Vec2) -> Option<SpatialMatch> {
        self.spatial_index.nearest(query)
    }

    /// Findet alle Nodes innerhalb eines Radius (hallenübergreifend).
    pub fn nodes_within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        self.spatial_index.within_radius(query, radius)
    }

    /// Pickt den nächsten Node einer Halle innerhalb von `max_distance`.
    pub fn pick_node(&self, hall_id: &HallId, query: Vec2, max_distance: f32) -> Option<NodeId> {
        self.nodes_within_radius(query, max_distance)
            .into_iter()
            .find(|hit| {
                self.nodes
                    .get(&hit.node_id)
                    .is_some_and(|n| &n.hall_id == hall_id)
            })
            .map(|hit| hit.node_id)
    }

    // ── Marker ─────────────────────────────────────────────────────

    /// Fügt einen Marker hinzu. Pro Halle ist höchstens ein Kiosk erlaubt.
    ///
    /// Die Halle wird hier nicht geprüft: Dokumente ohne Hallenliste
    /// referenzieren Hallen nur über `hallId`.
    pub fn add_marker(&mut self, marker: MapMarker) -> Result<(), GraphEditError> {
        self.check_new_marker(&marker)?;
        self.markers.push(marker);
        Ok(())
    }

    /// Prüft einen neuen Marker auf doppelte ID und zweiten Kiosk.
    pub fn check_new_marker(&self, marker: &MapMarker) -> Result<(), GraphEditError> {
        if self.find_marker(&marker.id).is_some() {
            return Err(GraphEditError::DuplicateId(marker.id.to_string()));
        }
        self.ensure_single_kiosk(marker)
    }

    /// Ersetzt einen bestehenden Marker (gleiche ID). Die Ziel-Halle muss
    /// existieren.
    pub fn update_marker(&mut self, marker: MapMarker) -> Result<(), GraphEditError> {
        self.check_marker_update(&marker)?;
        if let Some(slot) = self.markers.iter_mut().find(|m| m.id == marker.id) {
            *slot = marker;
        }
        Ok(())
    }

    /// Prüft ein Marker-Update, ohne etwas zu ändern.
    pub fn check_marker_update(&self, marker: &MapMarker) -> Result<(), GraphEditError> {
        if self.find_marker(&marker.id).is_none() {
            return Err(GraphEditError::UnknownMarker(marker.id.clone()));
        }
        self.check_known_hall(marker.hall_id.as_ref())?;
        self.ensure_single_kiosk(marker)
    }

    /// `Ok` für `None` oder eine vorhandene Halle.
    pub fn check_known_hall(&self, hall_id: Option<&HallId>) -> Result<(), GraphEditError> {
        match hall_id {
            Some(id) if self.find_hall(id).is_none() => {
                Err(GraphEditError::UnknownHall(id.clone()))
            }
            _ => Ok(()),
        }
    }

    fn ensure_single_kiosk(&self, marker: &MapMarker) -> Result<(), GraphEditError> {
        let Some(hall_id) = marker.hall_id.as_ref().filter(|_| marker.is_kiosk()) else {
            return Ok(());
        };
        match self.kiosk_marker(hall_id) {
            Some(existing) if existing.id != marker.id => Err(GraphEditError::DuplicateKiosk {
                hall: hall_id.clone(),
                existing: existing.id.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Entfernt einen Marker.
    pub fn remove_marker(&mut self, marker_id: &MarkerId) -> Option<MapMarker> {
        let index = self.markers.iter().position(|m| &m.id == marker_id)?;
        Some(self.markers.remove(index))
    }

    /// Findet einen Marker per ID.
    pub fn find_marker(&self, marker_id: &MarkerId) -> Option<&MapMarker> {
        self.markers.iter().find(|m| &m.id == marker_id)
    }

    /// Kiosk-Marker ("Sie sind hier") einer Halle.
    pub fn kiosk_marker(&self, hall_id: &HallId) -> Option<&MapMarker> {
        self.markers
            .iter()
            .find(|m| m.is_kiosk() && m.is_in_hall(hall_id))
    }

    /// Alle Marker (read-only).
    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    /// Marker einer Halle.
    pub fn markers_in_hall<'a>(
        &'a self,
        hall_id: &'a HallId,
    ) -> impl Iterator<Item = &'a MapMarker> + 'a {
        self.markers.iter().filter(move |m| m.is_in_hall(hall_id))
    }

    /// Gibt die Anzahl der Marker zurück.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Berechnet die nächste freie Marker-ID (`marker-<n>`).
    pub fn next_marker_id(&self) -> MarkerId {
        let mut n = self.markers.len() + 1;
        loop {
            let candidate = MarkerId::new(format!("marker-{n}"));
            if self.find_marker(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    // ── Validierung ────────────────────────────────────────────────

    /// Prüft den Graphen auf hängende, einseitige, hallenübergreifende
    /// Verbindungen und Self-Loops.
    pub fn validate(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();
        for node in self.nodes.values() {
            for target in &node.connections {
                if target == &node.id {
                    issues.push(GraphIssue::SelfLoop(node.id.clone()));
                    continue;
                }
                let Some(other) = self.nodes.get(target) else {
                    issues.push(GraphIssue::DanglingConnection {
                        from: node.id.clone(),
                        to: target.clone(),
                    });
                    continue;
                };
                if other.hall_id != node.hall_id {
                    issues.push(GraphIssue::CrossHallConnection {
                        from: node.id.clone(),
                        to: target.clone(),
                    });
                }
                if !other.connections.contains(&node.id) {
                    issues.push(GraphIssue::AsymmetricConnection {
                        from: node.id.clone(),
                        to: target.clone(),
                    });
                }
            }
        }
        issues
    }
}
