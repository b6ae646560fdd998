//! AppCommand-Enum: alle Zustandsänderungen laufen über diese Commands.

use crate::core::{HallId, MapMarker, MarkerCategory, MarkerId, NodeId};
use glam::Vec2;

/// Mutierende Commands, ausgeführt durch den `AppController`.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Datei-I/O ===
    /// Floor-Plan aus JSON-Datei laden
    LoadFloorPlan { path: String },
    /// Floor-Plan als JSON speichern
    SaveFloorPlan { path: String },

    // === Viewer ===
    /// Aktuelle Halle wechseln
    SelectHall { hall_id: HallId },
    /// Marker auswählen und Route vom Kiosk berechnen
    SelectMarker { marker_id: MarkerId },
    /// Auswahl und Route verwerfen
    ClearSelection,
    /// Suchbegriff setzen (leer = kein Filter)
    SetSearchQuery { query: String },
    /// Kategorie-Filter umschalten
    ToggleCategory { category: MarkerCategory },
    /// Admin-Modus ein/aus
    SetAdminMode { enabled: bool },

    // === Admin-Editor ===
    /// Neuen Node in der aktuellen Halle anlegen
    AddNode { position: Vec2 },
    /// Node verschieben
    MoveNode { node_id: NodeId, position: Vec2 },
    /// Node samt aller Verweise löschen
    DeleteNode { node_id: NodeId },
    /// Connect-Tool: erster Klick wählt Start, zweiter verbindet
    ConnectToolPick { position: Vec2 },
    /// Zwei Nodes direkt verbinden
    ConnectNodes { a: NodeId, b: NodeId },
    /// Verbindung zwischen zwei Nodes entfernen
    DisconnectNodes { a: NodeId, b: NodeId },
    /// Eingangs-Markierung setzen/entfernen
    SetEntryPoint { node_id: NodeId, is_entry_point: bool },
    /// Neuen Marker anlegen
    CreateMarker { marker: MapMarker },
    /// Bestehenden Marker ersetzen (gleiche ID)
    UpdateMarker { marker: MapMarker },
    /// Marker entfernen
    RemoveMarker { marker_id: MarkerId },

    // === History ===
    /// Letzte Änderung rückgängig machen
    Undo,
    /// Rückgängig gemachte Änderung wiederholen
    Redo,
}

impl AppCommand {
    /// `true` für Commands, die nur im Admin-Modus erlaubt sind.
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            AppCommand::AddNode { .. }
                | AppCommand::MoveNode { .. }
                | AppCommand::DeleteNode { .. }
                | AppCommand::ConnectToolPick { .. }
                | AppCommand::ConnectNodes { .. }
                | AppCommand::DisconnectNodes { .. }
                | AppCommand::SetEntryPoint { .. }
                | AppCommand::CreateMarker { .. }
                | AppCommand::UpdateMarker { .. }
                | AppCommand::RemoveMarker { .. }
        )
    }
}
