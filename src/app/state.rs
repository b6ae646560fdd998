use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::{FloorPlan, HallId, MarkerCategory, MarkerId, NodeId};
use crate::pathfinding::NavigationRoute;
use crate::shared::WayfinderOptions;
use indexmap::IndexSet;
use std::sync::Arc;

/// Zustand der Besucher-Ansicht (Hallenwahl, Suche, Route).
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    /// Aktuell angezeigte Halle
    pub current_hall: Option<HallId>,
    /// Ausgewählter Ziel-Marker
    pub selected_marker: Option<MarkerId>,
    /// Freitext-Suche (leer = kein Filter)
    pub search_query: String,
    /// Sichtbare Kategorien
    pub active_categories: IndexSet<MarkerCategory>,
    /// Zuletzt berechnete Route; wird bei jeder Mutation verworfen
    pub active_route: Option<NavigationRoute>,
}

impl ViewerState {
    /// Erstellt den Viewer-Zustand mit den übergebenen Start-Kategorien.
    pub fn with_categories(categories: &[MarkerCategory]) -> Self {
        Self {
            active_categories: categories.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Verwirft Marker-Auswahl und Route.
    pub fn clear_selection(&mut self) {
        self.selected_marker = None;
        self.active_route = None;
    }
}

/// Zustand des Admin-Editors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    /// Admin-Modus aktiv (Graph-Editing erlaubt)
    pub admin_mode: bool,
    /// Startknoten des Connect-Tools (erster Klick)
    pub connect_source_node: Option<NodeId>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Geladener Ausstellungsplan (Arc für O(1)-Undo-Snapshots)
    pub floor_plan: Option<Arc<FloorPlan>>,
    /// Viewer-Zustand
    pub viewer: ViewerState,
    /// Admin-Editor-Zustand
    pub editor: EditorState,
    /// Pfad der zuletzt geladenen/gespeicherten Datei
    pub current_file_path: Option<String>,
    /// Command-Log
    pub command_log: CommandLog,
    /// Undo/Redo History
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: WayfinderOptions,
}

impl AppState {
    /// Erstellt einen leeren AppState mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(WayfinderOptions::default())
    }

    /// Erstellt einen leeren AppState mit den übergebenen Optionen.
    pub fn with_options(options: WayfinderOptions) -> Self {
        Self {
            floor_plan: None,
            viewer: ViewerState::with_categories(&options.default_categories),
            editor: EditorState::default(),
            current_file_path: None,
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
        }
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.floor_plan
            .as_ref()
            .map(|fp| fp.node_count())
            .unwrap_or(0)
    }

    /// Gibt die Anzahl der Verbindungen zurück (für UI-Anzeige)
    pub fn connection_count(&self) -> usize {
        self.floor_plan
            .as_ref()
            .map(|fp| fp.connection_count())
            .unwrap_or(0)
    }

    /// Prüft, ob Undo verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Prüft, ob Redo verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    ///
    /// Muss VOR jeder Mutation aufgerufen werden.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Verwirft die aktive Route nach einer Graph- oder Marker-Mutation.
    pub fn invalidate_route(&mut self) {
        if self.viewer.active_route.take().is_some() {
            log::debug!("Aktive Route nach Änderung verworfen");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
