use super::EditorState;
use crate::core::FloorPlan;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche FloorPlan-Klon passiert erst beim nächsten
/// `Arc::make_mut()` in einem Use-Case.
#[derive(Clone)]
pub struct Snapshot {
    /// Optionaler FloorPlan (Arc-Klon für O(1)-Snapshot)
    pub floor_plan: Option<Arc<FloorPlan>>,
    /// Editor-Zustand (Connect-Startknoten) zum Zeitpunkt des Snapshots
    pub editor: EditorState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            floor_plan: state.floor_plan.clone(),
            editor: state.editor.clone(),
        }
    }

    /// Stellt den Snapshot wieder her.
    ///
    /// Die aktive Route wird verworfen; eine Marker-Auswahl bleibt nur
    /// bestehen, wenn der Marker im wiederhergestellten Plan existiert.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.floor_plan = self.floor_plan;
        state.editor.connect_source_node = self.editor.connect_source_node;
        state.invalidate_route();

        let selection_valid = match (&state.viewer.selected_marker, &state.floor_plan) {
            (Some(id), Some(plan)) => plan.find_marker(id).is_some(),
            (Some(_), None) => false,
            (None, _) => true,
        };
        if !selection_valid {
            state.viewer.selected_marker = None;
        }
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Leert beide Stacks (z.B. nach dem Laden einer neuen Datei).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Holt den letzten Undo-Snapshot und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Snapshot und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
