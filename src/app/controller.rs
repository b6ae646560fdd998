//! Application Controller für zentrale Command-Verarbeitung.

use super::use_cases;
use super::{AppCommand, AppState};

/// Orchestriert Commands und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt einen Command auf dem AppState aus.
    ///
    /// Nur Datei-I/O kann fehlschlagen; abgelehnte Editier-Operationen
    /// werden geloggt und lassen den State unverändert.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        if command.requires_admin() && !state.editor.admin_mode {
            log::warn!("{:?} erfordert den Admin-Modus", command);
            return Ok(());
        }

        state.command_log.record(&command);

        match command {
            // === Datei-I/O ===
            AppCommand::LoadFloorPlan { path } => use_cases::file_io::load_floor_plan(state, path)?,
            AppCommand::SaveFloorPlan { path } => use_cases::file_io::save_floor_plan(state, path)?,

            // === Viewer ===
            AppCommand::SelectHall { hall_id } => use_cases::viewer::select_hall(state, hall_id),
            AppCommand::SelectMarker { marker_id } => {
                use_cases::navigation::select_marker(state, &marker_id)
            }
            AppCommand::ClearSelection => use_cases::viewer::clear_selection(state),
            AppCommand::SetSearchQuery { query } => {
                use_cases::viewer::set_search_query(state, query)
            }
            AppCommand::ToggleCategory { category } => {
                use_cases::viewer::toggle_category(state, category)
            }
            AppCommand::SetAdminMode { enabled } => {
                use_cases::viewer::set_admin_mode(state, enabled)
            }

            // === Admin-Editor ===
            AppCommand::AddNode { position } => {
                use_cases::editing::add_node_at_position(state, position)
            }
            AppCommand::MoveNode { node_id, position } => {
                use_cases::editing::move_node(state, &node_id, position)
            }
            AppCommand::DeleteNode { node_id } => use_cases::editing::delete_node(state, &node_id),
            AppCommand::ConnectToolPick { position } => {
                use_cases::editing::connect_tool_pick_node(state, position)
            }
            AppCommand::ConnectNodes { a, b } => use_cases::editing::connect_nodes(state, &a, &b),
            AppCommand::DisconnectNodes { a, b } => {
                use_cases::editing::disconnect_nodes(state, &a, &b)
            }
            AppCommand::SetEntryPoint {
                node_id,
                is_entry_point,
            } => use_cases::editing::set_entry_point(state, &node_id, is_entry_point),
            AppCommand::CreateMarker { marker } => use_cases::editing::create_marker(state, marker),
            AppCommand::UpdateMarker { marker } => use_cases::editing::update_marker(state, marker),
            AppCommand::RemoveMarker { marker_id } => {
                use_cases::editing::remove_marker(state, &marker_id)
            }

            // === History ===
            AppCommand::Undo => use_cases::history::undo(state),
            AppCommand::Redo => use_cases::history::redo(state),
        }

        Ok(())
    }
}
