//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use anyhow::Context;
use std::sync::Arc;

/// Lädt einen Floor-Plan aus einer JSON-Datei in den AppState.
///
/// Ersetzt den bisherigen Plan vollständig; History, Auswahl und Route
/// werden zurückgesetzt und die erste Halle wird aktiv.
pub fn load_floor_plan(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let json_content = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei {} nicht lesbar", path))?;
    let floor_plan = crate::json::parse_floor_plan(&json_content)
        .with_context(|| format!("Datei {} nicht importierbar", path))?;

    state.viewer.current_hall = floor_plan.halls.first().map(|h| h.id.clone());
    state.viewer.clear_selection();
    state.editor.connect_source_node = None;
    state.history.clear();
    state.current_file_path = Some(path);
    state.floor_plan = Some(Arc::new(floor_plan));
    Ok(())
}

/// Speichert den aktuellen Floor-Plan als JSON.
pub fn save_floor_plan(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let Some(floor_plan) = state.floor_plan.as_deref() else {
        log::warn!("Speichern nicht möglich: kein Floor-Plan geladen");
        return Ok(());
    };

    let json = crate::json::write_floor_plan(floor_plan)?;
    std::fs::write(&path, json).with_context(|| format!("Datei {} nicht schreibbar", path))?;

    log::info!(
        "Floor-Plan gespeichert: {} ({} Node(s), {} Marker)",
        path,
        floor_plan.node_count(),
        floor_plan.marker_count()
    );
    state.current_file_path = Some(path);
    Ok(())
}
