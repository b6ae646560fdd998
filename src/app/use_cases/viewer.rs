//! Use-Cases der Besucher-Ansicht: Hallenwahl, Filter, Admin-Schalter.

use crate::app::AppState;
use crate::core::{HallId, MarkerCategory};

/// Wechselt die aktuelle Halle. Auswahl, Route und Connect-Start werden
/// verworfen.
pub fn select_hall(state: &mut AppState, hall_id: HallId) {
    let Some(floor_plan) = state.floor_plan.as_deref() else {
        log::warn!("Hallenwahl nicht möglich: kein Floor-Plan geladen");
        return;
    };
    if floor_plan.find_hall(&hall_id).is_none() {
        log::warn!("Halle {} existiert nicht", hall_id);
        return;
    }
    if state.viewer.current_hall.as_ref() == Some(&hall_id) {
        log::debug!("Halle {} ist bereits aktiv", hall_id);
        return;
    }

    log::info!("Halle {} gewählt", hall_id);
    state.viewer.current_hall = Some(hall_id);
    state.viewer.clear_selection();
    state.editor.connect_source_node = None;
}

/// Verwirft Marker-Auswahl und Route.
pub fn clear_selection(state: &mut AppState) {
    state.viewer.clear_selection();
    log::debug!("Auswahl zurückgesetzt");
}

/// Setzt den Suchbegriff.
pub fn set_search_query(state: &mut AppState, query: String) {
    state.viewer.search_query = query;
}

/// Schaltet eine Kategorie im Filter ein oder aus.
pub fn toggle_category(state: &mut AppState, category: MarkerCategory) {
    let categories = &mut state.viewer.active_categories;
    if !categories.shift_remove(&category) {
        categories.insert(category);
    }
    log::debug!(
        "Kategorie {} {}",
        category.label(),
        if categories.contains(&category) {
            "aktiv"
        } else {
            "ausgeblendet"
        }
    );
}

/// Schaltet den Admin-Modus. Beim Verlassen wird das Connect-Tool
/// zurückgesetzt.
pub fn set_admin_mode(state: &mut AppState, enabled: bool) {
    if !enabled {
        state.editor.connect_source_node = None;
    }
    if state.editor.admin_mode != enabled {
        log::info!("Admin-Modus {}", if enabled { "an" } else { "aus" });
    }
    state.editor.admin_mode = enabled;
}
