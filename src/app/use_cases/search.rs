//! Marker-Suche der Besucher-Ansicht.

use crate::app::AppState;
use crate::core::MapMarker;

/// Marker der aktuellen Halle, gefiltert nach aktiven Kategorien und
/// Suchbegriff (Name, Beschreibung, Standnummer; ohne Groß/Klein).
///
/// Der Kiosk ist nie ein Suchergebnis. Suchbegriffe kürzer als
/// `search_min_chars` filtern nicht.
pub fn visible_markers(state: &AppState) -> Vec<&MapMarker> {
    let (Some(floor_plan), Some(hall_id)) =
        (state.floor_plan.as_deref(), state.viewer.current_hall.as_ref())
    else {
        return Vec::new();
    };

    let query = state.viewer.search_query.trim().to_lowercase();
    let query = (query.chars().count() >= state.options.search_min_chars.max(1)).then_some(query);

    floor_plan
        .markers_in_hall(hall_id)
        .filter(|m| !m.is_kiosk())
        .filter(|m| state.viewer.active_categories.contains(&m.category))
        .filter(|m| query.as_deref().is_none_or(|q| matches_query(m, q)))
        .collect()
}

fn matches_query(marker: &MapMarker, query: &str) -> bool {
    marker.name.to_lowercase().contains(query)
        || marker.description.to_lowercase().contains(query)
        || marker
            .stand_number
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(query))
}
