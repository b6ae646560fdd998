//! Zentrale Konfiguration für den Hall Wayfinder.
//!
//! `WayfinderOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::MarkerCategory;
use serde::{Deserialize, Serialize};

// ── Editor ──────────────────────────────────────────────────────────

/// Pick-Radius (Hallen-Einheiten): Klick innerhalb dieses Radius trifft einen Node.
pub const PICK_RADIUS: f32 = 15.0;
/// Maximale Anzahl an Undo-Schritten.
pub const HISTORY_DEPTH: usize = 100;

// ── Suche ───────────────────────────────────────────────────────────

/// Mindestlänge des Suchbegriffs, bevor gefiltert wird.
pub const SEARCH_MIN_CHARS: usize = 1;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `hall_wayfinder.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WayfinderOptions {
    // ── Editor ──────────────────────────────────────────────────
    /// Pick-Radius für Node-Klicks im Admin-Editor
    pub pick_radius: f32,
    /// Maximale Undo-Tiefe
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
    /// Neuer Node wird automatisch mit dem gewählten Startknoten verbunden
    #[serde(default = "default_true")]
    pub auto_connect_new_nodes: bool,

    // ── Viewer ──────────────────────────────────────────────────
    /// Beim Start aktive Kategorien-Filter
    #[serde(default = "default_categories")]
    pub default_categories: Vec<MarkerCategory>,
    /// Mindestlänge des Suchbegriffs
    #[serde(default = "default_search_min_chars")]
    pub search_min_chars: usize,
}

impl Default for WayfinderOptions {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS,
            history_depth: HISTORY_DEPTH,
            auto_connect_new_nodes: true,
            default_categories: default_categories(),
            search_min_chars: SEARCH_MIN_CHARS,
        }
    }
}

fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

fn default_true() -> bool {
    true
}

/// Alle Kategorien außer dem Kiosk (der Kiosk ist kein Suchziel).
fn default_categories() -> Vec<MarkerCategory> {
    MarkerCategory::ALL
        .into_iter()
        .filter(|c| !c.is_kiosk())
        .collect()
}

fn default_search_min_chars() -> usize {
    SEARCH_MIN_CHARS
}

impl WayfinderOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("hall-wayfinder"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("hall_wayfinder.toml")
    }
}
