//! Halle: eigenständig geplanter Bereich mit eigenem Koordinatensystem.

use super::HallId;

/// Eine Messehalle mit Grundriss-Abmessungen.
#[derive(Debug, Clone, PartialEq)]
pub struct Hall {
    /// Hallen-ID
    pub id: HallId,
    /// Anzeigename
    pub name: String,
    /// Breite des Grundrisses (Hallen-Einheiten)
    pub width: f32,
    /// Höhe des Grundrisses (Hallen-Einheiten)
    pub height: f32,
    /// Optionales Hintergrundbild (URL oder Pfad)
    pub background_image: Option<String>,
}

impl Hall {
    /// Erstellt eine Halle ohne Hintergrundbild.
    pub fn new(id: impl Into<HallId>, name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width,
            height,
            background_image: None,
        }
    }
}
