//! Map-Marker: Points of Interest auf dem Hallenplan (Stände, Einrichtungen, Kiosk).

use super::{FloorRect, HallId, MarkerId};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kategorie eines Map-Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerCategory {
    /// Aussteller-Stand
    #[default]
    Stand,
    Toilet,
    Entrance,
    Exit,
    Info,
    Food,
    Elevator,
    Stairs,
    FirstAid,
    /// "Sie sind hier"-Punkt: fester Startpunkt der Navigation einer Halle
    Kiosk,
}

impl MarkerCategory {
    /// Alle Kategorien in Anzeige-Reihenfolge.
    pub const ALL: [MarkerCategory; 10] = [
        MarkerCategory::Stand,
        MarkerCategory::Toilet,
        MarkerCategory::Entrance,
        MarkerCategory::Exit,
        MarkerCategory::Info,
        MarkerCategory::Food,
        MarkerCategory::Elevator,
        MarkerCategory::Stairs,
        MarkerCategory::FirstAid,
        MarkerCategory::Kiosk,
    ];

    /// Anzeigename (englisch, Übersetzung liegt außerhalb der Library).
    pub fn label(self) -> &'static str {
        match self {
            MarkerCategory::Stand => "Stands",
            MarkerCategory::Toilet => "Toilets",
            MarkerCategory::Entrance => "Entrance",
            MarkerCategory::Exit => "Exit",
            MarkerCategory::Info => "Information",
            MarkerCategory::Food => "Food & Drinks",
            MarkerCategory::Elevator => "Elevator",
            MarkerCategory::Stairs => "Stairs",
            MarkerCategory::FirstAid => "First Aid",
            MarkerCategory::Kiosk => "You Are Here",
        }
    }

    /// Darstellungsfarbe als Hex-String.
    pub fn color(self) -> &'static str {
        match self {
            MarkerCategory::Stand => "#00d4ff",
            MarkerCategory::Toilet => "#a855f7",
            MarkerCategory::Entrance => "#22c55e",
            MarkerCategory::Exit => "#ef4444",
            MarkerCategory::Info => "#3b82f6",
            MarkerCategory::Food => "#f97316",
            MarkerCategory::Elevator => "#eab308",
            MarkerCategory::Stairs => "#64748b",
            MarkerCategory::FirstAid => "#dc2626",
            MarkerCategory::Kiosk => "#ec4899",
        }
    }

    /// `true` für die Kiosk-Kategorie.
    pub fn is_kiosk(self) -> bool {
        self == MarkerCategory::Kiosk
    }
}

/// Ein Marker auf dem Hallenplan.
///
/// `x, y, width, height` beschreiben ein achsenparalleles Rechteck im selben
/// Koordinatenraum wie die Navigations-Nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    /// Eindeutige Marker-ID
    pub id: MarkerId,
    /// Anzeigename
    pub name: String,
    /// Beschreibungstext
    pub description: String,
    /// Kategorie
    pub category: MarkerCategory,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Halle des Markers (Marker ohne Halle sind nicht navigierbar)
    pub hall_id: Option<HallId>,
    /// Standnummer (z.B. "A1")
    pub stand_number: Option<String>,
}

impl MapMarker {
    /// Erstellt einen Marker ohne Beschreibung und Standnummer.
    pub fn new(
        id: impl Into<MarkerId>,
        name: impl Into<String>,
        category: MarkerCategory,
        area: FloorRect,
        hall_id: Option<HallId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height,
            hall_id,
            stand_number: None,
        }
    }

    /// Rechteck des Markers.
    pub fn area(&self) -> FloorRect {
        FloorRect::new(self.x, self.y, self.width, self.height)
    }

    /// Mittelpunkt des Marker-Rechtecks.
    pub fn center(&self) -> Vec2 {
        self.area().center()
    }

    /// `true` wenn der Marker der Kiosk ("Sie sind hier") ist.
    pub fn is_kiosk(&self) -> bool {
        self.category.is_kiosk()
    }

    /// Prüft ob der Marker zur angegebenen Halle gehört.
    pub fn is_in_hall(&self, hall_id: &HallId) -> bool {
        self.hall_id.as_ref() == Some(hall_id)
    }
}
