//! Achsenparalleles Rechteck im Hallen-Koordinatensystem.

use glam::Vec2;

/// Rechteck mit linker oberer Ecke `(x, y)` und Ausdehnung `width × height`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloorRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FloorRect {
    /// Erstellt ein Rechteck aus Ecke und Ausdehnung.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Mittelpunkt des Rechtecks.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Minimale Ecke.
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Maximale Ecke.
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Prüft ob ein Punkt innerhalb (inkl. Rand) liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
