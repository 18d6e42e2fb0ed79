//! Achsenparallele Shapes, an denen Verbindungen andocken.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tatsächliche Umrissform eines Shapes.
///
/// Der Drag-Algorithmus arbeitet ausschließlich mit der Bounding-Box;
/// der Umriss wird nur vom optionalen Docking-Refiner ausgewertet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeOutline {
    /// Rechteck = Bounding-Box
    #[default]
    Rect,
    /// In die Bounding-Box eingeschriebene Ellipse
    Ellipse,
}

/// Ein Diagramm-Element mit Bounding-Box (während eines Drags unveränderlich).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Eindeutige Shape-ID
    pub id: u64,
    /// Linke obere Ecke
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Umrissform für das Docking
    #[serde(default)]
    pub outline: ShapeOutline,
}

impl Shape {
    /// Erstellt ein rechteckiges Shape aus linker oberer Ecke und Größe.
    pub fn new(id: u64, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            outline: ShapeOutline::Rect,
        }
    }

    /// Setzt die Umrissform (Builder-Stil).
    pub fn with_outline(mut self, outline: ShapeOutline) -> Self {
        self.outline = outline;
        self
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Mittelpunkt der Bounding-Box.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Halbe Ausdehnung (Halbachsen) der Bounding-Box.
    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
