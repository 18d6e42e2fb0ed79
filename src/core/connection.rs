//! Orthogonale Verbindung zwischen zwei Shapes als Wegpunkt-Liste.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{orientation, Orientation};
use super::Shape;

/// Ein Knickpunkt einer Verbindung.
///
/// `original` ist der Docking-Anker eines Endpunkts: die zuletzt bekannte
/// Andockstelle am Shape. Nur der erste und letzte Wegpunkt tragen einen Anker,
/// und nur solange der Endpunkt angedockt ist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Position im Canvas
    pub position: Vec2,
    /// Docking-Anker (nur Endpunkte)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<Vec2>,
}

impl Waypoint {
    /// Erstellt einen Wegpunkt ohne Anker.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            original: None,
        }
    }

    /// Erstellt einen angedockten Wegpunkt, der auf seinem Anker liegt.
    pub fn docked(anchor: Vec2) -> Self {
        Self {
            position: anchor,
            original: Some(anchor),
        }
    }

    /// Setzt den Anker (Builder-Stil).
    pub fn with_original(mut self, anchor: Vec2) -> Self {
        self.original = Some(anchor);
        self
    }
}

impl From<Vec2> for Waypoint {
    fn from(position: Vec2) -> Self {
        Self {
            position,
            original: None,
        }
    }
}

/// Eine Verbindung mit Route und den beiden verbundenen Shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Eindeutige Verbindungs-ID
    pub id: u64,
    /// Route (mindestens 2 Wegpunkte)
    pub waypoints: Vec<Waypoint>,
    /// Start-Shape
    pub source: Shape,
    /// Ziel-Shape
    pub target: Shape,
}

impl Connection {
    /// Erstellt eine neue Verbindung
    pub fn new(id: u64, waypoints: Vec<Waypoint>, source: Shape, target: Shape) -> Self {
        Self {
            id,
            waypoints,
            source,
            target,
        }
    }

    /// Gibt die Positionen aller Wegpunkte zurück.
    pub fn positions(&self) -> Vec<Vec2> {
        self.waypoints.iter().map(|wp| wp.position).collect()
    }

    /// Endpunkte des Segments `index` (verbindet Wegpunkt `index - 1` und `index`).
    pub fn segment(&self, index: usize) -> Option<(Vec2, Vec2)> {
        if index == 0 {
            return None;
        }
        let a = self.waypoints.get(index - 1)?;
        let b = self.waypoints.get(index)?;
        Some((a.position, b.position))
    }

    /// Docking-Anker des Startpunkts.
    pub fn start_docking(&self) -> Option<Vec2> {
        self.waypoints.first().and_then(|wp| wp.original)
    }

    /// Docking-Anker des Endpunkts.
    pub fn end_docking(&self) -> Option<Vec2> {
        self.waypoints.last().and_then(|wp| wp.original)
    }

    /// `true`, wenn jedes Segment horizontal oder vertikal ist.
    pub fn is_orthogonal(&self) -> bool {
        self.waypoints
            .windows(2)
            .all(|pair| orientation(pair[0].position, pair[1].position) != Orientation::Diagonal)
    }
}
