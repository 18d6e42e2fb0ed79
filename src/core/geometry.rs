//! Rein-mathematische Geometrie-Hilfen für orthogonale Verbindungen.
//!
//! Keine Zustände, keine Abhängigkeit zu Session oder Diagramm.
//! Koordinatensystem: +X nach rechts, +Y nach unten (Canvas-Konvention).

use glam::Vec2;

use super::Shape;

/// Ausrichtung eines Segments zwischen zwei Wegpunkten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Beide Punkte haben dieselbe Y-Koordinate
    Horizontal,
    /// Beide Punkte haben dieselbe X-Koordinate
    Vertical,
    /// Weder horizontal noch vertikal
    Diagonal,
}

impl Orientation {
    /// `true` für horizontale und vertikale Segmente.
    pub fn is_orthogonal(self) -> bool {
        self != Orientation::Diagonal
    }
}

/// Koordinatenachse eines Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Gibt die jeweils andere Achse zurück.
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Liest die Koordinate dieser Achse.
    pub fn get(self, p: Vec2) -> f32 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    /// Setzt die Koordinate dieser Achse.
    pub fn set(self, p: &mut Vec2, value: f32) {
        match self {
            Axis::X => p.x = value,
            Axis::Y => p.y = value,
        }
    }
}

/// Bestimmt die Ausrichtung des Segments `a`→`b`.
///
/// Ein Segment der Länge 0 gilt als horizontal.
pub fn orientation(a: Vec2, b: Vec2) -> Orientation {
    if a.y == b.y {
        Orientation::Horizontal
    } else if a.x == b.x {
        Orientation::Vertical
    } else {
        Orientation::Diagonal
    }
}

/// Mittelpunkt zwischen zwei Punkten.
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

/// Prüft, ob `p` innerhalb von `tolerance` auf dem Segment `a`–`b` liegt.
///
/// Bedingung 1: Abstand zur Geraden durch `a` und `b` ≤ `tolerance`.
/// Bedingung 2: `p` liegt in der (um `tolerance` erweiterten) Bounding-Box des Segments.
pub fn point_on_segment(a: Vec2, b: Vec2, p: Vec2, tolerance: f32) -> bool {
    let min = a.min(b) - Vec2::splat(tolerance);
    let max = a.max(b) + Vec2::splat(tolerance);
    if p.x < min.x || p.x > max.x || p.y < min.y || p.y > max.y {
        return false;
    }

    let length = a.distance(b);
    if length < f32::EPSILON {
        return p.distance(a) <= tolerance;
    }

    // Kreuzprodukt / Länge = senkrechter Abstand zur Geraden
    let cross = (b - a).perp_dot(p - a);
    (cross / length).abs() <= tolerance
}

/// Projiziert `p` auf das Segment `a`–`b` (auf das Segment begrenzt).
pub fn project_onto_segment(a: Vec2, b: Vec2, p: Vec2) -> Vec2 {
    let ab = b - a;
    let length_sq = ab.length_squared();
    if length_sq < f32::EPSILON {
        return a;
    }
    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Prüft, ob `p` innerhalb der um `padding` erweiterten Box von `shape` liegt.
/// Die Ränder zählen als innen.
pub fn in_bounds(p: Vec2, shape: &Shape, padding: f32) -> bool {
    p.x >= shape.left() - padding
        && p.x <= shape.right() + padding
        && p.y >= shape.top() - padding
        && p.y <= shape.bottom() + padding
}
