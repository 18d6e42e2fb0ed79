//! Näherungsweise Schnittpunktsuche zwischen Zeiger und Polylinie.

use glam::Vec2;

use super::geometry::{midpoint, orientation, project_onto_segment, Orientation};

/// Treffer der Schnittpunktsuche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Segment-Index (Segment `i` verbindet Wegpunkt `i - 1` und `i`),
    /// bei Bendpoint-Treffern der Index des Wegpunkts
    pub index: usize,
    /// Punkt auf der Polylinie
    pub point: Vec2,
    /// Abstand zwischen Zeiger und `point`
    pub distance: f32,
    /// Treffer liegt auf einem existierenden Knickpunkt
    pub bendpoint: bool,
}

/// Klassifizierter Segment-Treffer (nur für Index > 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub intersection: Intersection,
    /// Ausrichtung des getroffenen Segments
    pub orientation: Orientation,
    /// Mittelpunkt des getroffenen Segments
    pub mid: Vec2,
}

/// Sucht den nächsten Treffer auf `waypoints` innerhalb von `threshold`.
///
/// Knickpunkte haben Vorrang vor Segmenten. Bei Segmenten gewinnt der
/// kleinste senkrechte Abstand, bei Gleichstand das erste Segment.
pub fn approx_intersection(
    waypoints: &[Vec2],
    reference: Vec2,
    threshold: f32,
) -> Option<Intersection> {
    bendpoint_intersection(waypoints, reference, threshold)
        .or_else(|| path_intersection(waypoints, reference, threshold))
}

fn bendpoint_intersection(
    waypoints: &[Vec2],
    reference: Vec2,
    threshold: f32,
) -> Option<Intersection> {
    waypoints.iter().enumerate().find_map(|(index, &wp)| {
        let distance = wp.distance(reference);
        (distance <= threshold).then_some(Intersection {
            index,
            point: wp,
            distance,
            bendpoint: true,
        })
    })
}

fn path_intersection(waypoints: &[Vec2], reference: Vec2, threshold: f32) -> Option<Intersection> {
    let mut best: Option<Intersection> = None;

    for (i, pair) in waypoints.windows(2).enumerate() {
        let point = project_onto_segment(pair[0], pair[1], reference);
        let distance = point.distance(reference);
        if distance > threshold {
            continue;
        }
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Intersection {
                index: i + 1,
                point,
                distance,
                bendpoint: false,
            });
        }
    }

    best
}

/// Sucht einen Treffer und klassifiziert das getroffene Segment.
///
/// Gibt `None` zurück, wenn nichts innerhalb von `threshold` liegt oder der
/// Treffer den ersten Wegpunkt (Index 0) betrifft.
pub fn locate_segment(waypoints: &[Vec2], reference: Vec2, threshold: f32) -> Option<SegmentHit> {
    let intersection = approx_intersection(waypoints, reference, threshold)?;
    if intersection.index == 0 {
        return None;
    }

    let wp0 = waypoints[intersection.index - 1];
    let wp1 = waypoints[intersection.index];

    Some(SegmentHit {
        intersection,
        orientation: orientation(wp0, wp1),
        mid: midpoint(wp0, wp1),
    })
}
