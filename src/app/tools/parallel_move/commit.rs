//! Commit-Vorbereitung: Runden und Redundanz-Filter.

use glam::Vec2;

use crate::core::geometry::point_on_segment;
use crate::core::Waypoint;

/// Rundet alle Wegpunkt-Positionen auf ganze Pixel.
///
/// Während des Drags wird im (gezoomten) Fließkomma-Raum gearbeitet,
/// die übernommene Route muss pixelgenau sein. Anker bleiben unverändert.
/// Halbe Pixel runden Richtung +∞, auch bei negativen Koordinaten.
pub fn round_waypoints(waypoints: &mut [Waypoint]) {
    for wp in waypoints {
        wp.position = round_half_up(wp.position);
    }
}

fn round_half_up(v: Vec2) -> Vec2 {
    (v + Vec2::splat(0.5)).floor()
}

/// Entfernt innere Wegpunkte, die auf dem Segment zwischen ihren Nachbarn liegen.
///
/// Ein Durchlauf von links nach rechts; der linke Nachbar ist jeweils der
/// zuletzt behaltene Wegpunkt. Erster und letzter Wegpunkt bleiben immer erhalten.
pub fn filter_redundant_waypoints(waypoints: &[Waypoint], tolerance: f32) -> Vec<Waypoint> {
    let mut result: Vec<Waypoint> = Vec::with_capacity(waypoints.len());

    for (idx, wp) in waypoints.iter().enumerate() {
        let redundant = match (result.last(), waypoints.get(idx + 1)) {
            (Some(prev), Some(next)) => {
                point_on_segment(prev.position, next.position, wp.position, tolerance)
            }
            _ => false,
        };
        if !redundant {
            result.push(*wp);
        }
    }

    result
}
