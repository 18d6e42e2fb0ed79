//! Schnittstellen zu externen Kollaborateuren der Parallel-Verschiebung.
//!
//! - `MovePolicy`      : darf die Verschiebung übernommen werden?
//! - `WaypointSink`    : übernimmt die finale Route (Modeling-Schicht)
//! - `DockingRefiner`  : optionales Nachschneiden der Endpunkte am echten Umriss

use glam::Vec2;

use super::state::DragContext;
use crate::core::geometry::{in_bounds, orientation, Orientation};
use crate::core::{Connection, Shape, ShapeOutline, Waypoint};

/// Policy-Prüfung vor dem Commit.
pub trait MovePolicy {
    /// `Some(false)` verwirft die Verschiebung, `None`/`Some(true)` erlaubt sie.
    fn allowed(&self, context: &DragContext) -> Option<bool>;
}

/// Modeling-Schicht, die die finale Route einer Verbindung persistiert.
pub trait WaypointSink {
    /// Übernimmt `waypoints` als neue Route von `connection`.
    ///
    /// Beim Aufruf trägt `connection` noch die Route von vor dem Drag.
    fn update_waypoints(&mut self, connection: &mut Connection, waypoints: Vec<Waypoint>);
}

/// Optionales Nachschneiden der Endpunkte an der tatsächlichen Shape-Kontur.
pub trait DockingRefiner {
    /// Schneidet ersten und letzten Wegpunkt an `source` bzw. `target` nach.
    /// Anker (`original`) bleiben unverändert.
    fn crop(&self, waypoints: &mut [Waypoint], source: &Shape, target: &Shape);
}

/// Einfachste Modeling-Schicht: weist die Route direkt zu.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApplyWaypoints;

impl WaypointSink for ApplyWaypoints {
    fn update_waypoints(&mut self, connection: &mut Connection, waypoints: Vec<Waypoint>) {
        connection.waypoints = waypoints;
    }
}

/// Docking-Refiner, der Endpunkte entlang ihres orthogonalen End-Segments
/// auf den Umriss des Shapes schiebt.
///
/// Rechteck-Umrisse bleiben unverändert (die Kanten-Klemmung hat den Punkt
/// bereits auf die Box gesetzt), Ellipsen werden exakt geschnitten.
#[derive(Debug, Default, Clone, Copy)]
pub struct OutlineDocking;

impl DockingRefiner for OutlineDocking {
    fn crop(&self, waypoints: &mut [Waypoint], source: &Shape, target: &Shape) {
        let len = waypoints.len();
        if len < 2 {
            return;
        }

        let next = waypoints[1].position;
        crop_to_outline(&mut waypoints[0].position, next, source);

        let prev = waypoints[len - 2].position;
        crop_to_outline(&mut waypoints[len - 1].position, prev, target);
    }
}

/// Schiebt `endpoint` entlang der Linie zu `neighbour` auf den Umriss von `shape`.
fn crop_to_outline(endpoint: &mut Vec2, neighbour: Vec2, shape: &Shape) {
    if shape.outline != ShapeOutline::Ellipse || in_bounds(neighbour, shape, 0.0) {
        return;
    }

    let center = shape.center();
    let radii = shape.half_size();
    if radii.x <= 0.0 || radii.y <= 0.0 {
        return;
    }

    match orientation(*endpoint, neighbour) {
        Orientation::Vertical => {
            let t = (endpoint.x - center.x) / radii.x;
            if t.abs() > 1.0 {
                return;
            }
            let dy = radii.y * (1.0 - t * t).sqrt();
            endpoint.y = if neighbour.y < center.y {
                center.y - dy
            } else {
                center.y + dy
            };
        }
        Orientation::Horizontal => {
            let t = (endpoint.y - center.y) / radii.y;
            if t.abs() > 1.0 {
                return;
            }
            let dx = radii.x * (1.0 - t * t).sqrt();
            endpoint.x = if neighbour.x < center.x {
                center.x - dx
            } else {
                center.x + dx
            };
        }
        Orientation::Diagonal => {}
    }
}
