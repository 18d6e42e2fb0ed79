//! Handler für den schwebenden Parallel-Move-Handle.
//!
//! Beim Überfahren einer Verbindung wird der Treffer auf der Route bestimmt.
//! Liegt er nahe der Segmentmitte, rastet der Handle dort ein und ein Press
//! startet die Parallel-Verschiebung. Sonst gehört der Press dem
//! (externen) Bendpoint-Werkzeug.

use anyhow::anyhow;
use glam::Vec2;

use crate::app::EditorState;
use crate::core::{locate_segment, Connection, Orientation};

/// Hinweis für die Darstellung und den Start des Parallel-Move-Handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingHandle {
    pub connection_id: u64,
    /// Getroffenes Segment (verbindet Wegpunkt `segment_index - 1` und `segment_index`)
    pub segment_index: usize,
    /// Anzeigeposition: Segmentmitte wenn eingerastet, sonst Treffer auf der Route
    pub position: Vec2,
    pub orientation: Orientation,
    /// Handle sitzt auf der Segmentmitte
    pub centered: bool,
}

/// Berechnet den Handle-Hinweis für `pointer` auf `connection`.
///
/// `None` bei keinem Treffer oder wenn ein Knickpunkt getroffen wurde.
pub fn compute_handle(
    connection: &Connection,
    pointer: Vec2,
    threshold: f32,
    radius: f32,
) -> Option<FloatingHandle> {
    let hit = locate_segment(&connection.positions(), pointer, threshold)?;
    if hit.intersection.bendpoint {
        return None;
    }

    let point = hit.intersection.point;
    let delta = (point - hit.mid).abs();
    let centered = hit.orientation.is_orthogonal() && delta.x < radius && delta.y < radius;

    Some(FloatingHandle {
        connection_id: connection.id,
        segment_index: hit.intersection.index,
        position: if centered { hit.mid } else { point },
        orientation: hit.orientation,
        centered,
    })
}

/// Aktualisiert den Handle-Hinweis für die Zeigerposition.
pub fn update(state: &mut EditorState, connection_id: u64, position: Vec2) -> anyhow::Result<()> {
    let connection = state
        .diagram
        .connection(connection_id)
        .ok_or_else(|| anyhow!("Verbindung {} existiert nicht", connection_id))?;

    state.floating = compute_handle(
        connection,
        position,
        state.options.intersection_threshold,
        state.options.parallel_handle_radius,
    );
    log::debug!("Floating-Handle: {:?}", state.floating);
    Ok(())
}

/// Entfernt den Handle-Hinweis.
pub fn clear(state: &mut EditorState) {
    state.floating = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Shape, Waypoint};

    fn connection() -> Connection {
        Connection::new(
            1,
            vec![
                Waypoint::new(250.0, 250.0),
                Waypoint::new(550.0, 250.0),
                Waypoint::new(550.0, 150.0),
            ],
            Shape::new(1, 200.0, 200.0, 100.0, 100.0),
            Shape::new(2, 500.0, 50.0, 100.0, 100.0),
        )
    }

    fn handle_at(x: f32) -> FloatingHandle {
        compute_handle(&connection(), Vec2::new(x, 250.0), 10.0, 10.0).expect("Treffer erwartet")
    }

    #[test]
    fn handle_centers_close_to_midpoint() {
        for x in [391.0, 400.0, 409.0] {
            let handle = handle_at(x);
            assert!(handle.centered, "x = {x} sollte einrasten");
            assert_eq!(handle.position, Vec2::new(400.0, 250.0));
            assert_eq!(handle.segment_index, 1);
            assert_eq!(handle.orientation, Orientation::Horizontal);
        }
    }

    #[test]
    fn handle_follows_pointer_outside_radius() {
        for x in [390.0, 410.0, 300.0] {
            let handle = handle_at(x);
            assert!(!handle.centered, "x = {x} sollte nicht einrasten");
            assert_eq!(handle.position, Vec2::new(x, 250.0));
        }
    }

    #[test]
    fn bendpoint_hit_yields_no_handle() {
        assert!(compute_handle(&connection(), Vec2::new(548.0, 252.0), 10.0, 10.0).is_none());
    }

    #[test]
    fn diagonal_segment_never_centers() {
        let mut conn = connection();
        conn.waypoints[1].position = Vec2::new(550.0, 350.0);
        let mid = Vec2::new(400.0, 300.0);

        let handle = compute_handle(&conn, mid, 10.0, 10.0).expect("Treffer erwartet");

        assert_eq!(handle.orientation, Orientation::Diagonal);
        assert!(!handle.centered);
    }

    #[test]
    fn update_rejects_unknown_connection() {
        let mut state = EditorState::new();
        assert!(update(&mut state, 42, Vec2::ZERO).is_err());
        assert!(state.floating.is_none());
    }
}
