//! Segment-Mover: Kern-Algorithmus pro Move-Event.
//!
//! Ablauf pro Event:
//! 1. Beide Segment-Wegpunkte auf die neue Achsen-Koordinate setzen
//! 2. Start-Endpunkt andocken / ablösen / Knicke absorbieren
//! 3. End-Endpunkt symmetrisch dazu
//! 4. Endpunkte auf die Shape-Kante klemmen (Priorität oben, unten, links, rechts)
//! 5. Optional: Endpunkte am echten Umriss nachschneiden

use glam::Vec2;

use super::collaborators::DockingRefiner;
use super::state::{DragContext, SessionPhase};
use crate::core::geometry::in_bounds;
use crate::core::{Axis, Shape, Waypoint};

/// Wendet eine neue Zeigerposition auf den Session-Kontext an.
pub(crate) fn move_segment(
    ctx: &mut DragContext,
    new_position: Vec2,
    padding: f32,
    docking: Option<&dyn DockingRefiner>,
) {
    let axis = ctx.move_axis();
    let value = axis.get(new_position);

    axis.set(&mut ctx.waypoints[ctx.p0].position, value);
    axis.set(&mut ctx.waypoints[ctx.p1].position, value);

    dock_start(ctx, axis, padding);
    dock_end(ctx, axis, padding);

    let last = ctx.last_index();
    let toward_start = ctx.waypoints[1].position;
    move_to_edge(&mut ctx.waypoints[0].position, toward_start, &ctx.source);
    let toward_end = ctx.waypoints[last - 1].position;
    move_to_edge(&mut ctx.waypoints[last].position, toward_end, &ctx.target);

    if let Some(docking) = docking {
        docking.crop(&mut ctx.waypoints, &ctx.source, &ctx.target);
    }

    ctx.phase = SessionPhase::Dragging;
    ctx.last_point = Some(new_position);

    log::debug!(
        "Parallel-Move: Segment {}–{} auf {:?} = {:.1}, {} Wegpunkte",
        ctx.p0,
        ctx.p1,
        axis,
        value,
        ctx.waypoints.len()
    );
}

/// Behandelt den Start-Endpunkt der Route.
fn dock_start(ctx: &mut DragContext, axis: Axis, padding: f32) {
    if ctx.p0 == 0 {
        let source_center = ctx.source.center();
        let p0 = &mut ctx.waypoints[0];
        let anchor = *p0.original.get_or_insert(source_center);

        if lost_connection(p0.position, &ctx.source, padding) {
            // Endpunkt hat das Shape verlassen: neuer Endpunkt mit Anker aus dem Snapshot
            p0.original = None;
            let carried = ctx
                .original_waypoints
                .first()
                .and_then(|wp| wp.original)
                .unwrap_or(anchor);
            ctx.waypoints.insert(0, Waypoint::docked(carried));
            ctx.p0 += 1;
            ctx.p1 += 1;

            let other = axis.other();
            other.set(&mut ctx.waypoints[ctx.p0].position, other.get(carried));
            log::debug!("Parallel-Move: Start-Endpunkt abgelöst, neues Segment eingefügt");
        } else if let Some(original) = p0.original.as_mut() {
            axis.set(original, axis.get(p0.position));
        }
    } else if in_bounds(ctx.waypoints[ctx.p0].position, &ctx.source, padding) {
        // Segment liegt wieder im Start-Shape: alles davor ist überflüssig
        let anchor = ctx.waypoints[0].original;
        ctx.waypoints.drain(..ctx.p0);
        ctx.p1 -= ctx.p0;
        ctx.p0 = 0;

        let p0 = &mut ctx.waypoints[0];
        p0.original = anchor;
        if let Some(original) = p0.original.as_mut() {
            axis.set(original, axis.get(p0.position));
        }
        log::debug!("Parallel-Move: Start-Knicke absorbiert");
    }
}

/// Behandelt den End-Endpunkt der Route (symmetrisch zu `dock_start`).
fn dock_end(ctx: &mut DragContext, axis: Axis, padding: f32) {
    let last = ctx.last_index();

    if ctx.p1 == last {
        let target_center = ctx.target.center();
        let p1 = &mut ctx.waypoints[last];
        let anchor = *p1.original.get_or_insert(target_center);

        if lost_connection(p1.position, &ctx.target, padding) {
            p1.original = None;
            let carried = ctx
                .original_waypoints
                .last()
                .and_then(|wp| wp.original)
                .unwrap_or(anchor);
            ctx.waypoints.push(Waypoint::docked(carried));

            let other = axis.other();
            other.set(&mut ctx.waypoints[ctx.p1].position, other.get(carried));
            log::debug!("Parallel-Move: End-Endpunkt abgelöst, neues Segment angehängt");
        } else if let Some(original) = p1.original.as_mut() {
            axis.set(original, axis.get(p1.position));
        }
    } else if in_bounds(ctx.waypoints[ctx.p1].position, &ctx.target, padding) {
        let anchor = ctx.waypoints[last].original;
        ctx.waypoints.truncate(ctx.p1 + 1);

        let p1 = &mut ctx.waypoints[ctx.p1];
        p1.original = anchor;
        if let Some(original) = p1.original.as_mut() {
            axis.set(original, axis.get(p1.position));
        }
        log::debug!("Parallel-Move: End-Knicke absorbiert");
    }
}

/// Endpunkt liegt außerhalb seines Shapes.
fn lost_connection(p: Vec2, shape: &Shape, padding: f32) -> bool {
    !in_bounds(p, shape, padding)
}

/// Klemmt den Endpunkt `p` auf die Shape-Kante, die `toward` zugewandt ist.
///
/// Feste Priorität oben, unten, links, rechts; pro Aufruf wird höchstens eine
/// Koordinate korrigiert. Liegt `toward` diagonal außerhalb, gewinnt die Y-Achse.
pub(crate) fn move_to_edge(p: &mut Vec2, toward: Vec2, shape: &Shape) {
    if toward.y < shape.top() {
        p.y = shape.top();
    } else if toward.y > shape.bottom() {
        p.y = shape.bottom();
    } else if toward.x < shape.left() {
        p.x = shape.left();
    } else if toward.x > shape.right() {
        p.x = shape.right();
    }
}
