//! Handler für die Parallel-Verschiebung (Start, Move, Ende, Abbruch).

use anyhow::{anyhow, bail};
use glam::Vec2;

use crate::app::history::Modeling;
use crate::app::tools::{parallel_move_from_options, DragOutcome};
use crate::app::EditorState;

/// Startet eine Session auf dem angegebenen Segment.
///
/// Ein abgelehntes Segment (diagonal, ungültiger Index) ist kein Fehler;
/// nur eine unbekannte Verbindung wird gemeldet.
pub fn start(
    state: &mut EditorState,
    connection_id: u64,
    point: Vec2,
    segment_index: usize,
) -> anyhow::Result<()> {
    let connection = state
        .diagram
        .connection_mut(connection_id)
        .ok_or_else(|| anyhow!("Verbindung {} existiert nicht", connection_id))?;

    if state.parallel_move.start(point, connection, segment_index) {
        state.floating = None;
        state.last_outcome = None;
    }
    Ok(())
}

/// Startet eine Session am aktuell eingerasteten Handle.
pub fn start_at_handle(state: &mut EditorState) -> anyhow::Result<()> {
    match state.floating {
        Some(handle) if handle.centered => {
            start(state, handle.connection_id, handle.position, handle.segment_index)
        }
        Some(_) => {
            log::debug!("Handle nicht eingerastet: Press gehört dem Bendpoint-Werkzeug");
            Ok(())
        }
        None => {
            log::debug!("Kein Handle unter dem Zeiger");
            Ok(())
        }
    }
}

/// Wendet eine neue Zeigerposition an.
pub fn move_segment(state: &mut EditorState, position: Vec2) {
    if state.parallel_move.update(position).is_none() {
        log::debug!("Move ohne aktive Session ignoriert");
    }
}

pub fn hover_shape(state: &mut EditorState, shape_id: u64) {
    if state.diagram.shape(shape_id).is_none() {
        log::warn!("Hover auf unbekanntes Shape {}", shape_id);
    }
    state.parallel_move.hover(shape_id);
}

pub fn leave_shape(state: &mut EditorState) {
    state.parallel_move.out();
}

pub fn set_allowed(state: &mut EditorState, allowed: Option<bool>) {
    state.parallel_move.set_allowed(allowed);
}

/// Schließt die Session ab; übernommene Routen landen in der Historie.
pub fn end(state: &mut EditorState) -> anyhow::Result<()> {
    let Some(connection_id) = state.parallel_move.context().map(|ctx| ctx.connection_id) else {
        log::debug!("End ohne aktive Session ignoriert");
        return Ok(());
    };

    let Some(connection) = state.diagram.connections.get_mut(&connection_id) else {
        discard_session(state);
        bail!(
            "Verbindung {} während der Verschiebung entfernt, Session verworfen",
            connection_id
        );
    };

    let mut sink = Modeling::new(&mut state.history);
    let outcome = state.parallel_move.end(connection, &mut sink);
    state.last_outcome = Some(outcome);
    Ok(())
}

/// Bricht die Session ab und stellt die Route wieder her.
pub fn cancel(state: &mut EditorState) -> anyhow::Result<()> {
    let Some(connection_id) = state.parallel_move.context().map(|ctx| ctx.connection_id) else {
        return Ok(());
    };

    let Some(connection) = state.diagram.connections.get_mut(&connection_id) else {
        discard_session(state);
        bail!(
            "Verbindung {} während der Verschiebung entfernt, Session verworfen",
            connection_id
        );
    };

    let outcome = state.parallel_move.cancel(connection);
    debug_assert_eq!(outcome, DragOutcome::Cancelled);
    state.last_outcome = Some(outcome);
    Ok(())
}

/// Setzt den Automaten zurück, ohne eine Verbindung anzufassen.
fn discard_session(state: &mut EditorState) {
    state.parallel_move = parallel_move_from_options(&state.options);
    state.last_outcome = Some(DragOutcome::Cancelled);
}
