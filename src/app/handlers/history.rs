//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::EditorState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut EditorState) {
    let Some(current) = state
        .history
        .undo_target()
        .and_then(|id| state.diagram.connection(id))
        .map(Snapshot::from_connection)
    else {
        log::debug!("Undo: nichts zu tun");
        return;
    };

    if let Some(prev) = state.history.pop_undo_with_current(current) {
        let id = prev.connection_id;
        if prev.apply_to(&mut state.diagram) {
            log::info!("Undo ausgeführt (Verbindung {})", id);
        }
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut EditorState) {
    let Some(current) = state
        .history
        .redo_target()
        .and_then(|id| state.diagram.connection(id))
        .map(Snapshot::from_connection)
    else {
        log::debug!("Redo: nichts zu tun");
        return;
    };

    if let Some(next) = state.history.pop_redo_with_current(current) {
        let id = next.connection_id;
        if next.apply_to(&mut state.diagram) {
            log::info!("Redo ausgeführt (Verbindung {})", id);
        }
    }
}
