//! Mapping von Gesture-Intents auf mutierende Connector-Commands.

use super::{ConnectorCommand, ConnectorIntent, EditorState};

/// Übersetzt einen `ConnectorIntent` in eine Sequenz ausführbarer `ConnectorCommand`s.
pub fn map_intent_to_commands(state: &EditorState, intent: ConnectorIntent) -> Vec<ConnectorCommand> {
    match intent {
        ConnectorIntent::PointerOverConnection {
            connection_id,
            position,
        } => {
            if state.is_dragging() {
                return Vec::new();
            }
            vec![ConnectorCommand::UpdateFloatingHandle {
                connection_id,
                position,
            }]
        }
        ConnectorIntent::PointerLeftConnection => {
            if state.floating.is_none() {
                return Vec::new();
            }
            vec![ConnectorCommand::ClearFloatingHandle]
        }
        ConnectorIntent::ConnectionPressed {
            connection_id,
            position,
        } => {
            if state.is_dragging() {
                log::warn!("Press während laufender Verschiebung ignoriert");
                return Vec::new();
            }
            // Press aktualisiert den Handle, damit auch ohne vorheriges Hover gestartet werden kann
            vec![
                ConnectorCommand::UpdateFloatingHandle {
                    connection_id,
                    position,
                },
                ConnectorCommand::StartParallelMoveAtHandle,
            ]
        }
        ConnectorIntent::ParallelMoveRequested {
            connection_id,
            position,
            segment_index,
        } => vec![
            ConnectorCommand::ClearFloatingHandle,
            ConnectorCommand::StartParallelMove {
                connection_id,
                point: position,
                segment_index,
            },
        ],
        ConnectorIntent::DragMoved { position } => {
            if !state.is_dragging() {
                return Vec::new();
            }
            vec![ConnectorCommand::MoveSegment { position }]
        }
        ConnectorIntent::ShapeHovered { shape_id } => {
            vec![ConnectorCommand::HoverShape { shape_id }]
        }
        ConnectorIntent::ShapeLeft => vec![ConnectorCommand::LeaveShape],
        ConnectorIntent::DragReleased => {
            if !state.is_dragging() {
                return Vec::new();
            }
            vec![ConnectorCommand::EndParallelMove]
        }
        ConnectorIntent::DragCancelled => {
            if !state.is_dragging() {
                return Vec::new();
            }
            vec![ConnectorCommand::CancelParallelMove]
        }
        ConnectorIntent::MoveAllowanceChanged { allowed } => {
            vec![ConnectorCommand::SetMoveAllowed { allowed }]
        }
        ConnectorIntent::UndoRequested => {
            if state.is_dragging() {
                log::warn!("Undo während laufender Verschiebung ignoriert");
                return Vec::new();
            }
            vec![ConnectorCommand::Undo]
        }
        ConnectorIntent::RedoRequested => {
            if state.is_dragging() {
                log::warn!("Redo während laufender Verschiebung ignoriert");
                return Vec::new();
            }
            vec![ConnectorCommand::Redo]
        }
    }
}
