//! Connector Controller für zentrale Event-Verarbeitung.

use super::{ConnectorCommand, ConnectorIntent, EditorState};
use crate::core::Waypoint;

/// Orchestriert Gesture-Events und Handler auf den EditorState.
#[derive(Debug, Default)]
pub struct ConnectorController;

impl ConnectorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: ConnectorIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(
        &self,
        state: &EditorState,
        intent: ConnectorIntent,
    ) -> Vec<ConnectorCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: ConnectorCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Floating-Handle ===
            ConnectorCommand::UpdateFloatingHandle {
                connection_id,
                position,
            } => handlers::floating::update(state, connection_id, position)?,
            ConnectorCommand::ClearFloatingHandle => handlers::floating::clear(state),

            // === Parallel-Move ===
            ConnectorCommand::StartParallelMoveAtHandle => {
                handlers::parallel_move::start_at_handle(state)?
            }
            ConnectorCommand::StartParallelMove {
                connection_id,
                point,
                segment_index,
            } => handlers::parallel_move::start(state, connection_id, point, segment_index)?,
            ConnectorCommand::MoveSegment { position } => {
                handlers::parallel_move::move_segment(state, position)
            }
            ConnectorCommand::HoverShape { shape_id } => {
                handlers::parallel_move::hover_shape(state, shape_id)
            }
            ConnectorCommand::LeaveShape => handlers::parallel_move::leave_shape(state),
            ConnectorCommand::SetMoveAllowed { allowed } => {
                handlers::parallel_move::set_allowed(state, allowed)
            }
            ConnectorCommand::EndParallelMove => handlers::parallel_move::end(state)?,
            ConnectorCommand::CancelParallelMove => handlers::parallel_move::cancel(state)?,

            // === History ===
            ConnectorCommand::Undo => handlers::history::undo(state),
            ConnectorCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }

    /// Route einer Verbindung für das Rendering: während eines Drags die
    /// Arbeitskopie, sonst die gespeicherten Wegpunkte.
    pub fn render_waypoints<'a>(
        &self,
        state: &'a EditorState,
        connection_id: u64,
    ) -> Option<&'a [Waypoint]> {
        let dragged = state
            .parallel_move
            .context()
            .filter(|ctx| ctx.connection_id == connection_id);

        match dragged {
            Some(ctx) => Some(ctx.waypoints.as_slice()),
            None => state
                .diagram
                .connection(connection_id)
                .map(|c| c.waypoints.as_slice()),
        }
    }
}
