use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectorCommand {
    /// Schwebenden Handle für die Zeigerposition neu berechnen
    UpdateFloatingHandle { connection_id: u64, position: Vec2 },
    /// Schwebenden Handle entfernen
    ClearFloatingHandle,
    /// Parallel-Verschiebung am mittig eingerasteten Handle starten
    StartParallelMoveAtHandle,
    /// Parallel-Verschiebung eines Segments starten
    StartParallelMove {
        connection_id: u64,
        point: Vec2,
        segment_index: usize,
    },
    /// Segment auf neue Zeigerposition verschieben
    MoveSegment { position: Vec2 },
    /// Überfahrenes Shape merken
    HoverShape { shape_id: u64 },
    /// Überfahrenes Shape vergessen
    LeaveShape,
    /// Erlaubnis für den Commit setzen
    SetMoveAllowed { allowed: Option<bool> },
    /// Drag abschließen (Commit oder Revert)
    EndParallelMove,
    /// Drag abbrechen
    CancelParallelMove,
    /// Undo
    Undo,
    /// Redo
    Redo,
}

impl ConnectorCommand {
    /// Kurzname der Command-Art (snake_case), z.B. für Protokoll-Zusammenfassungen.
    pub fn kind(&self) -> &'static str {
        match self {
            ConnectorCommand::UpdateFloatingHandle { .. } => "update_floating_handle",
            ConnectorCommand::ClearFloatingHandle => "clear_floating_handle",
            ConnectorCommand::StartParallelMoveAtHandle => "start_parallel_move_at_handle",
            ConnectorCommand::StartParallelMove { .. } => "start_parallel_move",
            ConnectorCommand::MoveSegment { .. } => "move_segment",
            ConnectorCommand::HoverShape { .. } => "hover_shape",
            ConnectorCommand::LeaveShape => "leave_shape",
            ConnectorCommand::SetMoveAllowed { .. } => "set_move_allowed",
            ConnectorCommand::EndParallelMove => "end_parallel_move",
            ConnectorCommand::CancelParallelMove => "cancel_parallel_move",
            ConnectorCommand::Undo => "undo",
            ConnectorCommand::Redo => "redo",
        }
    }
}
