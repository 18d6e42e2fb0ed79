use glam::Vec2;

/// Eingaben aus Gesture-Dispatcher/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectorIntent {
    /// Zeiger bewegt sich über einer Verbindung (Handle-Hinweis aktualisieren)
    PointerOverConnection { connection_id: u64, position: Vec2 },
    /// Zeiger hat die Verbindung verlassen
    PointerLeftConnection,
    /// Maustaste auf einer Verbindung gedrückt
    ConnectionPressed { connection_id: u64, position: Vec2 },
    /// Parallel-Verschiebung eines bekannten Segments direkt starten
    ParallelMoveRequested {
        connection_id: u64,
        position: Vec2,
        segment_index: usize,
    },
    /// Zeiger während des Drags bewegt
    DragMoved { position: Vec2 },
    /// Zeiger liegt über einem Shape
    ShapeHovered { shape_id: u64 },
    /// Zeiger hat das Shape verlassen
    ShapeLeft,
    /// Maustaste losgelassen
    DragReleased,
    /// Drag abgebrochen (z.B. Escape)
    DragCancelled,
    /// Ergebnis einer externen Erlaubnis-Prüfung
    MoveAllowanceChanged { allowed: Option<bool> },
    /// Letzte Routenänderung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Routenänderung wiederholen
    RedoRequested,
}
