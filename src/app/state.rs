//! Application State: zentrale Datenhaltung.

use indexmap::IndexMap;

use super::handlers::floating::FloatingHandle;
use super::history::EditHistory;
use super::tools::{parallel_move_from_options, DragOutcome, ParallelMove};
use super::CommandLog;
use crate::core::{Connection, Shape};
use crate::shared::EditorOptions;

/// In-Memory-Diagramm: Shapes und Verbindungen in Einfügereihenfolge.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    /// Alle Shapes nach ID
    pub shapes: IndexMap<u64, Shape>,
    /// Alle Verbindungen nach ID
    pub connections: IndexMap<u64, Connection>,
}

impl Diagram {
    /// Erstellt ein leeres Diagramm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Shape hinzu (ersetzt ein vorhandenes mit gleicher ID).
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.insert(shape.id, shape);
    }

    /// Fügt eine Verbindung hinzu (ersetzt eine vorhandene mit gleicher ID).
    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.insert(connection.id, connection);
    }

    pub fn shape(&self, id: u64) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn connection(&self, id: u64) -> Option<&Connection> {
        self.connections.get(&id)
    }

    pub fn connection_mut(&mut self, id: u64) -> Option<&mut Connection> {
        self.connections.get_mut(&id)
    }

    /// Anzahl der Verbindungen.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

/// Hauptzustand des Editors.
#[derive(Debug)]
pub struct EditorState {
    /// Shapes und Verbindungen
    pub diagram: Diagram,
    /// Zustandsautomat der Parallel-Verschiebung
    pub parallel_move: ParallelMove,
    /// Undo/Redo-Historie für übernommene Routen
    pub history: EditHistory,
    /// Protokoll ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Aktueller Hinweis für den schwebenden Parallel-Move-Handle
    pub floating: Option<FloatingHandle>,
    /// Ergebnis der zuletzt beendeten Drag-Session
    pub last_outcome: Option<DragOutcome>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren Zustand mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            diagram: Diagram::new(),
            parallel_move: parallel_move_from_options(&options),
            history: EditHistory::new_with_capacity(options.history_depth),
            command_log: CommandLog::new(),
            options,
            floating: None,
            last_outcome: None,
        }
    }

    /// Ersetzt das Diagramm, z.B. nach dem Laden eines Skripts.
    ///
    /// Eine laufende Parallel-Verschiebung wird verworfen: ihr Snapshot gehört
    /// zum alten Diagramm und darf nie auf das neue übernommen werden.
    pub fn load_diagram(&mut self, diagram: Diagram) {
        if self.parallel_move.is_active() {
            log::warn!("Diagramm ersetzt während einer Verschiebung, Session verworfen");
        }
        log::info!(
            "Diagramm geladen: {} Shapes, {} Verbindungen",
            diagram.shapes.len(),
            diagram.connection_count()
        );
        self.parallel_move = parallel_move_from_options(&self.options);
        self.diagram = diagram;
        self.history = EditHistory::new_with_capacity(self.options.history_depth);
        self.floating = None;
        self.last_outcome = None;
    }

    /// Läuft gerade eine Parallel-Verschiebung?
    pub fn is_dragging(&self) -> bool {
        self.parallel_move.is_active()
    }

    /// Gibt `true` zurück, wenn Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt `true` zurück, wenn Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
