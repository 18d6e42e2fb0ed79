//! Replay von Gesture-Skripten (JSON) über den `ConnectorController`.
//!
//! Ein Skript beschreibt Shapes, Verbindungen und eine Folge von Schritten.
//! Verbindungen referenzieren ihre Shapes per ID.

use anyhow::{anyhow, Context};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::app::{ConnectorController, ConnectorIntent, Diagram, EditorState};
use crate::core::{Connection, Shape, Waypoint};
use crate::shared::EditorOptions;

/// Komplettes Replay-Skript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub connections: Vec<ScriptConnection>,
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

/// Verbindung im Skript; Shapes werden per ID aufgelöst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptConnection {
    pub id: u64,
    pub source: u64,
    pub target: u64,
    pub waypoints: Vec<Waypoint>,
}

/// Ein Schritt des Skripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayStep {
    /// Press auf eine Verbindung (startet nur am eingerasteten Handle)
    Press { connection: u64, at: Vec2 },
    /// Parallel-Verschiebung eines Segments direkt starten
    ParallelMove {
        connection: u64,
        at: Vec2,
        segment: usize,
    },
    /// Zeiger über einer Verbindung
    Pointer { connection: u64, at: Vec2 },
    Drag { to: Vec2 },
    Hover { shape: u64 },
    Out,
    Release,
    Cancel,
    Allow { allowed: Option<bool> },
    Undo,
    Redo,
}

impl ReplayStep {
    fn into_intent(self) -> ConnectorIntent {
        match self {
            ReplayStep::Press { connection, at } => ConnectorIntent::ConnectionPressed {
                connection_id: connection,
                position: at,
            },
            ReplayStep::ParallelMove {
                connection,
                at,
                segment,
            } => ConnectorIntent::ParallelMoveRequested {
                connection_id: connection,
                position: at,
                segment_index: segment,
            },
            ReplayStep::Pointer { connection, at } => ConnectorIntent::PointerOverConnection {
                connection_id: connection,
                position: at,
            },
            ReplayStep::Drag { to } => ConnectorIntent::DragMoved { position: to },
            ReplayStep::Hover { shape } => ConnectorIntent::ShapeHovered { shape_id: shape },
            ReplayStep::Out => ConnectorIntent::ShapeLeft,
            ReplayStep::Release => ConnectorIntent::DragReleased,
            ReplayStep::Cancel => ConnectorIntent::DragCancelled,
            ReplayStep::Allow { allowed } => ConnectorIntent::MoveAllowanceChanged { allowed },
            ReplayStep::Undo => ConnectorIntent::UndoRequested,
            ReplayStep::Redo => ConnectorIntent::RedoRequested,
        }
    }
}

impl ReplayScript {
    /// Parst ein Skript aus JSON.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("Replay-Skript ist kein gültiges JSON")
    }

    /// Lädt ein Skript aus einer Datei.
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Replay-Skript nicht lesbar: {}", path.display()))?;
        let script = Self::from_json(&content)?;
        log::info!(
            "Replay-Skript geladen: {} ({} Schritte)",
            path.display(),
            script.steps.len()
        );
        Ok(script)
    }

    /// Baut das Diagramm aus Shapes und Verbindungen.
    pub fn build_diagram(&self) -> anyhow::Result<Diagram> {
        let mut diagram = Diagram::new();
        for shape in &self.shapes {
            diagram.add_shape(*shape);
        }

        for entry in &self.connections {
            let source = resolve_shape(&diagram, entry.source, entry.id)?;
            let target = resolve_shape(&diagram, entry.target, entry.id)?;
            if entry.waypoints.len() < 2 {
                return Err(anyhow!(
                    "Verbindung {} braucht mindestens 2 Wegpunkte",
                    entry.id
                ));
            }
            diagram.add_connection(Connection::new(
                entry.id,
                entry.waypoints.clone(),
                source,
                target,
            ));
        }

        Ok(diagram)
    }
}

fn resolve_shape(diagram: &Diagram, shape_id: u64, connection_id: u64) -> anyhow::Result<Shape> {
    diagram.shape(shape_id).copied().ok_or_else(|| {
        anyhow!(
            "Verbindung {} referenziert unbekanntes Shape {}",
            connection_id,
            shape_id
        )
    })
}

/// Spielt `script` ab und gibt den Endzustand zurück.
pub fn run_script_with_state(
    script: &ReplayScript,
    options: EditorOptions,
) -> anyhow::Result<EditorState> {
    let mut state = EditorState::with_options(options);
    state.load_diagram(script.build_diagram()?);
    let mut controller = ConnectorController::new();

    for (index, step) in script.steps.iter().enumerate() {
        log::debug!("Replay-Schritt {}: {:?}", index, step);
        controller
            .handle_intent(&mut state, step.clone().into_intent())
            .with_context(|| format!("Replay-Schritt {} fehlgeschlagen: {:?}", index, step))?;
    }

    if state.is_dragging() {
        log::warn!("Replay endet mit offener Verschiebung, Session wird abgebrochen");
        controller.handle_intent(&mut state, ConnectorIntent::DragCancelled)?;
    }

    log::info!(
        "Replay abgespielt: {} Schritte, {} Commands",
        script.steps.len(),
        state.command_log.total_recorded()
    );
    for (kind, count) in state.command_log.summary() {
        log::debug!("  {}: {}", kind, count);
    }

    Ok(state)
}

/// Spielt `script` ab und gibt das resultierende Diagramm zurück.
pub fn run_script(script: &ReplayScript, options: EditorOptions) -> anyhow::Result<Diagram> {
    run_script_with_state(script, options).map(|state| state.diagram)
}
