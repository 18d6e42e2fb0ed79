//! Interaktive Werkzeuge für Verbindungsrouten.
//!
//! Werkzeuge arbeiten auf einer Arbeitskopie der Route und geben das Ergebnis
//! erst beim Abschluss über eine `WaypointSink` an die Modeling-Schicht.

/// Parallel-Verschiebung orthogonaler Segmente mit Andock-Logik.
pub mod parallel_move;

pub use parallel_move::{DragOutcome, ParallelMove, SessionPhase};

use crate::shared::EditorOptions;
use parallel_move::{DockingRefiner, OutlineDocking};

/// Baut den Parallel-Move-Automaten mit den Werten aus `options`.
pub fn parallel_move_from_options(options: &EditorOptions) -> ParallelMove {
    let docking: Option<Box<dyn DockingRefiner>> = if options.outline_docking {
        Some(Box::new(OutlineDocking))
    } else {
        None
    };

    ParallelMove::new()
        .with_docking(docking)
        .with_redundancy_tolerance(options.redundancy_tolerance)
        .with_docking_padding(options.docking_padding)
}
