//! Session-Zustand der Parallel-Verschiebung.

use crate::core::{Axis, Shape, Waypoint};
use glam::Vec2;

/// Phasen einer Drag-Session.
///
/// `Committing` und `Cancelling` sind Durchgangszustände innerhalb von
/// `end()`/`cancel()`; danach ist die Session wieder `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Keine aktive Session
    Idle,
    /// Session gestartet, noch keine Bewegung
    Started,
    /// Mindestens ein Move-Event verarbeitet
    Dragging,
    /// Abschluss läuft (Runden, Filtern, Übergabe ans Modeling)
    Committing,
    /// Abbruch läuft (Snapshot wird zurückgeschrieben)
    Cancelling,
}

/// Kontext einer aktiven Parallel-Verschiebung.
///
/// `p0`/`p1` sind Indizes in `waypoints` (Arbeitskopie), nie Referenzen;
/// `original_waypoints` ist eine tiefe Kopie und bleibt während der Session unverändert.
#[derive(Debug, Clone)]
pub struct DragContext {
    /// ID der bearbeiteten Verbindung
    pub connection_id: u64,
    /// Index des ersten Wegpunkts des gezogenen Segments
    pub p0: usize,
    /// Index des zweiten Wegpunkts des gezogenen Segments (immer `p0 + 1`)
    pub p1: usize,
    pub source: Shape,
    pub target: Shape,
    /// Segment ist horizontal → Bewegung auf der Y-Achse
    pub horizontal: bool,
    /// Segment ist vertikal → Bewegung auf der X-Achse
    pub vertical: bool,
    /// Arbeitskopie der Route (wird pro Move mutiert)
    pub waypoints: Vec<Waypoint>,
    /// Snapshot vor Beginn der Session (Quelle für Revert und Anker)
    pub original_waypoints: Vec<Waypoint>,
    /// Aktuell überfahrenes Shape
    pub hover: Option<u64>,
    /// Ergebnis der Policy-Prüfung: `None` = nicht geprüft, `Some(false)` = verboten
    pub allowed: Option<bool>,
    /// Aktuelle Phase
    pub phase: SessionPhase,
    /// Zuletzt angewendete Zeigerposition
    pub last_point: Option<Vec2>,
}

impl DragContext {
    /// Achse, auf der das Segment verschoben wird.
    pub fn move_axis(&self) -> Axis {
        if self.horizontal {
            Axis::Y
        } else {
            Axis::X
        }
    }

    /// Index des letzten Wegpunkts der Arbeitskopie.
    pub fn last_index(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    /// Aktuelle Positionen der beiden Segment-Wegpunkte.
    pub fn segment(&self) -> (Vec2, Vec2) {
        (
            self.waypoints[self.p0].position,
            self.waypoints[self.p1].position,
        )
    }
}
