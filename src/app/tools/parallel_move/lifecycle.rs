//! Session-Lifecycle der Parallel-Verschiebung: start → move* → end | cancel.

use glam::Vec2;

use super::collaborators::{DockingRefiner, MovePolicy, WaypointSink};
use super::commit::{filter_redundant_waypoints, round_waypoints};
use super::drag::move_segment;
use super::state::{DragContext, SessionPhase};
use crate::core::geometry::{orientation, Orientation};
use crate::core::{Connection, Waypoint};
use crate::shared::options::{DOCKING_PADDING, REDUNDANCY_TOLERANCE};

/// Ergebnis von `end()` bzw. `cancel()`.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Route wurde an die Modeling-Schicht übergeben
    Committed(Vec<Waypoint>),
    /// Policy hat die Verschiebung verworfen, Verbindung zurückgesetzt
    Rejected,
    /// Abgebrochen, Verbindung zurückgesetzt
    Cancelled,
    /// Es lief keine Session
    Inactive,
}

/// Zustandsautomat der Parallel-Verschiebung eines Verbindungssegments.
///
/// Hält höchstens einen aktiven `DragContext`. Optionale Kollaborateure
/// (Docking-Refiner, Policy) werden einmalig beim Erstellen übergeben.
pub struct ParallelMove {
    context: Option<DragContext>,
    docking: Option<Box<dyn DockingRefiner>>,
    policy: Option<Box<dyn MovePolicy>>,
    redundancy_tolerance: f32,
    docking_padding: f32,
}

impl Default for ParallelMove {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParallelMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelMove")
            .field("context", &self.context)
            .field("docking", &self.docking.is_some())
            .field("policy", &self.policy.is_some())
            .field("redundancy_tolerance", &self.redundancy_tolerance)
            .field("docking_padding", &self.docking_padding)
            .finish()
    }
}

impl ParallelMove {
    /// Erstellt einen Automaten ohne optionale Kollaborateure.
    pub fn new() -> Self {
        Self {
            context: None,
            docking: None,
            policy: None,
            redundancy_tolerance: REDUNDANCY_TOLERANCE,
            docking_padding: DOCKING_PADDING,
        }
    }

    /// Registriert einen Docking-Refiner (Builder-Stil).
    pub fn with_docking(mut self, docking: Option<Box<dyn DockingRefiner>>) -> Self {
        self.docking = docking;
        self
    }

    /// Registriert eine Policy-Prüfung (Builder-Stil).
    pub fn with_policy(mut self, policy: Option<Box<dyn MovePolicy>>) -> Self {
        self.policy = policy;
        self
    }

    /// Setzt die Toleranz des Redundanz-Filters.
    pub fn with_redundancy_tolerance(mut self, tolerance: f32) -> Self {
        self.redundancy_tolerance = tolerance;
        self
    }

    /// Setzt die Toleranz der Shape-Zugehörigkeit beim Andocken.
    pub fn with_docking_padding(mut self, padding: f32) -> Self {
        self.docking_padding = padding;
        self
    }

    /// Aktuelle Phase des Automaten.
    pub fn phase(&self) -> SessionPhase {
        self.context
            .as_ref()
            .map_or(SessionPhase::Idle, |ctx| ctx.phase)
    }

    /// Läuft gerade eine Session?
    pub fn is_active(&self) -> bool {
        self.context.is_some()
    }

    /// Read-only Sicht auf den aktiven Kontext.
    pub fn context(&self) -> Option<&DragContext> {
        self.context.as_ref()
    }

    /// Arbeitskopie der Route für das Rendering.
    pub fn working_waypoints(&self) -> Option<&[Waypoint]> {
        self.context.as_ref().map(|ctx| ctx.waypoints.as_slice())
    }

    /// Startet eine Parallel-Verschiebung von Segment `segment_index`
    /// (verbindet Wegpunkt `segment_index - 1` und `segment_index`).
    ///
    /// Diagonale Segmente, ungültige Indizes und eine bereits laufende Session
    /// werden ohne Zustandsänderung abgelehnt (`false`).
    /// Fehlende Docking-Anker an den Endpunkten werden hier gesetzt und bleiben
    /// auch nach einem Abbruch an der Verbindung.
    pub fn start(&mut self, point: Vec2, connection: &mut Connection, segment_index: usize) -> bool {
        if self.context.is_some() {
            log::warn!("Parallel-Move: Session läuft bereits, Start ignoriert");
            return false;
        }

        let Some((a, b)) = connection.segment(segment_index) else {
            log::debug!(
                "Parallel-Move: Segment {} existiert nicht (Verbindung {})",
                segment_index,
                connection.id
            );
            return false;
        };

        let segment_orientation = orientation(a, b);
        if segment_orientation == Orientation::Diagonal {
            log::debug!("Parallel-Move: diagonales Segment {} abgelehnt", segment_index);
            return false;
        }

        if let Some(first) = connection.waypoints.first_mut() {
            first.original.get_or_insert(first.position);
        }
        if let Some(last) = connection.waypoints.last_mut() {
            last.original.get_or_insert(last.position);
        }

        let snapshot = connection.waypoints.clone();
        self.context = Some(DragContext {
            connection_id: connection.id,
            p0: segment_index - 1,
            p1: segment_index,
            source: connection.source,
            target: connection.target,
            horizontal: segment_orientation == Orientation::Horizontal,
            vertical: segment_orientation == Orientation::Vertical,
            waypoints: snapshot.clone(),
            original_waypoints: snapshot,
            hover: None,
            allowed: None,
            phase: SessionPhase::Started,
            last_point: None,
        });

        log::debug!(
            "Parallel-Move: Idle -> Started (Verbindung {}, Segment {}, {:?}, Zeiger {:?})",
            connection.id,
            segment_index,
            segment_orientation,
            point
        );
        true
    }

    /// Merkt sich das überfahrene Shape.
    pub fn hover(&mut self, shape_id: u64) {
        if let Some(ctx) = self.context.as_mut() {
            ctx.hover = Some(shape_id);
        }
    }

    /// Zeiger hat das überfahrene Shape verlassen.
    pub fn out(&mut self) {
        if let Some(ctx) = self.context.as_mut() {
            ctx.hover = None;
        }
    }

    /// Setzt das Policy-Ergebnis direkt (z.B. vom Gesture-Dispatcher).
    pub fn set_allowed(&mut self, allowed: Option<bool>) {
        if let Some(ctx) = self.context.as_mut() {
            ctx.allowed = allowed;
        }
    }

    /// Verarbeitet ein Move-Event und gibt die aktualisierte Route zurück.
    ///
    /// Eine unveränderte Zeigerposition wird nicht erneut berechnet.
    pub fn update(&mut self, point: Vec2) -> Option<&[Waypoint]> {
        let ctx = self.context.as_mut()?;
        if ctx.last_point == Some(point) {
            return Some(ctx.waypoints.as_slice());
        }
        move_segment(ctx, point, self.docking_padding, self.docking.as_deref());
        Some(ctx.waypoints.as_slice())
    }

    /// Beendet die Session.
    ///
    /// Die Verbindung wird zunächst auf den Snapshot zurückgesetzt. Ist die
    /// Verschiebung erlaubt, geht die gerundete und gefilterte Route an `sink`.
    pub fn end(&mut self, connection: &mut Connection, sink: &mut dyn WaypointSink) -> DragOutcome {
        let Some(mut ctx) = self.context.take() else {
            return DragOutcome::Inactive;
        };
        debug_assert_eq!(ctx.connection_id, connection.id);

        ctx.phase = SessionPhase::Committing;
        if let Some(policy) = self.policy.as_deref() {
            ctx.allowed = policy.allowed(&ctx);
        }

        let mut new_waypoints = std::mem::take(&mut ctx.waypoints);
        round_waypoints(&mut new_waypoints);
        connection.waypoints = ctx.original_waypoints;

        if ctx.allowed == Some(false) {
            log::info!(
                "Parallel-Move: Verschiebung von Verbindung {} nicht erlaubt, zurückgesetzt",
                connection.id
            );
            log::debug!("Parallel-Move: Committing -> Idle (abgelehnt)");
            return DragOutcome::Rejected;
        }

        let filtered = filter_redundant_waypoints(&new_waypoints, self.redundancy_tolerance);
        sink.update_waypoints(connection, filtered.clone());
        log::info!(
            "Parallel-Move: Verbindung {} mit {} Wegpunkten übernommen",
            connection.id,
            filtered.len()
        );
        log::debug!("Parallel-Move: Committing -> Idle");
        DragOutcome::Committed(filtered)
    }

    /// Bricht die Session ab und stellt den Snapshot wieder her.
    pub fn cancel(&mut self, connection: &mut Connection) -> DragOutcome {
        let Some(mut ctx) = self.context.take() else {
            return DragOutcome::Inactive;
        };
        debug_assert_eq!(ctx.connection_id, connection.id);

        ctx.phase = SessionPhase::Cancelling;
        connection.waypoints = ctx.original_waypoints;
        log::debug!("Parallel-Move: Cancelling -> Idle (Verbindung {})", connection.id);
        DragOutcome::Cancelled
    }
}
