use super::state::Diagram;
use crate::app::tools::parallel_move::WaypointSink;
use crate::core::{Connection, Waypoint};

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Eine Parallel-Verschiebung ändert immer genau eine Verbindung, daher
/// genügt deren Wegpunkt-Liste.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Betroffene Verbindung
    pub connection_id: u64,
    /// Wegpunkte (inkl. Docking-Anker) zum Zeitpunkt des Snapshots
    pub waypoints: Vec<Waypoint>,
}

impl Snapshot {
    /// Erstellt einen Snapshot der aktuellen Route von `connection`.
    pub fn from_connection(connection: &Connection) -> Self {
        Self {
            connection_id: connection.id,
            waypoints: connection.waypoints.clone(),
        }
    }

    /// Stellt den Snapshot wieder her. `false`, wenn die Verbindung fehlt.
    pub fn apply_to(self, diagram: &mut Diagram) -> bool {
        match diagram.connection_mut(self.connection_id) {
            Some(connection) => {
                connection.waypoints = self.waypoints;
                true
            }
            None => false,
        }
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen vorab erstellten Snapshot auf und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Verbindung, die der nächste Undo-Schritt betrifft.
    pub fn undo_target(&self) -> Option<u64> {
        self.undo_stack.last().map(|snap| snap.connection_id)
    }

    /// Verbindung, die der nächste Redo-Schritt betrifft.
    pub fn redo_target(&self) -> Option<u64> {
        self.redo_stack.last().map(|snap| snap.connection_id)
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

/// Modeling-Senke: sichert die bisherige Route in der Historie und übernimmt
/// danach die neue Wegpunkt-Liste.
pub struct Modeling<'a> {
    history: &'a mut EditHistory,
}

impl<'a> Modeling<'a> {
    pub fn new(history: &'a mut EditHistory) -> Self {
        Self { history }
    }
}

impl WaypointSink for Modeling<'_> {
    fn update_waypoints(&mut self, connection: &mut Connection, waypoints: Vec<Waypoint>) {
        self.history
            .record_snapshot(Snapshot::from_connection(connection));
        connection.waypoints = waypoints;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Shape;

    fn snapshot_with_waypoint_count(count: usize) -> Snapshot {
        Snapshot {
            connection_id: 1,
            waypoints: (0..count)
                .map(|i| Waypoint::new(i as f32 * 10.0, 0.0))
                .collect(),
        }
    }

    fn diagram_with_connection() -> Diagram {
        let mut diagram = Diagram::new();
        diagram.add_connection(Connection::new(
            1,
            vec![Waypoint::new(0.0, 0.0), Waypoint::new(50.0, 0.0)],
            Shape::new(1, -10.0, -10.0, 20.0, 20.0),
            Shape::new(2, 40.0, -10.0, 20.0, 20.0),
        ));
        diagram
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_target(), None);
    }

    #[test]
    fn record_enables_undo() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_waypoint_count(2));
        assert!(history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_target(), Some(1));
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_waypoint_count(2));

        let restored = history
            .pop_undo_with_current(snapshot_with_waypoint_count(5))
            .expect("undo vorhanden");

        assert_eq!(restored.waypoints.len(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_waypoint_count(2));
        let _restored = history.pop_undo_with_current(snapshot_with_waypoint_count(5));

        let redone = history
            .pop_redo_with_current(snapshot_with_waypoint_count(2))
            .expect("redo vorhanden");

        assert_eq!(redone.waypoints.len(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(snapshot_with_waypoint_count(2));
        let _restored = history.pop_undo_with_current(snapshot_with_waypoint_count(3));
        assert!(history.can_redo());

        history.record_snapshot(snapshot_with_waypoint_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 2..=6 {
            history.record_snapshot(snapshot_with_waypoint_count(i));
        }

        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(snapshot_with_waypoint_count(99));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(history
            .pop_undo_with_current(snapshot_with_waypoint_count(2))
            .is_none());
        assert!(history
            .pop_redo_with_current(snapshot_with_waypoint_count(2))
            .is_none());
    }

    #[test]
    fn snapshot_apply_to_restores_waypoints() {
        let mut diagram = diagram_with_connection();
        let snap = snapshot_with_waypoint_count(4);

        assert!(snap.clone().apply_to(&mut diagram));
        assert_eq!(
            diagram.connection(1).map(|c| c.waypoints.clone()),
            Some(snap.waypoints)
        );

        let orphan = Snapshot {
            connection_id: 99,
            waypoints: Vec::new(),
        };
        assert!(!orphan.apply_to(&mut diagram));
    }

    #[test]
    fn modeling_records_previous_route() {
        let mut diagram = diagram_with_connection();
        let mut history = EditHistory::new_with_capacity(10);
        let connection = diagram.connection_mut(1).expect("Verbindung vorhanden");
        let before = connection.waypoints.clone();

        Modeling::new(&mut history).update_waypoints(
            connection,
            vec![Waypoint::new(0.0, 5.0), Waypoint::new(50.0, 5.0)],
        );

        assert_eq!(connection.waypoints[0].position.y, 5.0);
        let restored = history
            .pop_undo_with_current(Snapshot::from_connection(connection))
            .expect("undo vorhanden");
        assert_eq!(restored.waypoints, before);
    }
}
