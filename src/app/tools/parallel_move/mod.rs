//! Parallel-Verschiebung: Ein orthogonales Segment einer Verbindung wird
//! senkrecht zu seiner Ausrichtung gezogen und bleibt dabei gerade.
//!
//! **Andocken:** Solange ein Endpunkt im Shape liegt, gleitet sein Docking-Anker
//! mit. Verlässt er das Shape, entsteht ein neues Segment zum Anker aus dem
//! Snapshot. Rutscht ein inneres Segment zurück ins Shape, werden die Knicke
//! davor bzw. dahinter absorbiert.
//!
//! **Commit:** Gerundet, Redundanz-gefiltert und über die Modeling-Schicht
//! übernommen, sofern die Policy nicht widerspricht. Abbruch stellt immer den
//! Snapshot wieder her.
//!
//! Aufgeteilt in:
//! - `state`          : DragContext und Session-Phasen
//! - `lifecycle`      : Zustandsautomat (start, hover, update, end, cancel)
//! - `drag`           : Segment-Mover (Kern-Algorithmus pro Move-Event)
//! - `commit`         : Runden und Redundanz-Filter
//! - `collaborators`  : Policy, Modeling-Senke, Docking-Refiner

pub mod collaborators;
pub mod commit;
pub(crate) mod drag;
mod lifecycle;
mod state;

pub use collaborators::{ApplyWaypoints, DockingRefiner, MovePolicy, OutlineDocking, WaypointSink};
pub use commit::{filter_redundant_waypoints, round_waypoints};
pub use lifecycle::{DragOutcome, ParallelMove};
pub use state::{DragContext, SessionPhase};
