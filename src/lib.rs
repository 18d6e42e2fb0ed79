//! Orthogonal Connector Editor Library.
//! Parallel-Verschiebung von Verbindungssegmenten als Library exportiert für
//! Tests, Replay und Wiederverwendung.

pub mod app;
pub mod core;
pub mod replay;
pub mod shared;

pub use app::tools::parallel_move::{
    filter_redundant_waypoints, round_waypoints, ApplyWaypoints, DockingRefiner, DragContext,
    MovePolicy, OutlineDocking, WaypointSink,
};
pub use app::tools::{DragOutcome, ParallelMove, SessionPhase};
pub use app::{
    ConnectorCommand, ConnectorController, ConnectorIntent, Diagram, EditorState, FloatingHandle,
};
pub use crate::core::{
    approx_intersection, in_bounds, locate_segment, midpoint, orientation, point_on_segment, Axis,
    Connection, Intersection, Orientation, SegmentHit, Shape, ShapeOutline, Waypoint,
};
pub use replay::{run_script, ReplayScript, ReplayStep};
pub use shared::EditorOptions;
