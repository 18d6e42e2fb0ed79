//! Core-Domänentypen: Shapes, Verbindungen, Geometrie-Kernel und Schnittpunktsuche.

pub mod connection;
/// Reine Geometrie-Funktionen (Ausrichtung, Punkt-auf-Segment, Bounding-Box-Test)
pub mod geometry;
pub mod intersection;
pub mod shape;

pub use connection::{Connection, Waypoint};
pub use geometry::{in_bounds, midpoint, orientation, point_on_segment, Axis, Orientation};
pub use intersection::{approx_intersection, locate_segment, Intersection, SegmentHit};
pub use shape::{Shape, ShapeOutline};
