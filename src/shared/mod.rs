//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die Core-Werkzeuge und App-Schicht
//! gemeinsam lesen.

pub mod options;

pub use options::EditorOptions;
pub use options::{INTERSECTION_THRESHOLD, PARALLEL_HANDLE_RADIUS};
