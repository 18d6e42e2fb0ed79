//! Feature-Handler für ConnectorCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod floating;
pub mod history;
pub mod parallel_move;
