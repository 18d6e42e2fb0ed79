//! Application-Layer: Controller, State, Events und Werkzeuge.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Editor-Zustand: Diagramm, aktive Werkzeuge, Historie.
pub mod state;
pub mod tools;

pub use command_log::CommandLog;
pub use controller::ConnectorController;
pub use events::{ConnectorCommand, ConnectorIntent};
pub use handlers::floating::FloatingHandle;
pub use history::{EditHistory, Modeling, Snapshot};
pub use state::{Diagram, EditorState};
