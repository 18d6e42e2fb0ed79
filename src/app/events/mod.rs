//! ConnectorIntent- und ConnectorCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::ConnectorCommand;
pub use intent::ConnectorIntent;
