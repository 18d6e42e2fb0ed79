//! Orthogonal Connector Replay.
//!
//! Spielt ein JSON-Gesture-Skript gegen den Editor-Kern ab und gibt die
//! resultierenden Verbindungen als JSON aus.
//!
//! Aufruf: `ortho-connector-replay <skript.json> [optionen.toml]`

use anyhow::Context;
use ortho_connector_editor::{replay, Connection, EditorOptions, ReplayScript};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Orthogonal Connector Replay v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let mut args = std::env::args().skip(1);
    let script_path = args
        .next()
        .map(std::path::PathBuf::from)
        .context("Aufruf: ortho-connector-replay <skript.json> [optionen.toml]")?;

    // Optionen aus TOML laden (oder Standardwerte)
    let options_path = args
        .next()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&options_path);

    let script = ReplayScript::load_from_file(&script_path)?;
    let state = replay::run_script_with_state(&script, options)?;

    let connections: Vec<&Connection> = state.diagram.connections.values().collect();
    let output = serde_json::to_string_pretty(&connections)?;
    println!("{output}");

    for (kind, count) in state.command_log.summary() {
        log::info!("Command {}: {}x", kind, count);
    }
    log::info!(
        "Replay abgeschlossen: {} Verbindungen",
        state.diagram.connection_count()
    );
    Ok(())
}
