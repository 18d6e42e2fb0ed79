//! Zentrale Konfiguration für den Orthogonal-Connector-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Treffer-Erkennung ───────────────────────────────────────────────

/// Pixel-Toleranz für Treffer auf Knickpunkten und Segmenten.
pub const INTERSECTION_THRESHOLD: f32 = 10.0;
/// Radius um die Segmentmitte, in dem der Parallel-Move-Handle mittig einrastet.
pub const PARALLEL_HANDLE_RADIUS: f32 = 10.0;

// ── Parallel-Move ───────────────────────────────────────────────────

/// Toleranz des Redundanz-Filters beim Commit.
pub const REDUNDANCY_TOLERANCE: f32 = 0.01;
/// Zusätzlicher Rand um Shapes beim Andocken der Endpunkte.
pub const DOCKING_PADDING: f32 = 0.0;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `ortho_connector_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Treffer ─────────────────────────────────────────────────
    /// Pixel-Toleranz für Knickpunkt- und Segment-Treffer
    pub intersection_threshold: f32,
    /// Einrast-Radius des Parallel-Move-Handles um die Segmentmitte
    pub parallel_handle_radius: f32,

    // ── Parallel-Move ───────────────────────────────────────────
    /// Toleranz des Redundanz-Filters
    pub redundancy_tolerance: f32,
    /// Rand um Shapes beim Andocken
    pub docking_padding: f32,
    /// Endpunkte am echten Shape-Umriss nachschneiden (Ellipsen)
    pub outline_docking: bool,

    // ── Historie ────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    pub history_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            intersection_threshold: INTERSECTION_THRESHOLD,
            parallel_handle_radius: PARALLEL_HANDLE_RADIUS,
            redundancy_tolerance: REDUNDANCY_TOLERANCE,
            docking_padding: DOCKING_PADDING,
            outline_docking: false,
            history_depth: HISTORY_DEPTH,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("ortho-connector-replay"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("ortho_connector_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let opts: EditorOptions =
            toml::from_str("outline_docking = true\n").expect("TOML sollte gültig sein");
        assert!(opts.outline_docking);
        assert_eq!(opts.intersection_threshold, INTERSECTION_THRESHOLD);
        assert_eq!(opts.history_depth, HISTORY_DEPTH);
    }

    #[test]
    fn broken_file_yields_defaults() {
        let path = std::env::temp_dir().join("ortho_connector_editor_broken_test.toml");
        std::fs::write(&path, "history_depth = \"viele\"").expect("Schreiben erwartet");
        let opts = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(opts, EditorOptions::default());
    }

    #[test]
    fn save_and_load_keep_values() {
        let path = std::env::temp_dir().join("ortho_connector_editor_save_test.toml");
        let opts = EditorOptions {
            parallel_handle_radius: 12.5,
            history_depth: 7,
            ..EditorOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern erwartet");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("ortho_connector_editor_does_not_exist.toml");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }
}
