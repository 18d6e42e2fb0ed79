use glam::Vec2;
use ortho_connector_editor::replay::run_script_with_state;
use ortho_connector_editor::{run_script, DragOutcome, EditorOptions, ReplayScript};
use std::path::PathBuf;

fn fixture(name: &str) -> ReplayScript {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    ReplayScript::load_from_file(&path).expect("Fixture sollte ladbar sein")
}

fn positions(waypoints: &[ortho_connector_editor::Waypoint]) -> Vec<(f32, f32)> {
    waypoints
        .iter()
        .map(|wp| (wp.position.x, wp.position.y))
        .collect()
}

#[test]
fn test_step_by_step_drag_left_of_source_adds_segment() {
    let diagram = run_script(&fixture("new_segment_left.json"), EditorOptions::default())
        .expect("Replay sollte durchlaufen");

    let conn = diagram.connection(1).expect("Verbindung 1 erwartet");
    assert_eq!(
        positions(&conn.waypoints),
        vec![(100.0, 450.0), (50.0, 450.0), (50.0, 150.0), (600.0, 150.0)]
    );
    assert_eq!(conn.start_docking(), Some(Vec2::new(200.0, 450.0)));
}

#[test]
fn test_press_hover_undo_redo_script() {
    let state = run_script_with_state(&fixture("press_hover_undo.json"), EditorOptions::default())
        .expect("Replay sollte durchlaufen");

    let conn = state.diagram.connection(1).expect("Verbindung 1 erwartet");
    assert_eq!(
        positions(&conn.waypoints),
        vec![(300.0, 450.0), (750.0, 450.0), (750.0, 150.0), (700.0, 150.0)]
    );
    assert_eq!(conn.end_docking(), Some(Vec2::new(650.0, 150.0)));
    assert!(state.can_undo());
    assert!(!state.can_redo());
    assert!(matches!(state.last_outcome, Some(DragOutcome::Committed(_))));
}

#[test]
fn test_rejected_script_keeps_original_route() {
    let script = fixture("rejected_move.json");
    let state =
        run_script_with_state(&script, EditorOptions::default()).expect("Replay sollte durchlaufen");

    let conn = state.diagram.connection(1).expect("Verbindung 1 erwartet");
    assert_eq!(conn.waypoints, script.connections[0].waypoints);
    assert_eq!(state.last_outcome, Some(DragOutcome::Rejected));
}

#[test]
fn test_unfinished_drag_is_cancelled_at_script_end() {
    let mut script = fixture("new_segment_left.json");
    script.steps.pop();

    let state =
        run_script_with_state(&script, EditorOptions::default()).expect("Replay sollte durchlaufen");

    assert!(!state.is_dragging());
    assert_eq!(state.last_outcome, Some(DragOutcome::Cancelled));
    let conn = state.diagram.connection(1).expect("Verbindung 1 erwartet");
    assert_eq!(
        positions(&conn.waypoints),
        vec![(200.0, 450.0), (400.0, 450.0), (400.0, 150.0), (650.0, 150.0)]
    );
}

#[test]
fn test_missing_script_file_is_an_error() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/does_not_exist.json");
    assert!(ReplayScript::load_from_file(&path).is_err());
}

#[test]
fn test_command_log_summarizes_replayed_commands() {
    let state = run_script_with_state(&fixture("new_segment_left.json"), EditorOptions::default())
        .expect("Replay sollte durchlaufen");

    let summary: Vec<(&str, usize)> = state.command_log.summary().into_iter().collect();
    assert_eq!(
        summary,
        vec![
            ("clear_floating_handle", 1),
            ("start_parallel_move", 1),
            ("move_segment", 3),
            ("end_parallel_move", 1),
        ]
    );
    assert_eq!(state.command_log.total_recorded(), 6);
}
