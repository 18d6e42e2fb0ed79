#![no_main]

use glam::Vec2;
use libfuzzer_sys::fuzz_target;
use ortho_connector_editor::{
    ApplyWaypoints, Connection, DragOutcome, ParallelMove, Shape, Waypoint,
};

fn connection() -> Connection {
    Connection::new(
        1,
        vec![
            Waypoint::new(200.0, 450.0),
            Waypoint::new(400.0, 450.0),
            Waypoint::new(400.0, 150.0),
            Waypoint::new(650.0, 150.0),
        ],
        Shape::new(1, 100.0, 400.0, 200.0, 100.0),
        Shape::new(2, 600.0, 50.0, 100.0, 200.0),
    )
}

// Byte 0: Segment, Byte 1: Abschluss (gerade = end, ungerade = cancel),
// danach Paare (x, y) im Raster von 4 Pixeln.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let mut conn = connection();
    let segment = 1 + (data[0] as usize % 3);
    let mut tool = ParallelMove::new();
    let start = conn.waypoints[segment].position;
    if !tool.start(start, &mut conn, segment) {
        return;
    }
    let before = conn.clone();

    for pair in data[2..].chunks_exact(2) {
        let point = Vec2::new(pair[0] as f32 * 4.0, pair[1] as f32 * 4.0);
        let Some(waypoints) = tool.update(point) else {
            panic!("Session muss aktiv bleiben");
        };
        assert!(waypoints.len() >= 2);
        let last = waypoints.len() - 1;
        for (idx, wp) in waypoints.iter().enumerate() {
            if idx != 0 && idx != last {
                assert!(wp.original.is_none());
            }
        }
        let ctx = tool.context().expect("Session aktiv");
        let (p0, p1) = ctx.segment();
        assert_eq!(ctx.move_axis().get(p0), ctx.move_axis().get(p1));
    }

    if data[1] % 2 == 1 {
        assert_eq!(tool.cancel(&mut conn), DragOutcome::Cancelled);
        assert_eq!(conn, before);
    } else {
        let outcome = tool.end(&mut conn, &mut ApplyWaypoints);
        assert!(matches!(outcome, DragOutcome::Committed(_)));
        for wp in &conn.waypoints {
            assert_eq!(wp.position, wp.position.round());
        }
    }
});
