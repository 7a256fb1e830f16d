//! End-to-end editing sessions driven through the public API.

use courtboard::engine::{Action, EngineCore};
use courtboard::input::{Key, PointerInput, Tool};
use courtboard::paint::{DisplayList, PixmapPainter};
use courtboard::{ArrowStyle, EditorConfig, ElementKind, Point};

fn init_tracing() {
    // Another test may have installed it already.
    if tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::DEBUG).try_init().is_err() {
        tracing::trace!("subscriber already installed");
    }
}

fn session() -> EngineCore {
    init_tracing();
    let mut core = EngineCore::with_config(EditorConfig::default());
    let actions = core.on_surface_measured(0.0, 0.0);
    assert_eq!(actions, vec![Action::ScheduleResize { delay_ms: 0 }]);
    core.on_surface_measured(640.0, 360.0);
    core
}

#[test]
fn build_a_play_then_walk_it_back() {
    let mut core = session();

    // Two players from the palette.
    core.drop_payload(r#"{"type":"player","shape":"X","colorType":"home"}"#, 100.0, 100.0);
    core.drop_payload(r#"{"type":"player","shape":"number","text":"5","colorType":"away"}"#, 300.0, 100.0);

    // A dashed run from the first toward the second.
    core.set_tool_named("arrow", Some("dashed"));
    let start = PointerInput::Mouse(Point::new(120.0, 100.0));
    let end = PointerInput::Touch { touches: Vec::new(), changed: vec![Point::new(280.0, 100.0)] };
    core.on_pointer_down(start.position().unwrap());
    core.on_pointer_move(Point::new(200.0, 100.0));
    core.on_pointer_up(end.position());
    assert_eq!(core.scene.len(), 3);
    assert_eq!(
        core.scene.elements()[2].kind,
        ElementKind::Arrow { style: ArrowStyle::Dashed, length: 160.0 }
    );

    // Back to select, drag the away player down.
    core.on_key_down(&Key("Escape".into()));
    assert_eq!(core.tool(), Tool::Select);
    core.on_pointer_down(Point::new(300.0, 100.0));
    core.on_pointer_move(Point::new(300.0, 200.0));
    core.on_pointer_up(None);
    assert_eq!(core.scene.elements()[1].y, 200.0);
    assert_eq!(core.history_depth(), 5);

    // Undo the drag, the arrow, then both players.
    core.undo();
    assert_eq!(core.scene.elements()[1].y, 100.0);
    core.undo();
    assert_eq!(core.scene.len(), 2);
    core.undo();
    core.undo();
    assert!(core.scene.is_empty());
    assert!(core.undo().is_empty());
}

#[test]
fn session_renders_to_every_backend() {
    let mut core = session();
    core.drop_payload(r#"{"type":"player","shape":"X","colorType":"away"}"#, 50.0, 50.0);
    core.drop_payload(r#"{"type":"arrow","arrowType":"zigzag"}"#, 200.0, 200.0);

    let mut list = DisplayList::new();
    match core.render(&mut list) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    assert!(!list.commands().is_empty());

    let mut pixmap = PixmapPainter::new(640, 360).unwrap();
    core.render(&mut pixmap).unwrap();
    let away = core.config.palette.away;
    // Inside the away disc, clear of the cross.
    assert_eq!(pixmap.pixel(58, 50), Some(away));
}

#[test]
fn drawn_arrow_is_picked_around_its_pivot() {
    let mut core = session();
    core.set_tool(Tool::Arrow(ArrowStyle::Straight));
    core.on_pointer_down(Point::new(100.0, 100.0));
    core.on_pointer_up(Some(Point::new(100.0, 200.0)));
    let id = core.selection().unwrap();

    core.set_tool(Tool::Select);
    core.on_pointer_down(Point::new(100.0, 180.0));
    assert_eq!(core.selection(), Some(id));
    core.on_pointer_up(None);

    core.on_pointer_down(Point::new(180.0, 150.0));
    assert_eq!(core.selection(), None);
}

#[test]
fn clear_is_guarded_by_confirmation() {
    let mut core = session();
    core.drop_payload(r#"{"type":"player","shape":"X","colorType":"home"}"#, 50.0, 50.0);
    assert!(core.clear(|| false).is_empty());
    assert_eq!(core.scene.len(), 1);
    core.clear(|| true);
    assert!(core.scene.is_empty());
    assert_eq!(core.history_depth(), 1);
}
