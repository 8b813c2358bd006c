use egui::{Pos2, Vec2};
use paint_that_thingy::palette::{BACKGROUND, SELECTION_TINT};
use paint_that_thingy::renderer::{DrawCommand, RecordingCanvas};
use paint_that_thingy::{
    AppConfig, FrameInput, GestureState, Hotkey, PaintApp, PaletteColor, SessionState, Shape,
    ShapeKind,
};

/// Press at the first point, hold through the middle ones, release at the last.
fn drag(session: &mut SessionState, points: &[Pos2]) {
    let (first, rest) = points.split_first().expect("drag needs points");
    session.update(&FrameInput::at(*first).pressed());
    for point in rest {
        session.update(&FrameInput::at(*point).held());
    }
    let last = rest.last().unwrap_or(first);
    session.update(&FrameInput::at(*last));
}

fn press_key(session: &mut SessionState, hotkey: Hotkey) {
    session.update(&FrameInput::at(Pos2::ZERO).with_hotkey(hotkey));
}

fn click(session: &mut SessionState, pos: Pos2) {
    session.update(&FrameInput::at(pos).pressed());
    session.update(&FrameInput::at(pos));
}

#[test]
fn test_draw_pick_delete_scenario() {
    let mut session = SessionState::default();
    assert!(session.document().is_empty());

    press_key(&mut session, Hotkey::Red);
    press_key(&mut session, Hotkey::Rectangle);
    drag(&mut session, &[Pos2::new(10.0, 10.0), Pos2::new(60.0, 40.0)]);

    assert_eq!(session.document().len(), 1);
    let (id, rect) = session.document().iter().next().unwrap();
    assert_eq!(rect.kind(), ShapeKind::Rectangle);
    assert_eq!(rect.left_upper(), Pos2::new(10.0, 10.0));
    assert_eq!(rect.size(), Vec2::new(50.0, 30.0));
    assert_eq!(rect.color(), PaletteColor::Red.color());

    press_key(&mut session, Hotkey::Pick);
    click(&mut session, Pos2::new(30.0, 20.0));
    assert_eq!(session.selected_shape(), Some(id));

    press_key(&mut session, Hotkey::Delete);
    assert!(session.document().is_empty());
    assert!(session.selected_shape().is_none());
}

#[test]
fn test_drag_commits_exactly_one_shape() {
    let mut session = SessionState::default();
    assert!(session.drawing_shape().is_none());

    let p1 = Pos2::new(100.0, 100.0);
    let p4 = Pos2::new(180.0, 90.0);
    session.update(&FrameInput::at(p1).pressed());
    assert!(session.drawing_shape().is_some());

    session.update(&FrameInput::at(Pos2::new(120.0, 130.0)).held());
    session.update(&FrameInput::at(Pos2::new(150.0, 60.0)).held());
    session.update(&FrameInput::at(p4).held());
    assert!(session.document().is_empty());
    assert_eq!(session.drawing_shape().unwrap().right_lower(), p4);

    session.update(&FrameInput::at(Pos2::new(500.0, 500.0)));
    assert!(session.drawing_shape().is_none());
    assert_eq!(session.gesture(), &GestureState::Idle);
    assert_eq!(session.document().len(), 1);

    let (_, shape) = session.document().iter().next().unwrap();
    assert_eq!(shape.left_upper(), p1);
    // The release frame does not move the corner
    assert_eq!(shape.right_lower(), p4);
}

#[test]
fn test_click_without_drag_commits_degenerate_shape() {
    let mut session = SessionState::new(PaletteColor::Green, Some(ShapeKind::Circle));
    click(&mut session, Pos2::new(50.0, 50.0));

    assert_eq!(session.document().len(), 1);
    let (_, shape) = session.document().iter().next().unwrap();
    assert_eq!(shape.kind(), ShapeKind::Circle);
    assert_eq!(shape.size(), Vec2::ZERO);
    assert_eq!(shape.color(), PaletteColor::Green.color());
}

#[test]
fn test_pick_prefers_topmost_shape() {
    let mut session = SessionState::default();
    drag(&mut session, &[Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0)]);
    press_key(&mut session, Hotkey::Circle);
    drag(&mut session, &[Pos2::new(50.0, 50.0), Pos2::new(150.0, 150.0)]);

    let ids: Vec<_> = session.document().iter().map(|(id, _)| id).collect();
    let (a, b) = (ids[0], ids[1]);

    press_key(&mut session, Hotkey::Pick);
    click(&mut session, Pos2::new(90.0, 90.0));
    assert_eq!(session.selected_shape(), Some(b));

    click(&mut session, Pos2::new(10.0, 10.0));
    assert_eq!(session.selected_shape(), Some(a));

    click(&mut session, Pos2::new(400.0, 400.0));
    assert_eq!(session.selected_shape(), None);
}

#[test]
fn test_tool_switch_always_clears_selection() {
    let mut session = SessionState::default();
    drag(&mut session, &[Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0)]);

    for tool in [Hotkey::Rectangle, Hotkey::Circle] {
        press_key(&mut session, Hotkey::Pick);
        click(&mut session, Pos2::new(50.0, 50.0));
        assert!(session.selected_shape().is_some());

        press_key(&mut session, tool);
        assert!(session.selected_shape().is_none());
    }
}

#[test]
fn test_reselecting_same_tool_keeps_selection() {
    let mut session = SessionState::default();
    drag(&mut session, &[Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0)]);
    press_key(&mut session, Hotkey::Pick);
    click(&mut session, Pos2::new(50.0, 50.0));

    press_key(&mut session, Hotkey::Pick);
    assert!(session.selected_shape().is_some());

    press_key(&mut session, Hotkey::Blue);
    assert!(session.selected_shape().is_some());
}

#[test]
fn test_delete_without_selection_is_noop() {
    let mut session = SessionState::default();
    drag(&mut session, &[Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0)]);

    press_key(&mut session, Hotkey::Delete);
    assert_eq!(session.document().len(), 1);
    assert!(session.delete_selected().is_none());
}

#[test]
fn test_delete_removes_only_selected() {
    let mut session = SessionState::default();
    drag(&mut session, &[Pos2::new(0.0, 0.0), Pos2::new(50.0, 50.0)]);
    drag(&mut session, &[Pos2::new(100.0, 0.0), Pos2::new(150.0, 50.0)]);
    drag(&mut session, &[Pos2::new(200.0, 0.0), Pos2::new(250.0, 50.0)]);
    let ids: Vec<_> = session.document().iter().map(|(id, _)| id).collect();

    press_key(&mut session, Hotkey::Pick);
    click(&mut session, Pos2::new(120.0, 20.0));
    press_key(&mut session, Hotkey::Delete);

    let remaining: Vec<_> = session.document().iter().map(|(id, _)| id).collect();
    assert_eq!(remaining, vec![ids[0], ids[2]]);
    assert!(session.selected_shape().is_none());
}

#[test]
fn test_render_order() {
    let mut session = SessionState::default();
    drag(&mut session, &[Pos2::new(0.0, 0.0), Pos2::new(50.0, 50.0)]);
    press_key(&mut session, Hotkey::Pick);
    click(&mut session, Pos2::new(10.0, 10.0));
    press_key(&mut session, Hotkey::Circle);
    // Circle gesture still in progress
    session.update(&FrameInput::at(Pos2::new(100.0, 100.0)).pressed());
    session.update(&FrameInput::at(Pos2::new(140.0, 100.0)).held());

    let mut canvas = RecordingCanvas::new();
    session.render(&mut canvas);
    let commands = canvas.commands();

    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0], DrawCommand::Clear(BACKGROUND));
    assert!(matches!(commands[1], DrawCommand::FillRect { .. }));
    // Switching to the circle tool dropped the selection, so no mark
    assert!(matches!(
        commands[2],
        DrawCommand::FillCircle { radius, .. } if radius == 20.0
    ));
}

#[test]
fn test_render_draws_selection_mark_after_shapes() {
    let mut session = SessionState::default();
    drag(&mut session, &[Pos2::new(0.0, 0.0), Pos2::new(50.0, 50.0)]);
    drag(&mut session, &[Pos2::new(60.0, 0.0), Pos2::new(90.0, 50.0)]);
    press_key(&mut session, Hotkey::Pick);
    click(&mut session, Pos2::new(10.0, 10.0));

    let mut canvas = RecordingCanvas::new();
    session.render(&mut canvas);
    let commands = canvas.commands();

    assert_eq!(commands.len(), 4);
    assert!(matches!(commands[1], DrawCommand::FillRect { .. }));
    assert!(matches!(commands[2], DrawCommand::FillRect { .. }));
    assert!(matches!(
        commands[3],
        DrawCommand::StrokeRect { color, .. } if color == SELECTION_TINT
    ));
}

#[test]
fn test_pick_mode_press_does_not_start_gesture() {
    let mut session = SessionState::new(PaletteColor::Red, None);
    session.update(&FrameInput::at(Pos2::new(10.0, 10.0)).pressed());
    assert!(session.drawing_shape().is_none());
    session.update(&FrameInput::at(Pos2::new(30.0, 30.0)).held());
    session.update(&FrameInput::at(Pos2::new(30.0, 30.0)));
    assert!(session.document().is_empty());
}

#[test]
fn test_drag_may_leave_canvas() {
    let mut session = SessionState::default();
    session.update(&FrameInput::at(Pos2::new(10.0, 10.0)).pressed());
    session.update(&FrameInput::at(Pos2::new(900.0, 10.0)).held().outside_canvas());
    session.update(&FrameInput::at(Pos2::new(900.0, 10.0)).outside_canvas());

    let (_, shape) = session.document().iter().next().unwrap();
    assert_eq!(shape.right_lower(), Pos2::new(900.0, 10.0));
}

#[test]
fn test_app_starts_from_config() {
    let config = AppConfig {
        initial_color: PaletteColor::Blue,
        initial_tool: None,
        ..Default::default()
    };
    let app = PaintApp::with_config(config);

    assert_eq!(app.session().selected_color(), PaletteColor::Blue);
    assert!(app.session().is_pick_mode());
    assert!(app.session().document().is_empty());
    assert_eq!(app.config().target_fps, 60.0);
}

#[test]
fn test_app_with_unusable_fps_keeps_running() {
    let config = AppConfig {
        target_fps: 0.0,
        ..Default::default()
    };
    let app = PaintApp::with_config(config);

    assert_eq!(
        app.config().frame_interval(),
        AppConfig::default().frame_interval()
    );
}
