use approx::assert_abs_diff_eq;
use config::constants::EditorConfig;
use shape_editor::{
    Backdrop, CanvasRect, CommandRecorder, Editor, EditorState, Point2D, PointerEvent, Projection,
    Viewport,
};

/// Canvas offset on the page the way a real layout would place it.
fn canvas() -> CanvasRect {
    CanvasRect::new(20.0, 40.0, 200.0, 200.0)
}

/// Screen position of a world point on [`canvas`].
fn screen(x: f64, y: f64) -> (f64, f64) {
    (20.0 + (x + 5.0) * 20.0, 40.0 + (5.0 - y) * 20.0)
}

fn click_world(editor: &mut Editor<CommandRecorder>, x: f64, y: f64) {
    let (sx, sy) = screen(x, y);
    editor.handle_click(PointerEvent::canvas(sx, sy));
}

fn move_world(editor: &mut Editor<CommandRecorder>, x: f64, y: f64) {
    let (sx, sy) = screen(x, y);
    editor.handle_pointer_move(PointerEvent::canvas(sx, sy));
}

#[test]
fn draft_complete_copy_place_reset() {
    let config = EditorConfig::default();
    let viewport = Viewport::for_config(canvas(), &config, Projection::LinearRemap).unwrap();
    let mut editor = Editor::new(CommandRecorder::new(), viewport, config);

    click_world(&mut editor, 1.0, 1.0);
    click_world(&mut editor, 2.0, 1.0);
    click_world(&mut editor, 2.0, 2.0);
    editor.complete();

    assert_eq!(editor.state(), EditorState::Completed);
    let vertices = editor.polygon().unwrap().vertices().to_vec();
    let expected = [
        Point2D::new(1.0, 1.0),
        Point2D::new(2.0, 1.0),
        Point2D::new(2.0, 2.0),
    ];
    assert_eq!(vertices.len(), 3);
    for (got, want) in vertices.iter().zip(expected) {
        assert_abs_diff_eq!(got.x, want.x, epsilon = 1e-9);
        assert_abs_diff_eq!(got.y, want.y, epsilon = 1e-9);
    }

    move_world(&mut editor, 0.0, 0.0);
    editor.copy();
    let center = editor.moving_copy().unwrap().center();
    assert_abs_diff_eq!(center.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(center.y, 0.0, epsilon = 1e-9);

    click_world(&mut editor, 0.0, 0.0);
    assert_eq!(editor.placed_copies().len(), 1);
    assert_eq!(editor.state(), EditorState::Completed);

    editor.reset();
    assert!(editor.draft().is_empty());
    assert!(editor.polygon().is_none());
    assert!(editor.placed_copies().is_empty());
    assert_eq!(editor.state(), EditorState::Drafting);
}

#[test]
fn reset_releases_what_was_created_since_last_reset() {
    let config = EditorConfig::default();
    let viewport = Viewport::for_config(canvas(), &config, Projection::LinearRemap).unwrap();
    let mut editor = Editor::new(CommandRecorder::new(), viewport, config);
    let backdrop = Backdrop::install(editor.renderer_mut(), &config);

    for round in 0..3 {
        let created_before = editor.renderer().created_count();
        let released_before = editor.renderer().released_count();

        click_world(&mut editor, -2.0, -2.0);
        click_world(&mut editor, 2.0, -2.0);
        click_world(&mut editor, 0.0, 2.0);
        editor.complete();
        for i in 0..=round {
            move_world(&mut editor, f64::from(i), 3.0);
            editor.copy();
            click_world(&mut editor, f64::from(i), 3.0);
        }
        editor.copy();

        let live_before = editor.renderer().live_count();
        editor.reset();
        let live_after = editor.renderer().live_count();

        let created = editor.renderer().created_count() - created_before;
        let released = editor.renderer().released_count() - released_before;
        // Guide edges are created and released before the reset
        assert_eq!(live_before - live_after, created - 2);
        assert_eq!(released, created);
        // Only the backdrop survives a reset
        assert_eq!(live_after, 2);
    }

    backdrop.remove(editor.renderer_mut());
    assert_eq!(editor.renderer().live_count(), 0);
}

#[test]
fn resized_canvas_remaps_clicks() {
    let config = EditorConfig::default();
    let viewport = Viewport::for_config(canvas(), &config, Projection::LinearRemap).unwrap();
    let mut editor = Editor::new(CommandRecorder::new(), viewport, config);

    editor
        .viewport_mut()
        .set_canvas(CanvasRect::new(0.0, 0.0, 400.0, 100.0))
        .unwrap();
    editor.handle_click(PointerEvent::canvas(300.0, 25.0));
    assert_eq!(editor.draft(), &[Point2D::new(2.5, 2.5)]);
}
