use std::cell::RefCell;
use std::rc::Rc;

use egui::Pos2;
use egui::Rect;
use sticker_sketch::input::PointerFrame;
use sticker_sketch::{
    Command, EditorState, InputEvent, InputHandler, Preview, ToolConfig, Topic,
};

const THIN: f32 = 2.0;
const THICK: f32 = 6.0;
const SPIN: f32 = 0.2;

fn editor() -> EditorState {
    EditorState::new(ToolConfig::Pen { thickness: THIN }, SPIN)
}

fn draw_line(editor: &mut EditorState, from: Pos2, to: Pos2) {
    editor.handle_pointer_down(from, true);
    editor.handle_pointer_move(to, true);
    editor.handle_pointer_up();
}

#[test]
fn test_pen_stroke_scenario() {
    let mut editor = editor();

    editor.handle_pointer_down(Pos2::new(10.0, 10.0), true);
    editor.handle_pointer_move(Pos2::new(20.0, 10.0), true);
    editor.handle_pointer_up();

    let committed = editor.history().snapshot();
    assert_eq!(committed.len(), 1);
    let stroke = committed[0].as_stroke().expect("a stroke");
    assert_eq!(stroke.points(), &[Pos2::new(10.0, 10.0), Pos2::new(20.0, 10.0)]);
    assert_eq!(stroke.thickness(), THIN);
}

#[test]
fn test_sticker_drag_scenario() {
    let mut editor = editor();
    editor.select_sticker("😭", 24.0).unwrap();

    editor.handle_pointer_down(Pos2::new(50.0, 50.0), true);
    editor.handle_pointer_move(Pos2::new(60.0, 60.0), true);
    editor.handle_pointer_up();

    let committed = editor.history().snapshot();
    assert_eq!(committed.len(), 1);
    let sticker = committed[0].as_sticker().expect("a sticker");
    assert_eq!(sticker.anchor(), Pos2::new(60.0, 60.0));
    assert_eq!(sticker.glyph(), "😭");
    assert!(sticker.angle() > 0.0);
}

#[test]
fn test_sticker_click_without_movement_is_placed() {
    let mut editor = editor();
    editor.select_sticker("⭐", 30.0).unwrap();

    editor.handle_pointer_down(Pos2::new(5.0, 6.0), true);
    editor.handle_pointer_up();

    let sticker = editor.history().snapshot()[0].as_sticker().unwrap();
    assert_eq!(sticker.anchor(), Pos2::new(5.0, 6.0));
    assert_eq!(sticker.angle(), 0.0);
}

#[test]
fn test_new_stroke_after_undo_discards_redo() {
    let mut editor = editor();
    draw_line(&mut editor, Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
    draw_line(&mut editor, Pos2::new(2.0, 2.0), Pos2::new(3.0, 3.0));

    assert!(editor.undo());
    draw_line(&mut editor, Pos2::new(4.0, 4.0), Pos2::new(5.0, 5.0));

    let firsts: Vec<Pos2> = editor
        .history()
        .snapshot()
        .iter()
        .map(|command| command.as_stroke().unwrap().points()[0])
        .collect();
    assert_eq!(firsts, vec![Pos2::new(0.0, 0.0), Pos2::new(4.0, 4.0)]);
    assert!(editor.history().redoable().is_empty());
}

#[test]
fn test_undo_on_empty_history_is_quiet() {
    let mut editor = editor();
    let notified = Rc::new(RefCell::new(Vec::new()));
    let log = notified.clone();
    editor.subscribe(Topic::DrawingChanged, move |topic| log.borrow_mut().push(topic));

    assert!(!editor.undo());

    assert!(editor.history().snapshot().is_empty());
    assert!(editor.history().redoable().is_empty());
    assert!(notified.borrow().is_empty());
}

#[test]
fn test_drag_survives_leave_and_reenter() {
    let mut editor = editor();
    editor.handle_pointer_enter(Pos2::new(10.0, 10.0));
    editor.handle_pointer_down(Pos2::new(10.0, 10.0), true);
    editor.handle_pointer_move(Pos2::new(0.0, 10.0), true);
    editor.handle_pointer_leave();
    editor.handle_pointer_move(Pos2::new(-5.0, 10.0), true);
    editor.handle_pointer_enter(Pos2::new(1.0, 10.0));
    editor.handle_pointer_move(Pos2::new(2.0, 10.0), true);

    assert!(editor.is_dragging());
    assert!(editor.active_preview().is_none());

    editor.handle_pointer_up();
    let stroke = editor.history().snapshot()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), 4);
    assert!(editor.input_state().is_previewing());
}

#[test]
fn test_release_outside_canvas_goes_idle() {
    let mut editor = editor();
    editor.handle_pointer_enter(Pos2::new(10.0, 10.0));
    editor.handle_pointer_down(Pos2::new(10.0, 10.0), true);
    editor.handle_pointer_leave();
    editor.handle_pointer_up();

    assert!(editor.input_state().is_idle());
    assert_eq!(editor.history().committed_len(), 1);
}

#[test]
fn test_tool_change_mid_drag_is_not_retroactive() {
    let mut editor = editor();
    editor.handle_pointer_down(Pos2::new(0.0, 0.0), true);
    editor.select_pen_thickness(THICK).unwrap();
    editor.handle_pointer_move(Pos2::new(3.0, 0.0), true);
    editor.handle_pointer_up();

    let stroke = editor.history().snapshot()[0].as_stroke().unwrap();
    assert_eq!(stroke.thickness(), THIN);
    assert_eq!(stroke.points().len(), 2);

    draw_line(&mut editor, Pos2::new(0.0, 5.0), Pos2::new(3.0, 5.0));
    let second = editor.history().snapshot()[1].as_stroke().unwrap();
    assert_eq!(second.thickness(), THICK);
}

#[test]
fn test_hover_preview_follows_tool() {
    let mut editor = editor();
    editor.handle_pointer_enter(Pos2::new(20.0, 20.0));
    assert!(matches!(editor.active_preview(), Some(Preview::Ring(ring)) if ring.radius == THIN / 2.0));

    editor.handle_pointer_move(Pos2::new(25.0, 20.0), false);
    editor.select_sticker("🔥", 18.0).unwrap();

    match editor.active_preview() {
        Some(Preview::Glyph(glyph)) => {
            assert_eq!(glyph.position, Pos2::new(25.0, 20.0));
            assert_eq!(glyph.glyph, "🔥");
            assert_eq!(glyph.size, 18.0);
        }
        other => panic!("expected a glyph preview, got {other:?}"),
    }
}

#[test]
fn test_pointer_down_clears_preview() {
    let mut editor = editor();
    editor.handle_pointer_enter(Pos2::new(20.0, 20.0));
    editor.handle_pointer_down(Pos2::new(20.0, 20.0), true);

    assert!(editor.active_preview().is_none());
    assert!(editor.history().snapshot().iter().all(|c| matches!(c, Command::Stroke(_))));
}

#[test]
fn test_handle_event_dispatch() {
    let mut editor = editor();
    let events = [
        InputEvent::PointerEnter {
            position: Pos2::new(1.0, 1.0),
        },
        InputEvent::PointerDown {
            position: Pos2::new(1.0, 1.0),
            primary_held: true,
        },
        InputEvent::PointerMove {
            position: Pos2::new(4.0, 1.0),
            primary_held: true,
        },
        InputEvent::PointerUp,
        InputEvent::PointerLeave,
    ];
    for event in events {
        editor.handle_event(event);
    }

    let stroke = editor.history().snapshot()[0].as_stroke().unwrap();
    assert_eq!(stroke.points(), &[Pos2::new(1.0, 1.0), Pos2::new(4.0, 1.0)]);
    assert!(editor.input_state().is_idle());
}

#[test]
fn test_notifications_by_topic() {
    let mut editor = editor();
    let seen = Rc::new(RefCell::new(Vec::new()));
    for topic in [Topic::DrawingChanged, Topic::ToolMoved] {
        let seen = seen.clone();
        editor.subscribe(topic, move |topic| seen.borrow_mut().push(topic));
    }

    editor.handle_pointer_enter(Pos2::new(0.0, 0.0));
    editor.handle_pointer_down(Pos2::new(0.0, 0.0), true);
    editor.handle_pointer_move(Pos2::new(1.0, 0.0), true);
    editor.handle_pointer_up();
    editor.undo();

    assert_eq!(
        *seen.borrow(),
        vec![
            Topic::ToolMoved,
            Topic::DrawingChanged,
            Topic::DrawingChanged,
            Topic::ToolMoved,
            Topic::DrawingChanged,
        ]
    );
}

#[test]
fn test_clear_drops_everything_and_notifies() {
    let mut editor = editor();
    draw_line(&mut editor, Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
    editor.undo();

    assert!(editor.clear());
    assert!(editor.history().is_empty());
    assert!(!editor.redo());
}

fn feed(editor: &mut EditorState, handler: &mut InputHandler, frame: PointerFrame) {
    let canvas = Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(256.0, 256.0));
    for event in handler.translate(frame, canvas) {
        editor.handle_event(event);
    }
}

fn at(x: f32, y: f32) -> PointerFrame {
    PointerFrame {
        hover_pos: Some(Pos2::new(x, y)),
        ..Default::default()
    }
}

#[test]
fn test_release_with_motion_outside_canvas_goes_idle() {
    let mut editor = editor();
    let mut handler = InputHandler::new();

    feed(&mut editor, &mut handler, at(110.0, 60.0));
    feed(
        &mut editor,
        &mut handler,
        PointerFrame {
            primary_down: true,
            primary_pressed: true,
            ..at(110.0, 60.0)
        },
    );
    feed(
        &mut editor,
        &mut handler,
        PointerFrame {
            primary_down: true,
            ..at(10.0, 10.0)
        },
    );
    feed(
        &mut editor,
        &mut handler,
        PointerFrame {
            primary_released: true,
            ..at(5.0, 5.0)
        },
    );

    assert!(editor.input_state().is_idle());
    assert!(!editor.is_over_canvas());
    assert!(editor.active_preview().is_none());

    let stroke = editor.history().snapshot()[0].as_stroke().unwrap();
    assert_eq!(
        stroke.points(),
        &[
            Pos2::new(10.0, 10.0),
            Pos2::new(-90.0, -40.0),
            Pos2::new(-95.0, -45.0)
        ]
    );
}

#[test]
fn test_unheld_move_off_canvas_after_leave_shows_no_preview() {
    let mut editor = editor();
    editor.handle_pointer_enter(Pos2::new(10.0, 10.0));
    editor.handle_pointer_down(Pos2::new(10.0, 10.0), true);
    editor.handle_pointer_leave();
    editor.handle_pointer_move(Pos2::new(-95.0, -45.0), false);
    editor.handle_pointer_up();

    assert!(editor.input_state().is_idle());
    assert!(editor.active_preview().is_none());
}
