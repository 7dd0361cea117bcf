//! Integration tests for full drawing sessions through the harness.

use inkpad_canvas_lib::capture::PointerEvent;
use inkpad_canvas_lib::fixtures;
use inkpad_canvas_lib::harness::TestHarness;
use shared::{Color, Point2D};

#[test]
fn test_sketching_session() {
    let mut h = TestHarness::new();

    // Draw two strokes in different colors
    h.stroke(&fixtures::spaced_points(4, 10.0)).unwrap();
    h.set_color(Color::BLUE).unwrap();
    h.stroke(&fixtures::spaced_points(4, 20.0)).unwrap();
    assert_eq!(h.renderable_count(), 2);
    assert_eq!(h.undo_len(), 3);

    // Walk all the way back
    while h.can_undo() {
        h.undo().unwrap();
    }
    assert_eq!(h.renderable_count(), 0);
    assert_eq!(h.current_color(), Color::RED);

    // And forward again
    while h.can_redo() {
        h.redo().unwrap();
    }
    assert_eq!(h.renderable_count(), 2);
    assert_eq!(h.current_color(), Color::BLUE);
}

#[test]
fn test_strokes_keep_their_own_paint() {
    let mut h = TestHarness::new();
    h.stroke(&fixtures::spaced_points(3, 10.0)).unwrap();
    h.set_color(Color::BLUE).unwrap();
    h.set_thickness(2.0).unwrap();
    h.stroke(&fixtures::spaced_points(3, 10.0)).unwrap();

    let renderables = h.editor.surface().renderables();
    assert_eq!(renderables[0].paint.color, Color::RED);
    assert_eq!(renderables[0].paint.thickness, 10.0);
    assert_eq!(renderables[1].paint.color, Color::BLUE);
    assert_eq!(renderables[1].paint.thickness, 2.0);
}

#[test]
fn test_eraser_draws_in_background_color() {
    let mut h = TestHarness::new();
    h.stroke(&fixtures::spaced_points(3, 10.0)).unwrap();
    h.erase().unwrap();
    h.stroke(&fixtures::spaced_points(3, 10.0)).unwrap();

    let renderables = h.editor.surface().renderables();
    assert_eq!(renderables[1].paint.color, Color::WHITE);

    // Undoing the erase stroke and the mode switch restores the brush
    h.undo().unwrap();
    h.undo().unwrap();
    assert_eq!(h.current_color(), Color::RED);
    assert_eq!(h.renderable_count(), 1);
}

#[test]
fn test_pointer_cancel_leaves_no_trace() {
    let mut h = TestHarness::new();
    h.pointer(PointerEvent::Down(Point2D::new(0.0, 0.0))).unwrap();
    h.pointer(PointerEvent::Move(Point2D::new(20.0, 0.0))).unwrap();
    assert_eq!(h.renderable_count(), 1);

    let committed = h.pointer(PointerEvent::Cancel).unwrap();
    assert!(!committed);
    assert_eq!(h.renderable_count(), 0);
    assert!(!h.can_undo());
}

#[test]
fn test_jittery_stroke_is_not_committed() {
    let mut h = TestHarness::new();
    // All samples within the jitter threshold of the start point
    let committed = h
        .stroke(&[
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 1.0),
        ])
        .unwrap();

    assert!(!committed);
    assert_eq!(h.renderable_count(), 0);
    assert!(!h.can_undo());
}

#[test]
fn test_preview_is_visible_only_while_drawing() {
    let mut h = TestHarness::new();
    h.pointer(PointerEvent::Down(Point2D::new(0.0, 0.0))).unwrap();
    assert_eq!(h.renderable_count(), 1);
    assert!(h.capture.is_drawing());
    // The preview is not a commit
    assert!(!h.can_undo());

    h.pointer(PointerEvent::Move(Point2D::new(15.0, 0.0))).unwrap();
    let committed = h.pointer(PointerEvent::Up(Point2D::new(15.0, 0.0))).unwrap();
    assert!(committed);
    assert_eq!(h.renderable_count(), 1);
    assert!(h.can_undo());
}

#[test]
fn test_observers_track_a_session() {
    let mut h = TestHarness::new();
    use std::cell::RefCell;
    use std::rc::Rc;

    let performed: Rc<RefCell<usize>> = Rc::new(RefCell::new(0));
    let undone: Rc<RefCell<usize>> = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&performed);
    h.editor.register_performed(move |_| *sink.borrow_mut() += 1);
    let sink = Rc::clone(&undone);
    h.editor.register_undone(move |_| *sink.borrow_mut() += 1);

    h.stroke(&fixtures::spaced_points(3, 10.0)).unwrap();
    h.set_color(Color::BLUE).unwrap();
    h.undo().unwrap();
    h.undo().unwrap();
    h.redo().unwrap();

    // Two commits and one redo performed, two undone
    assert_eq!(*performed.borrow(), 3);
    assert_eq!(*undone.borrow(), 2);
}

#[test]
fn test_thickness_change_applies_to_later_strokes_only() {
    let mut h = TestHarness::new();
    h.stroke(&fixtures::spaced_points(3, 10.0)).unwrap();
    h.set_thickness(1.5).unwrap();
    h.stroke(&fixtures::spaced_points(3, 10.0)).unwrap();

    let renderables = h.editor.surface().renderables();
    assert_eq!(renderables[0].paint.thickness, 10.0);
    assert_eq!(renderables[1].paint.thickness, 1.5);
}
