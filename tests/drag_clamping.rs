// Drag positioning: clamping into the canvas and gesture lifecycle

use banner_editor_wasm::drag::{clamp_axis, DragState, ElementSize};
use banner_editor_wasm::persistence::MemoryStore;
use banner_editor_wasm::{Editor, EditorConfig, FieldAttribute, FieldKind, GlobalAttribute, Position};
use proptest::prelude::*;
use serde_json::json;

fn editor_with_field_at(x: u32, y: u32) -> Editor<MemoryStore> {
    let mut editor = Editor::new(MemoryStore::new(), EditorConfig::default());
    editor.set_field_position(0, Position::new(x, y)).unwrap();
    editor
}

#[test]
fn test_clamped_at_far_edge() {
    let mut editor = editor_with_field_at(780, 780);
    assert!(editor.pointer_down(0));
    editor.pointer_move(100.0, 100.0, ElementSize::new(50, 50));
    assert_eq!(editor.document().fields()[0].pos, Position::new(750, 750));
}

#[test]
fn test_huge_delta_reaches_far_edge() {
    let mut editor = editor_with_field_at(100, 100);
    assert!(editor.pointer_down(0));
    editor.pointer_move(1e19, 1e19, ElementSize::new(50, 50));
    assert_eq!(editor.document().fields()[0].pos, Position::new(750, 750));

    editor.pointer_move(-f64::MAX, -1e300, ElementSize::new(50, 50));
    assert_eq!(editor.document().fields()[0].pos, Position::new(0, 0));
}

#[test]
fn test_clamped_at_origin() {
    let mut editor = editor_with_field_at(10, 10);
    assert!(editor.pointer_down(0));
    editor.pointer_move(-1e9, -25.0, ElementSize::new(50, 50));
    assert_eq!(editor.document().fields()[0].pos, Position::new(0, 0));
}

#[test]
fn test_element_larger_than_canvas_pins_to_zero() {
    assert_eq!(clamp_axis(300, 10, 800, 1200), 0);
    assert_eq!(clamp_axis(0, -10, 800, 1200), 0);
}

#[test]
fn test_subpixel_deltas_accumulate() {
    let mut editor = editor_with_field_at(100, 100);
    assert!(editor.pointer_down(0));
    for _ in 0..4 {
        editor.pointer_move(0.5, 0.25, ElementSize::new(10, 10));
    }
    assert_eq!(editor.document().fields()[0].pos, Position::new(102, 101));
}

#[test]
fn test_gesture_lifecycle() {
    let mut editor = editor_with_field_at(100, 100);
    assert!(editor.pointer_move(5.0, 5.0, ElementSize::new(10, 10)).is_none());
    assert!(!editor.pointer_down(7));
    assert_eq!(editor.drag_state(), DragState::Idle);

    assert!(editor.pointer_down(0));
    editor.pointer_move(5.0, 0.0, ElementSize::new(10, 10));
    editor.pointer_cancel();
    assert_eq!(editor.drag_state(), DragState::Idle);
    // cancel keeps the applied move
    assert_eq!(editor.document().fields()[0].pos, Position::new(105, 100));
}

#[test]
fn test_becoming_fixed_mid_drag_stops_motion() {
    let mut editor = editor_with_field_at(100, 100);
    assert!(editor.pointer_down(0));
    editor
        .set_field_attribute(0, FieldAttribute::Dragable, &json!(false))
        .unwrap();
    assert!(editor.pointer_move(40.0, 40.0, ElementSize::new(10, 10)).is_none());
    assert_eq!(editor.document().fields()[0].pos, Position::new(100, 100));
}

#[test]
fn test_resize_does_not_reclamp() {
    let mut editor = editor_with_field_at(700, 700);
    editor.set_global_attribute(GlobalAttribute::Width, &json!(300)).unwrap();
    assert_eq!(editor.document().fields()[0].pos, Position::new(700, 700));

    // the next drag sample pulls it back inside
    assert!(editor.pointer_down(0));
    editor.pointer_move(0.0, 0.0, ElementSize::new(100, 10));
    assert_eq!(editor.document().fields()[0].pos.x, 200);
}

/// Pointer deltas from sub-pixel up to the largest finite `f64`
fn any_delta() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -5000.0f64..5000.0,
        1 => prop::sample::select(vec![1e18, -1e18, 1e19, -1e19, 1e300, -1e300, f64::MAX, -f64::MAX]),
        1 => prop::num::f64::NORMAL,
    ]
}

proptest! {
    #[test]
    fn prop_drag_stays_in_canvas(
        start_x in 0u32..800,
        start_y in 0u32..800,
        width in 1u32..900,
        height in 1u32..900,
        deltas in prop::collection::vec((any_delta(), any_delta()), 1..20),
    ) {
        let mut editor = editor_with_field_at(start_x, start_y);
        prop_assert!(editor.pointer_down(0));
        let max_x = 800u32.saturating_sub(width);
        let max_y = 800u32.saturating_sub(height);

        for (dx, dy) in deltas {
            editor.pointer_move(dx, dy, ElementSize::new(width, height));
            let pos = editor.document().fields()[0].pos;
            prop_assert!(pos.x <= max_x, "x {} beyond {}", pos.x, max_x);
            prop_assert!(pos.y <= max_y, "y {} beyond {}", pos.y, max_y);
        }
    }

    #[test]
    fn prop_fixed_fields_never_move(
        kind in prop::sample::select(FieldKind::ALL.to_vec()),
        deltas in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..20),
    ) {
        let mut editor = editor_with_field_at(100, 100);
        editor.retype(0, kind).unwrap();
        editor.set_field_attribute(0, FieldAttribute::Dragable, &json!(false)).unwrap();

        prop_assert!(!editor.pointer_down(0));
        for (dx, dy) in deltas {
            prop_assert!(editor.pointer_move(dx, dy, ElementSize::new(20, 20)).is_none());
        }
        prop_assert_eq!(editor.document().fields()[0].pos, Position::new(100, 100));
    }
}
