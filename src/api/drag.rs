//! Drag gesture API
//!
//! The presentation layer forwards pointer events here. Pointer-move
//! deltas are relative to the previous sample; the measured box size of the
//! dragged element is passed along for clamping.

use wasm_bindgen::prelude::*;

use super::core::with_editor;
use super::helpers::serialize;
use super::types::DragMoveResult;
use crate::drag::ElementSize;
use crate::wasm_log;

/// Pointer-down over a field's box
///
/// # Returns
/// `true` if a drag gesture started (field exists and is dragable)
#[wasm_bindgen(js_name = dragStart)]
pub fn drag_start(index: usize) -> Result<bool, JsValue> {
    with_editor(|editor| {
        let started = editor.pointer_down(index);
        wasm_log!("dragStart: index={}, started={}", index, started);
        Ok(started)
    })
}

/// Pointer-move sample
///
/// # Parameters
/// - `dx`, `dy`: motion since the previous sample, in CSS pixels
/// - `width`, `height`: rendered box size of the dragged element
#[wasm_bindgen(js_name = dragMove)]
pub fn drag_move(dx: f64, dy: f64, width: u32, height: u32) -> Result<JsValue, JsValue> {
    with_editor(|editor| {
        let update = editor.pointer_move(dx, dy, ElementSize::new(width, height));
        let result = DragMoveResult { update, display_list: editor.display_list() };
        serialize(&result, "DragMoveResult serialization error")
    })
}

/// Pointer-up: end the gesture
#[wasm_bindgen(js_name = dragEnd)]
pub fn drag_end() -> Result<(), JsValue> {
    with_editor(|editor| {
        editor.pointer_up();
        Ok(())
    })
}

/// Pointer-cancel: end the gesture; applied moves are kept
#[wasm_bindgen(js_name = dragCancel)]
pub fn drag_cancel() -> Result<(), JsValue> {
    with_editor(|editor| {
        editor.pointer_cancel();
        Ok(())
    })
}
