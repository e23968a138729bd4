//! Drag positioning engine
//!
//! One gesture at a time: `Idle -> Dragging -> Idle`. Each pointer-move
//! sample carries a delta relative to the previous sample, which is added to
//! the field's current stored position and clamped so the rendered box stays
//! inside the canvas. The engine never writes to the document itself; it
//! emits a [`PositionUpdate`] that the editor applies through its position
//! setter.

use serde::{Deserialize, Serialize};

use crate::models::{Document, GlobalSettings, Position};

/// Rendered box dimensions of a field, measured by the presentation layer
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ElementSize {
    pub width: u32,
    pub height: u32,
}

impl ElementSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Gesture state
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        index: usize,
        /// Sub-pixel motion not yet applied, carried to the next sample
        remainder_x: f64,
        remainder_y: f64,
    },
}

/// Position-update intent produced by a pointer-move sample
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionUpdate {
    pub index: usize,
    pub pos: Position,
}

/// Clamp one axis: `current + delta` into `[0, canvas - element]`
///
/// When the element is larger than the canvas the upper bound is 0.
pub fn clamp_axis(current: u32, delta: i64, canvas: u32, element: u32) -> u32 {
    let max = (i64::from(canvas) - i64::from(element)).max(0);
    i64::from(current).saturating_add(delta).clamp(0, max) as u32
}

/// Apply an integral delta to `pos` and clamp it into the canvas
pub fn clamp_position(
    pos: Position,
    dx: i64,
    dy: i64,
    element: ElementSize,
    settings: &GlobalSettings,
) -> Position {
    Position {
        x: clamp_axis(pos.x, dx, settings.width, element.width),
        y: clamp_axis(pos.y, dy, settings.height, element.height),
    }
}

/// Split accumulated motion into whole pixels and the carried remainder
fn split_motion(remainder: f64, delta: f64) -> (i64, f64) {
    let total = remainder + delta;
    let whole = total.trunc();
    let step = whole.clamp(i64::MIN as f64, i64::MAX as f64) as i64;
    (step, total - whole)
}

/// Per-gesture state machine
#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Index of the field being dragged, if any
    pub fn dragged_index(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { index, .. } => Some(index),
            DragState::Idle => None,
        }
    }

    /// Pointer-down over a field's box
    ///
    /// Starts a gesture only for an existing, dragable field. Returns whether
    /// a gesture started.
    pub fn pointer_down(&mut self, document: &Document, index: usize) -> bool {
        match document.field(index) {
            Some(field) if field.dragable => {
                self.state = DragState::Dragging {
                    index,
                    remainder_x: 0.0,
                    remainder_y: 0.0,
                };
                log::debug!("drag started on field {}", index);
                true
            }
            _ => {
                self.state = DragState::Idle;
                false
            }
        }
    }

    /// Pointer-move sample while dragging
    ///
    /// Returns the clamped new position, or `None` when idle, when the field
    /// is gone or no longer dragable, or when the position does not change.
    pub fn pointer_move(
        &mut self,
        document: &Document,
        dx: f64,
        dy: f64,
        element: ElementSize,
    ) -> Option<PositionUpdate> {
        let DragState::Dragging { index, remainder_x, remainder_y } = self.state else {
            return None;
        };
        if !dx.is_finite() || !dy.is_finite() {
            return None;
        }

        let field = match document.field(index) {
            Some(field) if field.dragable => field,
            _ => {
                log::debug!("drag target {} unavailable, ending gesture", index);
                self.state = DragState::Idle;
                return None;
            }
        };

        let (step_x, remainder_x) = split_motion(remainder_x, dx);
        let (step_y, remainder_y) = split_motion(remainder_y, dy);
        self.state = DragState::Dragging { index, remainder_x, remainder_y };

        let pos = clamp_position(field.pos, step_x, step_y, element, document.global_settings());
        if pos == field.pos {
            return None;
        }
        Some(PositionUpdate { index, pos })
    }

    /// Pointer-up: the gesture ends, already-applied moves stand
    pub fn pointer_up(&mut self) {
        if let Some(index) = self.dragged_index() {
            log::debug!("drag ended on field {}", index);
        }
        self.state = DragState::Idle;
    }

    /// Pointer-cancel: same as pointer-up, no rollback
    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }
}
