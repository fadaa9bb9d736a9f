//! Geometry engine - pure functions turning pointer input into item geometry.
//!
//! Nothing here touches the item model. The interaction state machine feeds
//! in the values it captured at pointer-down plus the current pointer, and
//! writes the returned geometry back to the board.
//!
//! All coordinates are canvas-local pixels.

use crate::constants::{CLAMP_FALLBACK_SIZE, MIN_FONT_SIZE, MIN_ITEM_HEIGHT, MIN_ITEM_WIDTH};
use glam::Vec2;

/// New size (and font size) produced by a resize step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeOutcome {
    pub width: f32,
    pub height: f32,
    pub font_size: f32,
}

impl ResizeOutcome {
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Position of a dragged item: the pointer minus the grab offset, clamped so
/// the item stays on the canvas.
///
/// Background-like items only clamp against the canvas extents, not their
/// own size, since they always cover the whole canvas anyway.
pub fn compute_drag_position(
    current_pointer: Vec2,
    drag_offset: Vec2,
    item_size: Option<(f32, f32)>,
    canvas_size: (f32, f32),
    background_like: bool,
) -> (f32, f32) {
    let target = current_pointer - drag_offset;
    clamp_position((target.x, target.y), item_size, canvas_size, background_like)
}

/// Clamp a top-left position into `[0, canvas - item]` on each axis.
///
/// Items without explicit size clamp as if they were `CLAMP_FALLBACK_SIZE`.
/// If the item is larger than the canvas the upper bound goes negative and
/// the position pins to 0.
pub fn clamp_position(
    position: (f32, f32),
    item_size: Option<(f32, f32)>,
    canvas_size: (f32, f32),
    background_like: bool,
) -> (f32, f32) {
    let (max_x, max_y) = if background_like {
        canvas_size
    } else {
        let (w, h) = item_size.unwrap_or(CLAMP_FALLBACK_SIZE);
        (canvas_size.0 - w, canvas_size.1 - h)
    };

    (clamp_axis(position.0, max_x), clamp_axis(position.1, max_y))
}

#[inline]
fn clamp_axis(value: f32, max: f32) -> f32 {
    // min first, then max: a negative upper bound resolves to 0
    value.min(max).max(0.0)
}

/// Size and font size of a resized item.
///
/// Width and height grow with the pointer delta from where the resize
/// started and never drop below the resize floor. Text font size follows
/// height proportionally; other items keep `initial_font_size` untouched.
pub fn compute_resize(
    start_pointer: Vec2,
    current_pointer: Vec2,
    initial_size: (f32, f32),
    initial_font_size: f32,
    is_text: bool,
) -> ResizeOutcome {
    let delta = current_pointer - start_pointer;
    let (width, height) = floor_size((initial_size.0 + delta.x, initial_size.1 + delta.y));

    let font_size = if is_text {
        scale_font_size(initial_font_size, initial_size.1, height)
    } else {
        initial_font_size
    };

    ResizeOutcome {
        width,
        height,
        font_size,
    }
}

/// Scale a font size by `new_height / initial_height`, rounded to whole
/// pixels and floored at `MIN_FONT_SIZE`.
///
/// A zero (or otherwise unusable) initial height scales by 1.
pub fn scale_font_size(initial_font_size: f32, initial_height: f32, new_height: f32) -> f32 {
    let scale = if initial_height > 0.0 && initial_height.is_finite() {
        new_height / initial_height
    } else {
        1.0
    };
    (initial_font_size * scale).round().max(MIN_FONT_SIZE)
}

/// Apply the resize floor to a size.
pub fn floor_size(size: (f32, f32)) -> (f32, f32) {
    (size.0.max(MIN_ITEM_WIDTH), size.1.max(MIN_ITEM_HEIGHT))
}

/// Does `point` fall inside the rectangle at `position` with `size`?
#[inline]
pub fn rect_contains(position: (f32, f32), size: (f32, f32), point: Vec2) -> bool {
    point.x >= position.0
        && point.x <= position.0 + size.0
        && point.y >= position.1
        && point.y <= position.1 + size.1
}
