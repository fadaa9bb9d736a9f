//! Pointer move handling - item dragging and resizing.
//!
//! ## Performance Notes
//!
//! Pointer move fires for every mouse event, mostly with nothing active, so
//! the idle case returns before touching the board. During an operation
//! only the active item is recomputed and written back.

use crate::editor::PosterEditor;
use crate::geometry::{compute_drag_position, compute_resize};
use crate::input::InputState;
use crate::profile_scope;
use glam::Vec2;
use tracing::debug;

impl PosterEditor {
    /// Pointer moved to canvas-local `point`.
    ///
    /// The point may lie outside the canvas; the resulting geometry is
    /// clamped, so an operation keeps tracking the pointer until release.
    pub fn on_pointer_move(&mut self, point: Vec2) {
        match self.input_state {
            InputState::Idle => {}
            InputState::ResizingItem {
                item_id,
                start_pos,
                start_size,
                original_font_size,
            } => {
                profile_scope!("item_resize");
                self.resize_active_item(item_id, point, start_pos, start_size, original_font_size);
            }
            InputState::DraggingItem {
                item_id,
                drag_offset,
            } => {
                profile_scope!("item_drag");
                self.drag_active_item(item_id, point, drag_offset);
            }
        }
    }

    fn drag_active_item(&mut self, item_id: u64, point: Vec2, drag_offset: Vec2) {
        let canvas_size = self.board.canvas_size();
        let Some(item) = self.board.get_item(item_id) else {
            self.abandon_operation(item_id);
            return;
        };

        let position = compute_drag_position(
            point,
            drag_offset,
            item.size,
            canvas_size,
            item.is_background(),
        );
        self.board.commit_position(item_id, position);
    }

    fn resize_active_item(
        &mut self,
        item_id: u64,
        point: Vec2,
        start_pos: Vec2,
        start_size: (f32, f32),
        original_font_size: Option<f32>,
    ) {
        let Some(item) = self.board.get_item(item_id) else {
            self.abandon_operation(item_id);
            return;
        };

        // The committed size may run past the canvas edge; the next drag
        // clamps the position only.
        let is_text = item.is_text();
        let initial_font_size = original_font_size.unwrap_or_default();
        let outcome = compute_resize(start_pos, point, start_size, initial_font_size, is_text);
        self.board.commit_resize(item_id, outcome.size(), outcome.font_size);
    }

    /// The target vanished without going through `delete_item`.
    fn abandon_operation(&mut self, item_id: u64) {
        debug!(item_id, "Active item no longer exists, returning to idle");
        self.input_state.reset();
        self.board.clear_interaction();
    }
}
