//! Pointer down handling - hit testing and drag/resize initiation.

use crate::board::Interaction;
use crate::constants::{RESIZE_FALLBACK_IMAGE_SIZE, RESIZE_FALLBACK_TEXT_SIZE, RESIZE_HANDLE_SIZE};
use crate::editor::PosterEditor;
use crate::input::InputState;
use crate::profile_scope;
use crate::types::{HandleKind, HitTarget};
use glam::Vec2;
use std::collections::HashSet;
use tracing::debug;

impl PosterEditor {
    /// Pointer pressed on `target_id`'s `handle` at canvas-local `point`.
    ///
    /// Starts a drag or resize. Presses on unknown ids, on the background,
    /// or while another operation is active are ignored, except that a
    /// resize-handle press pre-empts an active drag.
    pub fn on_pointer_down(&mut self, point: Vec2, target_id: u64, handle: HandleKind) {
        profile_scope!("on_pointer_down");

        let Some(item) = self.board.get_item(target_id) else {
            debug!(item_id = target_id, "Pointer down on unknown item");
            return;
        };
        if item.is_background() {
            return;
        }

        match (self.input_state, handle) {
            (InputState::Idle, _) => {}
            (InputState::DraggingItem { item_id, .. }, HandleKind::Resize) => {
                debug!(dragged = item_id, resized = target_id, "Resize pre-empts drag");
            }
            (state, _) => {
                debug!(?state, "Pointer down ignored, operation already active");
                return;
            }
        }

        match handle {
            HandleKind::Move => {
                let offset = point - Vec2::from(item.position);
                self.input_state.start_dragging(target_id, offset);
                self.board.set_interaction(target_id, Interaction::Dragging);
                debug!(item_id = target_id, "Drag started");
            }
            HandleKind::Resize => {
                let fallback = if item.is_text() {
                    RESIZE_FALLBACK_TEXT_SIZE
                } else {
                    RESIZE_FALLBACK_IMAGE_SIZE
                };
                let start_size = item.size.unwrap_or(fallback);
                let font_size = item.font_size();

                self.input_state.start_resizing(target_id, point, start_size, font_size);
                self.board.set_interaction(target_id, Interaction::Resizing);
                debug!(item_id = target_id, ?start_size, "Resize started");
            }
        }
    }

    /// Hit test `point` and press whatever is under it.
    pub fn pointer_down_at(&mut self, point: Vec2) -> Option<HitTarget> {
        let target = self.hit_test(point)?;
        self.on_pointer_down(point, target.item_id, target.handle);
        Some(target)
    }

    /// Topmost non-background item under `point`, and which of its handles
    /// the point is on.
    pub fn hit_test(&self, point: Vec2) -> Option<HitTarget> {
        profile_scope!("hit_test");

        let candidates: HashSet<u64> = self.board.query_items_at_point(point).into_iter().collect();
        if candidates.is_empty() {
            return None;
        }

        // Later items paint on top, so search back to front
        let item = self
            .board
            .items()
            .iter()
            .rev()
            .filter(|item| !item.is_background())
            .find(|item| candidates.contains(&item.id))?;

        let (w, h) = self.board.effective_size(item);
        let corner = Vec2::new(item.position.0 + w, item.position.1 + h);
        let on_handle = point.x >= corner.x - RESIZE_HANDLE_SIZE && point.y >= corner.y - RESIZE_HANDLE_SIZE;

        Some(HitTarget {
            item_id: item.id,
            handle: if on_handle {
                HandleKind::Resize
            } else {
                HandleKind::Move
            },
        })
    }
}
