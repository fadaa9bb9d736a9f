//! Input state machine - the single active pointer operation on the canvas.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingItem      (pointer down on an item's move handle)
//! Idle -> ResizingItem      (pointer down on an item's resize handle)
//! DraggingItem -> ResizingItem  (resize handle pressed while a drag is stuck open)
//!
//! DraggingItem -> DraggingItem  (pointer move: reposition)
//! ResizingItem -> ResizingItem  (pointer move: resize)
//!
//! Any -> Idle               (pointer up anywhere, or target item deleted)
//! ```
//!
//! Holding everything the move handler needs inside the variant makes a
//! simultaneous drag and resize unrepresentable.

use glam::Vec2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No active pointer operation
    #[default]
    Idle,

    /// Moving an item with the pointer
    DraggingItem {
        /// Item being dragged
        item_id: u64,
        /// Pointer position minus item position at press time
        drag_offset: Vec2,
    },

    /// Resizing an item from its bottom-right handle
    ResizingItem {
        /// Item being resized
        item_id: u64,
        /// Pointer position at press time
        start_pos: Vec2,
        /// Item size at press time
        start_size: (f32, f32),
        /// Font size at press time (text items only)
        original_font_size: Option<f32>,
    },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging_item(&self) -> bool {
        matches!(self, Self::DraggingItem { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingItem { .. })
    }

    /// Id of the item targeted by the active operation, if any
    pub fn active_item_id(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::DraggingItem { item_id, .. } | Self::ResizingItem { item_id, .. } => Some(*item_id),
        }
    }

    pub fn dragged_item_id(&self) -> Option<u64> {
        match self {
            Self::DraggingItem { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    pub fn resized_item_id(&self) -> Option<u64> {
        match self {
            Self::ResizingItem { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    pub fn drag_offset(&self) -> Option<Vec2> {
        match self {
            Self::DraggingItem { drag_offset, .. } => Some(*drag_offset),
            _ => None,
        }
    }

    pub fn start_dragging(&mut self, item_id: u64, drag_offset: Vec2) {
        *self = Self::DraggingItem {
            item_id,
            drag_offset,
        };
    }

    pub fn start_resizing(
        &mut self,
        item_id: u64,
        start_pos: Vec2,
        start_size: (f32, f32),
        original_font_size: Option<f32>,
    ) {
        *self = Self::ResizingItem {
            item_id,
            start_pos,
            start_size,
            original_font_size,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
