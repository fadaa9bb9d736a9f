//! Coordinate conversion between page space and canvas-local space.
//!
//! Pointer events arrive in page (client) coordinates; every item position
//! is canvas-local. The shell tells us where the canvas element sits and how
//! much it is scaled on screen.

use glam::Vec2;

/// Placement of the canvas element in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasOrigin {
    /// Top-left corner of the canvas element on the page
    pub offset: Vec2,
    /// Rendered size divided by logical canvas size
    pub scale: f32,
}

impl Default for CanvasOrigin {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl CanvasOrigin {
    pub fn new(left: f32, top: f32) -> Self {
        Self {
            offset: Vec2::new(left, top),
            scale: 1.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        // A collapsed element would divide by zero; treat as unscaled
        self.scale = if scale > 0.0 { scale } else { 1.0 };
        self
    }

    /// From the element's bounding rect and the logical canvas width.
    pub fn from_rect(left: f32, top: f32, rendered_width: f32, canvas_width: f32) -> Self {
        let scale = if canvas_width > 0.0 {
            rendered_width / canvas_width
        } else {
            1.0
        };
        Self::new(left, top).with_scale(scale)
    }

    #[inline]
    pub fn page_to_canvas(&self, page: Vec2) -> Vec2 {
        (page - self.offset) / self.scale
    }

    #[inline]
    pub fn canvas_to_page(&self, canvas: Vec2) -> Vec2 {
        canvas * self.scale + self.offset
    }
}
