//! Core types for the poster canvas.
//!
//! This module defines the placeable canvas items, the content variants they
//! carry, and the small value types exchanged with the UI shell.

use crate::content::ContentRef;
use serde::{Deserialize, Serialize};

/// An item placed on the poster canvas.
///
/// Each canvas item has a unique ID, a top-left position in canvas-local
/// pixels, an optional explicit size and a content variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasItem {
    /// Unique identifier for this item, never reused within a session
    pub id: u64,
    /// Top-left offset in canvas-local coordinates (x, y)
    pub position: (f32, f32),
    /// Explicit size (width, height); `None` means intrinsic sizing
    pub size: Option<(f32, f32)>,
    /// The content this item displays
    pub content: ItemContent,
    /// Set while this item is the target of an active drag
    #[serde(skip)]
    pub is_dragging: bool,
    /// Set while this item is the target of an active resize
    #[serde(skip)]
    pub is_resizing: bool,
}

impl CanvasItem {
    pub fn new(id: u64, position: (f32, f32), size: Option<(f32, f32)>, content: ItemContent) -> Self {
        Self {
            id,
            position,
            size,
            content,
            is_dragging: false,
            is_resizing: false,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }

    /// Backgrounds always cover the canvas and are never moved by the user.
    pub fn is_draggable(&self) -> bool {
        !self.is_background()
    }

    pub fn is_background(&self) -> bool {
        matches!(self.content, ItemContent::Background(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self.content, ItemContent::Text { .. })
    }

    /// Font size for text items
    pub fn font_size(&self) -> Option<f32> {
        match &self.content {
            ItemContent::Text { font_size, .. } => Some(*font_size),
            _ => None,
        }
    }

    /// Text color for text items
    pub fn color(&self) -> Option<&str> {
        match &self.content {
            ItemContent::Text { color, .. } => Some(color),
            _ => None,
        }
    }

    /// True while a drag or resize targets this item
    pub fn is_active(&self) -> bool {
        self.is_dragging || self.is_resizing
    }
}

/// The content of a canvas item.
///
/// Kind-specific fields live on their variant so a background can never
/// carry a font size and a text item can never carry image data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ItemContent {
    /// Editable text block
    Text {
        /// The literal string shown
        text: String,
        /// Pixel size of rendered text
        font_size: f32,
        /// Text color as hex string (e.g., "#000000")
        color: String,
    },
    /// A freely placed image
    Image(ContentRef),
    /// The poster background, always covering the whole canvas
    Background(ContentRef),
}

impl ItemContent {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemContent::Text { .. } => ItemKind::Text,
            ItemContent::Image(_) => ItemKind::Image,
            ItemContent::Background(_) => ItemKind::Background,
        }
    }

    /// Image reference for image-backed items
    pub fn content_ref(&self) -> Option<&ContentRef> {
        match self {
            ItemContent::Image(content) | ItemContent::Background(content) => Some(content),
            ItemContent::Text { .. } => None,
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self.kind() {
            ItemKind::Text => "TEXT",
            ItemKind::Image => "IMAGE",
            ItemKind::Background => "BACKGROUND",
        }
    }
}

/// Discriminant of [`ItemContent`], handy for counting and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Text,
    Image,
    Background,
}

/// Which control region of an item a pointer-down landed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleKind {
    /// The item body; starts a drag
    #[default]
    Move,
    /// The bottom-right corner handle; starts a resize
    Resize,
}

/// Result of hit testing a canvas point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitTarget {
    pub item_id: u64,
    pub handle: HandleKind,
}

/// A partial update applied to a single item.
///
/// Fields that don't apply to the target's kind (a color on an image, an
/// image on a text item) are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemPatch {
    pub text: Option<String>,
    pub color: Option<String>,
    pub font_size: Option<f32>,
    pub image: Option<ContentRef>,
    pub position: Option<(f32, f32)>,
    pub size: Option<(f32, f32)>,
}

impl ItemPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Default::default()
        }
    }

    pub fn position(x: f32, y: f32) -> Self {
        Self {
            position: Some((x, y)),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Returns true for `#RGB` or `#RRGGBB` hex color strings.
pub fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
