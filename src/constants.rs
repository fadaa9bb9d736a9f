//! Editor-wide constants.
//!
//! Centralizes placement defaults, geometry floors and handle sizes so the
//! geometry engine, the item model and the settings defaults agree.

// ============================================================================
// Canvas
// ============================================================================

/// Default canvas width in pixels (4:5 poster ratio)
pub const DEFAULT_CANVAS_WIDTH: f32 = 480.0;

/// Default canvas height in pixels (4:5 poster ratio)
pub const DEFAULT_CANVAS_HEIGHT: f32 = 600.0;

// ============================================================================
// Item Defaults
// ============================================================================

/// Placeholder text for newly created text items
pub const DEFAULT_TEXT_CONTENT: &str = "Double click to edit";

/// Default font size for text items
pub const DEFAULT_FONT_SIZE: f32 = 18.0;

/// Default text color (black)
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Where new text items are placed
pub const DEFAULT_TEXT_POSITION: (f32, f32) = (50.0, 50.0);

/// Size of newly created text items
pub const DEFAULT_TEXT_SIZE: (f32, f32) = (200.0, 50.0);

/// Where new image items are placed
pub const DEFAULT_IMAGE_POSITION: (f32, f32) = (50.0, 50.0);

/// Size of newly created image items
pub const DEFAULT_IMAGE_SIZE: (f32, f32) = (300.0, 200.0);

/// Size assumed for bounds clamping when an item has no explicit size
pub const CLAMP_FALLBACK_SIZE: (f32, f32) = (100.0, 50.0);

/// Initial size assumed when resizing a text item without explicit size
pub const RESIZE_FALLBACK_TEXT_SIZE: (f32, f32) = DEFAULT_TEXT_SIZE;

/// Initial size assumed when resizing an image item without explicit size
pub const RESIZE_FALLBACK_IMAGE_SIZE: (f32, f32) = DEFAULT_IMAGE_SIZE;

// ============================================================================
// Resize Floors
// ============================================================================

/// Minimum width an item can be resized to
pub const MIN_ITEM_WIDTH: f32 = 50.0;

/// Minimum height an item can be resized to
pub const MIN_ITEM_HEIGHT: f32 = 30.0;

/// Minimum font size reachable by scaling a text item
pub const MIN_FONT_SIZE: f32 = 10.0;

// ============================================================================
// Input Handling
// ============================================================================

/// Side length of the square resize handle at an item's bottom-right corner
pub const RESIZE_HANDLE_SIZE: f32 = 16.0;

// ============================================================================
// Export
// ============================================================================

/// Default file name for exported posters
pub const DEFAULT_EXPORT_FILE_NAME: &str = "poster.png";
