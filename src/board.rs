//! Item model - the ordered collection of canvas items.
//!
//! The board owns every item on the poster and enforces the model
//! invariants on each mutation:
//!
//! - at most one `Background` item, always at the origin and canvas-sized
//! - ids come from a monotonic counter and are never reused
//! - positions are clamped so items stay inside the canvas
//! - explicit sizes respect the resize floor
//! - at most one item carries an interaction flag
//!
//! Mutations addressed to an id that no longer exists are silent no-ops;
//! they report `false` so callers can tell, but nothing treats it as an error.

use crate::constants::MIN_FONT_SIZE;
use crate::content::ContentRef;
use crate::geometry::{clamp_position, floor_size};
use crate::settings::{EditorSettings, ImageSettings, TextSettings};
use crate::spatial_index::SpatialIndex;
use crate::types::{CanvasItem, ItemContent, ItemKind, ItemPatch, is_hex_color};
use glam::Vec2;
use tracing::{debug, trace, warn};

/// Interaction flag carried by the active item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Dragging,
    Resizing,
}

pub struct Board {
    items: Vec<CanvasItem>,
    next_item_id: u64,
    canvas_size: (f32, f32),
    text_defaults: TextSettings,
    image_defaults: ImageSettings,
    revision: u64,
    spatial_index: SpatialIndex,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&EditorSettings::default())
    }
}

impl Board {
    pub fn new(settings: &EditorSettings) -> Self {
        Self {
            items: Vec::new(),
            next_item_id: 1,
            canvas_size: settings.canvas.size(),
            text_defaults: settings.text.clone(),
            image_defaults: settings.image.clone(),
            revision: 0,
            spatial_index: SpatialIndex::new(),
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// Items in insertion order, for rendering.
    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_item(&self, id: u64) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn background(&self) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.is_background())
    }

    pub fn count_of(&self, kind: ItemKind) -> usize {
        self.items.iter().filter(|item| item.kind() == kind).count()
    }

    /// Owned copy of the collection, e.g. for handing to an exporter.
    pub fn snapshot(&self) -> Vec<CanvasItem> {
        self.items.clone()
    }

    pub fn canvas_size(&self) -> (f32, f32) {
        self.canvas_size
    }

    /// Id the next created item will get.
    pub fn next_item_id(&self) -> u64 {
        self.next_item_id
    }

    /// Bumped on every mutation; lets the shell skip redundant re-renders.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Size the item occupies on the canvas: its explicit size, the canvas
    /// for backgrounds, or the clamping fallback for auto-sized items.
    pub fn effective_size(&self, item: &CanvasItem) -> (f32, f32) {
        if item.is_background() {
            return self.canvas_size;
        }
        item.size.unwrap_or(crate::constants::CLAMP_FALLBACK_SIZE)
    }

    /// Ids of items whose bounds contain `point`.
    pub fn query_items_at_point(&self, point: Vec2) -> Vec<u64> {
        self.spatial_index.query_point(point)
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Append a text item with the configured defaults. Returns its id.
    pub fn add_text(&mut self) -> u64 {
        let content = ItemContent::Text {
            text: self.text_defaults.content.clone(),
            font_size: self.text_defaults.font_size,
            color: self.text_defaults.color.clone(),
        };
        let position = self.text_defaults.position;
        let size = self.text_defaults.size;
        self.push_item(position, Some(size), content)
    }

    /// Append an image item with the configured defaults. Returns its id.
    pub fn add_image(&mut self, content: ContentRef) -> u64 {
        let position = self.image_defaults.position;
        let size = self.image_defaults.size;
        self.push_item(position, Some(size), ItemContent::Image(content))
    }

    /// Set the poster background.
    ///
    /// If a background already exists its content is replaced in place and
    /// it keeps its id; otherwise a new canvas-filling item is appended.
    pub fn set_background(&mut self, content: ContentRef) -> u64 {
        if let Some(existing) = self.items.iter_mut().find(|item| item.is_background()) {
            existing.content = ItemContent::Background(content);
            let id = existing.id;
            debug!(item_id = id, "Replaced background content");
            self.mark_dirty();
            return id;
        }

        let size = self.canvas_size;
        self.push_item((0.0, 0.0), Some(size), ItemContent::Background(content))
    }

    /// Insert an item with explicit geometry, clamping it into the canvas.
    ///
    /// A background passed here goes through [`Board::set_background`] so the
    /// single-background rule holds.
    pub fn add_item(&mut self, position: (f32, f32), size: Option<(f32, f32)>, content: ItemContent) -> u64 {
        match content {
            ItemContent::Background(content) => self.set_background(content),
            content => self.push_item(position, size.map(floor_size), content),
        }
    }

    fn push_item(&mut self, position: (f32, f32), size: Option<(f32, f32)>, content: ItemContent) -> u64 {
        let id = self.next_item_id;
        self.next_item_id += 1;

        let background_like = matches!(content, ItemContent::Background(_));
        let position = clamp_position(position, size, self.canvas_size, background_like);
        let item = CanvasItem::new(id, position, size, content);

        debug!(item_id = id, kind = item.content.type_label(), "Added item");
        self.index_item(&item);
        self.items.push(item);
        self.mark_dirty();
        id
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Remove the item with `id`. Returns false if it didn't exist.
    pub fn remove_item(&mut self, id: u64) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            debug!(item_id = id, "Remove ignored, item not found");
            return false;
        };

        self.items.remove(index);
        self.spatial_index.remove(id);
        debug!(item_id = id, "Removed item");
        self.mark_dirty();
        true
    }

    /// Apply a partial update to the item with `id`.
    ///
    /// Returns true if anything changed. Unknown ids, fields that don't
    /// apply to the item's kind and invalid colors are ignored.
    pub fn update_item(&mut self, id: u64, patch: ItemPatch) -> bool {
        let canvas_size = self.canvas_size;
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!(item_id = id, "Update ignored, item not found");
            return false;
        };

        let mut changed = false;

        match &mut item.content {
            ItemContent::Text {
                text,
                font_size,
                color,
            } => {
                if let Some(new_text) = patch.text {
                    *text = new_text;
                    changed = true;
                }
                if let Some(new_color) = patch.color {
                    if is_hex_color(&new_color) {
                        *color = new_color;
                        changed = true;
                    } else {
                        warn!(item_id = id, color = %new_color, "Ignoring invalid text color");
                    }
                }
                if let Some(new_size) = patch.font_size {
                    *font_size = new_size.max(MIN_FONT_SIZE);
                    changed = true;
                }
            }
            ItemContent::Image(content) | ItemContent::Background(content) => {
                if let Some(new_content) = patch.image {
                    *content = new_content;
                    changed = true;
                }
            }
        }

        // Backgrounds always fill the canvas; geometry patches don't apply
        if !item.is_background() {
            if let Some(size) = patch.size {
                item.size = Some(floor_size(size));
                changed = true;
            }
            if let Some(position) = patch.position {
                item.position = position;
                changed = true;
            }
            if patch.size.is_some() || patch.position.is_some() {
                item.position = clamp_position(item.position, item.size, canvas_size, false);
            }
        }

        if changed {
            let item = item.clone();
            self.index_item(&item);
            self.mark_dirty();
        }
        changed
    }

    /// Remove every item. The id counter keeps counting.
    pub fn clear(&mut self) {
        debug!(count = self.items.len(), "Cleared board");
        self.items.clear();
        self.spatial_index.clear();
        self.mark_dirty();
    }

    /// Change the canvas dimensions, re-clamping every item and refitting
    /// the background.
    pub fn set_canvas_size(&mut self, size: (f32, f32)) {
        self.canvas_size = size;
        for item in &mut self.items {
            if item.is_background() {
                item.position = (0.0, 0.0);
                item.size = Some(size);
            } else {
                item.position = clamp_position(item.position, item.size, size, false);
            }
        }
        self.reindex();
        self.mark_dirty();
    }

    // ========================================================================
    // Interaction support (driven by the input state machine)
    // ========================================================================

    /// Flag `id` as the single active item. Every other item's flags are
    /// cleared first so at most one flag is ever set.
    pub(crate) fn set_interaction(&mut self, id: u64, interaction: Interaction) -> bool {
        if self.get_item(id).is_none() {
            return false;
        }
        for item in &mut self.items {
            let active = item.id == id;
            item.is_dragging = active && interaction == Interaction::Dragging;
            item.is_resizing = active && interaction == Interaction::Resizing;
        }
        self.mark_dirty();
        true
    }

    /// Clear interaction flags on every item.
    pub(crate) fn clear_interaction(&mut self) {
        let mut changed = false;
        for item in self.items.iter_mut().filter(|item| item.is_active()) {
            item.is_dragging = false;
            item.is_resizing = false;
            changed = true;
        }
        if changed {
            self.mark_dirty();
        }
    }

    /// Write a drag result. Returns false if the item vanished.
    pub(crate) fn commit_position(&mut self, id: u64, position: (f32, f32)) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        if item.position == position {
            return true;
        }

        item.position = position;
        trace!(item_id = id, x = position.0, y = position.1, "Moved item");
        let item = item.clone();
        self.index_item(&item);
        self.mark_dirty();
        true
    }

    /// Write a resize result. Font size only applies to text items.
    pub(crate) fn commit_resize(&mut self, id: u64, size: (f32, f32), new_font_size: f32) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };

        item.size = Some(size);
        if let ItemContent::Text { font_size, .. } = &mut item.content {
            *font_size = new_font_size;
        }
        trace!(item_id = id, width = size.0, height = size.1, "Resized item");
        let item = item.clone();
        self.index_item(&item);
        self.mark_dirty();
        true
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn mark_dirty(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn index_item(&mut self, item: &CanvasItem) {
        let size = self.effective_size(item);
        self.spatial_index.upsert(item.id, item.position, size);
    }

    fn reindex(&mut self) {
        let entries: Vec<_> = self
            .items
            .iter()
            .map(|item| (item.id, item.position, self.effective_size(item)))
            .collect();
        self.spatial_index.rebuild(entries.into_iter());
    }
}
