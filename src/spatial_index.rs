//! Spatial Index Module
//!
//! R-tree of item bounding boxes used to hit test pointer-down positions.
//! The board keeps it in sync on every geometry mutation.

use crate::geometry::rect_contains;
use glam::Vec2;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Bounding box of one canvas item in canvas-local pixels.
#[derive(Debug, Clone, Copy)]
pub struct ItemBounds {
    pub item_id: u64,
    pub position: (f32, f32),
    pub size: (f32, f32),
}

impl ItemBounds {
    pub fn new(item_id: u64, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            item_id,
            position,
            size,
        }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        rect_contains(self.position, self.size, point)
    }

    fn max_corner(&self) -> [f32; 2] {
        [self.position.0 + self.size.0, self.position.1 + self.size.1]
    }
}

impl RTreeObject for ItemBounds {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.position.0, self.position.1], self.max_corner())
    }
}

impl PartialEq for ItemBounds {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index over canvas items.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<ItemBounds>,
    entries: HashMap<u64, ItemBounds>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item or replace its previous bounds.
    pub fn upsert(&mut self, item_id: u64, position: (f32, f32), size: (f32, f32)) {
        self.remove(item_id);

        let entry = ItemBounds::new(item_id, position, size);
        self.tree.insert(entry);
        self.entries.insert(item_id, entry);
    }

    pub fn remove(&mut self, item_id: u64) -> bool {
        match self.entries.remove(&item_id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Ids of every item whose bounds contain `point`, in no particular order.
    pub fn query_point(&self, point: Vec2) -> Vec<u64> {
        let envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains(point))
            .map(|entry| entry.item_id)
            .collect()
    }

    pub fn bounds(&self, item_id: u64) -> Option<&ItemBounds> {
        self.entries.get(&item_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole index from `(id, position, size)` triples.
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: Iterator<Item = (u64, (f32, f32), (f32, f32))>,
    {
        let entries: Vec<ItemBounds> = items
            .map(|(id, pos, size)| ItemBounds::new(id, pos, size))
            .collect();

        self.entries = entries.iter().map(|e| (e.item_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
