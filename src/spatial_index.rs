//! Spatial Index Module
//!
//! R-tree over the pixel frames of placed items, used for pointer hit
//! testing. Frames come from the current layout and geometry and are rebuilt
//! whenever either changes.
//!
//! Items may overlap after a verbatim replace. When several frames contain a
//! point, the one later in the item list is on top.

use crate::types::{ItemId, PixelPoint, PixelRect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Bounding box of one item's frame.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    /// Position in the item list; higher is drawn later
    pub order: usize,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(item_id: ItemId, order: usize, frame: PixelRect) -> Self {
        // Negative cell sizes (margins wider than the container) flip the frame.
        let (min_x, max_x) = ordered(frame.x, frame.x + frame.width);
        let (min_y, max_y) = ordered(frame.y, frame.y + frame.height);
        Self {
            item_id,
            order,
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[inline]
    pub fn contains_point(&self, point: PixelPoint) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

#[inline]
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Spatial index for item frames.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build an index from `(id, frame)` pairs in drawing order.
    pub fn from_frames<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = (ItemId, PixelRect)>,
    {
        let mut index = Self::new();
        index.rebuild(frames);
        index
    }

    /// Insert or replace the frame of `item_id`. A new id is placed on top.
    pub fn insert(&mut self, item_id: ItemId, frame: PixelRect) {
        let order = match self.entries.remove(&item_id) {
            Some(old_entry) => {
                self.tree.remove(&old_entry);
                old_entry.order
            }
            None => self.next_order(),
        };

        let entry = SpatialEntry::new(item_id.clone(), order, frame);
        self.tree.insert(entry.clone());
        self.entries.insert(item_id, entry);
    }

    pub fn remove(&mut self, item_id: &ItemId) -> bool {
        if let Some(entry) = self.entries.remove(item_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All items whose frame contains `point`, bottom-most first.
    pub fn query_point(&self, point: PixelPoint) -> Vec<ItemId> {
        let point_envelope = AABB::from_point([point.x, point.y]);

        let mut hits: Vec<&SpatialEntry> = self
            .tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(point))
            .collect();
        hits.sort_by_key(|entry| entry.order);
        hits.into_iter().map(|entry| entry.item_id.clone()).collect()
    }

    /// The top-most item under `point`.
    pub fn topmost_at(&self, point: PixelPoint) -> Option<ItemId> {
        let point_envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(point))
            .max_by_key(|entry| entry.order)
            .map(|entry| entry.item_id.clone())
    }

    /// All items whose frame intersects `rect`, bottom-most first.
    pub fn query_rect(&self, rect: PixelRect) -> Vec<ItemId> {
        let (min_x, max_x) = ordered(rect.x, rect.x + rect.width);
        let (min_y, max_y) = ordered(rect.y, rect.y + rect.height);
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);

        let mut hits: Vec<&SpatialEntry> = self.tree.locate_in_envelope_intersecting(&envelope).collect();
        hits.sort_by_key(|entry| entry.order);
        hits.into_iter().map(|entry| entry.item_id.clone()).collect()
    }

    pub fn frame_of(&self, item_id: &ItemId) -> Option<PixelRect> {
        self.entries
            .get(item_id)
            .map(|e| PixelRect::new(e.min_x, e.min_y, e.max_x - e.min_x, e.max_y - e.min_y))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, frames: I)
    where
        I: IntoIterator<Item = (ItemId, PixelRect)>,
    {
        self.entries.clear();
        for (order, (id, frame)) in frames.into_iter().enumerate() {
            // Duplicate ids keep the later frame.
            self.entries.insert(id.clone(), SpatialEntry::new(id, order, frame));
        }
        self.tree = RTree::bulk_load(self.entries.values().cloned().collect());
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }

    fn next_order(&self) -> usize {
        self.entries.values().map(|e| e.order + 1).max().unwrap_or(0)
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
