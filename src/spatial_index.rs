//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for pointer hit testing on the board.
//! Point queries return candidate note ids; callers resolve paint order.

use crate::types::{Position, Size};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a note's bounding box.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub note_id: String,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(note_id: impl Into<String>, position: Position, size: Size) -> Self {
        Self {
            note_id: note_id.into(),
            min_x: position.x,
            min_y: position.y,
            max_x: position.x + size.width,
            max_y: position.y + size.height,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.note_id == other.note_id
    }
}

/// Spatial index for notes using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<String, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build a spatial index from `(id, position, size)` triples.
    pub fn from_notes<'a, I>(notes: I) -> Self
    where
        I: Iterator<Item = (&'a str, Position, Size)>,
    {
        let mut index = Self::new();
        index.rebuild(notes);
        index
    }

    /// Insert or move a note's box.
    pub fn insert(&mut self, note_id: &str, position: Position, size: Size) {
        if let Some(old_entry) = self.entries.remove(note_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(note_id, position, size);
        self.tree.insert(entry.clone());
        self.entries.insert(note_id.to_string(), entry);
    }

    pub fn remove(&mut self, note_id: &str) -> bool {
        if let Some(entry) = self.entries.remove(note_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Query all notes whose box contains the given point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<&str> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.note_id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<'a, I>(&mut self, notes: I)
    where
        I: Iterator<Item = (&'a str, Position, Size)>,
    {
        let entries: Vec<SpatialEntry> = notes
            .map(|(id, pos, size)| SpatialEntry::new(id, pos, size))
            .collect();

        self.entries = entries
            .iter()
            .map(|e| (e.note_id.clone(), e.clone()))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
