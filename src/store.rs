//! Note store - the ordered note collection and its persistence.
//!
//! ## Invariants
//!
//! - Note ids are unique within the store.
//! - Every mutation rewrites the whole collection to the backend before
//!   returning. A failed write is logged; the in-memory state is kept.
//! - Mutations naming an unknown id are no-ops.
//! - The spatial index mirrors every note's current box.

use crate::constants::{DEFAULT_STORAGE_KEY, RESIZE_HANDLE_SIZE};
use crate::geometry::Rect;
use crate::perf::{TARGET_FRAME_MS, measure_and_log};
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::storage::{KeyValueStore, MemoryStore, StorageResult, load_notes, save_notes};
use crate::types::{
    Note, NotePatch, NoteSize, Position, generate_note_id, now_millis, random_palette_color,
};
use rand::Rng;

/// Result of a pointer hit test against the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteHit {
    /// Topmost note under the pointer
    pub note_id: String,
    /// Whether the pointer is on that note's resize handle
    pub on_resize_handle: bool,
}

/// Ordered note collection backed by a key-value store.
pub struct NoteStore {
    notes: Vec<Note>,
    index: SpatialIndex,
    backend: Box<dyn KeyValueStore>,
    key: String,
}

impl NoteStore {
    /// Load the collection stored under `key`. Never fails; see [`load_notes`].
    pub fn load(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let notes = load_notes(backend.as_ref(), &key);
        let index = SpatialIndex::from_notes(notes.iter().map(|n| (n.id.as_str(), n.position, n.size)));
        Self {
            notes,
            index,
            backend,
            key,
        }
    }

    /// Empty store over a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStore::new()), DEFAULT_STORAGE_KEY)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes in paint order: ascending z-index, ties by insertion order.
    pub fn notes_by_z(&self) -> Vec<&Note> {
        let mut ordered: Vec<&Note> = self.notes.iter().collect();
        ordered.sort_by_key(|n| n.z_index);
        ordered
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Highest z-index on the board, 0 when empty.
    pub fn max_z_index(&self) -> i64 {
        self.notes.iter().fold(0, |max, n| max.max(n.z_index))
    }

    /// Topmost note under `point`, if any.
    pub fn note_at(&self, point: Position) -> Option<NoteHit> {
        profile_scope!("note_at");

        let candidates = self.index.query_point(point.x, point.y);
        if candidates.is_empty() {
            return None;
        }

        // Later notes paint over earlier ones at equal z, so the last maximum wins.
        let top = self
            .notes
            .iter()
            .filter(|n| candidates.contains(&n.id.as_str()))
            .fold(None::<&Note>, |best, n| match best {
                Some(b) if b.z_index > n.z_index => Some(b),
                _ => Some(n),
            })?;

        Some(NoteHit {
            note_id: top.id.clone(),
            on_resize_handle: resize_handle_rect(top).contains(point),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a note of the given size class at `position`.
    ///
    /// Without a color, one is drawn uniformly from the palette.
    pub fn create(&mut self, size: NoteSize, position: Position, color: Option<&str>) -> Note {
        self.create_with_rng(size, position, color, &mut rand::thread_rng())
    }

    /// [`create`](Self::create) with an explicit random source.
    pub fn create_with_rng<R: Rng + ?Sized>(
        &mut self,
        size: NoteSize,
        position: Position,
        color: Option<&str>,
        rng: &mut R,
    ) -> Note {
        let now = now_millis();
        let note = Note {
            id: generate_note_id(),
            position,
            size: size.dimensions(),
            content: String::new(),
            color: color
                .map(str::to_string)
                .unwrap_or_else(|| random_palette_color(rng).to_string()),
            z_index: self.max_z_index() + 1,
            created_at: now,
            updated_at: now,
        };

        tracing::debug!(id = %note.id, ?size, z = note.z_index, "Created note");
        self.index.insert(&note.id, note.position, note.size);
        self.notes.push(note.clone());
        self.persist();
        note
    }

    /// Merge `patch` into the note with `id`. Returns false for unknown ids.
    pub fn update(&mut self, id: &str, patch: NotePatch) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            tracing::trace!(id, "Dropped update for unknown note");
            return false;
        };

        let moved = patch.position.is_some() || patch.size.is_some();
        note.apply(patch);
        if moved {
            self.index.insert(&note.id, note.position, note.size);
        }
        self.persist();
        true
    }

    /// Remove the note with `id`. Returns false for unknown ids.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(idx) = self.notes.iter().position(|n| n.id == id) else {
            tracing::trace!(id, "Dropped delete for unknown note");
            return false;
        };

        self.notes.remove(idx);
        self.index.remove(id);
        tracing::debug!(id, "Deleted note");
        self.persist();
        true
    }

    /// Raise the note with `id` above every other note.
    pub fn bring_to_front(&mut self, id: &str) -> bool {
        let z_index = self.max_z_index() + 1;
        self.update(id, NotePatch::z_index(z_index))
    }

    /// Write the collection to the backend, reporting failure.
    pub fn save(&mut self) -> StorageResult<()> {
        save_notes(self.backend.as_mut(), &self.key, &self.notes)
    }

    fn persist(&mut self) {
        let saved = measure_and_log("persist_notes", TARGET_FRAME_MS, || self.save());
        if let Err(e) = saved {
            tracing::error!(key = %self.key, error = %e, "Failed to save notes");
        }
    }
}

/// Square handle at the note's bottom-right corner.
pub fn resize_handle_rect(note: &Note) -> Rect {
    let rect = note.rect();
    Rect::new(
        rect.right - RESIZE_HANDLE_SIZE,
        rect.bottom - RESIZE_HANDLE_SIZE,
        rect.right,
        rect.bottom,
    )
}
