//! Note store tests: lifecycle, z-order and unknown-id handling

use crate::helpers::{persisted, seeded_backend};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use stickyboard::constants::{DEFAULT_STORAGE_KEY, NOTE_PALETTE};
use stickyboard::storage::{KeyValueStore, StorageError, StorageResult};
use stickyboard::store::NoteStore;
use stickyboard::types::{is_palette_color, NotePatch, NoteSize, Position, Size};

#[test]
fn test_create_uses_size_class_dimensions() {
    let mut store = NoteStore::in_memory();
    let small = store.create(NoteSize::Small, Position::new(0.0, 0.0), None);
    let medium = store.create(NoteSize::Medium, Position::new(0.0, 0.0), None);
    let large = store.create(NoteSize::Large, Position::new(0.0, 0.0), None);

    assert_eq!(small.size, Size::new(200.0, 150.0));
    assert_eq!(medium.size, Size::new(250.0, 200.0));
    assert_eq!(large.size, Size::new(300.0, 250.0));
}

#[test]
fn test_create_on_empty_board_gets_z_one() {
    let mut store = NoteStore::in_memory();
    assert_eq!(store.max_z_index(), 0);
    let note = store.create(NoteSize::Medium, Position::new(100.0, 100.0), Some("#FFE066"));

    assert_eq!(note.z_index, 1);
    assert_eq!(note.position, Position::new(100.0, 100.0));
    assert_eq!(note.color, "#FFE066");
    assert_eq!(note.content, "");
    assert_eq!(note.created_at, note.updated_at);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_created_ids_are_unique_and_z_increases() {
    let mut store = NoteStore::in_memory();
    let notes: Vec<_> = (0..20)
        .map(|i| store.create(NoteSize::Small, Position::new(i as f32, 0.0), None))
        .collect();

    let ids: HashSet<_> = notes.iter().map(|n| n.id.clone()).collect();
    assert_eq!(ids.len(), 20);
    for pair in notes.windows(2) {
        assert!(pair[1].z_index > pair[0].z_index);
    }
}

#[test]
fn test_random_color_is_from_palette() {
    let mut store = NoteStore::in_memory();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..30 {
        let note = store.create_with_rng(NoteSize::Small, Position::default(), None, &mut rng);
        assert!(is_palette_color(&note.color), "{} not in palette", note.color);
    }
    assert_eq!(NOTE_PALETTE.len(), 6);
}

#[test]
fn test_bring_to_front_exceeds_all_others() {
    let mut store = NoteStore::in_memory();
    let a = store.create(NoteSize::Small, Position::default(), None);
    store.create(NoteSize::Small, Position::default(), None);
    store.create(NoteSize::Small, Position::default(), None);

    assert!(store.bring_to_front(&a.id));
    let raised = store.get(&a.id).unwrap().z_index;
    assert!(store.notes().iter().filter(|n| n.id != a.id).all(|n| n.z_index < raised));
    assert_eq!(raised, 4);
}

#[test]
fn test_update_merges_only_given_fields() {
    let mut store = NoteStore::in_memory();
    let note = store.create(NoteSize::Medium, Position::new(5.0, 5.0), Some("#99FF99"));

    store.update(&note.id, NotePatch::position(Position::new(40.0, 60.0)));
    let moved = store.get(&note.id).unwrap();
    assert_eq!(moved.position, Position::new(40.0, 60.0));
    assert_eq!(moved.size, note.size);
    assert_eq!(moved.color, "#99FF99");
    assert_eq!(moved.updated_at, note.updated_at);
}

#[test]
fn test_content_patch_stamps_updated_at() {
    let mut store = NoteStore::in_memory();
    let note = store.create(NoteSize::Medium, Position::default(), None);

    store.update(&note.id, NotePatch::content("hello"));
    let edited = store.get(&note.id).unwrap();
    assert_eq!(edited.content, "hello");
    assert!(edited.updated_at >= note.updated_at);
    assert_eq!(edited.created_at, note.created_at);
}

#[test]
fn test_delete_removes_note() {
    let mut store = NoteStore::in_memory();
    let a = store.create(NoteSize::Small, Position::default(), None);
    let b = store.create(NoteSize::Small, Position::new(400.0, 0.0), None);

    assert!(store.delete(&a.id));
    assert!(!store.contains(&a.id));
    assert!(store.contains(&b.id));
    assert!(!store.delete(&a.id));
}

#[test]
fn test_unknown_id_leaves_collection_and_storage_alone() {
    let mut store = NoteStore::in_memory();
    store.create(NoteSize::Small, Position::default(), None);
    let before = persisted(&store);

    store.update("nope", NotePatch::content("x"));
    store.delete("nope");
    store.bring_to_front("nope");

    assert_eq!(persisted(&store), before);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_every_mutation_persists() {
    let mut store = NoteStore::load(Box::new(seeded_backend("[]")), DEFAULT_STORAGE_KEY);
    let note = store.create(NoteSize::Small, Position::default(), None);
    assert!(persisted(&store).unwrap().contains(&note.id));

    store.update(&note.id, NotePatch::content("saved text"));
    assert!(persisted(&store).unwrap().contains("saved text"));

    store.delete(&note.id);
    assert_eq!(persisted(&store).as_deref(), Some("[]"));
}

/// Backend whose writes always fail.
struct ReadOnlyBackend;

impl KeyValueStore for ReadOnlyBackend {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::NoDataDir)
    }
}

#[test]
fn test_failed_writes_keep_in_memory_state() {
    let mut store = NoteStore::load(Box::new(ReadOnlyBackend), DEFAULT_STORAGE_KEY);

    let a = store.create(NoteSize::Small, Position::new(0.0, 0.0), None);
    let b = store.create(NoteSize::Small, Position::new(300.0, 0.0), None);
    assert_eq!(store.len(), 2);

    assert!(store.update(&a.id, NotePatch::content("unsaved")));
    assert_eq!(store.get(&a.id).unwrap().content, "unsaved");

    assert!(store.delete(&b.id));
    assert!(!store.contains(&b.id));

    assert!(matches!(store.save(), Err(StorageError::NoDataDir)));
    assert_eq!(store.len(), 1);
}
