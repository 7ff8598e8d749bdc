//! Drag controller tests: move, resize, trash detection and session rules

use stickyboard::geometry::Rect;
use stickyboard::input::{resized_size, DragController, DragMode, DragUpdate};
use stickyboard::store::NoteStore;
use stickyboard::types::{NoteSize, Position, Size};

fn trash() -> Rect {
    Rect::new(600.0, 400.0, 680.0, 480.0)
}

#[test]
fn test_move_keeps_grab_offset() {
    let mut store = NoteStore::in_memory();
    let note = store.create(NoteSize::Small, Position::new(100.0, 100.0), None);
    let mut drag = DragController::new();

    assert!(drag.begin(&mut store, &note.id, DragMode::Move, Position::new(130.0, 110.0)));
    let update = drag.update(&mut store, Position::new(230.0, 210.0), trash());

    assert_eq!(
        update,
        Some(DragUpdate::Moved {
            position: Position::new(200.0, 200.0),
            over_trash: false,
        })
    );
    assert_eq!(store.get(&note.id).unwrap().position, Position::new(200.0, 200.0));
}

#[test]
fn test_move_clamps_at_board_origin() {
    let mut store = NoteStore::in_memory();
    let note = store.create(NoteSize::Small, Position::new(10.0, 10.0), None);
    let mut drag = DragController::new();

    drag.begin(&mut store, &note.id, DragMode::Move, Position::new(10.0, 10.0));
    drag.update(&mut store, Position::new(-50.0, -50.0), trash());

    assert_eq!(store.get(&note.id).unwrap().position, Position::new(0.0, 0.0));
}

#[test]
fn test_resize_follows_pointer_delta() {
    let mut store = NoteStore::in_memory();
    let note = store.create(NoteSize::Medium, Position::new(0.0, 0.0), None);
    let mut drag = DragController::new();

    drag.begin(&mut store, &note.id, DragMode::Resize, Position::new(245.0, 195.0));
    let update = drag.update(&mut store, Position::new(295.0, 215.0), trash());

    assert_eq!(update, Some(DragUpdate::Resized { size: Size::new(300.0, 220.0) }));
    assert_eq!(store.get(&note.id).unwrap().position, Position::new(0.0, 0.0));
}

#[test]
fn test_resize_floors_at_minimum() {
    let mut store = NoteStore::in_memory();
    let note = store.create(NoteSize::Small, Position::new(0.0, 0.0), None);
    let mut drag = DragController::new();

    drag.begin(&mut store, &note.id, DragMode::Resize, Position::new(195.0, 145.0));
    drag.update(&mut store, Position::new(-500.0, -500.0), trash());

    assert_eq!(store.get(&note.id).unwrap().size, Size::new(150.0, 100.0));
}

#[test]
fn test_resized_size_floor() {
    let size = resized_size(
        Size::new(250.0, 200.0),
        Position::new(0.0, 0.0),
        Position::new(-1000.0, 5.0),
    );
    assert_eq!(size, Size::new(150.0, 205.0));
}

#[test]
fn test_trash_overlap_is_recomputed_each_move() {
    let mut store = NoteStore::in_memory();
    let note = store.create(NoteSize::Small, Position::new(0.0, 0.0), None);
    let mut drag = DragController::new();

    drag.begin(&mut store, &note.id, DragMode::Move, Position::new(0.0, 0.0));
    drag.update(&mut store, Position::new(500.0, 350.0), trash());
    assert!(drag.is_pending_delete(&note.id));

    drag.update(&mut store, Position::new(0.0, 0.0), trash());
    assert!(!drag.is_pending_delete(&note.id));

    let outcome = drag.finish(&mut store).unwrap();
    assert!(!outcome.deleted);
    assert!(store.contains(&note.id));
}

#[test]
fn test_release_over_trash_deletes() {
    let mut store = NoteStore::in_memory();
    let note = store.create(NoteSize::Small, Position::new(0.0, 0.0), None);
    let mut drag = DragController::new();

    drag.begin(&mut store, &note.id, DragMode::Move, Position::new(0.0, 0.0));
    drag.update(&mut store, Position::new(600.0, 400.0), trash());
    let outcome = drag.finish(&mut store).unwrap();

    assert!(outcome.deleted);
    assert!(!store.contains(&note.id));
    assert!(!drag.is_dragging());
}

#[test]
fn test_resize_over_trash_never_deletes() {
    let mut store = NoteStore::in_memory();
    let note = store.create(NoteSize::Small, Position::new(550.0, 350.0), None);
    let mut drag = DragController::new();

    drag.begin(&mut store, &note.id, DragMode::Resize, Position::new(745.0, 495.0));
    drag.update(&mut store, Position::new(760.0, 510.0), trash());
    let outcome = drag.finish(&mut store).unwrap();

    assert_eq!(outcome.mode, DragMode::Resize);
    assert!(!outcome.deleted);
    assert!(store.contains(&note.id));
}

#[test]
fn test_begin_raises_note() {
    let mut store = NoteStore::in_memory();
    let a = store.create(NoteSize::Small, Position::default(), None);
    store.create(NoteSize::Small, Position::default(), None);
    let mut drag = DragController::new();

    drag.begin(&mut store, &a.id, DragMode::Move, Position::new(1.0, 1.0));
    assert_eq!(store.get(&a.id).unwrap().z_index, store.max_z_index());
}

#[test]
fn test_second_begin_is_rejected_while_dragging() {
    let mut store = NoteStore::in_memory();
    let a = store.create(NoteSize::Small, Position::default(), None);
    let b = store.create(NoteSize::Small, Position::new(300.0, 0.0), None);
    let mut drag = DragController::new();

    assert!(drag.begin(&mut store, &a.id, DragMode::Move, Position::new(1.0, 1.0)));
    assert!(!drag.begin(&mut store, &b.id, DragMode::Move, Position::new(301.0, 1.0)));
    assert_eq!(drag.dragged_note_id(), Some(a.id.as_str()));
}

#[test]
fn test_begin_on_unknown_note_stays_idle() {
    let mut store = NoteStore::in_memory();
    let mut drag = DragController::new();
    assert!(!drag.begin(&mut store, "ghost", DragMode::Move, Position::default()));
    assert!(!drag.is_dragging());
}

#[test]
fn test_note_deleted_mid_drag_reports_stale() {
    let mut store = NoteStore::in_memory();
    let note = store.create(NoteSize::Small, Position::default(), None);
    let mut drag = DragController::new();

    drag.begin(&mut store, &note.id, DragMode::Move, Position::new(1.0, 1.0));
    store.delete(&note.id);

    assert_eq!(drag.update(&mut store, Position::new(50.0, 50.0), trash()), Some(DragUpdate::Stale));
    assert!(store.is_empty());
    assert!(drag.finish(&mut store).is_some());
}

#[test]
fn test_idle_controller_ignores_moves_and_releases() {
    let mut store = NoteStore::in_memory();
    let mut drag = DragController::new();
    assert_eq!(drag.update(&mut store, Position::new(5.0, 5.0), trash()), None);
    assert_eq!(drag.finish(&mut store), None);
}
