//! Text editing tests: double-click entry, commit, cancel and blur

use crate::helpers::{persisted, TestBoardBuilder};
use stickyboard::board::{Key, KeyInput, PointerDown};
use stickyboard::types::{NotePatch, NoteSize, Position};

fn type_text(board: &mut stickyboard::BoardSurface, text: &str) {
    for ch in text.chars() {
        board.key_down(&KeyInput::new(Key::Text(ch.to_string())));
    }
}

#[test]
fn test_double_click_then_ctrl_enter_commits() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note(NoteSize::Medium, (0.0, 0.0))
        .build();
    let id = &ids[0];
    let before = board.store().get(id).unwrap().updated_at;

    board.pointer_down(Position::new(50.0, 50.0), 1);
    board.pointer_up();
    assert_eq!(
        board.pointer_down(Position::new(50.0, 50.0), 2),
        PointerDown::EditStarted { note_id: id.clone() }
    );

    type_text(&mut board, "buy milk");
    assert_eq!(board.editing().unwrap().draft(), "buy milk");
    // Draft stays out of the store until commit
    assert_eq!(board.store().get(id).unwrap().content, "");

    assert!(board.key_down(&KeyInput::with_ctrl(Key::Enter)));
    assert!(board.editing().is_none());

    let note = board.store().get(id).unwrap();
    assert_eq!(note.content, "buy milk");
    assert!(note.updated_at >= before);
    assert!(persisted(board.store()).unwrap().contains("buy milk"));
}

#[test]
fn test_plain_enter_inserts_newline() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note(NoteSize::Medium, (0.0, 0.0))
        .build();

    board.begin_edit(&ids[0]);
    type_text(&mut board, "a");
    board.key_down(&KeyInput::new(Key::Enter));
    type_text(&mut board, "b");
    board.key_down(&KeyInput::with_ctrl(Key::Enter));

    assert_eq!(board.store().get(&ids[0]).unwrap().content, "a\nb");
}

#[test]
fn test_escape_reverts_content() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note(NoteSize::Medium, (0.0, 0.0))
        .build();
    board.update_note(&ids[0], NotePatch::content("original"));

    board.begin_edit(&ids[0]);
    board.key_down(&KeyInput::new(Key::Backspace));
    type_text(&mut board, "XYZ");
    assert_eq!(board.editing().unwrap().draft(), "originaXYZ");

    assert!(board.key_down(&KeyInput::new(Key::Escape)));
    assert!(board.editing().is_none());
    assert_eq!(board.store().get(&ids[0]).unwrap().content, "original");
}

#[test]
fn test_press_elsewhere_commits_edit() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note(NoteSize::Small, (0.0, 0.0))
        .with_note(NoteSize::Small, (400.0, 0.0))
        .build();

    board.begin_edit(&ids[0]);
    board.set_edit_draft("blurred");

    let down = board.pointer_down(Position::new(410.0, 10.0), 1);
    assert!(matches!(down, PointerDown::DragStarted { ref note_id, .. } if note_id == &ids[1]));
    assert!(board.editing().is_none());
    assert_eq!(board.store().get(&ids[0]).unwrap().content, "blurred");
}

#[test]
fn test_blur_commits() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note(NoteSize::Small, (0.0, 0.0))
        .build();

    board.begin_edit(&ids[0]);
    type_text(&mut board, "kept");
    assert!(board.blur());
    assert_eq!(board.store().get(&ids[0]).unwrap().content, "kept");
    assert!(!board.blur());
}

#[test]
fn test_switching_edit_commits_previous() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note(NoteSize::Small, (0.0, 0.0))
        .with_note(NoteSize::Small, (400.0, 0.0))
        .build();

    board.begin_edit(&ids[0]);
    type_text(&mut board, "first");
    board.begin_edit(&ids[1]);

    assert!(board.is_editing(&ids[1]));
    assert_eq!(board.store().get(&ids[0]).unwrap().content, "first");
}

#[test]
fn test_begin_edit_on_unknown_note_is_noop() {
    let (mut board, _) = TestBoardBuilder::new().build();
    assert!(!board.begin_edit("missing"));
    assert!(board.editing().is_none());
}

#[test]
fn test_deleting_edited_note_ends_edit() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note(NoteSize::Small, (0.0, 0.0))
        .build();

    board.begin_edit(&ids[0]);
    board.delete_note(&ids[0]);
    assert!(board.editing().is_none());
    assert!(!board.commit_edit());
}

#[test]
fn test_resize_handle_works_while_editing() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_note(NoteSize::Small, (0.0, 0.0))
        .build();
    let id = &ids[0];

    board.begin_edit(id);
    type_text(&mut board, "draft");

    let down = board.pointer_down(Position::new(195.0, 145.0), 1);
    assert_eq!(
        down,
        PointerDown::DragStarted {
            note_id: id.clone(),
            mode: stickyboard::input::DragMode::Resize,
        }
    );
    board.pointer_move(Position::new(245.0, 165.0));
    board.pointer_up();

    assert_eq!(
        board.store().get(id).unwrap().size,
        stickyboard::types::Size::new(250.0, 170.0)
    );
    // Editing survives the resize with its draft intact
    assert!(board.is_editing(id));
    assert_eq!(board.editing().unwrap().draft(), "draft");
}
