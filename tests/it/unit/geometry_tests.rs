//! Overlap detection tests

use stickyboard::geometry::{overlaps, Rect};
use stickyboard::types::{Note, Position, Size};

#[test]
fn test_note_over_trash_overlaps() {
    // Note {0,0,200,150} against trash at left 180, top 100, 100x100
    let note = Rect::from_origin_size(Position::new(0.0, 0.0), Size::new(200.0, 150.0));
    let trash = Rect::from_origin_size(Position::new(180.0, 100.0), Size::new(100.0, 100.0));
    assert!(overlaps(&note, &trash));
    assert!(overlaps(&trash, &note));
}

#[test]
fn test_distant_rects_do_not_overlap() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(300.0, 300.0, 400.0, 400.0);
    assert!(!overlaps(&a, &b));
}

#[test]
fn test_shared_edge_counts_as_overlap() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let right = Rect::new(100.0, 0.0, 200.0, 100.0);
    let below = Rect::new(0.0, 100.0, 100.0, 200.0);
    let corner = Rect::new(100.0, 100.0, 150.0, 150.0);
    assert!(overlaps(&a, &right));
    assert!(overlaps(&a, &below));
    assert!(overlaps(&a, &corner));
}

#[test]
fn test_gap_of_one_pixel_does_not_overlap() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(101.0, 0.0, 200.0, 100.0);
    assert!(!overlaps(&a, &b));
}

#[test]
fn test_note_rect_follows_position_and_size() {
    let note = Note {
        id: "n".into(),
        position: Position::new(10.0, 20.0),
        size: Size::new(150.0, 100.0),
        content: String::new(),
        color: "#FFE066".into(),
        z_index: 1,
        created_at: 0,
        updated_at: 0,
    };
    assert_eq!(note.rect(), Rect::new(10.0, 20.0, 160.0, 120.0));
}
