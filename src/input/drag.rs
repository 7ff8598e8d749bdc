//! Drag controller - turns pointer movement into note moves and resizes.
//!
//! ## Performance Notes
//!
//! Pointer move is called very frequently during a drag (60+ times per
//! second). Each move commits one patch to the store and one overlap test;
//! nothing is buffered, so the store always reflects drag progress.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::capture::PointerCapture;
use super::state::{DragMode, DragSession, DragState};
use crate::constants::{MIN_NOTE_HEIGHT, MIN_NOTE_WIDTH};
use crate::geometry::{Rect, overlaps};
use crate::profile_scope;
use crate::store::NoteStore;
use crate::types::{NotePatch, Position, Size};
use std::rc::Rc;

/// Result of a pointer move while a session is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// Note repositioned; `over_trash` is the new pending-delete flag
    Moved { position: Position, over_trash: bool },
    /// Note resized
    Resized { size: Size },
    /// The dragged note no longer exists; nothing changed
    Stale,
}

/// Result of ending a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragOutcome {
    pub note_id: String,
    pub mode: DragMode,
    /// The note was dropped on the trash and removed
    pub deleted: bool,
}

/// Owns the single drag session of a board.
#[derive(Default)]
pub struct DragController {
    state: DragState,
    release_hook: Option<Rc<dyn Fn(&str)>>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the note id every time a session's pointer capture is released.
    pub fn set_release_hook(&mut self, hook: impl Fn(&str) + 'static) {
        self.release_hook = Some(Rc::new(hook));
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn dragged_note_id(&self) -> Option<&str> {
        self.state.dragged_note_id()
    }

    pub fn mode(&self) -> Option<DragMode> {
        self.state.mode()
    }

    /// Returns true if `note_id` is being dragged and currently over the trash.
    pub fn is_pending_delete(&self, note_id: &str) -> bool {
        self.state
            .session()
            .is_some_and(|s| s.pending_delete && s.note_id == note_id)
    }

    /// Start a session on `note_id`.
    ///
    /// The note is brought to front first, so it paints above every other note
    /// for the whole drag. Returns false, leaving state untouched, if a session
    /// is already active or the note does not exist.
    pub fn begin(
        &mut self,
        store: &mut NoteStore,
        note_id: &str,
        mode: DragMode,
        pointer: Position,
    ) -> bool {
        if let Some(active) = self.state.dragged_note_id() {
            tracing::debug!(active, requested = note_id, "Ignoring drag start during active drag");
            return false;
        }

        if !store.bring_to_front(note_id) {
            return false;
        }
        let Some(note) = store.get(note_id) else {
            return false;
        };

        let session = DragSession {
            note_id: note_id.to_string(),
            mode,
            pointer_start: pointer,
            grab_offset: Position::new(pointer.x - note.position.x, pointer.y - note.position.y),
            initial_size: note.size,
            pending_delete: false,
            capture: self.acquire_capture(note_id),
        };

        tracing::debug!(note = note_id, ?mode, "Drag started");
        self.state = DragState::Dragging(session);
        true
    }

    /// Apply a pointer move to the active session.
    ///
    /// Returns `None` when idle.
    pub fn update(&mut self, store: &mut NoteStore, pointer: Position, trash: Rect) -> Option<DragUpdate> {
        profile_scope!("drag_update");

        let session = self.state.session_mut()?;

        let update = match session.mode {
            DragMode::Move => {
                let position = moved_position(pointer, session.grab_offset);
                if !store.update(&session.note_id, NotePatch::position(position)) {
                    return Some(DragUpdate::Stale);
                }
                let over_trash = store
                    .get(&session.note_id)
                    .is_some_and(|note| overlaps(&note.rect(), &trash));
                session.pending_delete = over_trash;
                DragUpdate::Moved { position, over_trash }
            }
            DragMode::Resize => {
                let size = resized_size(session.initial_size, session.pointer_start, pointer);
                if !store.update(&session.note_id, NotePatch::size(size)) {
                    return Some(DragUpdate::Stale);
                }
                DragUpdate::Resized { size }
            }
        };

        Some(update)
    }

    /// End the active session.
    ///
    /// A move released over the trash deletes the note. The session and its
    /// capture are discarded whatever the outcome. Returns `None` when idle.
    pub fn finish(&mut self, store: &mut NoteStore) -> Option<DragOutcome> {
        let session = self.state.take()?;

        let deleted = session.mode == DragMode::Move
            && session.pending_delete
            && store.delete(&session.note_id);

        tracing::debug!(note = %session.note_id, mode = ?session.mode, deleted, "Drag ended");
        Some(DragOutcome {
            note_id: session.note_id.clone(),
            mode: session.mode,
            deleted,
        })
    }

    /// Abandon the active session without deleting anything.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    fn acquire_capture(&self, note_id: &str) -> PointerCapture {
        match &self.release_hook {
            Some(hook) => {
                let hook = Rc::clone(hook);
                PointerCapture::with_release_hook(note_id, Box::new(move |id| hook(id)))
            }
            None => PointerCapture::new(note_id),
        }
    }
}

/// Note origin for a pointer position in move mode, clamped to the board.
pub fn moved_position(pointer: Position, grab_offset: Position) -> Position {
    Position::new(
        (pointer.x - grab_offset.x).max(0.0),
        (pointer.y - grab_offset.y).max(0.0),
    )
}

/// Note size for a pointer position in resize mode, floored at the minimum.
pub fn resized_size(initial: Size, pointer_start: Position, pointer: Position) -> Size {
    let delta_x = pointer.x - pointer_start.x;
    let delta_y = pointer.y - pointer_start.y;
    Size::new(
        (initial.width + delta_x).max(MIN_NOTE_WIDTH),
        (initial.height + delta_y).max(MIN_NOTE_HEIGHT),
    )
}
