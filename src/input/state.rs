//! Drag state machine - the single active pointer interaction with a note.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging(Move)     (pointer down on a note body)
//! Idle -> Dragging(Resize)   (pointer down on a note's resize handle)
//! Dragging -> Dragging       (pointer move)
//! Dragging -> Idle           (pointer up - commits or deletes)
//! ```

use super::capture::PointerCapture;
use crate::types::{Position, Size};

/// What a drag session does to its note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Reposition the note; may end in the trash
    Move,
    /// Grow or shrink from the bottom-right corner
    Resize,
}

/// Ephemeral state of one pointer-down-to-pointer-up interaction.
#[derive(Debug)]
pub struct DragSession {
    /// Note being dragged
    pub note_id: String,
    /// Move or resize
    pub mode: DragMode,
    /// Pointer position at grab time
    pub pointer_start: Position,
    /// Pointer minus note origin at grab time
    pub grab_offset: Position,
    /// Note size at grab time
    pub initial_size: Size,
    /// Note currently overlaps the trash target (move mode only)
    pub pending_delete: bool,
    /// Global pointer routing, released when the session is dropped
    pub(crate) capture: PointerCapture,
}

/// Unified drag state.
#[derive(Debug, Default)]
pub enum DragState {
    /// No active drag
    #[default]
    Idle,
    /// One note is being moved or resized
    Dragging(DragSession),
}

impl DragState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a session is active
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Get the active session, if any
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Get the id of the note being dragged, if any
    pub fn dragged_note_id(&self) -> Option<&str> {
        self.session().map(|s| s.note_id.as_str())
    }

    /// Get the active drag mode, if any
    pub fn mode(&self) -> Option<DragMode> {
        self.session().map(|s| s.mode)
    }

    /// Returns true if the dragged note is flagged for deletion
    pub fn is_pending_delete(&self) -> bool {
        self.session().is_some_and(|s| s.pending_delete)
    }

    /// End the session, handing it back to the caller.
    pub fn take(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Reset to Idle state, releasing any capture
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
