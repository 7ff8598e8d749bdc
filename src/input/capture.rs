//! Scoped pointer capture for a drag session.
//!
//! While a note is being dragged, pointer-move and pointer-up events are
//! routed to the board regardless of what is under the pointer. The capture
//! is held by the live session and released when the session is dropped, so
//! every ending path (pointer-up, reset, replacement, teardown) releases it
//! exactly once.

use std::fmt;

type ReleaseHook = Box<dyn FnMut(&str)>;

/// RAII guard representing the global pointer routing of one drag session.
pub struct PointerCapture {
    note_id: String,
    on_release: Option<ReleaseHook>,
}

impl PointerCapture {
    /// Capture with no release hook.
    pub fn new(note_id: impl Into<String>) -> Self {
        Self {
            note_id: note_id.into(),
            on_release: None,
        }
    }

    /// Capture that calls `on_release` with the note id when dropped.
    pub fn with_release_hook(note_id: impl Into<String>, on_release: ReleaseHook) -> Self {
        Self {
            note_id: note_id.into(),
            on_release: Some(on_release),
        }
    }

    pub fn note_id(&self) -> &str {
        &self.note_id
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        tracing::trace!(note = %self.note_id, "Pointer capture released");
        if let Some(mut hook) = self.on_release.take() {
            hook(&self.note_id);
        }
    }
}

impl fmt::Debug for PointerCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerCapture")
            .field("note_id", &self.note_id)
            .field("has_hook", &self.on_release.is_some())
            .finish()
    }
}
