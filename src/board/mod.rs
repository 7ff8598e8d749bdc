//! Board surface - owns the notes and routes pointer and keyboard input.
//!
//! The surface holds the note store, the drag controller, the trash target,
//! and at most one of each transient interaction: a text edit session and a
//! create prompt. Frontends feed it board-space pointer positions and key
//! presses and render from its queries.

mod editing;
mod prompt;

pub use editing::{EditAction, EditSession, Key, KeyInput};
pub use prompt::CreatePrompt;

use crate::geometry::Rect;
use crate::input::{DragController, DragMode, DragOutcome, DragUpdate};
use crate::profile_scope;
use crate::store::NoteStore;
use crate::types::{Note, NotePatch, NoteSize, Position};

/// What a pointer press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerDown {
    /// Press had no effect
    Ignored,
    /// A drag session started on the note
    DragStarted { note_id: String, mode: DragMode },
    /// Text editing started on the note
    EditStarted { note_id: String },
    /// The create prompt opened at the press position
    PromptOpened,
}

pub struct BoardSurface {
    store: NoteStore,
    drag: DragController,
    trash: Rect,
    editing: Option<EditSession>,
    prompt: Option<CreatePrompt>,
}

impl BoardSurface {
    pub fn new(store: NoteStore, trash: Rect) -> Self {
        Self {
            store,
            drag: DragController::new(),
            trash,
            editing: None,
            prompt: None,
        }
    }

    /// Called with the note id whenever a drag session releases its pointer capture.
    pub fn set_capture_release_hook(&mut self, hook: impl Fn(&str) + 'static) {
        self.drag.set_release_hook(hook);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Notes in paint order.
    pub fn notes_by_z(&self) -> Vec<&Note> {
        self.store.notes_by_z()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn trash_rect(&self) -> Rect {
        self.trash
    }

    pub fn set_trash_rect(&mut self, rect: Rect) {
        self.trash = rect;
    }

    /// Pointer move/up must be routed here regardless of hover target.
    pub fn is_capturing(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn dragging_note(&self) -> Option<&str> {
        self.drag.dragged_note_id()
    }

    /// The dragged note currently overlaps the trash target.
    pub fn is_over_trash(&self) -> bool {
        self.drag.state().is_pending_delete()
    }

    pub fn is_pending_delete(&self, note_id: &str) -> bool {
        self.drag.is_pending_delete(note_id)
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, note_id: &str) -> bool {
        self.editing.as_ref().is_some_and(|e| e.note_id() == note_id)
    }

    pub fn prompt(&self) -> Option<&CreatePrompt> {
        self.prompt.as_ref()
    }

    // ========================================================================
    // Note lifecycle
    // ========================================================================

    pub fn create_note(&mut self, size: NoteSize, position: Position, color: Option<&str>) -> Note {
        self.store.create(size, position, color)
    }

    pub fn update_note(&mut self, id: &str, patch: NotePatch) -> bool {
        self.store.update(id, patch)
    }

    pub fn delete_note(&mut self, id: &str) -> bool {
        if self.is_editing(id) {
            self.editing = None;
        }
        self.store.delete(id)
    }

    pub fn bring_to_front(&mut self, id: &str) -> bool {
        self.store.bring_to_front(id)
    }

    // ========================================================================
    // Pointer boundary
    // ========================================================================

    /// Handle a pointer press at a board position.
    ///
    /// `click_count` is 2 for the second press of a double-click.
    pub fn pointer_down(&mut self, point: Position, click_count: usize) -> PointerDown {
        profile_scope!("pointer_down");

        if self.prompt.is_some() {
            return PointerDown::Ignored;
        }

        if let Some(edit) = &self.editing {
            let inside = self
                .store
                .get(edit.note_id())
                .is_some_and(|note| note.rect().contains(point));
            // The edited note's own resize handle stays live while typing
            let on_own_handle = self
                .store
                .note_at(point)
                .is_some_and(|hit| hit.on_resize_handle && hit.note_id == edit.note_id());
            if inside && !on_own_handle {
                return PointerDown::Ignored;
            }
            if !inside {
                self.blur();
            }
        }

        if self.drag.is_dragging() {
            tracing::debug!("Pointer down during active drag ignored");
            return PointerDown::Ignored;
        }

        let Some(hit) = self.store.note_at(point) else {
            self.open_prompt(point);
            return PointerDown::PromptOpened;
        };

        if click_count >= 2 && !hit.on_resize_handle {
            self.begin_edit(&hit.note_id);
            return PointerDown::EditStarted {
                note_id: hit.note_id,
            };
        }

        let mode = if hit.on_resize_handle {
            DragMode::Resize
        } else {
            DragMode::Move
        };
        if self.drag.begin(&mut self.store, &hit.note_id, mode, point) {
            PointerDown::DragStarted {
                note_id: hit.note_id,
                mode,
            }
        } else {
            PointerDown::Ignored
        }
    }

    /// Handle a pointer move at a board position. `None` when not dragging.
    pub fn pointer_move(&mut self, point: Position) -> Option<DragUpdate> {
        self.drag.update(&mut self.store, point, self.trash)
    }

    /// Handle pointer release. `None` when not dragging.
    pub fn pointer_up(&mut self) -> Option<DragOutcome> {
        let outcome = self.drag.finish(&mut self.store)?;
        if outcome.deleted && self.is_editing(&outcome.note_id) {
            self.editing = None;
        }
        Some(outcome)
    }

    /// Drop any drag session without committing a trash delete.
    pub fn cancel_drag(&mut self) {
        self.drag.reset();
    }

    // ========================================================================
    // Text editing
    // ========================================================================

    /// Start editing `note_id`, committing any other edit first.
    pub fn begin_edit(&mut self, note_id: &str) -> bool {
        if self.is_editing(note_id) {
            return true;
        }
        let Some(content) = self.store.get(note_id).map(|n| n.content.clone()) else {
            return false;
        };
        if self.editing.is_some() {
            self.commit_edit();
        }
        self.editing = Some(EditSession::new(note_id, content));
        true
    }

    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.set_draft(text);
        }
    }

    /// Store the draft and stamp `updated_at`. Returns false if nothing was edited.
    pub fn commit_edit(&mut self) -> bool {
        let Some(edit) = self.editing.take() else {
            return false;
        };
        let note_id = edit.note_id().to_string();
        self.store.update(&note_id, NotePatch::content(edit.into_draft()))
    }

    /// Discard the draft. Returns false if nothing was edited.
    pub fn cancel_edit(&mut self) -> bool {
        self.editing.take().is_some()
    }

    /// The text field lost focus.
    pub fn blur(&mut self) -> bool {
        self.commit_edit()
    }

    // ========================================================================
    // Keyboard boundary
    // ========================================================================

    /// Handle a key press. Returns true if the key was consumed.
    pub fn key_down(&mut self, input: &KeyInput) -> bool {
        if self.prompt.is_some() {
            return match input.key {
                Key::Escape => self.dismiss_prompt(),
                Key::Enter => self.confirm_create().is_some(),
                _ => false,
            };
        }

        let Some(edit) = self.editing.as_mut() else {
            return false;
        };
        match edit.handle_key(input) {
            EditAction::Commit => self.commit_edit(),
            EditAction::Cancel => self.cancel_edit(),
            EditAction::Changed => true,
            EditAction::Ignored => false,
        }
    }

    // ========================================================================
    // Create prompt
    // ========================================================================

    pub fn open_prompt(&mut self, anchor: Position) {
        self.prompt = Some(CreatePrompt::new(anchor));
    }

    pub fn select_prompt_size(&mut self, size: NoteSize) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.select_size(size);
        }
    }

    pub fn select_prompt_color(&mut self, color: &str) -> bool {
        self.prompt.as_mut().is_some_and(|p| p.select_color(color))
    }

    /// Create the prompted note and close the prompt.
    pub fn confirm_create(&mut self) -> Option<Note> {
        let prompt = self.prompt.take()?;
        Some(
            self.store
                .create(prompt.size, prompt.anchor, Some(prompt.color.as_str())),
        )
    }

    /// Close the prompt without creating anything.
    pub fn dismiss_prompt(&mut self) -> bool {
        self.prompt.take().is_some()
    }
}
