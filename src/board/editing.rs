//! Text edit session for a single note.
//!
//! Entered by double-clicking a note. Ctrl+Enter and blur commit the draft;
//! Escape discards it and leaves the note's content as it was.

/// Keys the board reacts to while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Backspace,
    /// Printable input, already composed by the platform
    Text(String),
    Other,
}

/// A key press with the modifier the board cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn with_ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}

/// What a key press means for the edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Write the draft to the note and end the session
    Commit,
    /// Discard the draft and end the session
    Cancel,
    /// Draft changed
    Changed,
    /// Key not handled
    Ignored,
}

/// In-progress edit of one note's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    note_id: String,
    original: String,
    draft: String,
}

impl EditSession {
    pub fn new(note_id: impl Into<String>, content: impl Into<String>) -> Self {
        let original = content.into();
        Self {
            note_id: note_id.into(),
            draft: original.clone(),
            original,
        }
    }

    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_modified(&self) -> bool {
        self.draft != self.original
    }

    pub fn insert(&mut self, text: &str) {
        self.draft.push_str(text);
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Consume the session, yielding the text to store.
    pub fn into_draft(self) -> String {
        self.draft
    }

    /// Apply a key press to the draft.
    pub fn handle_key(&mut self, input: &KeyInput) -> EditAction {
        match &input.key {
            Key::Enter if input.ctrl => EditAction::Commit,
            Key::Enter => {
                self.insert("\n");
                EditAction::Changed
            }
            Key::Escape => EditAction::Cancel,
            Key::Backspace => {
                self.backspace();
                EditAction::Changed
            }
            Key::Text(text) if !input.ctrl => {
                self.insert(text);
                EditAction::Changed
            }
            Key::Text(_) | Key::Other => EditAction::Ignored,
        }
    }
}
