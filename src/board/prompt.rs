//! Create prompt - the size/color chooser opened by clicking empty board space.

use crate::constants::{NOTE_PALETTE, PROMPT_HEIGHT, PROMPT_WIDTH};
use crate::types::{NoteSize, Position, Size, is_palette_color};

/// Pending note creation anchored where the board was clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePrompt {
    /// Where the note will be created
    pub anchor: Position,
    /// Selected size class
    pub size: NoteSize,
    /// Selected palette color
    pub color: String,
}

impl CreatePrompt {
    /// Prompt at `anchor` with medium size and the first palette color.
    pub fn new(anchor: Position) -> Self {
        Self {
            anchor,
            size: NoteSize::default(),
            color: NOTE_PALETTE[0].to_string(),
        }
    }

    pub fn select_size(&mut self, size: NoteSize) {
        self.size = size;
    }

    /// Select a palette color. Colors outside the palette are ignored.
    pub fn select_color(&mut self, color: &str) -> bool {
        if !is_palette_color(color) {
            return false;
        }
        self.color = color.to_string();
        true
    }

    /// Top-left of the prompt box, kept inside a viewport of the given size.
    pub fn placement(&self, viewport: Size) -> Position {
        Position::new(
            self.anchor.x.min(viewport.width - PROMPT_WIDTH).max(0.0),
            self.anchor.y.min(viewport.height - PROMPT_HEIGHT).max(0.0),
        )
    }
}
