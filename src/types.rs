//! Core types for the sticky-notes board.
//!
//! This module defines the note record as it is persisted, the size classes
//! offered at creation time, and the partial-update patch applied by the store.

use crate::constants::{LARGE_NOTE_SIZE, MEDIUM_NOTE_SIZE, NOTE_PALETTE, SMALL_NOTE_SIZE};
use crate::geometry::Rect;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

// ============================================================================
// Geometry Primitives
// ============================================================================

/// A point on the board, in pixels, relative to the board's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ============================================================================
// Size Classes
// ============================================================================

/// Named size class offered by the create prompt.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl NoteSize {
    /// Concrete pixel dimensions for this size class.
    pub fn dimensions(&self) -> Size {
        let (width, height) = match self {
            NoteSize::Small => SMALL_NOTE_SIZE,
            NoteSize::Medium => MEDIUM_NOTE_SIZE,
            NoteSize::Large => LARGE_NOTE_SIZE,
        };
        Size::new(width, height)
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoteSize::Small => "Small",
            NoteSize::Medium => "Medium",
            NoteSize::Large => "Large",
        }
    }

    pub fn all() -> &'static [NoteSize] {
        &[NoteSize::Small, NoteSize::Medium, NoteSize::Large]
    }
}

// ============================================================================
// Notes
// ============================================================================

/// A sticky note on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Opaque unique identifier
    pub id: String,
    /// Top-left corner on the board
    pub position: Position,
    /// Current dimensions
    pub size: Size,
    /// Free text body
    pub content: String,
    /// Background color as `#RRGGBB`
    pub color: String,
    /// Paint order, higher draws on top
    pub z_index: i64,
    /// Creation time, milliseconds since the Unix epoch
    pub created_at: u64,
    /// Last content edit, milliseconds since the Unix epoch
    pub updated_at: u64,
}

impl Note {
    /// Bounding rectangle used for hit testing and trash overlap.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Merge the present fields of `patch` into this note.
    pub fn apply(&mut self, patch: NotePatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(z_index) = patch.z_index {
            self.z_index = z_index;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
    }
}

/// Partial update for a note. Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotePatch {
    pub position: Option<Position>,
    pub size: Option<Size>,
    pub content: Option<String>,
    pub color: Option<String>,
    pub z_index: Option<i64>,
    pub updated_at: Option<u64>,
}

impl NotePatch {
    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn size(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn z_index(z_index: i64) -> Self {
        Self {
            z_index: Some(z_index),
            ..Default::default()
        }
    }

    /// Content edit; stamps `updated_at` with the current time.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            updated_at: Some(now_millis()),
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Fresh opaque note id.
pub fn generate_note_id() -> String {
    format!("note-{}", uuid::Uuid::new_v4())
}

/// Uniformly random palette color.
pub fn random_palette_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    NOTE_PALETTE.choose(rng).copied().unwrap_or(NOTE_PALETTE[0])
}

/// Returns true if `color` is one of the fixed palette entries (case-insensitive).
pub fn is_palette_color(color: &str) -> bool {
    NOTE_PALETTE.iter().any(|c| c.eq_ignore_ascii_case(color))
}
