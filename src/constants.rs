//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Note Geometry
// ============================================================================

/// Minimum note width enforced while resizing
pub const MIN_NOTE_WIDTH: f32 = 150.0;

/// Minimum note height enforced while resizing
pub const MIN_NOTE_HEIGHT: f32 = 100.0;

/// Side of the square resize handle anchored at a note's bottom-right corner
pub const RESIZE_HANDLE_SIZE: f32 = 20.0;

/// Small size class (width, height)
pub const SMALL_NOTE_SIZE: (f32, f32) = (200.0, 150.0);

/// Medium size class (width, height)
pub const MEDIUM_NOTE_SIZE: (f32, f32) = (250.0, 200.0);

/// Large size class (width, height)
pub const LARGE_NOTE_SIZE: (f32, f32) = (300.0, 250.0);

// ============================================================================
// Colors
// ============================================================================

/// Fixed note palette: yellow, pink, blue, green, orange, purple
pub const NOTE_PALETTE: [&str; 6] = [
    "#FFE066", "#FF9999", "#99CCFF", "#99FF99", "#FFCC99", "#CC99FF",
];

// ============================================================================
// Persistence
// ============================================================================

/// Default key the note collection is stored under
pub const DEFAULT_STORAGE_KEY: &str = "sticky-notes";

/// Application directory name under the platform config/data dirs
pub const APP_DIR_NAME: &str = "stickyboard";

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 40.0;

/// Default side length of the square trash target
pub const DEFAULT_TRASH_SIZE: f32 = 80.0;

/// Default distance of the trash target from the bottom-right window corner
pub const DEFAULT_TRASH_MARGIN: f32 = 20.0;

/// Width reserved for the create prompt when clamping its placement
pub const PROMPT_WIDTH: f32 = 300.0;

/// Height reserved for the create prompt when clamping its placement
pub const PROMPT_HEIGHT: f32 = 400.0;

/// Opacity of the modal backdrop behind the create prompt
pub const MODAL_BACKDROP_OPACITY: f32 = 0.4;

// ============================================================================
// Logging
// ============================================================================

/// Default tracing filter when neither settings nor `RUST_LOG` provide one
pub const DEFAULT_LOG_FILTER: &str = "info";
