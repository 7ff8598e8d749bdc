//! Stickyboard - a freeform sticky-notes board.
//!
//! Notes are created on an open canvas, dragged, resized from their
//! bottom-right corner, edited in place, and deleted by dropping them onto a
//! trash target. The whole collection is persisted after every change.
//!
//! ## Layout
//!
//! - `types` - Note record, size classes, partial updates
//! - `geometry` - Rectangle overlap and containment
//! - `spatial_index` - R-tree for pointer hit testing
//! - `storage` - Key-value persistence boundary
//! - `store` - Ordered note collection
//! - `input` - Drag state machine and pointer capture
//! - `board` - Board surface: pointer/keyboard routing, editing, create prompt
//! - `settings` - User settings
//! - `ui` - Desktop frontend (feature `gui`)

pub mod board;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod spatial_index;
pub mod storage;
pub mod store;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;

pub use board::BoardSurface;
pub use store::NoteStore;
