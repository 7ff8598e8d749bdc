//! Pointer input handling for the board.
//!
//! This module implements the drag interaction for notes: moving, resizing,
//! and dropping onto the trash target.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`DragState`) owned by a
//! `DragController`. At most one session exists; it carries a
//! `PointerCapture` guard that is released on every path that ends it.
//!
//! ## Modules
//!
//! - `state` - Drag state machine enum and session record
//! - `capture` - Scoped pointer capture guard
//! - `drag` - Session start, pointer move and release handling
//! - `coords` - Window/board coordinate conversion

pub mod coords;
mod capture;
mod drag;
mod state;

pub use capture::PointerCapture;
pub use drag::{DragController, DragOutcome, DragUpdate, moved_position, resized_size};
pub use state::{DragMode, DragSession, DragState};
