//! Coordinate conversion between window space and board space.
//!
//! The board is drawn below the header bar, so window positions reported by
//! the platform are offset from the board coordinates notes are stored in.

use crate::constants::HEADER_HEIGHT;
use crate::types::Position;

/// Where the board's origin sits inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateContext {
    pub board_origin: Position,
}

impl CoordinateContext {
    #[inline]
    pub fn new(board_origin: Position) -> Self {
        Self { board_origin }
    }

    /// Board placed directly under the header bar.
    #[inline]
    pub fn below_header() -> Self {
        Self::new(Position::new(0.0, HEADER_HEIGHT))
    }
}

impl Default for CoordinateContext {
    fn default() -> Self {
        Self::below_header()
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert window position to board position
    #[inline]
    pub fn window_to_board(window_pos: Position, ctx: &CoordinateContext) -> Position {
        Position::new(
            window_pos.x - ctx.board_origin.x,
            window_pos.y - ctx.board_origin.y,
        )
    }
}
