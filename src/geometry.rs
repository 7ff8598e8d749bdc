//! Axis-aligned rectangle helpers for hit testing and trash overlap.

use crate::types::{Position, Size};

/// Axis-aligned rectangle in board pixels.
///
/// Any four numbers form a valid rectangle, including degenerate ones
/// (zero or negative extent).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Rectangle spanning `origin` to `origin + size`.
    pub fn from_origin_size(origin: Position, size: Size) -> Self {
        Self {
            left: origin.x,
            right: origin.x + size.width,
            top: origin.y,
            bottom: origin.y + size.height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Inclusive point containment.
    #[inline]
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// Axis-aligned overlap test.
///
/// Disjoint only when one rectangle lies strictly to one side of the other,
/// so rectangles sharing an edge overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.right < b.left || a.left > b.right || a.bottom < b.top || a.top > b.bottom)
}
