use crate::debug::DebugDraw;
use crate::mm::{Color, Point};

use super::{DebugCmd, SquareCmd};

/// Recorded debug draws for a frame, in call order.
///
/// `push()` is O(1). [`clear`](Self::clear) and [`drain`](Self::drain) keep
/// the allocation for the next frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DebugCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in call order.
    #[inline]
    pub fn items(&self) -> &[DebugCmd] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, cmd: DebugCmd) {
        self.items.push(cmd);
    }

    #[inline]
    pub fn push_square(&mut self, corner1: Point, corner2: Point, color: Color) {
        self.push(DebugCmd::Square(SquareCmd::new(corner1, corner2, color)));
    }

    /// Removes and yields all items in call order.
    #[inline]
    pub fn drain(&mut self) -> impl Iterator<Item = DebugCmd> + '_ {
        self.items.drain(..)
    }
}

impl DebugDraw for DrawList {
    #[inline]
    fn draw_square_2d(&mut self, corner1: Point<i32>, corner2: Point<i32>, color: Color) {
        self.push_square(corner1, corner2, color);
    }
}
