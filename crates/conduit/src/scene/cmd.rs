use crate::mm::{Color, Point, Rect};

/// One `draw_square_2d` call, as issued.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SquareCmd {
    pub corner1: Point,
    pub corner2: Point,
    pub color: Color,
}

impl SquareCmd {
    #[inline]
    pub const fn new(corner1: Point, corner2: Point, color: Color) -> Self {
        Self { corner1, corner2, color }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.corner1, self.corner2)
    }
}

/// Renderer-agnostic debug command stream.
///
/// New debug shapes get a variant here and a matching arm in each host's
/// flush.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DebugCmd {
    Square(SquareCmd),
}
