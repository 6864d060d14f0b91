use bytemuck::{Pod, Zeroable};

use super::Point;

/// Axis-aligned rectangle in screen pixels, laid out the way the host
/// renderers take it: signed origin, unsigned extent.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds the rectangle spanned by two opposite corners, in either order.
    ///
    /// The corners do not have to describe a square.
    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: a.x.abs_diff(b.x),
            height: a.y.abs_diff(b.y),
        }
    }

    #[inline]
    pub const fn from_point_dimensions(origin: Point, (width, height): (u32, u32)) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    #[inline]
    pub const fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Corner opposite to the origin. Saturates at `i32::MAX`.
    #[inline]
    pub fn far_corner(self) -> Point {
        Point::new(
            self.x.saturating_add_unsigned(self.width),
            self.y.saturating_add_unsigned(self.height),
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Informational only; non-square rects are drawn like any other.
    #[inline]
    pub fn is_square(self) -> bool {
        self.width == self.height
    }
}
