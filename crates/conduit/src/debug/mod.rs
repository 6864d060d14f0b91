//! Debug-draw boundary shared by the XC2 and XCDE hosts.
//!
//! Call sites are shared; renderers are not. Each host provides its own
//! [`DebugDraw`] implementation and either passes it around directly or
//! installs it once as the process-wide host behind [`draw_square_2d`].

mod host;

pub use host::{HostAlreadyInstalled, draw_square_2d, install, is_installed};

use crate::mm::{Color, Point};

/// A host renderer that can draw debug overlays.
pub trait DebugDraw {
    /// Draws the axis-aligned rectangle spanned by two opposite corners.
    ///
    /// Despite the name, the corners need not form a square. The call cannot
    /// fail: an implementation whose backend is unavailable drops the draw.
    /// Identical calls are independent draws and must not be deduplicated.
    /// When the draw becomes visible (immediately or at frame end) is up to
    /// the implementation.
    fn draw_square_2d(&mut self, corner1: Point<i32>, corner2: Point<i32>, color: Color);
}

impl<T: DebugDraw + ?Sized> DebugDraw for &mut T {
    #[inline]
    fn draw_square_2d(&mut self, corner1: Point<i32>, corner2: Point<i32>, color: Color) {
        (**self).draw_square_2d(corner1, corner2, color);
    }
}

impl<T: DebugDraw + ?Sized> DebugDraw for Box<T> {
    #[inline]
    fn draw_square_2d(&mut self, corner1: Point<i32>, corner2: Point<i32>, color: Color) {
        (**self).draw_square_2d(corner1, corner2, color);
    }
}
