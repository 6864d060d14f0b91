//! Conduit shared crate.
//!
//! Geometry and color primitives plus the debug-draw boundary that both the
//! XC2 and XCDE hosts implement against their own renderers.

pub mod debug;
pub mod logging;
pub mod mm;
pub mod scene;

pub use debug::DebugDraw;
pub use mm::{Color, Point, Rect};
