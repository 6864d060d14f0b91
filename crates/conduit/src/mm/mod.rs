//! Plain value types shared by both hosts.
//!
//! Screen space follows the hosts' debug renderers:
//! - integer pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! All types are `#[repr(C)]` so they can cross into a foreign renderer as-is.

mod color;
mod point;
mod rect;

pub use color::Color;
pub use point::Point;
pub use rect::Rect;
