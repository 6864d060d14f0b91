//! XC2 host adapter.
//!
//! XC2's debug renderer is immediate mode and stateful: a color is set on the
//! render context first, then a rect primitive is issued against it. Draws
//! become visible in the frame they are issued.

mod backend;
mod renderer;

pub use backend::Xc2Backend;
pub use renderer::{SquareStyle, Xc2Config, Xc2Renderer};
