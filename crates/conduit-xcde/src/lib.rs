//! XCDE host adapter.
//!
//! XCDE only accepts debug primitives while its frame is being composed, so
//! draws are queued as they arrive and submitted by [`XcdeRenderer::end_frame`].

mod backend;
mod renderer;

pub use backend::XcdeBackend;
pub use renderer::{FrameStats, XcdeConfig, XcdeRenderer};
