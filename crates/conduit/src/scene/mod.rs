//! Recorded debug draws.
//!
//! Responsibilities:
//! - store renderer-agnostic debug commands in call order
//! - let deferred hosts queue a frame and replay it against their backend

mod cmd;
mod list;

pub use cmd::{DebugCmd, SquareCmd};
pub use list::DrawList;
