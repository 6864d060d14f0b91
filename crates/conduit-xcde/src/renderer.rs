use conduit::scene::{DebugCmd, DrawList};
use conduit::{Color, DebugDraw, Point};

use crate::XcdeBackend;

#[derive(Debug, Clone)]
pub struct XcdeConfig {
    /// Per-frame queue limit. Draws past it are dropped until the next frame.
    pub max_queued: usize,
}

impl Default for XcdeConfig {
    fn default() -> Self {
        Self { max_queued: 1024 }
    }
}

/// Outcome of one [`XcdeRenderer::end_frame`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub submitted: usize,
    pub rejected: usize,
    pub dropped: usize,
}

/// Deferred [`DebugDraw`] host for XCDE.
#[derive(Debug, Default)]
pub struct XcdeRenderer {
    queue: DrawList,
    config: XcdeConfig,
    dropped: usize,
}

impl XcdeRenderer {
    pub fn new() -> Self {
        Self::with_config(XcdeConfig::default())
    }

    pub fn with_config(config: XcdeConfig) -> Self {
        Self {
            queue: DrawList::with_capacity(config.max_queued.min(256)),
            config,
            dropped: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &XcdeConfig {
        &self.config
    }

    /// Draws queued for the current frame.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Draws dropped this frame because the queue was full.
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Submits the frame's queue to `backend` in call order and starts a new frame.
    pub fn end_frame<B: XcdeBackend + ?Sized>(&mut self, backend: &mut B) -> FrameStats {
        let mut stats = FrameStats { dropped: self.dropped, ..Default::default() };

        for cmd in self.queue.drain() {
            match cmd {
                DebugCmd::Square(square) => {
                    if backend.draw_rect(&square.rect(), &square.color) {
                        stats.submitted += 1;
                    } else {
                        stats.rejected += 1;
                    }
                }
            }
        }
        self.dropped = 0;

        if stats.rejected > 0 || stats.dropped > 0 {
            log::debug!("xcde debug frame: {stats:?}");
        }
        stats
    }

    /// Throws away the current frame without submitting it.
    pub fn discard_frame(&mut self) {
        self.queue.clear();
        self.dropped = 0;
    }
}

impl DebugDraw for XcdeRenderer {
    fn draw_square_2d(&mut self, corner1: Point<i32>, corner2: Point<i32>, color: Color) {
        if self.queue.len() >= self.config.max_queued {
            if self.dropped == 0 {
                log::warn!("xcde debug queue full ({}); dropping draws", self.config.max_queued);
            }
            self.dropped += 1;
            return;
        }
        self.queue.push_square(corner1, corner2, color);
    }
}
