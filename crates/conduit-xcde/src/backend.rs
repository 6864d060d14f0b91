use conduit::{Color, Rect};

/// XCDE's debug primitive sink. Color travels with each primitive.
pub trait XcdeBackend {
    /// Returns `false` when the primitive was not accepted (e.g. the debug
    /// layer is disabled for this frame).
    fn draw_rect(&mut self, rect: &Rect, color: &Color) -> bool;
}

impl<B: XcdeBackend + ?Sized> XcdeBackend for &mut B {
    fn draw_rect(&mut self, rect: &Rect, color: &Color) -> bool {
        (**self).draw_rect(rect, color)
    }
}
