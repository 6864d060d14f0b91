use conduit::{Color, Rect};

/// The game-side debug renderer XC2 draws into.
///
/// Builds of the game do not all export every hook, so only the color and fill
/// entry points are required. Each optional hook reports its own absence.
pub trait Xc2Backend {
    /// Whether the render context exists yet. Draws before that are dropped.
    fn is_ready(&self) -> bool;

    fn set_color(&mut self, color: &Color);

    fn rect_fill(&mut self, rect: &Rect);

    /// Whether [`rect_outline`](Self::rect_outline) reaches the game.
    fn supports_outline(&self) -> bool {
        false
    }

    fn rect_outline(&mut self, _rect: &Rect) {}

    fn screen_width(&self) -> Option<u32> {
        None
    }

    fn screen_height(&self) -> Option<u32> {
        None
    }
}

impl<B: Xc2Backend + ?Sized> Xc2Backend for &mut B {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn set_color(&mut self, color: &Color) {
        (**self).set_color(color);
    }

    fn rect_fill(&mut self, rect: &Rect) {
        (**self).rect_fill(rect);
    }

    fn supports_outline(&self) -> bool {
        (**self).supports_outline()
    }

    fn rect_outline(&mut self, rect: &Rect) {
        (**self).rect_outline(rect);
    }

    fn screen_width(&self) -> Option<u32> {
        (**self).screen_width()
    }

    fn screen_height(&self) -> Option<u32> {
        (**self).screen_height()
    }
}
