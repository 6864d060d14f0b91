use conduit::{Color, DebugDraw, Point, Rect};

use crate::Xc2Backend;

/// How a debug square is rasterized by the game renderer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SquareStyle {
    #[default]
    Fill,
    Outline,
}

#[derive(Debug, Clone)]
pub struct Xc2Config {
    pub style: SquareStyle,
    /// Used when the backend cannot report the screen size.
    pub fallback_screen: (u32, u32),
}

impl Default for Xc2Config {
    fn default() -> Self {
        Self {
            style: SquareStyle::Fill,
            fallback_screen: (1280, 720),
        }
    }
}

/// Immediate-mode [`DebugDraw`] host for XC2.
#[derive(Debug)]
pub struct Xc2Renderer<B> {
    backend: B,
    config: Xc2Config,
    draws_issued: u64,
}

impl<B: Xc2Backend> Xc2Renderer<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, Xc2Config::default())
    }

    pub fn with_config(backend: B, config: Xc2Config) -> Self {
        log::debug!("xc2 debug renderer created ({:?})", config.style);
        Self { backend, config, draws_issued: 0 }
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[inline]
    pub fn config(&self) -> &Xc2Config {
        &self.config
    }

    /// Screen size reported by the game. Each axis falls back to the
    /// configured size on its own.
    pub fn screen_dimensions(&self) -> (u32, u32) {
        let (fallback_w, fallback_h) = self.config.fallback_screen;
        (
            self.backend.screen_width().unwrap_or(fallback_w),
            self.backend.screen_height().unwrap_or(fallback_h),
        )
    }

    /// Number of draws that reached the backend.
    #[inline]
    pub fn draws_issued(&self) -> u64 {
        self.draws_issued
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: Xc2Backend> DebugDraw for Xc2Renderer<B> {
    fn draw_square_2d(&mut self, corner1: Point<i32>, corner2: Point<i32>, color: Color) {
        if !self.backend.is_ready() {
            log::trace!("xc2 render context not ready; dropping debug square");
            return;
        }

        let style = self.config.style;
        if style == SquareStyle::Outline && !self.backend.supports_outline() {
            // The color is context state; leave it untouched for a draw that never happens.
            log::trace!("xc2 build has no outline hook; dropping debug square");
            return;
        }

        let rect = Rect::from_corners(corner1, corner2);
        self.backend.set_color(&color);
        match style {
            SquareStyle::Fill => self.backend.rect_fill(&rect),
            SquareStyle::Outline => self.backend.rect_outline(&rect),
        }
        self.draws_issued += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Color(Color),
        Fill(Rect),
        Outline(Rect),
    }

    #[derive(Debug, Default)]
    struct Recorder {
        ready: bool,
        width: Option<u32>,
        height: Option<u32>,
        calls: Vec<Call>,
    }

    impl Recorder {
        fn ready() -> Self {
            Self { ready: true, ..Default::default() }
        }
    }

    impl Xc2Backend for Recorder {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn set_color(&mut self, color: &Color) {
            self.calls.push(Call::Color(*color));
        }

        fn rect_fill(&mut self, rect: &Rect) {
            self.calls.push(Call::Fill(*rect));
        }

        fn supports_outline(&self) -> bool {
            true
        }

        fn rect_outline(&mut self, rect: &Rect) {
            self.calls.push(Call::Outline(*rect));
        }

        fn screen_width(&self) -> Option<u32> {
            self.width
        }

        fn screen_height(&self) -> Option<u32> {
            self.height
        }
    }

    /// Implements only the required hooks.
    #[derive(Debug, Default)]
    struct FillOnly {
        colors: Vec<Color>,
        rects: Vec<Rect>,
    }

    impl Xc2Backend for FillOnly {
        fn is_ready(&self) -> bool {
            true
        }

        fn set_color(&mut self, color: &Color) {
            self.colors.push(*color);
        }

        fn rect_fill(&mut self, rect: &Rect) {
            self.rects.push(*rect);
        }
    }

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn sets_color_before_fill() {
        let mut r = Xc2Renderer::new(Recorder::ready());
        r.draw_square_2d(p(0, 0), p(10, 10), Color::new(1.0, 0.0, 0.0, 1.0));

        assert_eq!(
            r.backend().calls,
            vec![Call::Color(Color::red()), Call::Fill(Rect::new(0, 0, 10, 10))]
        );
        assert_eq!(r.draws_issued(), 1);
    }

    #[test]
    fn outline_style_uses_outline_hook() {
        let cfg = Xc2Config { style: SquareStyle::Outline, ..Default::default() };
        let mut r = Xc2Renderer::with_config(Recorder::ready(), cfg);
        r.draw_square_2d(p(10, 5), p(0, 0), Color::green());

        assert_eq!(
            r.backend().calls,
            vec![Call::Color(Color::green()), Call::Outline(Rect::new(0, 0, 10, 5))]
        );
    }

    #[test]
    fn non_square_is_drawn_as_is() {
        let mut r = Xc2Renderer::new(FillOnly::default());
        r.draw_square_2d(p(0, 0), p(10, 5), Color::blue());
        assert_eq!(r.into_backend().rects, vec![Rect::new(0, 0, 10, 5)]);
    }

    #[test]
    fn repeated_calls_each_draw() {
        let mut r = Xc2Renderer::new(Recorder::ready());
        r.draw_square_2d(p(1, 1), p(4, 4), Color::white());
        r.draw_square_2d(p(1, 1), p(4, 4), Color::white());
        assert_eq!(r.draws_issued(), 2);
        assert_eq!(r.backend().calls.len(), 4);
    }

    #[test]
    fn missing_outline_hook_is_silent() {
        let cfg = Xc2Config { style: SquareStyle::Outline, ..Default::default() };
        let mut r = Xc2Renderer::with_config(FillOnly::default(), cfg);
        r.draw_square_2d(p(0, 0), p(3, 3), Color::black());

        // Neither the primitive nor its color reach the context, and nothing is counted.
        assert!(r.backend().rects.is_empty());
        assert!(r.backend().colors.is_empty());
        assert_eq!(r.draws_issued(), 0);
    }

    // ── not ready ─────────────────────────────────────────────────────────

    #[test]
    fn not_ready_drops_draw() {
        let mut r = Xc2Renderer::new(Recorder::default());
        r.draw_square_2d(p(0, 0), p(10, 10), Color::red());
        assert!(r.backend().calls.is_empty());
        assert_eq!(r.draws_issued(), 0);

        r.backend_mut().ready = true;
        r.draw_square_2d(p(0, 0), p(10, 10), Color::red());
        assert_eq!(r.draws_issued(), 1);
    }

    // ── screen ────────────────────────────────────────────────────────────

    #[test]
    fn screen_falls_back_to_config() {
        let r = Xc2Renderer::new(Recorder::ready());
        assert_eq!(r.screen_dimensions(), (1280, 720));
    }

    #[test]
    fn screen_prefers_backend() {
        let backend = Recorder { width: Some(1920), height: Some(1080), ..Recorder::ready() };
        let r = Xc2Renderer::new(backend);
        assert_eq!(r.screen_dimensions(), (1920, 1080));
    }

    #[test]
    fn screen_falls_back_per_axis() {
        let only_width = Recorder { width: Some(1920), ..Recorder::ready() };
        assert_eq!(Xc2Renderer::new(only_width).screen_dimensions(), (1920, 720));

        let only_height = Recorder { height: Some(1080), ..Recorder::ready() };
        assert_eq!(Xc2Renderer::new(only_height).screen_dimensions(), (1280, 1080));
    }

    #[test]
    fn borrowed_backend_works() {
        let mut rec = Recorder::ready();
        {
            let mut r = Xc2Renderer::new(&mut rec);
            r.draw_square_2d(p(0, 0), p(2, 2), Color::red());
        }
        assert_eq!(rec.calls.len(), 2);
    }
}
