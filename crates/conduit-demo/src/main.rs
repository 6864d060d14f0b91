use anyhow::{Context, Result, bail};

use conduit::logging::{LoggingConfig, init_logging};
use conduit::{Color, DebugDraw, Point, Rect, debug};
use conduit_xc2::{SquareStyle, Xc2Backend, Xc2Config, Xc2Renderer};
use conduit_xcde::{XcdeBackend, XcdeRenderer};

/// Stands in for XC2's render context; logs every primitive.
#[derive(Debug, Default)]
struct LogXc2 {
    color: Color,
}

impl Xc2Backend for LogXc2 {
    fn is_ready(&self) -> bool {
        true
    }

    fn set_color(&mut self, color: &Color) {
        self.color = *color;
    }

    fn rect_fill(&mut self, rect: &Rect) {
        log::info!("[xc2] fill {rect:?} {:?}", self.color);
    }

    fn supports_outline(&self) -> bool {
        true
    }

    fn rect_outline(&mut self, rect: &Rect) {
        log::info!("[xc2] outline {rect:?} {:?}", self.color);
    }
}

struct LogXcde;

impl XcdeBackend for LogXcde {
    fn draw_rect(&mut self, rect: &Rect, color: &Color) -> bool {
        log::info!("[xcde] rect {rect:?} {color:?}");
        true
    }
}

/// Routes through the process-wide host, the way game hooks reach it.
///
/// Never install this as the host itself: its draws would re-enter the slot
/// and be dropped.
struct GlobalHost;

impl DebugDraw for GlobalHost {
    fn draw_square_2d(&mut self, corner1: Point<i32>, corner2: Point<i32>, color: Color) {
        debug::draw_square_2d(corner1, corner2, color);
    }
}

/// Shared call site: the same overlay code runs on either host.
fn draw_overlay<D: DebugDraw + ?Sized>(host: &mut D, (width, height): (u32, u32)) {
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let height = i32::try_from(height).unwrap_or(i32::MAX);

    // Right half side panel, then the two marker squares.
    let panel = Color::new(0.0, 0.0, 0.0, 0.7);
    host.draw_square_2d(Point::new(width / 2, 0), Point::new(width, height), panel);
    host.draw_square_2d(Point::new(0, 0), Point::new(10, 10), Color::new(1.0, 0.0, 0.0, 1.0));
    host.draw_square_2d(Point::new(0, 0), Point::new(10, 5), Color::green());
}

fn run_xc2(style: SquareStyle) -> Result<()> {
    let config = Xc2Config { style, ..Default::default() };
    let renderer = Xc2Renderer::with_config(LogXc2::default(), config);
    let screen = renderer.screen_dimensions();

    debug::install(renderer).context("installing the XC2 debug host")?;

    draw_overlay(&mut GlobalHost, screen);
    Ok(())
}

fn run_xcde() -> Result<()> {
    let mut renderer = XcdeRenderer::new();
    draw_overlay(&mut renderer, (1280, 720));
    log::info!("[xcde] {} draws queued", renderer.pending());

    let stats = renderer.end_frame(&mut LogXcde);
    if stats.submitted == 0 {
        bail!("xcde frame submitted nothing: {stats:?}");
    }
    log::info!("[xcde] frame done: {stats:?}");
    Ok(())
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let host = std::env::args().nth(1).unwrap_or_else(|| "all".to_owned());
    match host.as_str() {
        "xc2" => run_xc2(SquareStyle::Fill),
        "xc2-outline" => run_xc2(SquareStyle::Outline),
        "xcde" => run_xcde(),
        "all" => {
            run_xcde()?;
            run_xc2(SquareStyle::Fill)
        }
        other => bail!("unknown host `{other}` (expected xc2, xc2-outline, xcde or all)"),
    }
}
