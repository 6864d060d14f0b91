//! A host that panics mid-draw poisons the slot's lock; later draws must
//! still reach it. Own test binary: the slot is filled once per process.

use std::panic;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use conduit::{Color, DebugDraw, Point, debug};

struct PanicsOnFirstDraw {
    calls: Arc<AtomicUsize>,
}

impl DebugDraw for PanicsOnFirstDraw {
    fn draw_square_2d(&mut self, _corner1: Point, _corner2: Point, _color: Color) {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            panic!("backend fell over");
        }
    }
}

#[test]
fn draws_continue_after_host_panic() {
    let calls = Arc::new(AtomicUsize::new(0));
    debug::install(PanicsOnFirstDraw { calls: Arc::clone(&calls) }).unwrap();

    let first = panic::catch_unwind(|| {
        debug::draw_square_2d(Point::new(0, 0), Point::new(10, 10), Color::red());
    });
    assert!(first.is_err());

    debug::draw_square_2d(Point::new(0, 0), Point::new(10, 5), Color::red());
    debug::draw_square_2d(Point::new(0, 0), Point::new(10, 5), Color::red());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
