use std::cell::Cell;
use std::fmt;
use std::sync::{Mutex, PoisonError};

use state::InitCell;

use super::DebugDraw;
use crate::mm::{Color, Point};

type SharedHost = Mutex<Box<dyn DebugDraw + Send>>;

static HOST: InitCell<SharedHost> = InitCell::new();

thread_local! {
    /// Set while this thread is inside the installed host's draw.
    static IN_HOST: Cell<bool> = const { Cell::new(false) };
}

/// Clears [`IN_HOST`] on scope exit, unwinding included.
struct HostScope;

impl Drop for HostScope {
    fn drop(&mut self) {
        IN_HOST.set(false);
    }
}

/// Returned by [`install`] when a host is already in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostAlreadyInstalled;

impl fmt::Display for HostAlreadyInstalled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a debug-draw host is already installed")
    }
}

impl std::error::Error for HostAlreadyInstalled {}

/// Installs the process-wide debug-draw host.
///
/// Only the first call wins; later calls return [`HostAlreadyInstalled`] and
/// drop the rejected host.
pub fn install(host: impl DebugDraw + Send + 'static) -> Result<(), HostAlreadyInstalled> {
    let host: Box<dyn DebugDraw + Send> = Box::new(host);
    if HOST.set(Mutex::new(host)) {
        log::debug!("debug-draw host installed");
        Ok(())
    } else {
        log::warn!("debug-draw host already installed; ignoring new host");
        Err(HostAlreadyInstalled)
    }
}

#[inline]
pub fn is_installed() -> bool {
    HOST.try_get().is_some()
}

/// Draws through the installed host.
///
/// No-op until a host is installed. Calls from other threads wait for the
/// host; a call made by the host itself while drawing is dropped with a
/// warning.
pub fn draw_square_2d(corner1: Point<i32>, corner2: Point<i32>, color: Color) {
    let Some(host) = HOST.try_get() else {
        log::trace!("draw_square_2d before host install: {corner1:?} {corner2:?}");
        return;
    };

    if IN_HOST.replace(true) {
        log::warn!("draw_square_2d re-entered from the installed host; dropping draw");
        return;
    }
    let _scope = HostScope;

    // Draws carry no cross-call state; a poisoned lock is still usable.
    let mut host = host.lock().unwrap_or_else(PoisonError::into_inner);
    host.draw_square_2d(corner1, corner2, color);
}
