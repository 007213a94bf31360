//! Clock sources for tweens.
//!
//! Native builds read `std::time::Instant`; wasm builds read
//! `performance.now()` through the `instant` crate.
//! Tests drive time by hand with `ManualClock`.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub use instant::Instant;

/// Source of monotonic timestamps
pub trait Clock {
    /// Current instant. Successive calls never go backwards.
    fn now(&self) -> Instant;
}

/// Monotonic wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock: a fixed origin plus an offset that only moves forward.
///
/// Share one clock between several tweens with `&ManualClock` or
/// `Rc<ManualClock>`.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    /// Move the clock forward by `secs` seconds. Negative or non-finite
    /// steps are ignored.
    #[inline]
    pub fn advance(&self, secs: f64) {
        if let Ok(step) = Duration::try_from_secs_f64(secs) {
            self.offset.set(self.offset.get().saturating_add(step));
        }
    }

    /// Set the total time since the origin. Moving backwards is ignored.
    #[inline]
    pub fn set_elapsed(&self, secs: f64) {
        if let Ok(target) = Duration::try_from_secs_f64(secs) {
            if target > self.offset.get() {
                self.offset.set(target);
            }
        }
    }

    /// Total time since the origin in seconds
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.offset.get().as_secs_f64()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    #[inline]
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Seconds from `earlier` to `later`, zero if `later` precedes `earlier`.
#[inline]
pub fn seconds_between(earlier: Instant, later: Instant) -> f64 {
    if later > earlier {
        (later - earlier).as_secs_f64()
    } else {
        0.0
    }
}
