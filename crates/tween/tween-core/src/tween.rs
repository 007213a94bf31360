//! Wall-clock driven interpolator.
//!
//! A [`Tween`] owns one segment `start -> end` that began at `start_time`
//! and lasts `duration` seconds. Every query reads the clock, turns elapsed
//! time into progress, runs it through the cached curve and blends. Nothing
//! is advanced or stored between queries, so polling as often or as rarely as
//! the caller likes gives the same answers.

use crate::config::{TweenConfig, DEFAULT_DURATION};
use crate::curve::{curve_fn, Curve, CurveFn};
use crate::time::{seconds_between, Clock, Instant, SystemClock};
use crate::value::Tweenable;

/// Retargetable interpolation between two values over wall-clock time
#[derive(Debug, Clone)]
pub struct Tween<T: Tweenable, C: Clock = SystemClock> {
    start: T,
    end: T,
    /// Seconds; zero or negative finishes immediately
    duration: f64,
    curve: Curve,
    /// Resolved once from `curve`
    ease: CurveFn,
    start_time: Instant,
    clock: C,
}

impl<T: Tweenable> Tween<T> {
    /// Start a tween on the system clock.
    pub fn new(start: T, end: T, duration: f64, curve: Curve) -> Self {
        Self::with_clock(start, end, duration, curve, SystemClock)
    }

    /// Start a tween using the config's default duration and curve.
    pub fn from_config(start: T, end: T, config: &TweenConfig) -> Self {
        Self::new(start, end, config.default_duration, config.default_curve)
    }
}

impl<T: Tweenable, C: Clock> Tween<T, C> {
    /// Start a tween on a caller-supplied clock.
    pub fn with_clock(start: T, end: T, duration: f64, curve: Curve, clock: C) -> Self {
        log::trace!("tween start: {}s with {}", duration, curve);
        let start_time = clock.now();
        Self {
            start,
            end,
            duration,
            curve,
            ease: curve_fn(curve),
            start_time,
            clock,
        }
    }

    /// Seconds since the current segment began
    #[inline]
    pub fn elapsed(&self) -> f64 {
        seconds_between(self.start_time, self.clock.now())
    }

    /// Normalized progress clamped to `[0, 1]`
    #[inline]
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed() / self.duration).min(1.0)
    }

    /// Value of the current segment `elapsed` seconds after it began.
    ///
    /// Returns `end` exactly once `elapsed >= duration`. Negative or NaN
    /// `elapsed` is treated as zero.
    pub fn value_at(&self, elapsed: f64) -> T {
        let elapsed = elapsed.max(0.0);
        if elapsed >= self.duration {
            return self.end.clone();
        }

        let progress = elapsed / self.duration;
        let multiplier = (self.ease)(progress);
        T::blend(&self.start, &self.end, multiplier)
    }

    /// Value at the current clock reading
    #[inline]
    pub fn value(&self) -> T {
        self.value_at(self.elapsed())
    }

    /// Whether the segment has run past its end.
    ///
    /// Strictly `elapsed > duration`: at the exact boundary [`value`](Self::value)
    /// already returns `end` while this still reports `false`. Zero or
    /// negative durations are finished from the start.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.duration <= 0.0 || self.elapsed() > self.duration
    }

    /// Redirect toward `end` over `duration` seconds, starting from the
    /// in-flight value.
    ///
    /// A no-op when `end` is already the target, so repeated calls with the
    /// same target do not restart the segment.
    pub fn retarget(&mut self, end: T, duration: f64) {
        if self.end == end {
            log::trace!("tween retarget skipped: target unchanged");
            return;
        }

        let now = self.clock.now();
        let current = self.value_at(seconds_between(self.start_time, now));

        log::trace!("tween retarget: new segment of {}s", duration);
        self.start = current;
        self.end = end;
        self.start_time = now;
        self.duration = duration;
    }

    /// [`retarget`](Self::retarget) with the default one second duration.
    #[inline]
    pub fn retarget_default(&mut self, end: T) {
        self.retarget(end, DEFAULT_DURATION);
    }

    /// Freeze at the in-flight value and finish immediately.
    pub fn stop(&mut self) {
        let now = self.clock.now();
        let current = self.value_at(seconds_between(self.start_time, now));

        log::debug!("tween stopped after {}s", seconds_between(self.start_time, now));
        self.start = current.clone();
        self.end = current;
        self.start_time = now;
        self.duration = 0.0;
    }

    /// Swap the curve for the rest of the current segment.
    pub fn set_curve(&mut self, curve: Curve) {
        log::debug!("tween curve {} -> {}", self.curve, curve);
        self.curve = curve;
        self.ease = curve_fn(curve);
    }

    #[inline]
    pub fn start(&self) -> &T {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &T {
        &self.end
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[inline]
    pub fn curve(&self) -> Curve {
        self.curve
    }

    #[inline]
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
