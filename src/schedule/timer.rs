//! Interval timers driven by elapsed time.
//!
//! Timers never read a clock. The owner feeds them elapsed milliseconds
//! (from a frame loop, a test, or a Python shell) and they report how many
//! interval boundaries were crossed, carrying the remainder forward.

use serde::{Deserialize, Serialize};

/// A repeating timer the owner advances by hand.
pub trait Ticker {
    /// Feed elapsed time. Returns how many times the timer fired.
    fn advance(&mut self, elapsed_ms: u32) -> u32;

    /// Stop firing. Cancelled timers ignore every later `advance`.
    fn cancel(&mut self);

    /// Has `cancel` been called?
    fn is_cancelled(&self) -> bool;

    /// Feed elapsed time and run `on_tick` once per fire.
    ///
    /// `on_tick` returns whether the timer should keep going; returning
    /// false cancels it and skips any fires still pending from this
    /// advance.
    fn advance_with(&mut self, elapsed_ms: u32, mut on_tick: impl FnMut() -> bool) -> u32
    where
        Self: Sized,
    {
        let fires = self.advance(elapsed_ms);
        for done in 0..fires {
            if !on_tick() {
                self.cancel();
                return done + 1;
            }
        }
        fires
    }
}

/// Fires once per whole `interval_ms` of accumulated time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTimer {
    interval_ms: u32,
    pending_ms: u64,
    cancelled: bool,
}

impl IntervalTimer {
    /// Create an armed timer.
    ///
    /// # Panics
    ///
    /// Panics if `interval_ms` is zero. Session configs are validated
    /// before timers are built.
    #[must_use]
    pub fn new(interval_ms: u32) -> Self {
        assert!(interval_ms > 0, "Timer interval must be non-zero");
        Self {
            interval_ms,
            pending_ms: 0,
            cancelled: false,
        }
    }

    /// A timer that starts cancelled, for sessions that have not started.
    #[must_use]
    pub fn disarmed(interval_ms: u32) -> Self {
        let mut timer = Self::new(interval_ms);
        timer.cancelled = true;
        timer
    }

    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Milliseconds until the next fire.
    #[must_use]
    pub fn until_next_ms(&self) -> u32 {
        self.interval_ms - self.pending_ms as u32
    }

    /// Clear accumulated time and resume firing.
    pub fn rearm(&mut self) {
        self.pending_ms = 0;
        self.cancelled = false;
    }
}

impl Ticker for IntervalTimer {
    fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.cancelled {
            return 0;
        }
        self.pending_ms += u64::from(elapsed_ms);
        let interval = u64::from(self.interval_ms);
        let fires = self.pending_ms / interval;
        self.pending_ms %= interval;
        fires as u32
    }

    fn cancel(&mut self) {
        self.cancelled = true;
        self.pending_ms = 0;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_whole_intervals() {
        let mut timer = IntervalTimer::new(3_000);
        assert_eq!(timer.advance(2_999), 0);
        assert_eq!(timer.advance(1), 1);
        assert_eq!(timer.advance(9_000), 3);
    }

    #[test]
    fn test_carries_remainder() {
        let mut timer = IntervalTimer::new(1_000);
        assert_eq!(timer.advance(1_500), 1);
        assert_eq!(timer.until_next_ms(), 500);
        assert_eq!(timer.advance(600), 1);
        assert_eq!(timer.until_next_ms(), 900);
    }

    #[test]
    fn test_cancelled_never_fires() {
        let mut timer = IntervalTimer::new(100);
        timer.advance(50);
        timer.cancel();
        assert!(timer.is_cancelled());
        assert_eq!(timer.advance(10_000), 0);
    }

    #[test]
    fn test_rearm() {
        let mut timer = IntervalTimer::disarmed(100);
        assert_eq!(timer.advance(500), 0);

        timer.rearm();
        assert_eq!(timer.advance(250), 2);
        assert_eq!(timer.until_next_ms(), 50);
    }

    #[test]
    fn test_advance_with_stops_early() {
        let mut timer = IntervalTimer::new(10);
        let mut seen = 0;
        let fires = timer.advance_with(100, || {
            seen += 1;
            seen < 3
        });
        assert_eq!(fires, 3);
        assert_eq!(seen, 3);
        assert!(timer.is_cancelled());
    }

    #[test]
    fn test_advance_with_runs_all() {
        let mut timer = IntervalTimer::new(10);
        let mut seen = 0;
        assert_eq!(timer.advance_with(45, || {
            seen += 1;
            true
        }), 4);
        assert_eq!(seen, 4);
        assert!(!timer.is_cancelled());
    }

    #[test]
    #[should_panic(expected = "Timer interval must be non-zero")]
    fn test_zero_interval() {
        let _ = IntervalTimer::new(0);
    }
}
