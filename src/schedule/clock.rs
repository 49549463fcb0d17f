//! Game clock.

use serde::{Deserialize, Serialize};

use super::timer::{IntervalTimer, Ticker};

/// Counts elapsed game time in whole clock steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    timer: IntervalTimer,
    elapsed_ms: u64,
}

impl GameClock {
    /// A stopped clock at 0:00.
    #[must_use]
    pub fn new(step_ms: u32) -> Self {
        Self {
            timer: IntervalTimer::disarmed(step_ms),
            elapsed_ms: 0,
        }
    }

    /// Reset to 0:00 and start counting.
    pub fn start(&mut self) {
        self.timer.rearm();
        self.elapsed_ms = 0;
    }

    /// Freeze the clock. Elapsed time stays readable.
    pub fn stop(&mut self) {
        self.timer.cancel();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.timer.is_cancelled()
    }

    /// Feed elapsed time; returns how many steps were added.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let steps = self.timer.advance(elapsed_ms);
        self.elapsed_ms += u64::from(steps) * u64::from(self.timer.interval_ms());
        steps
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / 1_000
    }

    /// `m:ss`, e.g. `2:05`.
    #[must_use]
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_secs())
    }
}

/// Format seconds as `m:ss`. Minutes are not wrapped into hours.
///
/// ```
/// use rust_bingo::schedule::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "0:00");
/// assert_eq!(format_elapsed(125), "2:05");
/// ```
#[must_use]
pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
