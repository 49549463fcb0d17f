//! Timers for the call cadence and the game clock.
//!
//! Both are plain values advanced by elapsed time, so tests drive them
//! synchronously and a session can cancel them together.

pub mod clock;
pub mod timer;

pub use clock::{format_elapsed, GameClock};
pub use timer::{IntervalTimer, Ticker};
