//! Win rules.
//!
//! Winning is a pure predicate over the card's marked matrix. The session
//! evaluates it after every successful mark and when the player claims.

pub mod lines;

pub use lines::{completed_lines, has_bingo, Line, MarkedMatrix};
