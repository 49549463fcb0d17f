//! # rust-bingo
//!
//! A deterministic 75-ball bingo engine.
//!
//! ## Design Principles
//!
//! 1. **Session-Owned State**: One `BingoSession` owns the card, the call
//!    history, the sequencer and its timers. Shells observe it; they never
//!    hold pieces of it.
//!
//! 2. **Injectable Randomness**: Card shuffles and call draws go through
//!    `RandomSource`, so a seeded or scripted source makes every game
//!    reproducible.
//!
//! 3. **No Wall Clock**: Timers are advanced with elapsed milliseconds.
//!    Tests drive them synchronously; shells drive them from a frame loop.
//!
//! ## Calling vs Marking
//!
//! A call flags the matching cell as *called*. Only the player marks it.
//! Lines are counted over marked cells, and a BINGO claim is accepted only
//! when at least one line is complete.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: Cells, column letters, card generation
//! - `calls`: Call history and the call sequencer
//! - `rules`: Line detection
//! - `schedule`: Interval timers and the game clock
//! - `session`: The session object, its events and snapshots

pub mod core;
pub mod cards;
pub mod calls;
pub mod rules;
pub mod schedule;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BingoError, Result,
    GameRng, RandomSource, ScriptedRng,
    Player, PlayerId, PlayerMap,
    OpponentConfig, SessionConfig,
};

pub use crate::cards::{call_label, generate_card, Card, Cell, Column, MarkOutcome};

pub use crate::calls::{CallHistory, CallSequencer, SequencerState, TickOutcome};

pub use crate::rules::{completed_lines, has_bingo, Line};

pub use crate::schedule::{GameClock, IntervalTimer, Ticker};

pub use crate::session::{BingoSession, ClaimOutcome, SessionEvent, SessionSnapshot};
