//! Core engine types: players, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{OpponentConfig, SessionConfig, DEFAULT_CALL_INTERVAL_MS, DEFAULT_CLOCK_INTERVAL_MS};
pub use error::{BingoError, Result};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, RandomSource, ScriptedRng};
