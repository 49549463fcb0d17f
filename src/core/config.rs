//! Session configuration.
//!
//! A session is configured once at creation:
//! - RNG seed (card layout and call order)
//! - Call cadence and game clock granularity
//! - The roster shown alongside the card
//!
//! Defaults reproduce the classic table: a call every 3 seconds, a
//! one-second clock, and two opponents.

use serde::{Deserialize, Serialize};

use super::error::{BingoError, Result};
use super::player::{Player, PlayerId, PlayerMap};

/// Default milliseconds between calls.
pub const DEFAULT_CALL_INTERVAL_MS: u32 = 3_000;

/// Default game clock granularity.
pub const DEFAULT_CLOCK_INTERVAL_MS: u32 = 1_000;

/// An opponent seat as configured (name plus the line count to display).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentConfig {
    pub name: String,
    pub lines_completed: u32,
}

impl OpponentConfig {
    pub fn new(name: impl Into<String>, lines_completed: u32) -> Self {
        Self {
            name: name.into(),
            lines_completed,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Random seed. Same seed produces the same card and call order.
    pub seed: u64,

    /// Milliseconds between calls.
    pub call_interval_ms: u32,

    /// Milliseconds per game clock step.
    pub clock_interval_ms: u32,

    /// Display name of the local player.
    pub local_player_name: String,

    /// Other seats, in display order after the local player.
    pub opponents: Vec<OpponentConfig>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            call_interval_ms: DEFAULT_CALL_INTERVAL_MS,
            clock_interval_ms: DEFAULT_CLOCK_INTERVAL_MS,
            local_player_name: "You".to_string(),
            opponents: vec![
                OpponentConfig::new("Sarah", 2),
                OpponentConfig::new("Alex", 1),
            ],
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the call cadence.
    #[must_use]
    pub fn with_call_interval_ms(mut self, ms: u32) -> Self {
        self.call_interval_ms = ms;
        self
    }

    /// Set the game clock granularity.
    #[must_use]
    pub fn with_clock_interval_ms(mut self, ms: u32) -> Self {
        self.clock_interval_ms = ms;
        self
    }

    /// Set the local player's display name.
    #[must_use]
    pub fn with_local_player(mut self, name: impl Into<String>) -> Self {
        self.local_player_name = name.into();
        self
    }

    /// Add an opponent seat.
    #[must_use]
    pub fn with_opponent(mut self, opponent: OpponentConfig) -> Self {
        self.opponents.push(opponent);
        self
    }

    /// Drop all opponent seats.
    #[must_use]
    pub fn solo(mut self) -> Self {
        self.opponents.clear();
        self
    }

    /// Reject configurations the session cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.call_interval_ms == 0 {
            return Err(BingoError::InvalidConfig(
                "call interval must be non-zero".to_string(),
            ));
        }
        if self.clock_interval_ms == 0 {
            return Err(BingoError::InvalidConfig(
                "clock interval must be non-zero".to_string(),
            ));
        }
        if self.local_player_name.trim().is_empty() {
            return Err(BingoError::InvalidConfig(
                "local player name must not be empty".to_string(),
            ));
        }
        if self.opponents.len() >= 255 {
            return Err(BingoError::InvalidConfig(
                "at most 254 opponents supported".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the roster: local player first, then opponents in order.
    pub fn roster(&self) -> PlayerMap<Player> {
        let mut players = Vec::with_capacity(self.opponents.len() + 1);
        players.push(Player::new(PlayerId::LOCAL, self.local_player_name.clone()));
        for (i, opponent) in self.opponents.iter().enumerate() {
            let id = PlayerId::new(i as u8 + 1);
            players.push(Player::new(id, opponent.name.clone()).with_lines(opponent.lines_completed));
        }
        PlayerMap::from_vec(players)
    }
}
