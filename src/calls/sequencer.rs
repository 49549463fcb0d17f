//! Call sequencer state machine.
//!
//! ```text
//!        start()            pool empty on tick
//! Idle ----------> Running -------------------> Exhausted
//!  ^                  |                             |
//!  +----- stop() -----+-------------- stop() -------+
//! ```
//!
//! The sequencer owns no timer. Whoever drives it calls `tick` once per
//! call interval; ticks outside `Running` are inert.

use serde::{Deserialize, Serialize};

use super::history::CallHistory;
use crate::core::RandomSource;

/// Sequencer lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequencerState {
    #[default]
    Idle,
    Running,
    Exhausted,
}

impl std::fmt::Display for SequencerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequencerState::Idle => write!(f, "idle"),
            SequencerState::Running => write!(f, "running"),
            SequencerState::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// A number was drawn and appended.
    Called(u8),
    /// The pool was empty; the sequencer is now `Exhausted`.
    Exhausted,
    /// Not running, nothing happened.
    Inactive,
}

/// Draws numbers without replacement from the 1-75 pool.
#[derive(Clone, Debug, Default)]
pub struct CallSequencer {
    state: SequencerState,
}

impl CallSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == SequencerState::Running
    }

    /// `Idle -> Running`. Returns false (no change) from any other state.
    pub fn start(&mut self) -> bool {
        if self.state != SequencerState::Idle {
            return false;
        }
        self.state = SequencerState::Running;
        true
    }

    /// Any state -> `Idle`.
    pub fn stop(&mut self) {
        self.state = SequencerState::Idle;
    }

    /// Draw the next call into `history`.
    ///
    /// Picks uniformly among the numbers not yet called. With a single
    /// number left the draw is forced; the tick after that finds the pool
    /// empty and moves to `Exhausted`.
    pub fn tick<R: RandomSource + ?Sized>(
        &mut self,
        history: &mut CallHistory,
        rng: &mut R,
    ) -> TickOutcome {
        if self.state != SequencerState::Running {
            return TickOutcome::Inactive;
        }

        let remaining = history.remaining();
        if remaining.is_empty() {
            self.state = SequencerState::Exhausted;
            return TickOutcome::Exhausted;
        }

        let number = remaining[rng.gen_index(remaining.len())];
        history.push(number);
        TickOutcome::Called(number)
    }
}
