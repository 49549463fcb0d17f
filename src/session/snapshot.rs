//! Point-in-time view of a session.
//!
//! Cheap to take (the call list is a persistent vector) and serializable,
//! so a shell in another process can render it.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::calls::SequencerState;
use crate::cards::Card;
use crate::core::{Player, Result};
use crate::rules::Line;

/// Everything a shell needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SequencerState,
    pub card: Card,
    /// Calls, oldest first.
    pub calls: Vector<u8>,
    pub current_call: Option<u8>,
    pub elapsed_ms: u64,
    pub players: Vec<Player>,
    pub lines: SmallVec<[Line; 12]>,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Number of calls made so far.
    #[must_use]
    pub fn called_count(&self) -> usize {
        self.calls.len()
    }
}
