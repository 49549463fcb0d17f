//! Call history.
//!
//! Ordered, duplicate-free record of every number drawn this session. The
//! sequence lives in a persistent vector so snapshots share structure with
//! the live history instead of copying it.

use im::Vector;
use rustc_hash::FxHashSet;

use crate::cards::MAX_NUMBER;

/// Calls shown in the recent-calls feed.
pub const RECENT_CALLS: usize = 15;

/// Numbers drawn so far, oldest first.
#[derive(Clone, Debug, Default)]
pub struct CallHistory {
    calls: Vector<u8>,
    seen: FxHashSet<u8>,
}

impl CallHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a recorded sequence, dropping invalid and repeated
    /// entries.
    pub fn from_calls(calls: impl IntoIterator<Item = u8>) -> Self {
        let mut history = Self::new();
        for number in calls {
            history.push(number);
        }
        history
    }

    /// Append a call.
    ///
    /// Returns false, leaving the history untouched, for numbers outside
    /// 1..=75 or already called.
    pub fn push(&mut self, number: u8) -> bool {
        if number == 0 || number > MAX_NUMBER || !self.seen.insert(number) {
            return false;
        }
        self.calls.push_back(number);
        true
    }

    /// Has this number been called?
    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        self.seen.contains(&number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Every number in the pool has been called.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.calls.len() == MAX_NUMBER as usize
    }

    /// The most recent call.
    #[must_use]
    pub fn current(&self) -> Option<u8> {
        self.calls.back().copied()
    }

    /// Calls, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.calls.iter().copied()
    }

    /// Up to `n` calls, most recent first.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<u8> {
        self.calls.iter().rev().take(n).copied().collect()
    }

    /// Numbers still in the pool, ascending.
    #[must_use]
    pub fn remaining(&self) -> Vec<u8> {
        (1..=MAX_NUMBER).filter(|n| !self.seen.contains(n)).collect()
    }

    /// Fraction of the pool drawn, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.calls.len() as f32 / f32::from(MAX_NUMBER)
    }

    /// The underlying persistent vector. Cloning it is O(1).
    #[must_use]
    pub fn as_vector(&self) -> &Vector<u8> {
        &self.calls
    }
}
