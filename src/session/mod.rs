//! Game session: the object the presentation shell talks to.
//!
//! ## Key Types
//!
//! - `BingoSession`: owns card, call history, sequencer, timers, roster
//! - `SessionEvent`: change notifications, drained by the shell
//! - `SessionSnapshot`: serializable view of the observable state
//! - `ClaimOutcome`: result of calling BINGO

mod game;

pub mod event;
pub mod snapshot;

pub use event::SessionEvent;
pub use game::{BingoSession, ClaimOutcome};
pub use snapshot::SessionSnapshot;
