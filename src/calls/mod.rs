//! Call feed: the drawn-number history and the sequencer that extends it.

pub mod history;
pub mod sequencer;

pub use history::{CallHistory, RECENT_CALLS};
pub use sequencer::{CallSequencer, SequencerState, TickOutcome};
