//! Session events.
//!
//! Every observable change pushes one event. The presentation shell drains
//! the queue after each operation and re-renders whatever changed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::rules::Line;

/// Something that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The sequencer and both timers started.
    Started,

    /// A number was called. `position` is where it sits on the card, if
    /// anywhere.
    NumberCalled {
        number: u8,
        position: Option<(usize, usize)>,
    },

    /// The pool ran dry; no further calls will be made.
    Exhausted,

    /// The player marked a called cell.
    CellMarked { col: usize, row: usize, number: u8 },

    /// A mark completed one or more new lines.
    LinesCompleted {
        new_lines: SmallVec<[Line; 4]>,
        total: u32,
    },

    /// The player called BINGO.
    BingoClaimed { accepted: bool },

    /// The game clock moved forward.
    ClockTick { elapsed_secs: u64 },

    /// The session was stopped; timers are cancelled.
    Stopped,
}

impl SessionEvent {
    /// Short name for logs and shells that dispatch on strings.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            SessionEvent::Started => "started",
            SessionEvent::NumberCalled { .. } => "number_called",
            SessionEvent::Exhausted => "exhausted",
            SessionEvent::CellMarked { .. } => "cell_marked",
            SessionEvent::LinesCompleted { .. } => "lines_completed",
            SessionEvent::BingoClaimed { .. } => "bingo_claimed",
            SessionEvent::ClockTick { .. } => "clock_tick",
            SessionEvent::Stopped => "stopped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(SessionEvent::Started.kind(), "started");
        assert_eq!(
            SessionEvent::NumberCalled { number: 4, position: None }.kind(),
            "number_called"
        );
        assert_eq!(SessionEvent::BingoClaimed { accepted: false }.kind(), "bingo_claimed");
    }

    #[test]
    fn test_event_serde() {
        let event = SessionEvent::LinesCompleted {
            new_lines: SmallVec::from_slice(&[Line::Row(2), Line::Diagonal]),
            total: 2,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
