//! The game session.
//!
//! `BingoSession` owns the card, the call history, the sequencer, both
//! timers, the call RNG and the roster. All mutation goes through `&mut self`,
//! so the sequencer (appending calls) and the player (marking cells) can
//! never interleave mid-operation.
//!
//! ## Driving a session
//!
//! ```
//! use rust_bingo::calls::SequencerState;
//! use rust_bingo::core::SessionConfig;
//! use rust_bingo::session::BingoSession;
//!
//! let mut session = BingoSession::new(SessionConfig::default().with_seed(7)).unwrap();
//! session.start();
//!
//! // Nine seconds at the default three-second cadence
//! session.advance(9_000);
//! assert_eq!(session.history().len(), 3);
//! assert_eq!(session.elapsed_display(), "0:09");
//!
//! session.stop();
//! session.advance(60_000);
//! assert_eq!(session.history().len(), 3);
//! assert_eq!(session.state(), SequencerState::Idle);
//! ```

use smallvec::SmallVec;

use super::event::SessionEvent;
use super::snapshot::SessionSnapshot;
use crate::calls::{CallHistory, CallSequencer, SequencerState, TickOutcome};
use crate::cards::{call_label, generate_card, Card, MarkOutcome, GRID_SIZE};
use crate::core::{
    BingoError, GameRng, Player, PlayerId, PlayerMap, RandomSource, Result, SessionConfig,
};
use crate::rules::{completed_lines, Line};
use crate::schedule::{format_elapsed, GameClock, IntervalTimer, Ticker};

/// Result of a "Call BINGO!" request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The card holds at least one completed line.
    Accepted { lines: SmallVec<[Line; 12]> },
    /// No completed line, or the session is not live.
    Rejected,
}

impl ClaimOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ClaimOutcome::Accepted { .. })
    }
}

/// One game, from card generation to stop.
pub struct BingoSession<R: RandomSource = GameRng> {
    config: SessionConfig,
    card: Card,
    history: CallHistory,
    sequencer: CallSequencer,
    call_timer: IntervalTimer,
    clock: GameClock,
    call_rng: R,
    players: PlayerMap<Player>,
    lines: SmallVec<[Line; 12]>,
    events: Vec<SessionEvent>,
}

impl BingoSession<GameRng> {
    /// Create a session seeded from `config.seed`.
    ///
    /// The card and the call order come from independent streams of the
    /// seed, so the same seed always yields the same card and the same
    /// sequence of calls.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let root = GameRng::new(config.seed);
        let card = generate_card(&mut root.for_context("card"));
        let call_rng = root.for_context("calls");
        Self::from_parts(config, card, call_rng)
    }
}

impl<R: RandomSource> BingoSession<R> {
    /// Create a session around an existing card and call source.
    pub fn from_parts(config: SessionConfig, card: Card, call_rng: R) -> Result<Self> {
        config.validate()?;
        let players = config.roster();
        tracing::debug!(seed = config.seed, players = players.player_count(), "session created");

        Ok(Self {
            call_timer: IntervalTimer::disarmed(config.call_interval_ms),
            clock: GameClock::new(config.clock_interval_ms),
            config,
            card,
            history: CallHistory::new(),
            sequencer: CallSequencer::new(),
            call_rng,
            players,
            lines: SmallVec::new(),
            events: Vec::new(),
        })
    }

    // === Lifecycle ===

    /// Start calling and start the clock.
    ///
    /// Returns false if the sequencer was not `Idle`.
    pub fn start(&mut self) -> bool {
        if !self.sequencer.start() {
            return false;
        }
        self.call_timer.rearm();
        self.clock.start();
        self.events.push(SessionEvent::Started);
        tracing::info!(called = self.history.len(), "session started");
        true
    }

    /// Stop calling, cancel both timers.
    ///
    /// After this returns no call is appended and the clock does not move
    /// until `start` is called again.
    pub fn stop(&mut self) {
        self.sequencer.stop();
        self.call_timer.cancel();
        self.clock.stop();
        self.events.push(SessionEvent::Stopped);
        tracing::info!(
            called = self.history.len(),
            elapsed = %self.clock.display(),
            "session stopped"
        );
    }

    /// Feed elapsed wall time to both timers.
    ///
    /// Returns the number of call ticks that ran. Clock ticks with no other
    /// event between them collapse into one `ClockTick` carrying the latest
    /// time, so an undrained queue stays bounded once calling has ended.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.clock.advance(elapsed_ms) > 0 {
            let now = self.clock.elapsed_secs();
            match self.events.last_mut() {
                Some(SessionEvent::ClockTick { elapsed_secs }) => *elapsed_secs = now,
                _ => self.events.push(SessionEvent::ClockTick { elapsed_secs: now }),
            }
        }

        let Self {
            call_timer,
            sequencer,
            history,
            call_rng,
            card,
            events,
            ..
        } = self;
        call_timer.advance_with(elapsed_ms, || {
            let outcome = run_call_tick(sequencer, history, call_rng, card, events);
            !matches!(outcome, TickOutcome::Exhausted | TickOutcome::Inactive)
        })
    }

    /// Run exactly one call tick now, independent of the call timer.
    pub fn tick_call(&mut self) -> TickOutcome {
        let outcome = run_call_tick(
            &mut self.sequencer,
            &mut self.history,
            &mut self.call_rng,
            &mut self.card,
            &mut self.events,
        );
        if outcome == TickOutcome::Exhausted {
            self.call_timer.cancel();
        }
        outcome
    }

    // === Player actions ===

    /// Mark the cell at `(col, row)`.
    ///
    /// Out-of-range references fail. Everything else is a no-op unless the
    /// cell is called, unmarked, and the session is `Running` or
    /// `Exhausted`.
    pub fn mark_cell(&mut self, col: usize, row: usize) -> Result<MarkOutcome> {
        if col >= GRID_SIZE || row >= GRID_SIZE {
            return Err(BingoError::OutOfRange { col, row });
        }
        if self.sequencer.state() == SequencerState::Idle {
            return Ok(MarkOutcome::Inactive);
        }

        let outcome = self.card.mark(col, row)?;
        if outcome.changed() {
            let number = self.card.cell(col, row)?.number();
            tracing::debug!(col, row, number, "cell marked");
            self.events.push(SessionEvent::CellMarked { col, row, number });
            self.refresh_lines();
        }
        Ok(outcome)
    }

    /// The "Call BINGO!" action.
    ///
    /// Accepted only while the session is live and the card holds a
    /// completed line; an accepted claim makes the local player a winner.
    pub fn claim_bingo(&mut self) -> ClaimOutcome {
        let live = self.sequencer.state() != SequencerState::Idle;
        let outcome = if live && !self.lines.is_empty() {
            self.players[PlayerId::LOCAL].is_winner = true;
            ClaimOutcome::Accepted {
                lines: self.lines.clone(),
            }
        } else {
            ClaimOutcome::Rejected
        };

        let accepted = outcome.is_accepted();
        self.events.push(SessionEvent::BingoClaimed { accepted });
        if accepted {
            tracing::info!(lines = self.lines.len(), "bingo claim accepted");
        } else {
            tracing::info!("bingo claim rejected");
        }
        outcome
    }

    fn refresh_lines(&mut self) {
        let lines = completed_lines(&self.card.marked_matrix());
        let new_lines: SmallVec<[Line; 4]> = lines
            .iter()
            .copied()
            .filter(|line| !self.lines.contains(line))
            .collect();
        if new_lines.is_empty() {
            return;
        }

        let total = lines.len() as u32;
        self.players[PlayerId::LOCAL].lines_completed = total;
        tracing::info!(total, new = new_lines.len(), "lines completed");
        self.events.push(SessionEvent::LinesCompleted { new_lines, total });
        self.lines = lines;
    }

    // === Observers ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    #[must_use]
    pub fn history(&self) -> &CallHistory {
        &self.history
    }

    #[must_use]
    pub fn current_call(&self) -> Option<u8> {
        self.history.current()
    }

    /// Announcer label for the current call, e.g. `N-40`.
    #[must_use]
    pub fn current_call_label(&self) -> Option<String> {
        self.current_call().and_then(call_label)
    }

    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    /// Elapsed game time as `m:ss`.
    #[must_use]
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.clock.elapsed_secs())
    }

    /// Milliseconds until the next call, `None` while the call timer is
    /// cancelled.
    #[must_use]
    pub fn next_call_in_ms(&self) -> Option<u32> {
        (!self.call_timer.is_cancelled()).then(|| self.call_timer.until_next_ms())
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn local_player(&self) -> &Player {
        &self.players[PlayerId::LOCAL]
    }

    /// Completed lines on the card as of the last mark.
    #[must_use]
    pub fn completed_lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn has_bingo(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Capture the observable state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.sequencer.state(),
            card: self.card.clone(),
            calls: self.history.as_vector().clone(),
            current_call: self.history.current(),
            elapsed_ms: self.clock.elapsed_ms(),
            players: self.players.as_slice().to_vec(),
            lines: self.lines.clone(),
        }
    }
}

/// One sequencer tick plus its effects on the card and the event queue.
fn run_call_tick<R: RandomSource + ?Sized>(
    sequencer: &mut CallSequencer,
    history: &mut CallHistory,
    rng: &mut R,
    card: &mut Card,
    events: &mut Vec<SessionEvent>,
) -> TickOutcome {
    let outcome = sequencer.tick(history, rng);
    match outcome {
        TickOutcome::Called(number) => {
            let position = card.apply_call(number);
            tracing::debug!(
                number,
                label = call_label(number).as_deref().unwrap_or("?"),
                on_card = position.is_some(),
                called = history.len(),
                "number called"
            );
            events.push(SessionEvent::NumberCalled { number, position });
        }
        TickOutcome::Exhausted => {
            tracing::info!(called = history.len(), "call pool exhausted");
            events.push(SessionEvent::Exhausted);
        }
        TickOutcome::Inactive => {}
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;

    /// Card built with identity shuffles (B:1-5, I:16-20, ...) and a call
    /// source that always draws the smallest remaining number.
    fn ordered_session() -> BingoSession<ScriptedRng> {
        let script: Vec<usize> = (1..=14).rev().collect();
        let card = generate_card(&mut ScriptedRng::new(script));
        BingoSession::from_parts(SessionConfig::default(), card, ScriptedRng::zeros()).unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = BingoSession::new(SessionConfig::default()).unwrap();
        assert_eq!(session.state(), SequencerState::Idle);
        assert!(session.history().is_empty());
        assert_eq!(session.current_call(), None);
        assert_eq!(session.elapsed_secs(), 0);
        assert_eq!(session.next_call_in_ms(), None);
        assert_eq!(session.players().player_count(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = BingoSession::new(SessionConfig::default().with_call_interval_ms(0));
        assert!(matches!(result, Err(BingoError::InvalidConfig(_))));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = BingoSession::new(SessionConfig::default().with_seed(11)).unwrap();
        let mut b = BingoSession::new(SessionConfig::default().with_seed(11)).unwrap();
        assert_eq!(a.card(), b.card());

        a.start();
        b.start();
        a.advance(30_000);
        b.advance(30_000);
        assert_eq!(
            a.history().iter().collect::<Vec<_>>(),
            b.history().iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_calls_flag_card_cells() {
        let mut session = ordered_session();
        session.start();
        assert_eq!(session.tick_call(), TickOutcome::Called(1));

        let cell = session.card().cell(0, 0).unwrap();
        assert!(cell.is_called());
        assert!(!cell.is_marked());
        assert_eq!(session.current_call_label().as_deref(), Some("B-1"));
    }

    #[test]
    fn test_mark_while_idle_is_inactive() {
        let mut session = ordered_session();
        assert_eq!(session.mark_cell(0, 0).unwrap(), MarkOutcome::Inactive);
        assert!(matches!(
            session.mark_cell(5, 0),
            Err(BingoError::OutOfRange { col: 5, row: 0 })
        ));
    }

    #[test]
    fn test_mark_and_line_tracking() {
        let mut session = ordered_session();
        session.start();
        // Calls 1..=5 cover the whole B column
        for _ in 0..5 {
            session.tick_call();
        }
        session.drain_events();

        for row in 0..4 {
            assert_eq!(session.mark_cell(0, row).unwrap(), MarkOutcome::Marked);
        }
        assert!(!session.has_bingo());

        assert_eq!(session.mark_cell(0, 4).unwrap(), MarkOutcome::Marked);
        assert_eq!(session.completed_lines(), &[Line::Column(0)]);
        assert_eq!(session.local_player().lines_completed, 1);

        let events = session.drain_events();
        assert_eq!(events.len(), 6);
        assert_eq!(
            events[5],
            SessionEvent::LinesCompleted {
                new_lines: SmallVec::from_slice(&[Line::Column(0)]),
                total: 1,
            }
        );
    }

    #[test]
    fn test_claim_requires_line() {
        let mut session = ordered_session();
        session.start();
        assert_eq!(session.claim_bingo(), ClaimOutcome::Rejected);
        assert!(!session.local_player().is_winner);

        for _ in 0..5 {
            session.tick_call();
        }
        for row in 0..5 {
            session.mark_cell(0, row).unwrap();
        }
        assert!(session.claim_bingo().is_accepted());
        assert!(session.local_player().is_winner);
    }

    #[test]
    fn test_stop_cancels_everything() {
        let mut session = ordered_session();
        session.start();
        session.advance(6_000);
        assert_eq!(session.history().len(), 2);

        session.stop();
        assert_eq!(session.advance(30_000), 0);
        assert_eq!(session.tick_call(), TickOutcome::Inactive);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.elapsed_secs(), 6);
        assert_eq!(session.next_call_in_ms(), None);
    }

    #[test]
    fn test_clock_ticks_coalesce() {
        let mut session = ordered_session();
        session.start();
        session.drain_events();

        // Two seconds, no call yet at the three-second cadence
        session.advance(1_000);
        session.advance(1_000);
        assert_eq!(
            session.drain_events(),
            vec![SessionEvent::ClockTick { elapsed_secs: 2 }]
        );

        // A call between clock ticks keeps them apart
        session.advance(1_000);
        session.advance(1_000);
        assert_eq!(
            session.drain_events(),
            vec![
                SessionEvent::ClockTick { elapsed_secs: 3 },
                SessionEvent::NumberCalled {
                    number: 1,
                    position: Some((0, 0)),
                },
                SessionEvent::ClockTick { elapsed_secs: 4 },
            ]
        );
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut session = ordered_session();
        session.start();
        session.advance(12_000);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.called_count(), 4);
        assert_eq!(snapshot.current_call, Some(4));
        assert_eq!(snapshot.elapsed_ms, 12_000);

        let bytes = snapshot.to_bytes().unwrap();
        let decoded = SessionSnapshot::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_snapshot_decode_garbage() {
        let result = SessionSnapshot::from_bytes(&[1, 2, 3]);
        assert!(matches!(result, Err(BingoError::Serialization(_))));
    }
}
