//! Turn sequencing for one persisted match.
//!
//! The controller is event-driven and single-threaded. Each event (a cell
//! click, a button, a fired timer) mutates the match at most once and the
//! result is persisted immediately.
//!
//! ## Computer pacing
//!
//! When the computer is to move, `pending_cpu_move` hands out a
//! `CpuMoveTicket` carrying a display delay. The caller schedules a timer
//! and later passes the ticket to `fire_cpu_move`. Every accepted mutation
//! bumps a generation counter, so a ticket issued before the board or turn
//! changed is stale and ignored.

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::core::EngineConfig;
use crate::leaderboard::{LeaderboardRecorder, RankedEntry};
use crate::opponent::CpuOpponent;
use crate::rules::Winner;
use crate::storage::{KeyValueStore, SessionStore};

use super::state::{Match, MoveOutcome, Streak};

/// Permission to play one computer move, valid until the match changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CpuMoveTicket {
    generation: u64,
    /// How long to wait before firing.
    pub delay: Duration,
}

/// Owns the session and drives it from user and timer events.
pub struct MatchController<S: KeyValueStore> {
    game: Match,
    store: S,
    sessions: SessionStore,
    leaderboard: LeaderboardRecorder,
    opponent: CpuOpponent,
    config: EngineConfig,
    generation: u64,
}

impl<S: KeyValueStore> MatchController<S> {
    /// Start driving `game`, persisting it right away.
    pub fn start(game: Match, store: S, config: EngineConfig) -> Self {
        let mut controller = Self {
            game,
            store,
            sessions: SessionStore::new(config.session_key.clone()),
            leaderboard: LeaderboardRecorder::new(config.leaderboard_key.clone()),
            opponent: CpuOpponent::new(&config),
            config,
            generation: 0,
        };
        controller.persist();
        controller
    }

    /// Continue the match persisted in `store`.
    ///
    /// Hands the store back when there is no usable session.
    pub fn resume(store: S, config: EngineConfig) -> Result<Self, S> {
        let sessions = SessionStore::new(config.session_key.clone());
        match sessions.load(&store) {
            Some(game) => {
                debug!(key = sessions.key(), "resuming session");
                Ok(Self::start(game, store, config))
            }
            None => Err(store),
        }
    }

    /// Replace the computer opponent.
    pub fn with_opponent(mut self, opponent: CpuOpponent) -> Self {
        self.opponent = opponent;
        self
    }

    /// Replace the leaderboard recorder.
    pub fn with_leaderboard(mut self, leaderboard: LeaderboardRecorder) -> Self {
        self.leaderboard = leaderboard;
        self
    }

    /// The current match.
    #[must_use]
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Engine configuration in use.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ranked leaderboard read from the backing store.
    #[must_use]
    pub fn ranked_leaderboard(&self) -> Vec<RankedEntry> {
        self.leaderboard.ranked_leaderboard(&self.store)
    }

    /// A human plays `index`.
    ///
    /// Rejected while the computer is to move, once the round is over, or
    /// when the cell is taken.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> MoveOutcome {
        if self.game.current_player().is_computer {
            debug!("ignoring human input during the computer's turn");
            return MoveOutcome::Rejected;
        }
        self.apply(index)
    }

    /// Ticket for the computer's next move, if the computer is to move.
    #[must_use]
    pub fn pending_cpu_move(&self) -> Option<CpuMoveTicket> {
        self.game.is_computer_turn().then(|| CpuMoveTicket {
            generation: self.generation,
            delay: self.config.cpu_move_delay(),
        })
    }

    /// Play the computer's move if `ticket` is still current.
    #[instrument(skip(self))]
    pub fn fire_cpu_move(&mut self, ticket: CpuMoveTicket) -> MoveOutcome {
        if ticket.generation != self.generation || !self.game.is_computer_turn() {
            debug!(current = self.generation, "stale computer move ticket");
            return MoveOutcome::Rejected;
        }

        match self.opponent.choose_move(&self.game) {
            Some(index) => self.apply(index),
            None => MoveOutcome::Rejected,
        }
    }

    /// Clear the board for another round, keeping scores and streak.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) {
        self.game.reset_round();
        self.generation += 1;
        self.persist();
    }

    /// Abandon the match, forgetting the stored session.
    ///
    /// Returns the backing store.
    pub fn quit(mut self) -> S {
        if let Err(err) = self.sessions.clear(&mut self.store) {
            warn!(error = %err, "failed to clear session");
        }
        self.store
    }

    fn apply(&mut self, index: usize) -> MoveOutcome {
        let streak_before = self.game.streak;
        let outcome = self.game.apply_move(index);
        if outcome == MoveOutcome::Rejected {
            return outcome;
        }
        self.generation += 1;

        if let MoveOutcome::Finished { winner, .. } = &outcome {
            info!(%winner, streak = ?self.game.streak, "round finished");
            if let Winner::Symbol(symbol) = winner {
                if self.game.computer_symbol() == Some(*symbol) {
                    self.record_loss(streak_before);
                }
            }
        }

        self.persist();
        outcome
    }

    fn record_loss(&mut self, streak: Streak) {
        if let Err(err) = self.leaderboard.record_streak(&mut self.store, &self.game, streak) {
            warn!(error = %err, "failed to record leaderboard entry");
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.sessions.save(&mut self.store, &self.game) {
            warn!(error = %err, "failed to persist session");
        }
    }
}
