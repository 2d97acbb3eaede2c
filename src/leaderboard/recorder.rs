//! Appending lost streaks and reading the ranked view.

use tracing::info;

use crate::core::{Clock, SystemClock};
use crate::session::{Match, OpponentKind, Streak};
use crate::storage::{load_json, save_json, KeyValueStore, StoreError};

use super::entry::{rank_entries, LeaderboardEntry, RankedEntry};

/// Records streaks that ended against the computer.
pub struct LeaderboardRecorder {
    key: String,
    clock: Box<dyn Clock>,
}

impl LeaderboardRecorder {
    /// Create a recorder storing under `key`, timestamped by the system clock.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// All stored entries, unordered. Corrupt data reads as empty.
    pub fn entries<S: KeyValueStore + ?Sized>(&self, store: &S) -> Vec<LeaderboardEntry> {
        load_json(store, &self.key).unwrap_or_default()
    }

    /// Record the human's current streak from `game`.
    ///
    /// Does nothing for matches between humans. Pass the match as it was
    /// before the streak reset.
    pub fn add_entry_from_lost_game<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        game: &Match,
    ) -> Result<Option<LeaderboardEntry>, StoreError> {
        self.record_streak(store, game, game.streak)
    }

    /// Record `streak` for the human of `game`, ignoring the match's own
    /// counters. Does nothing for matches between humans.
    pub fn record_streak<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        game: &Match,
        streak: Streak,
    ) -> Result<Option<LeaderboardEntry>, StoreError> {
        if game.opponent != OpponentKind::Computer {
            return Ok(None);
        }

        let human = &game.players[game.human_symbol()];
        let mut entries = self.entries(store);
        let created_at = self.clock.now();

        let entry = LeaderboardEntry {
            id: unique_id(&entries, created_at.timestamp_millis()),
            player_name: human.name.clone(),
            wins: streak.wins,
            ties: streak.ties,
            created_at,
        };
        info!(player = %entry.player_name, wins = entry.wins, ties = entry.ties, "recording streak");

        entries.push(entry.clone());
        save_json(store, &self.key, &entries)?;
        Ok(Some(entry))
    }

    /// Entries sorted by wins with competition ranks.
    pub fn ranked_leaderboard<S: KeyValueStore + ?Sized>(&self, store: &S) -> Vec<RankedEntry> {
        rank_entries(self.entries(store))
    }
}

/// Millisecond timestamp, suffixed when another entry already uses it.
fn unique_id(entries: &[LeaderboardEntry], millis: i64) -> String {
    let base = millis.to_string();
    let taken = |id: &str| entries.iter().any(|e| e.id == id);
    if !taken(&base) {
        return base;
    }
    let mut n = 1;
    loop {
        let id = format!("{base}-{n}");
        if !taken(&id) {
            return id;
        }
        n += 1;
    }
}
