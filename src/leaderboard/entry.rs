//! Leaderboard records and competition ranking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One streak that ended in a loss to the computer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub player_name: String,
    pub wins: u32,
    pub ties: u32,
    pub created_at: DateTime<Utc>,
}

/// A record with its position in the ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

/// Rank entries by wins, descending, with standard competition ranking.
///
/// Equal wins share a rank and the following group's rank skips the shared
/// places: wins `[10, 10, 7]` rank `[1, 1, 3]`. Entries with equal wins keep
/// their stored order.
#[must_use]
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| b.wins.cmp(&a.wins));

    let mut ranked = Vec::with_capacity(entries.len());
    let mut rank = 0;
    let mut last_wins = None;

    for (position, entry) in entries.into_iter().enumerate() {
        if last_wins != Some(entry.wins) {
            rank = position + 1;
            last_wins = Some(entry.wins);
        }
        ranked.push(RankedEntry { rank, entry });
    }

    ranked
}
