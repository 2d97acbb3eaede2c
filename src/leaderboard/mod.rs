//! Cross-session leaderboard of streaks against the computer.
//!
//! A record is appended each time the computer ends a human's streak.
//! The ranked view orders records by wins with shared ranks for ties.

pub mod entry;
pub mod recorder;

pub use entry::{rank_entries, LeaderboardEntry, RankedEntry};
pub use recorder::LeaderboardRecorder;
