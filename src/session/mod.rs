//! Match sessions: state, creation and turn sequencing.
//!
//! - `Match`: the persisted session (board, turn, result, counters)
//! - `create_initial_match`: builds a match from setup choices
//! - `MatchController`: applies human and computer moves, paces the
//!   computer, updates the leaderboard and persists after every change

pub mod state;
pub mod setup;
pub mod controller;

pub use state::{Match, MoveOutcome, OpponentKind, PlayerInfo, RoundWins, Streak};
pub use setup::{create_initial_match, MatchSetup, SetupError, COMPUTER_NAME, DEFAULT_FIRST_NAME, DEFAULT_SECOND_NAME};
pub use controller::{CpuMoveTicket, MatchController};
