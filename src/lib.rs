//! # morpion
//!
//! Tic-tac-toe engine with a computer opponent, persisted sessions and a
//! streak leaderboard.
//!
//! ## Variants
//!
//! - **Classic**: marks are permanent; the computer plays exhaustive minimax.
//! - **Three-moves**: each symbol keeps at most three marks and the oldest
//!   vanishes when a fourth is placed; the computer follows a rule chain
//!   (win, block, center, corner, anything).
//!
//! ## Architecture
//!
//! - **Pure rules**: `check_winner` and `play_move` never mutate their
//!   inputs. `Board` is `Copy`.
//!
//! - **Injected effects**: storage (`KeyValueStore`), randomness
//!   (`IndexPicker`) and time (`Clock`) are passed in, so every behavior
//!   is reproducible in tests.
//!
//! - **Event-driven sessions**: `MatchController` reacts to one event at a
//!   time and persists after each change.
//!
//! ## Modules
//!
//! - `core`: Symbols, board, move order, RNG, clock, configuration
//! - `rules`: Move application, win/tie detection
//! - `opponent`: Minimax and heuristic move selection
//! - `session`: Match state, setup, controller
//! - `leaderboard`: Streak records and ranking
//! - `storage`: Key-value persistence

pub mod core;
pub mod rules;
pub mod opponent;
pub mod session;
pub mod leaderboard;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, MoveOrder, Symbol, SymbolMap,
    GameRng, IndexPicker, ScriptedPicker,
    Clock, FixedClock, SystemClock,
    EngineConfig,
};

pub use crate::rules::{check_winner, play_move, Variant, Winner, WinnerInfo};

pub use crate::opponent::{get_cpu_move, CpuOpponent, MinimaxSearch, SearchStats};

pub use crate::session::{
    create_initial_match, Match, MatchSetup, MatchController, MoveOutcome,
    OpponentKind, PlayerInfo, Streak, RoundWins, CpuMoveTicket, SetupError,
};

pub use crate::leaderboard::{LeaderboardEntry, LeaderboardRecorder, RankedEntry};

pub use crate::storage::{KeyValueStore, MemoryStore, SessionStore, StoreError};
