//! Core types: symbols, board, move order, randomness, clock, configuration.

pub mod symbol;
pub mod board;
pub mod rng;
pub mod clock;
pub mod config;

pub use symbol::{Symbol, SymbolMap};
pub use board::{Board, Cell, CellList, MoveOrder, CELL_COUNT, CENTER, CORNERS, MAX_MARKS};
pub use rng::{choose, GameRng, IndexPicker, ScriptedPicker};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{EngineConfig, DEFAULT_LEADERBOARD_KEY, DEFAULT_SESSION_KEY};
