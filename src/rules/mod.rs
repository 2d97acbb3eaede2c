//! Rules engine: move application and win/tie detection.
//!
//! Two variants share the same board and winning lines:
//! - `Classic`: marks are permanent
//! - `ThreeMoves`: each symbol keeps at most three marks, oldest vanishes first

pub mod engine;

pub use engine::{check_winner, next_to_vanish, play_move, Variant, Winner, WinnerInfo, WINNING_LINES};
