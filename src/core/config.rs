//! Engine configuration.
//!
//! All tunables live in `EngineConfig`: search depth for the classic
//! opponent, the pacing delay before a computer move, the RNG seed and the
//! store keys the session and leaderboard are persisted under.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Store key holding the in-progress match.
pub const DEFAULT_SESSION_KEY: &str = "morpion-current-game";

/// Store key holding the leaderboard collection.
pub const DEFAULT_LEADERBOARD_KEY: &str = "morpion-leaderboard";

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimax search depth for the classic opponent (default: 8).
    /// Tic-tac-toe has at most 9 plies, so 8 covers every reply to the
    /// computer's first candidate move.
    pub search_depth: u32,

    /// Delay before the computer plays, in milliseconds (default: 600).
    /// Purely cosmetic pacing so the move is visible.
    pub cpu_move_delay_ms: u64,

    /// Seed for the opponent's random tie-breaks.
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Key of the persisted session.
    pub session_key: String,

    /// Key of the persisted leaderboard.
    pub leaderboard_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 8,
            cpu_move_delay_ms: 600,
            seed: None,
            session_key: DEFAULT_SESSION_KEY.to_string(),
            leaderboard_key: DEFAULT_LEADERBOARD_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Pacing delay before a computer move.
    #[must_use]
    pub fn cpu_move_delay(&self) -> Duration {
        Duration::from_millis(self.cpu_move_delay_ms)
    }

    /// Create a new config with a custom search depth.
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Create a new config with a custom computer move delay.
    pub fn with_cpu_move_delay(mut self, delay: Duration) -> Self {
        self.cpu_move_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with custom store keys.
    pub fn with_keys(mut self, session_key: impl Into<String>, leaderboard_key: impl Into<String>) -> Self {
        self.session_key = session_key.into();
        self.leaderboard_key = leaderboard_key.into();
        self
    }
}
