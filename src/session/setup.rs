//! Match creation from the setup form.

use serde::{Deserialize, Serialize};

use crate::core::{Symbol, SymbolMap};
use crate::rules::Variant;

use super::state::{Match, OpponentKind, PlayerInfo};

/// Name given to the computer seat.
pub const COMPUTER_NAME: &str = "CPU";

/// Fallback name of the first seat.
pub const DEFAULT_FIRST_NAME: &str = "Player 1";

/// Fallback name of the second human seat.
pub const DEFAULT_SECOND_NAME: &str = "Player 2";

/// Choices made before a match starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    pub variant: Variant,
    pub opponent: OpponentKind,
    pub first_name: String,
    pub second_name: String,
}

impl MatchSetup {
    /// Setup for a match against the computer.
    pub fn against_computer(variant: Variant, name: impl Into<String>) -> Self {
        Self {
            variant,
            opponent: OpponentKind::Computer,
            first_name: name.into(),
            second_name: String::new(),
        }
    }

    /// Setup for two humans sharing the device.
    pub fn local(variant: Variant, first_name: impl Into<String>, second_name: impl Into<String>) -> Self {
        Self {
            variant,
            opponent: OpponentKind::LocalHuman,
            first_name: first_name.into(),
            second_name: second_name.into(),
        }
    }
}

/// Invalid match setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// The leaderboard needs a name for the human facing the computer.
    MissingPlayerName,
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::MissingPlayerName => write!(f, "a player name is required to play against the computer"),
        }
    }
}

impl std::error::Error for SetupError {}

/// Build a fresh match from `setup`.
///
/// The first symbol always belongs to a human. Names are trimmed; blank
/// names fall back to defaults, except that a match against the computer
/// requires a name.
pub fn create_initial_match(setup: &MatchSetup) -> Result<Match, SetupError> {
    let first_name = setup.first_name.trim();
    let second_name = setup.second_name.trim();
    let against_computer = setup.opponent == OpponentKind::Computer;

    if against_computer && first_name.is_empty() {
        return Err(SetupError::MissingPlayerName);
    }

    let players = SymbolMap::new(|symbol| match symbol {
        Symbol::First => PlayerInfo {
            name: or_default(first_name, DEFAULT_FIRST_NAME),
            is_computer: false,
            symbol,
        },
        Symbol::Second => PlayerInfo {
            name: if against_computer {
                COMPUTER_NAME.to_string()
            } else {
                or_default(second_name, DEFAULT_SECOND_NAME)
            },
            is_computer: against_computer,
            symbol,
        },
    });

    Ok(Match::new(setup.variant, setup.opponent, players))
}

fn or_default(name: &str, default: &str) -> String {
    if name.is_empty() { default } else { name }.to_string()
}
