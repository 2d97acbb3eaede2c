//! Computer opponent.
//!
//! The algorithm depends on the variant:
//! - `Classic`: exhaustive minimax (`MinimaxSearch`), deterministic
//! - `ThreeMoves`: prioritized rule chain (`heuristic_move`) with random
//!   corner/fallback picks drawn from an injected `IndexPicker`
//!
//! Callers invoke the opponent only when it is the computer's turn and the
//! round is still running; a full board yields no move.

pub mod heuristic;
pub mod search;
pub mod stats;

pub use heuristic::{heuristic_move, HeuristicChoice, HeuristicRule};
pub use search::{MinimaxSearch, WIN_SCORE};
pub use stats::SearchStats;

use tracing::debug;

use crate::core::{EngineConfig, GameRng, IndexPicker};
use crate::rules::Variant;
use crate::session::Match;

/// Search depth used by `get_cpu_move`.
pub const DEFAULT_SEARCH_DEPTH: u32 = 8;

/// Computer opponent with its own search context and randomness.
pub struct CpuOpponent {
    search: MinimaxSearch,
    picker: Box<dyn IndexPicker>,
}

impl CpuOpponent {
    /// Create an opponent from configuration.
    ///
    /// Uses `config.seed` when set, operating-system entropy otherwise.
    pub fn new(config: &EngineConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            search: MinimaxSearch::new(config.search_depth),
            picker: Box::new(rng),
        }
    }

    /// Replace the random source.
    pub fn with_picker<P: IndexPicker + 'static>(mut self, picker: P) -> Self {
        self.picker = Box::new(picker);
        self
    }

    /// Choose a cell for the symbol to move in `game`.
    pub fn choose_move(&mut self, game: &Match) -> Option<usize> {
        choose_move(game, &mut self.search, self.picker.as_mut())
    }

    /// Statistics of the last classic search.
    #[must_use]
    pub fn last_search(&self) -> &SearchStats {
        self.search.stats()
    }
}

/// Choose a cell for the symbol to move in `game`, using the default depth.
///
/// ```
/// use morpion::core::ScriptedPicker;
/// use morpion::opponent::get_cpu_move;
/// use morpion::rules::Variant;
/// use morpion::session::{create_initial_match, MatchSetup};
///
/// let game = create_initial_match(&MatchSetup::against_computer(Variant::Classic, "Ada")).unwrap();
/// assert_eq!(get_cpu_move(&game, &mut ScriptedPicker::new(vec![0])), Some(4));
/// ```
pub fn get_cpu_move<P: IndexPicker + ?Sized>(game: &Match, picker: &mut P) -> Option<usize> {
    choose_move(game, &mut MinimaxSearch::new(DEFAULT_SEARCH_DEPTH), picker)
}

fn choose_move<P: IndexPicker + ?Sized>(game: &Match, search: &mut MinimaxSearch, picker: &mut P) -> Option<usize> {
    let me = game.current;
    match game.variant {
        Variant::Classic => search.best_move(&game.board, me),
        Variant::ThreeMoves => heuristic_move(&game.board, &game.move_order, me, picker).map(|choice| {
            debug!(index = choice.index, rule = ?choice.rule, "heuristic move");
            choice.index
        }),
    }
}
