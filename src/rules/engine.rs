//! Board transitions and terminal-state detection.
//!
//! Both functions are pure: they read their inputs and return fresh values.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, MoveOrder, Symbol, MAX_MARKS};

/// The eight winning triples: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Game variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Marks are permanent.
    #[default]
    Classic,
    /// A symbol keeps at most three marks; a fourth evicts its oldest.
    ThreeMoves,
}

/// Result of a finished round.
///
/// Persists as `"X"`, `"O"` or `"tie"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Winner {
    /// A symbol completed a line.
    Symbol(Symbol),
    /// Board full with no line.
    Tie,
}

impl From<Winner> for String {
    fn from(winner: Winner) -> Self {
        winner.to_string()
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Symbol(symbol) => write!(f, "{symbol}"),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

impl TryFrom<String> for Winner {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "X" => Ok(Winner::Symbol(Symbol::First)),
            "O" => Ok(Winner::Symbol(Symbol::Second)),
            "tie" => Ok(Winner::Tie),
            other => Err(format!("unknown winner {other:?}")),
        }
    }
}

impl Winner {
    /// Check if `symbol` won.
    #[must_use]
    pub fn is_symbol(self, symbol: Symbol) -> bool {
        self == Winner::Symbol(symbol)
    }
}

/// Outcome of `check_winner`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinnerInfo {
    /// `None` while the round continues.
    pub winner: Option<Winner>,
    /// The winning triple in ascending order; empty on a tie or no winner.
    pub line: SmallVec<[usize; 3]>,
}

impl WinnerInfo {
    fn none() -> Self {
        Self {
            winner: None,
            line: SmallVec::new(),
        }
    }
}

/// Detect a completed line or a tie.
///
/// Lines are checked in `WINNING_LINES` order and the first complete one is
/// reported. A full board without a line is a tie.
///
/// ```
/// use morpion::core::{Board, Symbol};
/// use morpion::rules::{check_winner, Winner};
///
/// let x = Some(Symbol::First);
/// let board = Board::from_cells([x, x, x, None, None, None, None, None, None]);
/// let info = check_winner(&board);
/// assert_eq!(info.winner, Some(Winner::Symbol(Symbol::First)));
/// assert_eq!(info.line.as_slice(), &[0, 1, 2]);
/// ```
#[must_use]
pub fn check_winner(board: &Board) -> WinnerInfo {
    for line in &WINNING_LINES {
        let [a, b, c] = *line;
        if let Some(symbol) = board.get(a) {
            if board.get(b) == Some(symbol) && board.get(c) == Some(symbol) {
                return WinnerInfo {
                    winner: Some(Winner::Symbol(symbol)),
                    line: SmallVec::from_slice(line),
                };
            }
        }
    }

    if board.is_full() {
        return WinnerInfo {
            winner: Some(Winner::Tie),
            line: SmallVec::new(),
        };
    }

    WinnerInfo::none()
}

/// Place `symbol` at `index` under the rules of `variant`.
///
/// An occupied or out-of-range target leaves both values unchanged, so
/// callers detect a rejected move by comparing with their inputs.
///
/// In `ThreeMoves`, a symbol that already holds three marks first loses its
/// oldest one.
#[must_use]
pub fn play_move(
    variant: Variant,
    board: &Board,
    move_order: &MoveOrder,
    index: usize,
    symbol: Symbol,
) -> (Board, MoveOrder) {
    let mut next_board = *board;
    let mut next_order = move_order.clone();

    if !board.is_free(index) {
        return (next_board, next_order);
    }

    if variant == Variant::ThreeMoves {
        if next_order.len(symbol) >= MAX_MARKS {
            if let Some(oldest) = next_order.pop_oldest(symbol) {
                next_board.set(oldest, None);
            }
        }
        next_order.push(symbol, index);
    }

    next_board.set(index, Some(symbol));
    (next_board, next_order)
}

/// The cell that will vanish when `symbol` next plays.
///
/// Only meaningful in `ThreeMoves` when the symbol already holds three
/// marks; `None` otherwise.
#[must_use]
pub fn next_to_vanish(variant: Variant, move_order: &MoveOrder, symbol: Symbol) -> Option<usize> {
    match variant {
        Variant::ThreeMoves if move_order.len(symbol) >= MAX_MARKS => move_order.oldest(symbol),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    const X: Cell = Some(Symbol::First);
    const O: Cell = Some(Symbol::Second);
    const E: Cell = None;

    #[test]
    fn test_no_winner_on_empty_board() {
        let info = check_winner(&Board::empty());
        assert_eq!(info.winner, None);
        assert!(info.line.is_empty());
    }

    #[test]
    fn test_column_win() {
        let board = Board::from_cells([O, X, E, O, X, E, E, X, E]);
        let info = check_winner(&board);
        assert_eq!(info.winner, Some(Winner::Symbol(Symbol::First)));
        assert_eq!(info.line.as_slice(), &[1, 4, 7]);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_cells([X, X, O, E, O, E, O, E, X]);
        let info = check_winner(&board);
        assert_eq!(info.winner, Some(Winner::Symbol(Symbol::Second)));
        assert_eq!(info.line.as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn test_first_listed_line_wins() {
        // Row 0 and column 0 both complete: the row comes first in the table.
        let board = Board::from_cells([X, X, X, X, O, O, X, O, O]);
        let info = check_winner(&board);
        assert_eq!(info.line.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_full_board_with_line_is_not_tie() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, X]);
        let info = check_winner(&board);
        assert_eq!(info.winner, Some(Winner::Symbol(Symbol::First)));
    }

    #[test]
    fn test_tie() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        let info = check_winner(&board);
        assert_eq!(info.winner, Some(Winner::Tie));
        assert!(info.line.is_empty());
    }

    #[test]
    fn test_classic_move_leaves_order_untouched() {
        let (board, order) = play_move(Variant::Classic, &Board::empty(), &MoveOrder::new(), 4, Symbol::First);
        assert_eq!(board.get(4), X);
        assert!(order.is_empty());
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let board = Board::from_cells([X, E, E, E, E, E, E, E, E]);
        let mut order = MoveOrder::new();
        order.push(Symbol::First, 0);

        for variant in [Variant::Classic, Variant::ThreeMoves] {
            let (next_board, next_order) = play_move(variant, &board, &order, 0, Symbol::Second);
            assert_eq!(next_board, board);
            assert_eq!(next_order, order);
        }
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let (board, order) = play_move(Variant::Classic, &Board::empty(), &MoveOrder::new(), 9, Symbol::First);
        assert!(board.is_empty());
        assert!(order.is_empty());
    }

    #[test]
    fn test_three_moves_evicts_oldest() {
        let mut board = Board::empty();
        let mut order = MoveOrder::new();
        for index in [0, 4, 8] {
            (board, order) = play_move(Variant::ThreeMoves, &board, &order, index, Symbol::First);
        }
        assert_eq!(order.moves(Symbol::First), &[0, 4, 8]);

        (board, order) = play_move(Variant::ThreeMoves, &board, &order, 2, Symbol::First);
        assert_eq!(board.get(0), None);
        assert_eq!(board.count(Symbol::First), 3);
        assert_eq!(order.moves(Symbol::First), &[4, 8, 2]);
    }

    #[test]
    fn test_three_moves_eviction_is_per_symbol() {
        let mut board = Board::empty();
        let mut order = MoveOrder::new();
        for (index, symbol) in [(0, Symbol::First), (1, Symbol::Second), (3, Symbol::First), (4, Symbol::Second), (5, Symbol::First)] {
            (board, order) = play_move(Variant::ThreeMoves, &board, &order, index, symbol);
        }
        (board, order) = play_move(Variant::ThreeMoves, &board, &order, 7, Symbol::Second);
        assert_eq!(board.count(Symbol::Second), 3);
        assert_eq!(board.get(0), X);

        (board, _) = play_move(Variant::ThreeMoves, &board, &order, 8, Symbol::Second);
        assert_eq!(board.get(1), None);
        assert_eq!(board.get(0), X);
    }

    #[test]
    fn test_next_to_vanish() {
        let mut order = MoveOrder::new();
        order.push(Symbol::First, 6);
        order.push(Symbol::First, 2);
        assert_eq!(next_to_vanish(Variant::ThreeMoves, &order, Symbol::First), None);

        order.push(Symbol::First, 1);
        assert_eq!(next_to_vanish(Variant::ThreeMoves, &order, Symbol::First), Some(6));
        assert_eq!(next_to_vanish(Variant::Classic, &order, Symbol::First), None);
        assert_eq!(next_to_vanish(Variant::ThreeMoves, &order, Symbol::Second), None);
    }

    #[test]
    fn test_winner_serde() {
        assert_eq!(serde_json::to_string(&Winner::Tie).unwrap(), "\"tie\"");
        assert_eq!(serde_json::to_string(&Winner::Symbol(Symbol::Second)).unwrap(), "\"O\"");
        let back: Winner = serde_json::from_str("\"X\"").unwrap();
        assert_eq!(back, Winner::Symbol(Symbol::First));
        let tie: Winner = serde_json::from_str("\"tie\"").unwrap();
        assert_eq!(tie, Winner::Tie);
        assert!(serde_json::from_str::<Winner>("\"draw\"").is_err());
    }

    #[test]
    fn test_variant_serde() {
        assert_eq!(serde_json::to_string(&Variant::ThreeMoves).unwrap(), "\"three-moves\"");
        assert_eq!(serde_json::to_string(&Variant::Classic).unwrap(), "\"classic\"");
    }
}
