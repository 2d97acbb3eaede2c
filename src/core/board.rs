//! The 3×3 board and the per-symbol move order.
//!
//! ## Board
//!
//! Nine cells indexed 0..=8 in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! `Board` is `Copy`: every transition produces a fresh value and never
//! aliases the caller's board.
//!
//! ## MoveOrder
//!
//! Records, per symbol, the cells it played, oldest first. Only the
//! three-moves variant reads it (to know which mark vanishes next).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::symbol::{Symbol, SymbolMap};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The center cell.
pub const CENTER: usize = 4;

/// The four corner cells, in index order.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// A single cell: empty or holding one symbol.
pub type Cell = Option<Symbol>;

/// Cell indices, sized for a whole board without heap allocation.
pub type CellList = SmallVec<[usize; CELL_COUNT]>;

/// A 3×3 tic-tac-toe board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Create a board from raw cells.
    ///
    /// ```
    /// use morpion::core::{Board, Symbol};
    ///
    /// let x = Some(Symbol::First);
    /// let board = Board::from_cells([x, None, None, None, x, None, None, None, x]);
    /// assert_eq!(board.count(Symbol::First), 3);
    /// ```
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Get the content of a cell. Out-of-range indices read as empty.
    #[must_use]
    pub fn get(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    /// Check whether a cell exists and is empty.
    #[must_use]
    pub fn is_free(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    /// All cells, in index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Empty cell indices in ascending order.
    #[must_use]
    pub fn available_moves(&self) -> CellList {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_none()).collect()
    }

    /// Check whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Check whether every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of marks a symbol has on the board.
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|c| **c == Some(symbol)).count()
    }

    /// Overwrite a cell. Out-of-range indices are ignored.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(3) {
            let marks: Vec<String> = row
                .iter()
                .map(|c| c.map_or_else(|| "-".to_string(), |s| s.to_string()))
                .collect();
            writeln!(f, "{}", marks.join(" "))?;
        }
        Ok(())
    }
}

/// Maximum marks a symbol may keep on the board in the three-moves variant.
pub const MAX_MARKS: usize = 3;

/// Per-symbol play order, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveOrder {
    moves: SymbolMap<SmallVec<[usize; MAX_MARKS]>>,
}

impl MoveOrder {
    /// Create an empty move order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells played by `symbol`, oldest first.
    #[must_use]
    pub fn moves(&self, symbol: Symbol) -> &[usize] {
        &self.moves[symbol]
    }

    /// The oldest recorded cell of `symbol`.
    #[must_use]
    pub fn oldest(&self, symbol: Symbol) -> Option<usize> {
        self.moves[symbol].first().copied()
    }

    /// Number of recorded moves for `symbol`.
    #[must_use]
    pub fn len(&self, symbol: Symbol) -> usize {
        self.moves[symbol].len()
    }

    /// Check whether neither symbol has recorded moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.iter().all(|(_, m)| m.is_empty())
    }

    pub(crate) fn push(&mut self, symbol: Symbol, index: usize) {
        self.moves[symbol].push(index);
    }

    pub(crate) fn pop_oldest(&mut self, symbol: Symbol) -> Option<usize> {
        let moves = &mut self.moves[symbol];
        if moves.is_empty() {
            None
        } else {
            Some(moves.remove(0))
        }
    }
}
