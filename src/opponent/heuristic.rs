//! Rule-chain opponent for the three-moves variant.
//!
//! Rules are tried in priority order and the first applicable one decides:
//! win, block, center, random corner, random cell. Win and block lookahead
//! apply the same eviction as a real move, so a threat that would vanish
//! with the mover's oldest mark is not counted.
//!
//! The block check deliberately evicts too. A plain placement of the
//! opponent's mark would see lines that the opponent cannot actually
//! complete on its next move, and spend the computer's turn blocking them.

use serde::{Deserialize, Serialize};

use crate::core::{choose, Board, CellList, IndexPicker, MoveOrder, Symbol, CENTER, CORNERS};
use crate::rules::{check_winner, play_move, Variant, Winner};

/// Which rule produced a heuristic move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeuristicRule {
    /// Completes a line for the computer.
    Win,
    /// Denies the opponent an immediate line.
    Block,
    /// Takes the free center.
    Center,
    /// Random free corner.
    Corner,
    /// Random free cell.
    Fallback,
}

/// A chosen cell and the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeuristicChoice {
    pub index: usize,
    pub rule: HeuristicRule,
}

/// Pick a move for `me` on a three-moves board.
///
/// Returns `None` when no cell is free.
pub fn heuristic_move<P: IndexPicker + ?Sized>(
    board: &Board,
    move_order: &MoveOrder,
    me: Symbol,
    picker: &mut P,
) -> Option<HeuristicChoice> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return None;
    }

    if let Some(index) = first_winning_cell(board, move_order, &moves, me) {
        return Some(HeuristicChoice { index, rule: HeuristicRule::Win });
    }

    if let Some(index) = first_winning_cell(board, move_order, &moves, me.other()) {
        return Some(HeuristicChoice { index, rule: HeuristicRule::Block });
    }

    if board.is_free(CENTER) {
        return Some(HeuristicChoice { index: CENTER, rule: HeuristicRule::Center });
    }

    let corners: CellList = CORNERS.iter().copied().filter(|&i| board.is_free(i)).collect();
    if let Some(index) = choose(picker, &corners) {
        return Some(HeuristicChoice { index, rule: HeuristicRule::Corner });
    }

    choose(picker, &moves).map(|index| HeuristicChoice { index, rule: HeuristicRule::Fallback })
}

/// First free cell, in index order, that completes a line for `symbol`.
fn first_winning_cell(board: &Board, move_order: &MoveOrder, moves: &[usize], symbol: Symbol) -> Option<usize> {
    moves.iter().copied().find(|&index| {
        let (next, _) = play_move(Variant::ThreeMoves, board, move_order, index, symbol);
        check_winner(&next).winner == Some(Winner::Symbol(symbol))
    })
}
