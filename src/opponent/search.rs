//! Exhaustive minimax for the classic variant.
//!
//! Searches with a single owned board: each candidate is placed, searched
//! and removed again, so no board is allocated per node.

use std::time::Instant;

use tracing::debug;

use crate::core::{Board, Symbol, CELL_COUNT, CENTER};
use crate::rules::{check_winner, Winner};

use super::stats::SearchStats;

/// Score of a position the searching symbol has won.
pub const WIN_SCORE: i32 = 10;

/// Minimax search context.
///
/// Scores are +10 for a win of the searching symbol, -10 for a loss and 0
/// for a tie or an unresolved position at the depth limit. Among equally
/// scored root moves the lowest index wins.
#[derive(Clone, Debug)]
pub struct MinimaxSearch {
    depth: u32,
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a search that looks `depth` plies past each root candidate.
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            stats: SearchStats::default(),
        }
    }

    /// Configured depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best cell for `me` to play on `board`.
    ///
    /// Returns `None` on a full board. An empty board is answered with the
    /// center without searching.
    pub fn best_move(&mut self, board: &Board, me: Symbol) -> Option<usize> {
        let start = Instant::now();
        self.stats.reset();

        let moves = board.available_moves();
        if moves.is_empty() {
            return None;
        }
        if moves.len() == CELL_COUNT {
            debug!("empty board, opening in the center");
            return Some(CENTER);
        }

        let mut scratch = *board;
        let mut best: Option<(usize, i32)> = None;

        for &index in &moves {
            scratch.set(index, Some(me));
            self.stats.candidates += 1;
            let score = self.minimax(&mut scratch, me, me.other(), self.depth, false, 1);
            scratch.set(index, None);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            best = ?best,
            nodes = self.stats.nodes_visited,
            time_us = self.stats.time_us,
            "minimax search finished"
        );

        best.map(|(index, _)| index)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        me: Symbol,
        to_move: Symbol,
        depth: u32,
        maximizing: bool,
        ply: u32,
    ) -> i32 {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(ply);

        let winner = check_winner(board).winner;
        if winner.is_some() || depth == 0 {
            self.stats.leaves += 1;
            return score_for(winner, me);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for index in board.available_moves() {
            board.set(index, Some(to_move));
            let value = self.minimax(board, me, to_move.other(), depth - 1, !maximizing, ply + 1);
            board.set(index, None);

            best = if maximizing { best.max(value) } else { best.min(value) };
        }
        best
    }
}

fn score_for(winner: Option<Winner>, me: Symbol) -> i32 {
    match winner {
        Some(Winner::Symbol(symbol)) if symbol == me => WIN_SCORE,
        Some(Winner::Symbol(_)) => -WIN_SCORE,
        Some(Winner::Tie) | None => 0,
    }
}
