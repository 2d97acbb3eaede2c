//! Match state: board, turn, result and cross-round counters.
//!
//! A `Match` is one persisted session. It survives "next round" resets
//! (board cleared, counters kept) and is discarded on quit.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, MoveOrder, Symbol, SymbolMap, CELL_COUNT, MAX_MARKS};
use crate::rules::{check_winner, next_to_vanish, play_move, Variant, Winner};

/// Who plays the second symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpponentKind {
    /// The computer opponent.
    #[default]
    #[serde(rename = "cpu")]
    Computer,
    /// A second human on the same device.
    #[serde(rename = "local")]
    LocalHuman,
}

/// A seat at the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub is_computer: bool,
    pub symbol: Symbol,
}

/// Consecutive results of the human against the computer.
///
/// Grows on every human win or tie; reset when the computer wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Streak {
    pub wins: u32,
    pub ties: u32,
}

/// Rounds won by each symbol and rounds tied in this session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundWins {
    pub wins: SymbolMap<u32>,
    pub ties: u32,
}

impl RoundWins {
    /// Count one finished round.
    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Symbol(symbol) => self.wins[symbol] += 1,
            Winner::Tie => self.ties += 1,
        }
    }
}

/// Result of submitting a move to a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Finished match, occupied cell or out-of-range index. Nothing changed.
    Rejected,
    /// Move applied; the other symbol is now to move.
    Continue,
    /// Move applied and the round is over.
    Finished {
        winner: Winner,
        line: SmallVec<[usize; 3]>,
    },
}

/// A session of rounds between two players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub variant: Variant,
    pub opponent: OpponentKind,
    pub players: SymbolMap<PlayerInfo>,
    pub board: Board,
    pub move_order: MoveOrder,
    /// Symbol to move next.
    pub current: Symbol,
    pub is_finished: bool,
    /// `None` while the round runs.
    pub winner: Option<Winner>,
    pub streak: Streak,
    pub round_wins: RoundWins,
}

impl Match {
    /// Create a match with an empty board and zeroed counters.
    #[must_use]
    pub fn new(variant: Variant, opponent: OpponentKind, players: SymbolMap<PlayerInfo>) -> Self {
        Self {
            variant,
            opponent,
            players,
            board: Board::empty(),
            move_order: MoveOrder::new(),
            current: Symbol::First,
            is_finished: false,
            winner: None,
            streak: Streak::default(),
            round_wins: RoundWins::default(),
        }
    }

    /// Start from counters carried over from an earlier session.
    #[must_use]
    pub fn with_counters(mut self, streak: Streak, round_wins: RoundWins) -> Self {
        self.streak = streak;
        self.round_wins = round_wins;
        self
    }

    /// Player to move next.
    #[must_use]
    pub fn current_player(&self) -> &PlayerInfo {
        &self.players[self.current]
    }

    /// Check if the computer should move now.
    #[must_use]
    pub fn is_computer_turn(&self) -> bool {
        !self.is_finished && self.current_player().is_computer
    }

    /// Symbol played by the computer, if any.
    #[must_use]
    pub fn computer_symbol(&self) -> Option<Symbol> {
        self.players.find(|p| p.is_computer)
    }

    /// Symbol of the human facing the computer (the first human seat).
    #[must_use]
    pub fn human_symbol(&self) -> Symbol {
        self.players.find(|p| !p.is_computer).unwrap_or(Symbol::First)
    }

    /// Winning line of the finished round; empty otherwise.
    #[must_use]
    pub fn winning_line(&self) -> SmallVec<[usize; 3]> {
        check_winner(&self.board).line
    }

    /// Cell of `symbol` that vanishes on its next move (three-moves only).
    #[must_use]
    pub fn next_to_vanish(&self, symbol: Symbol) -> Option<usize> {
        next_to_vanish(self.variant, &self.move_order, symbol)
    }

    /// Check that the match upholds the invariants play relies on.
    ///
    /// Recorded moves must be distinct in-range cells held by their symbol,
    /// three at most per symbol and matching the board in three-moves
    /// (absent in classic). The stored result must agree with the board.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let orders_valid = Symbol::ALL.into_iter().all(|symbol| {
            let moves = self.move_order.moves(symbol);
            let tracked = match self.variant {
                Variant::Classic => moves.is_empty(),
                Variant::ThreeMoves => moves.len() <= MAX_MARKS && moves.len() == self.board.count(symbol),
            };
            tracked
                && moves.iter().enumerate().all(|(position, &cell)| {
                    cell < CELL_COUNT && self.board.get(cell) == Some(symbol) && !moves[..position].contains(&cell)
                })
        });

        let result = check_winner(&self.board).winner;
        orders_valid && self.is_finished == result.is_some() && self.winner == result
    }

    /// Play `index` for the symbol to move.
    ///
    /// On a round end, round wins are updated, and against the computer the
    /// streak grows on a human win or tie and resets on a computer win.
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if self.is_finished {
            return MoveOutcome::Rejected;
        }

        let (board, move_order) = play_move(self.variant, &self.board, &self.move_order, index, self.current);
        if board == self.board && move_order == self.move_order {
            return MoveOutcome::Rejected;
        }

        self.board = board;
        self.move_order = move_order;
        self.current = self.current.other();

        let info = check_winner(&self.board);
        match info.winner {
            None => MoveOutcome::Continue,
            Some(winner) => {
                self.is_finished = true;
                self.winner = Some(winner);
                self.round_wins.record(winner);
                if self.opponent == OpponentKind::Computer {
                    self.update_streak(winner);
                }
                MoveOutcome::Finished {
                    winner,
                    line: info.line,
                }
            }
        }
    }

    /// Clear the board for another round, keeping every counter.
    pub fn reset_round(&mut self) {
        self.board = Board::empty();
        self.move_order = MoveOrder::new();
        self.current = Symbol::First;
        self.is_finished = false;
        self.winner = None;
    }

    fn update_streak(&mut self, winner: Winner) {
        match winner {
            Winner::Tie => self.streak.ties += 1,
            Winner::Symbol(symbol) if symbol == self.human_symbol() => self.streak.wins += 1,
            Winner::Symbol(_) => self.streak = Streak::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(opponent: OpponentKind) -> SymbolMap<PlayerInfo> {
        SymbolMap::new(|symbol| PlayerInfo {
            name: format!("{symbol}-player"),
            is_computer: opponent == OpponentKind::Computer && symbol == Symbol::Second,
            symbol,
        })
    }

    fn play_all(game: &mut Match, moves: &[usize]) -> MoveOutcome {
        let mut outcome = MoveOutcome::Rejected;
        for &index in moves {
            outcome = game.apply_move(index);
        }
        outcome
    }

    #[test]
    fn test_new_match() {
        let game = Match::new(Variant::Classic, OpponentKind::Computer, players(OpponentKind::Computer));
        assert!(game.board.is_empty());
        assert_eq!(game.current, Symbol::First);
        assert!(!game.is_finished);
        assert_eq!(game.computer_symbol(), Some(Symbol::Second));
        assert_eq!(game.human_symbol(), Symbol::First);
        assert!(!game.is_computer_turn());
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = Match::new(Variant::Classic, OpponentKind::LocalHuman, players(OpponentKind::LocalHuman));
        assert_eq!(game.apply_move(0), MoveOutcome::Continue);
        assert_eq!(game.current, Symbol::Second);
        assert_eq!(game.apply_move(1), MoveOutcome::Continue);
        assert_eq!(game.current, Symbol::First);
        assert_eq!(game.computer_symbol(), None);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Match::new(Variant::Classic, OpponentKind::LocalHuman, players(OpponentKind::LocalHuman));
        game.apply_move(4);
        let before = game.clone();
        assert_eq!(game.apply_move(4), MoveOutcome::Rejected);
        assert_eq!(game.apply_move(11), MoveOutcome::Rejected);
        assert_eq!(game, before);
    }

    #[test]
    fn test_human_win_grows_streak() {
        let mut game = Match::new(Variant::Classic, OpponentKind::Computer, players(OpponentKind::Computer));
        let outcome = play_all(&mut game, &[0, 3, 1, 4, 2]);

        assert_eq!(
            outcome,
            MoveOutcome::Finished {
                winner: Winner::Symbol(Symbol::First),
                line: SmallVec::from_slice(&[0, 1, 2]),
            }
        );
        assert!(game.is_finished);
        assert_eq!(game.streak, Streak { wins: 1, ties: 0 });
        assert_eq!(game.round_wins.wins[Symbol::First], 1);
        assert_eq!(game.winning_line().as_slice(), &[0, 1, 2]);
        assert_eq!(game.apply_move(5), MoveOutcome::Rejected);
    }

    #[test]
    fn test_tie_grows_streak_ties() {
        let mut game = Match::new(Variant::Classic, OpponentKind::Computer, players(OpponentKind::Computer));
        let outcome = play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(matches!(outcome, MoveOutcome::Finished { winner: Winner::Tie, .. }));
        assert_eq!(game.streak, Streak { wins: 0, ties: 1 });
        assert_eq!(game.round_wins.ties, 1);
    }

    #[test]
    fn test_computer_win_resets_streak() {
        let mut game = Match::new(Variant::Classic, OpponentKind::Computer, players(OpponentKind::Computer))
            .with_counters(Streak { wins: 3, ties: 2 }, RoundWins::default());
        play_all(&mut game, &[0, 3, 1, 4, 8, 5]);
        assert_eq!(game.winner, Some(Winner::Symbol(Symbol::Second)));
        assert_eq!(game.streak, Streak::default());
        assert_eq!(game.round_wins.wins[Symbol::Second], 1);
    }

    #[test]
    fn test_local_match_keeps_streak_untouched() {
        let mut game = Match::new(Variant::Classic, OpponentKind::LocalHuman, players(OpponentKind::LocalHuman));
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.streak, Streak::default());
        assert_eq!(game.round_wins.wins[Symbol::First], 1);
    }

    #[test]
    fn test_reset_round_keeps_counters() {
        let mut game = Match::new(Variant::ThreeMoves, OpponentKind::Computer, players(OpponentKind::Computer));
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        game.reset_round();

        assert!(game.board.is_empty());
        assert!(game.move_order.is_empty());
        assert_eq!(game.current, Symbol::First);
        assert!(!game.is_finished);
        assert_eq!(game.winner, None);
        assert_eq!(game.streak.wins, 1);
        assert_eq!(game.round_wins.wins[Symbol::First], 1);
    }

    #[test]
    fn test_three_moves_next_to_vanish() {
        let mut game = Match::new(Variant::ThreeMoves, OpponentKind::LocalHuman, players(OpponentKind::LocalHuman));
        play_all(&mut game, &[0, 1, 5, 3, 7]);
        assert_eq!(game.next_to_vanish(Symbol::First), Some(0));
        assert_eq!(game.next_to_vanish(Symbol::Second), None);
    }

    #[test]
    fn test_played_matches_are_consistent() {
        let mut game = Match::new(Variant::ThreeMoves, OpponentKind::LocalHuman, players(OpponentKind::LocalHuman));
        assert!(game.is_consistent());
        play_all(&mut game, &[0, 1, 5, 3, 7, 4, 2]);
        assert!(game.is_consistent());

        let mut classic = Match::new(Variant::Classic, OpponentKind::Computer, players(OpponentKind::Computer));
        play_all(&mut classic, &[0, 3, 1, 4, 2]);
        assert!(classic.is_finished);
        assert!(classic.is_consistent());
    }

    #[test]
    fn test_inconsistent_move_order() {
        let mut game = Match::new(Variant::ThreeMoves, OpponentKind::LocalHuman, players(OpponentKind::LocalHuman));
        play_all(&mut game, &[0, 4, 1]);

        let mut out_of_range = game.clone();
        out_of_range.move_order = serde_json::from_str(r#"{"X":[0,9],"O":[4]}"#).unwrap();
        assert!(!out_of_range.is_consistent());

        let mut too_long = game.clone();
        too_long.move_order = serde_json::from_str(r#"{"X":[0,1,2,3,5],"O":[4]}"#).unwrap();
        assert!(!too_long.is_consistent());

        let mut wrong_owner = game.clone();
        wrong_owner.move_order = serde_json::from_str(r#"{"X":[0,4],"O":[1]}"#).unwrap();
        assert!(!wrong_owner.is_consistent());

        let mut repeated = game.clone();
        repeated.move_order = serde_json::from_str(r#"{"X":[0,0],"O":[4]}"#).unwrap();
        assert!(!repeated.is_consistent());
    }

    #[test]
    fn test_inconsistent_result() {
        let mut game = Match::new(Variant::Classic, OpponentKind::LocalHuman, players(OpponentKind::LocalHuman));
        play_all(&mut game, &[0, 3, 1, 4]);

        let mut finished_early = game.clone();
        finished_early.is_finished = true;
        finished_early.winner = Some(Winner::Tie);
        assert!(!finished_early.is_consistent());

        play_all(&mut game, &[2]);
        let mut wrong_winner = game.clone();
        wrong_winner.winner = Some(Winner::Symbol(Symbol::Second));
        assert!(!wrong_winner.is_consistent());

        let mut unfinished = game;
        unfinished.is_finished = false;
        unfinished.winner = None;
        assert!(!unfinished.is_consistent());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut game = Match::new(Variant::ThreeMoves, OpponentKind::Computer, players(OpponentKind::Computer));
        play_all(&mut game, &[4, 0, 8]);

        let json = serde_json::to_string(&game).unwrap();
        let back: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }
}
