//! Rules engine trait and the normal-play rules of Nim.
//!
//! A rules engine answers three questions about a board:
//! - Which moves are legal, in scan order
//! - How a move changes the board
//! - Whether the game is over, and who won

use crate::core::{Board, Move, Player, Result};

/// Result of a completed game.
///
/// Nim cannot be drawn, so every finished game has exactly one winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }

    /// The winning player.
    #[must_use]
    pub fn winner(&self) -> Player {
        match self {
            GameResult::Winner(p) => *p,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} won!", p),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: row ascending, then count ascending
/// - `apply_move`: must leave the board untouched on error
/// - `is_terminal`: return None if the game continues
pub trait RulesEngine {
    /// Every legal move on `board`, in scan order.
    fn legal_moves(&self, board: &Board) -> Vec<Move>;

    /// Apply a move to the board.
    fn apply_move(&self, board: &mut Board, mv: Move) -> Result<()>;

    /// Check if the game is over after `last_mover` moved.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, board: &Board, last_mover: Player) -> Option<GameResult>;
}

/// Normal play: take any number of sticks from one row; whoever takes the
/// last stick wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct NormalPlay;

impl RulesEngine for NormalPlay {
    fn legal_moves(&self, board: &Board) -> Vec<Move> {
        board
            .rows()
            .iter()
            .enumerate()
            .flat_map(|(row, &sticks)| (1..=sticks).map(move |count| Move::new(count, row)))
            .collect()
    }

    fn apply_move(&self, board: &mut Board, mv: Move) -> Result<()> {
        board.take(mv)
    }

    fn is_terminal(&self, board: &Board, last_mover: Player) -> Option<GameResult> {
        board.is_empty().then_some(GameResult::Winner(last_mover))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NimError;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::Computer);
        assert!(!result.is_winner(Player::Human));
        assert!(result.is_winner(Player::Computer));
        assert_eq!(result.winner(), Player::Computer);
        assert_eq!(format!("{}", result), "Computer won!");
        assert_eq!(format!("{}", GameResult::Winner(Player::Human)), "Player won!");
    }

    #[test]
    fn test_legal_moves_scan_order() {
        let board = Board::new(&[2, 0, 1], 8).unwrap();
        let moves = NormalPlay.legal_moves(&board);

        assert_eq!(moves, vec![Move::new(1, 0), Move::new(2, 0), Move::new(1, 2)]);
    }

    #[test]
    fn test_legal_moves_empty_board() {
        let board = Board::new(&[0, 0], 8).unwrap();
        assert!(NormalPlay.legal_moves(&board).is_empty());
    }

    #[test]
    fn test_apply_move_accepts_exactly_legal_moves() {
        let board = Board::new(&[3, 1], 8).unwrap();
        let legal = NormalPlay.legal_moves(&board);

        for row in 0..3 {
            for count in 0..5 {
                let mv = Move::new(count, row);
                let applied = NormalPlay.apply_move(&mut board.clone(), mv).is_ok();
                assert_eq!(applied, legal.contains(&mv), "{}", mv);
            }
        }
    }

    #[test]
    fn test_apply_move() {
        let mut board = Board::new(&[3, 1], 8).unwrap();
        NormalPlay.apply_move(&mut board, Move::new(2, 0)).unwrap();
        assert_eq!(board.rows(), &[1, 1]);

        let err = NormalPlay.apply_move(&mut board, Move::new(2, 1)).unwrap_err();
        assert!(matches!(err, NimError::InvalidMove { .. }));
        assert_eq!(board.rows(), &[1, 1]);
    }

    #[test]
    fn test_is_terminal() {
        let mut board = Board::new(&[4], 8).unwrap();
        assert_eq!(NormalPlay.is_terminal(&board, Player::Human), None);

        NormalPlay.apply_move(&mut board, Move::new(4, 0)).unwrap();
        assert_eq!(
            NormalPlay.is_terminal(&board, Player::Human),
            Some(GameResult::Winner(Player::Human))
        );
    }
}
