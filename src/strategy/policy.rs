//! Move policies for the computer player.
//!
//! A policy looks at the board, picks a move and applies it. The board
//! comes back already changed; callers must not apply the move again.

use log::debug;

use crate::core::{Board, Move, NimError, Result};

use super::parity::{is_balanced, parity_vector};

/// Policy for choosing and playing the computer's move.
pub trait MovePolicy {
    /// Choose a move, apply it to `board`, and return it.
    ///
    /// Fails with `InvalidState` on an empty board.
    fn choose_move(&self, board: &mut Board) -> Result<Move>;
}

/// Perfect play by binary parity.
///
/// Scans rows in ascending order and, within a row, counts from 1 upwards.
/// The first move that leaves a balanced board is played. If no move does,
/// the board was already balanced and one stick is taken from the first
/// non-empty row.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParityPolicy;

impl MovePolicy for ParityPolicy {
    fn choose_move(&self, board: &mut Board) -> Result<Move> {
        let Some(first_nonempty) = board.first_nonempty_row() else {
            return Err(NimError::InvalidState(
                "computer asked to move on an empty board".to_string(),
            ));
        };

        debug!("choosing move for {:?} (parity {})", board.rows(), parity_vector(board));

        for row in 0..board.row_count() {
            let sticks = board.row(row).unwrap_or(0);
            for count in 1..=sticks {
                let candidate = Move::new(count, row);
                board.take(candidate)?;
                if is_balanced(board) {
                    debug!("balancing move {} leaves {:?}", candidate, board.rows());
                    return Ok(candidate);
                }
                board.untake(candidate)?;
            }
        }

        // Already balanced: no move restores balance, so stall.
        let fallback = Move::new(1, first_nonempty);
        board.take(fallback)?;
        debug!("board was balanced, taking {} leaves {:?}", fallback, board.rows());
        Ok(fallback)
    }
}

/// Choose and play the computer's move with `ParityPolicy`.
pub fn choose_computer_move(board: &mut Board) -> Result<Move> {
    ParityPolicy.choose_move(board)
}
