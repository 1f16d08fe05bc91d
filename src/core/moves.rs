//! Move representation: how many sticks, from which row.
//!
//! Moves are written the way players type them, `count,row`:
//! - `3,0` takes three sticks from row 0
//! - `1,2` takes one stick from row 2
//!
//! Whether a move is legal depends on the board; parsing only checks shape.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::NimError;
use super::player::Player;

/// A single move: remove `count` sticks from row `row`.
///
/// ## Example
///
/// ```
/// use rust_nim::core::Move;
///
/// let mv: Move = "3,0".parse().unwrap();
/// assert_eq!(mv, Move::new(3, 0));
/// assert_eq!(mv.to_string(), "3,0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Sticks to remove.
    pub count: u32,

    /// Row to remove them from.
    pub row: usize,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(count: u32, row: usize) -> Self {
        Self { count, row }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.count, self.row)
    }
}

impl FromStr for Move {
    type Err = NimError;

    /// Parse a `count,row` token. Whitespace around either number is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut parts = token.split(',');

        let (Some(count), Some(row), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(NimError::parse(token, "expected <sticks,row>"));
        };

        let count = count
            .trim()
            .parse::<u32>()
            .map_err(|e| NimError::parse(token, format!("sticks: {}", e)))?;
        let row = row
            .trim()
            .parse::<usize>()
            .map_err(|e| NimError::parse(token, format!("row: {}", e)))?;

        Ok(Move::new(count, row))
    }
}

/// A played move with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who made the move.
    pub player: Player,

    /// The move itself.
    pub mv: Move,

    /// Position in the game, starting at 1.
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, mv: Move, sequence: u32) -> Self {
        Self {
            player,
            mv,
            sequence,
        }
    }
}
