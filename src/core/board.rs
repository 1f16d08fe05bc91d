//! The Nim board: a fixed set of rows, each holding some sticks.
//!
//! Rows are created once during setup and never added or removed. Moves
//! change the stick counts in place through `take`, and the strategy search
//! reverses speculative moves through `untake`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{check_max_bits, BoardConfig};
use super::error::{NimError, Result};
use super::moves::Move;

/// Inline storage for row counts; typical boards have a handful of rows.
pub type Rows = SmallVec<[u32; 8]>;

/// Row sizes plus the bit width they are measured against.
///
/// ## Example
///
/// ```
/// use rust_nim::core::{Board, Move};
///
/// let mut board = Board::new(&[7, 5, 3], 8).unwrap();
/// board.take(Move::new(3, 0)).unwrap();
/// assert_eq!(board.rows(), &[4, 5, 3]);
/// assert!(board.take(Move::new(9, 1)).is_err());
/// assert_eq!(board.rows(), &[4, 5, 3]);
/// ```
///
/// Deserialization runs the same checks as [`Board::new`], and also requires
/// every row to fit within the size it started with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    rows: Rows,
    initial: Rows,
    max_bits: u32,
}

/// Unchecked wire form of `Board`.
#[derive(Deserialize)]
struct BoardRepr {
    rows: Rows,
    initial: Rows,
    max_bits: u32,
}

impl TryFrom<BoardRepr> for Board {
    type Error = NimError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let mut board = Board::new(&repr.initial, repr.max_bits)?;
        if repr.rows.len() != repr.initial.len() {
            return Err(NimError::InvalidState(format!(
                "board has {} rows but started with {}",
                repr.rows.len(),
                repr.initial.len()
            )));
        }
        if let Some((row, (&current, &initial))) = repr
            .rows
            .iter()
            .zip(&repr.initial)
            .enumerate()
            .find(|(_, (current, initial))| current > initial)
        {
            return Err(NimError::InvalidState(format!(
                "row {} holds {} sticks but started with {}",
                row, current, initial
            )));
        }
        board.rows = repr.rows;
        Ok(board)
    }
}

impl Board {
    /// Create a board from row sizes.
    ///
    /// Fails with `InvalidState` if `max_bits` is out of range and with
    /// `RowTooLarge` if any row does not fit in `max_bits` bits. Empty rows
    /// are allowed here; setup is what insists on sticks.
    pub fn new(rows: &[u32], max_bits: u32) -> Result<Self> {
        check_max_bits(max_bits)?;

        let max = (1u32 << max_bits) - 1;
        if let Some(&value) = rows.iter().find(|&&r| r > max) {
            return Err(NimError::RowTooLarge {
                value: value.to_string(),
                max,
            });
        }

        let rows: Rows = SmallVec::from_slice(rows);
        Ok(Self {
            initial: rows.clone(),
            rows,
            max_bits,
        })
    }

    /// Create a board using the bit width from `config`.
    pub fn with_config(rows: &[u32], config: &BoardConfig) -> Result<Self> {
        Self::new(rows, config.max_bits)
    }

    /// The default board from `config`.
    pub fn default_for(config: &BoardConfig) -> Result<Self> {
        Self::with_config(&config.default_rows, config)
    }

    // === Mutation ===

    /// Remove `mv.count` sticks from row `mv.row`.
    ///
    /// Fails with `InvalidMove` and leaves the board untouched if the row
    /// does not exist, the count is zero, or the row holds too few sticks.
    pub fn take(&mut self, mv: Move) -> Result<()> {
        let Some(available) = self.rows.get(mv.row).copied() else {
            let last = self.rows.len().saturating_sub(1);
            return Err(NimError::invalid_move(
                mv,
                format!("there is no row {} (rows 0-{})", mv.row, last),
            ));
        };
        if mv.count == 0 {
            return Err(NimError::invalid_move(mv, "must take at least one stick"));
        }
        if mv.count > available {
            return Err(NimError::invalid_move(
                mv,
                format!("row {} has only {} sticks", mv.row, available),
            ));
        }

        self.rows[mv.row] = available - mv.count;
        Ok(())
    }

    /// Put back the sticks removed by an earlier successful `take` of `mv`.
    ///
    /// A row never grows past the size it had at setup; attempts to do so
    /// fail with `InvalidState` and change nothing.
    pub fn untake(&mut self, mv: Move) -> Result<()> {
        let (Some(&current), Some(&initial)) = (self.rows.get(mv.row), self.initial.get(mv.row))
        else {
            return Err(NimError::InvalidState(format!("untake {} on missing row", mv)));
        };

        match current.checked_add(mv.count) {
            Some(restored) if restored <= initial => {
                self.rows[mv.row] = restored;
                Ok(())
            }
            _ => Err(NimError::InvalidState(format!(
                "untake {} would exceed the {} sticks row {} started with",
                mv, initial, mv.row
            ))),
        }
    }

    // === Queries ===

    /// True once every row is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }

    /// Current stick counts, by row.
    #[must_use]
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Stick count of one row.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<u32> {
        self.rows.get(index).copied()
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Sticks left on the board.
    #[must_use]
    pub fn total_sticks(&self) -> u64 {
        self.rows.iter().map(|&r| u64::from(r)).sum()
    }

    /// Bit width rows are measured against.
    #[must_use]
    pub fn max_bits(&self) -> u32 {
        self.max_bits
    }

    /// Largest stick count a row may hold.
    #[must_use]
    pub fn max_row_value(&self) -> u32 {
        (1u32 << self.max_bits) - 1
    }

    /// Index of the first row that still has sticks.
    #[must_use]
    pub fn first_nonempty_row(&self) -> Option<usize> {
        self.rows.iter().position(|&r| r > 0)
    }
}
