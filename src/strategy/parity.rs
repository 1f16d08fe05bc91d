//! Binary parity of a board.
//!
//! Write every row in binary, one above the other, and count the ones in each
//! column. The parity vector records whether each count is odd:
//!
//! ```text
//! row 0: 0111 (7 sticks)
//! row 1: 0101 (5 sticks)
//! row 2: 0011 (3 sticks)
//! ----------------------
//! parity 0001
//! ```
//!
//! A board whose parity is all zeros is balanced: the player to move loses
//! against perfect play. The parity vector is the bitwise XOR of the rows,
//! computed one column at a time.

use smallvec::SmallVec;

use crate::core::Board;

/// Per-column parity bits, most significant bit first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParityVector {
    bits: SmallVec<[u8; 16]>,
}

impl ParityVector {
    /// Compute the parity vector of `board` over its `max_bits` columns.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        let width = board.max_bits();
        let bits = (0..width)
            .rev()
            .map(|bit| {
                let ones = board.rows().iter().filter(|&&row| (row >> bit) & 1 == 1).count();
                (ones % 2) as u8
            })
            .collect();
        Self { bits }
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Parity bits, most significant first.
    #[must_use]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// True if every column has an even number of ones.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// The parity bits read as a binary number.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.bits.iter().fold(0, |acc, &b| (acc << 1) | u32::from(b))
    }
}

impl std::fmt::Display for ParityVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

/// Parity vector of `board`.
#[must_use]
pub fn parity_vector(board: &Board) -> ParityVector {
    ParityVector::of(board)
}

/// XOR of all rows.
#[must_use]
pub fn nim_sum(board: &Board) -> u32 {
    board.rows().iter().fold(0, |acc, &row| acc ^ row)
}

/// True if the board's parity vector is all zeros.
#[must_use]
pub fn is_balanced(board: &Board) -> bool {
    parity_vector(board).is_zero()
}
