//! Seeded random number generation for random starting boards.
//!
//! The same seed always produces the same board, so a surprising game can be
//! replayed by passing the seed again.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::board::Board;
use super::config::BoardConfig;
use super::error::{NimError, Result};

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed; only board generation draws from it.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Build a board of `row_count` rows, each drawn uniformly from
    /// `1..=config.max_row_value()`.
    pub fn random_board(&mut self, row_count: usize, config: &BoardConfig) -> Result<Board> {
        if row_count == 0 {
            return Err(NimError::NoRows);
        }
        let max = config.max_row_value();
        let rows: Vec<u32> = (0..row_count)
            .map(|_| self.gen_range_inclusive(1..=max))
            .collect();
        Board::with_config(&rows, config)
    }
}
