//! Core types: board, moves, players, configuration, errors, RNG.
//!
//! Everything else in the crate is built on these. The board is the only
//! mutable state in a game.

pub mod board;
pub mod config;
pub mod error;
pub mod moves;
pub mod player;
pub mod rng;

pub use board::{Board, Rows};
pub use config::{check_max_bits, BoardConfig, DEFAULT_MAX_BITS, DEFAULT_ROWS, MAX_SUPPORTED_BITS};
pub use error::{NimError, Result};
pub use moves::{Move, MoveRecord};
pub use player::Player;
pub use rng::GameRng;
