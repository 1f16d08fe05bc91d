//! Rules engine trait for Nim.
//!
//! `RulesEngine` defines:
//! - Legal moves for a board, in scan order
//! - How moves modify the board
//! - The win condition
//!
//! `NormalPlay` is the only rule set: the player who takes the last stick wins.

pub mod engine;

pub use engine::{GameResult, NormalPlay, RulesEngine};
