//! # rust-nim
//!
//! Nim against a computer that never misses a winning line.
//!
//! ## Rules
//!
//! Sticks are laid out in rows. Players alternate; a move takes any number
//! of sticks (at least one) from a single row. Whoever takes the last stick
//! wins.
//!
//! ## Strategy
//!
//! Write each row in binary and XOR them together. If the result is zero the
//! board is *balanced* and the player to move loses against perfect play.
//! The computer scans moves row by row, smallest count first, and plays the
//! first one that leaves a balanced board. When the board is already balanced
//! it takes a single stick and waits for a mistake.
//!
//! ## Modules
//!
//! - `core`: board, moves, players, configuration, errors, RNG
//! - `rules`: `RulesEngine` trait and normal-play rules
//! - `strategy`: parity analysis and the computer's `MovePolicy`
//! - `game`: setup, the turn loop, and front-end traits
//! - `terminal`: line-based console front end

pub mod core;
pub mod game;
pub mod rules;
pub mod strategy;
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, GameRng, Move, MoveRecord, NimError, Player, Result,
};

pub use crate::rules::{GameResult, NormalPlay, RulesEngine};

pub use crate::strategy::{
    choose_computer_move, is_balanced, nim_sum, parity_vector, MovePolicy, ParityPolicy,
    ParityVector,
};

pub use crate::game::{
    read_board, BoardDisplay, Game, GamePhase, MoveSource, SetupPrompt, SetupSource,
};

pub use crate::terminal::Console;
