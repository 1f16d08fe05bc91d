//! Collaborator traits between the game and whatever front end drives it.
//!
//! The game never reads or prints on its own. It pulls raw tokens from a
//! `MoveSource` or `SetupSource` and pushes row counts, moves, errors and the
//! result to a `BoardDisplay`. Parsing and validation stay in the game.

use crate::core::{Board, Move, NimError, Player, Result};
use crate::rules::GameResult;

/// What setup is asking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupPrompt {
    /// Default or custom board?
    Mode,
    /// Sticks for row `index`, at most `max`.
    Row { index: usize, max: u32 },
}

/// Supplies raw move tokens during play.
pub trait MoveSource {
    /// Next raw token, expected to look like `count,row`.
    ///
    /// Returns `InputClosed` once no more input will arrive.
    fn next_move_token(&mut self, board: &Board) -> Result<String>;
}

/// Supplies raw tokens during setup.
pub trait SetupSource {
    /// Next raw token answering `prompt`.
    ///
    /// Returns `InputClosed` once no more input will arrive.
    fn next_setup_token(&mut self, prompt: SetupPrompt) -> Result<String>;
}

/// Shows the game to the player.
pub trait BoardDisplay {
    /// Show current row counts. Called after every applied move.
    fn show_rows(&mut self, rows: &[u32]) -> Result<()>;

    /// Announce a move that was just applied.
    fn show_move(&mut self, player: Player, mv: Move) -> Result<()>;

    /// Report a recoverable error before asking again.
    fn show_error(&mut self, error: &NimError) -> Result<()>;

    /// Announce the end of the game.
    fn show_result(&mut self, result: &GameResult) -> Result<()>;
}
