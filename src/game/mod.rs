//! Playing a game: setup, the turn loop, and the front-end traits.
//!
//! - `io`: `MoveSource`, `SetupSource` and `BoardDisplay`
//! - `setup`: turning setup answers into a board
//! - `session`: the `Game` state machine

pub mod io;
pub mod session;
pub mod setup;

pub use io::{BoardDisplay, MoveSource, SetupPrompt, SetupSource};
pub use session::{Game, GamePhase};
pub use setup::{board_from_rows, read_board, read_custom_rows, SetupMode};
