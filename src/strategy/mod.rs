//! Computer strategy: binary parity analysis and move selection.
//!
//! - `parity`: parity vector, nim-sum and the balance test
//! - `policy`: the `MovePolicy` trait and the perfect-play `ParityPolicy`
//!
//! ## Example
//!
//! ```
//! use rust_nim::core::{Board, Move};
//! use rust_nim::strategy::{choose_computer_move, is_balanced};
//!
//! let mut board = Board::new(&[7, 5, 3], 8).unwrap();
//! assert!(!is_balanced(&board));
//!
//! let mv = choose_computer_move(&mut board).unwrap();
//! assert_eq!(mv, Move::new(1, 0));
//! assert!(is_balanced(&board));
//! ```

pub mod parity;
pub mod policy;

pub use parity::{is_balanced, nim_sum, parity_vector, ParityVector};
pub use policy::{choose_computer_move, MovePolicy, ParityPolicy};
