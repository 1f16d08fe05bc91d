//! Terminal front end.
//!
//! `Console` implements the game's collaborator traits on top of line-based
//! streams; `render` turns rows and prompts into text.

pub mod console;
pub mod render;

pub use console::Console;
