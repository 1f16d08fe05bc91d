//! Line-based console front end.
//!
//! Reads one token per line from any `BufRead` and writes prompts and
//! output to any `Write`, so tests can drive it with in-memory buffers.

use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};

use crate::core::{Board, Move, NimError, Player, Result};
use crate::game::{BoardDisplay, MoveSource, SetupPrompt, SetupSource};
use crate::rules::GameResult;

use super::render;

/// Console over an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a block of text as is.
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `prompt`, then read one line and return it trimmed.
    fn read_token(&mut self, prompt: &str) -> Result<String> {
        self.print(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(NimError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> MoveSource for Console<R, W> {
    fn next_move_token(&mut self, _board: &Board) -> Result<String> {
        self.read_token(render::MOVE_PROMPT)
    }
}

impl<R: BufRead, W: Write> SetupSource for Console<R, W> {
    fn next_setup_token(&mut self, prompt: SetupPrompt) -> Result<String> {
        self.read_token(&render::setup_prompt(prompt))
    }
}

impl<R: BufRead, W: Write> BoardDisplay for Console<R, W> {
    fn show_rows(&mut self, rows: &[u32]) -> Result<()> {
        let text = render::render_board(rows) + "\n";
        self.print(&text)
    }

    fn show_move(&mut self, player: Player, mv: Move) -> Result<()> {
        self.print(&format!("{} made move: {}\n", player, mv))
    }

    fn show_error(&mut self, error: &NimError) -> Result<()> {
        let hint = match error {
            NimError::Parse { .. } => {
                " (valid input: <sticks,row>, <default>, <custom> or a row size)"
            }
            NimError::InvalidMove { .. } => " (try again)",
            _ => "",
        };
        self.print(&format!("| {}{}\n", error, hint))
    }

    fn show_result(&mut self, result: &GameResult) -> Result<()> {
        self.print(&format!("{}\n", result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_reads_trimmed_tokens() {
        let mut c = console("  3,0 \r\ncustom\n");
        let board = Board::new(&[3], 8).unwrap();

        assert_eq!(c.next_move_token(&board).unwrap(), "3,0");
        assert_eq!(c.next_setup_token(SetupPrompt::Mode).unwrap(), "custom");

        let out = output(c);
        assert!(out.starts_with(render::MOVE_PROMPT));
        assert!(out.ends_with(&render::setup_prompt(SetupPrompt::Mode)));
    }

    #[test]
    fn test_input_closed() {
        let mut c = console("");
        let err = c.next_setup_token(SetupPrompt::Mode).unwrap_err();
        assert!(matches!(err, NimError::InputClosed));
    }

    #[test]
    fn test_display_output() {
        let mut c = console("");
        c.show_move(Player::Computer, Move::new(1, 0)).unwrap();
        c.show_rows(&[6, 5, 3]).unwrap();
        c.show_error(&NimError::NoRows).unwrap();
        c.show_result(&GameResult::Winner(Player::Computer)).unwrap();

        let out = output(c);
        assert!(out.contains("Computer made move: 1,0\n"));
        assert!(out.contains("| row 2 :"));
        assert!(out.contains("| the board needs at least one row\n"));
        assert!(out.ends_with("Computer won!\n"));
    }
}
