//! Board setup: default board, custom rows, or rows given up front.

use log::{debug, info};
use std::str::FromStr;

use crate::core::{Board, BoardConfig, NimError, Result};

use super::io::{BoardDisplay, SetupPrompt, SetupSource};

/// Which kind of board the player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupMode {
    /// The configured default rows.
    Default,
    /// Rows entered one at a time.
    Custom,
}

impl FromStr for SetupMode {
    type Err = NimError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("default") {
            Ok(SetupMode::Default)
        } else if token.eq_ignore_ascii_case("custom") {
            Ok(SetupMode::Custom)
        } else {
            Err(NimError::parse(token, "expected <default> or <custom>"))
        }
    }
}

/// Ask for a board through `io` until one is complete.
///
/// Recoverable errors are shown and the question is asked again; only
/// fatal errors (closed input, IO failures) are returned.
pub fn read_board<IO>(config: &BoardConfig, io: &mut IO) -> Result<Board>
where
    IO: SetupSource + BoardDisplay,
{
    let mode = loop {
        let token = io.next_setup_token(SetupPrompt::Mode)?;
        match token.parse::<SetupMode>() {
            Ok(mode) => break mode,
            Err(e) => io.show_error(&e)?,
        }
    };
    debug!("setup mode {:?}", mode);

    let board = match mode {
        SetupMode::Default => Board::default_for(config)?,
        SetupMode::Custom => {
            let rows = read_custom_rows(config, io)?;
            Board::with_config(&rows, config)?
        }
    };

    info!("starting board {:?}", board.rows());
    Ok(board)
}

/// Collect row sizes until a sentinel token arrives.
///
/// Values outside `1..=max` are reported and dropped. A sentinel before any
/// row has been entered is reported as `NoRows` and ignored.
pub fn read_custom_rows<IO>(config: &BoardConfig, io: &mut IO) -> Result<Vec<u32>>
where
    IO: SetupSource + BoardDisplay,
{
    let max = config.max_row_value();
    let mut rows = Vec::new();

    loop {
        let prompt = SetupPrompt::Row {
            index: rows.len(),
            max,
        };
        let token = io.next_setup_token(prompt)?;

        if config.is_sentinel(&token) {
            if rows.is_empty() {
                io.show_error(&NimError::NoRows)?;
                continue;
            }
            return Ok(rows);
        }

        match config.parse_row_token(&token) {
            Ok(value) => rows.push(value),
            Err(e) if e.is_recoverable() => {
                debug!("rejected row token {:?}: {}", token.trim(), e);
                io.show_error(&e)?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Build a board from rows supplied all at once, validated like custom entry.
pub fn board_from_rows(config: &BoardConfig, rows: &[u64]) -> Result<Board> {
    if rows.is_empty() {
        return Err(NimError::NoRows);
    }
    let rows = rows
        .iter()
        .map(|&value| config.check_row_value(value))
        .collect::<Result<Vec<u32>>>()?;
    Board::with_config(&rows, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("default".parse::<SetupMode>().unwrap(), SetupMode::Default);
        assert_eq!(" Custom\n".parse::<SetupMode>().unwrap(), SetupMode::Custom);
        assert!(matches!("dflt".parse::<SetupMode>(), Err(NimError::Parse { .. })));
    }

    #[test]
    fn test_board_from_rows() {
        let config = BoardConfig::default();
        let board = board_from_rows(&config, &[3, 4, 5]).unwrap();
        assert_eq!(board.rows(), &[3, 4, 5]);
    }

    #[test]
    fn test_board_from_rows_rejects_bad_values() {
        let config = BoardConfig::default();
        assert!(matches!(board_from_rows(&config, &[]), Err(NimError::NoRows)));
        assert!(matches!(board_from_rows(&config, &[3, 0]), Err(NimError::EmptyRow)));
        assert!(matches!(
            board_from_rows(&config, &[3, 9_999_999]),
            Err(NimError::RowTooLarge { .. })
        ));
    }
}
