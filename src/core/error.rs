//! Error taxonomy for the game.
//!
//! Most variants are recoverable: the step that raised them reports the
//! error through the display and asks again. Only `InvalidState`,
//! `InputClosed` and `Io` end a session.

use super::moves::Move;

/// Everything that can go wrong while setting up or playing a game.
#[derive(Debug, thiserror::Error)]
pub enum NimError {
    /// A move or setup token could not be parsed.
    #[error("invalid input `{token}`: {reason}")]
    Parse { token: String, reason: String },

    /// A well-formed move that the board does not allow.
    #[error("invalid move {mv}: {reason}")]
    InvalidMove { mv: Move, reason: String },

    /// A setup value above the largest representable row.
    #[error("row of {value} sticks is too large (max {max})")]
    RowTooLarge { value: String, max: u32 },

    /// A setup value of zero sticks.
    #[error("a row needs at least one stick")]
    EmptyRow,

    /// Setup finished before any row was entered.
    #[error("the board needs at least one row")]
    NoRows,

    /// A caller broke an engine contract.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The input source ran dry.
    #[error("input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NimError {
    /// Build a parse error for `token`.
    pub fn parse(token: impl Into<String>, reason: impl Into<String>) -> Self {
        NimError::Parse {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Build an invalid move error.
    pub fn invalid_move(mv: Move, reason: impl Into<String>) -> Self {
        NimError::InvalidMove {
            mv,
            reason: reason.into(),
        }
    }

    /// Can the step that raised this error simply ask again?
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            NimError::Parse { .. }
                | NimError::InvalidMove { .. }
                | NimError::RowTooLarge { .. }
                | NimError::EmptyRow
                | NimError::NoRows
        )
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(NimError::parse("x", "not a number").is_recoverable());
        assert!(NimError::invalid_move(Move::new(3, 0), "too many").is_recoverable());
        assert!(NimError::RowTooLarge { value: "300".into(), max: 255 }.is_recoverable());
        assert!(NimError::EmptyRow.is_recoverable());
        assert!(NimError::NoRows.is_recoverable());
    }

    #[test]
    fn test_fatal_errors() {
        assert!(!NimError::InvalidState("empty".into()).is_recoverable());
        assert!(!NimError::InputClosed.is_recoverable());
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        assert!(!NimError::from(io).is_recoverable());
    }

    #[test]
    fn test_messages() {
        let err = NimError::RowTooLarge { value: "9999999".into(), max: 255 };
        assert_eq!(format!("{}", err), "row of 9999999 sticks is too large (max 255)");

        let err = NimError::invalid_move(Move::new(4, 1), "row 1 has 2 sticks");
        assert_eq!(format!("{}", err), "invalid move 4,1: row 1 has 2 sticks");
    }
}
