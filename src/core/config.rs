//! Board configuration.
//!
//! `BoardConfig` fixes the bit width rows are measured against, the default
//! board, and the tokens that end custom row entry.

use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;

use super::error::{NimError, Result};

/// Default bit width. Rows hold at most `2^8 - 1 = 255` sticks.
pub const DEFAULT_MAX_BITS: u32 = 8;

/// Largest supported bit width.
pub const MAX_SUPPORTED_BITS: u32 = 16;

/// The classic starting board.
pub const DEFAULT_ROWS: [u32; 3] = [7, 5, 3];

/// Fails with `InvalidState` unless `max_bits` is in `1..=MAX_SUPPORTED_BITS`.
pub fn check_max_bits(max_bits: u32) -> Result<()> {
    if (1..=MAX_SUPPORTED_BITS).contains(&max_bits) {
        Ok(())
    } else {
        Err(NimError::InvalidState(format!(
            "max_bits must be 1-{}, got {}",
            MAX_SUPPORTED_BITS, max_bits
        )))
    }
}

/// Configuration for building boards.
///
/// Deserialization rejects an out-of-range `max_bits`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardConfigRepr")]
pub struct BoardConfig {
    /// Bit width of the parity vector. Every row fits in this many bits.
    pub max_bits: u32,

    /// Rows used when the player asks for the default board.
    pub default_rows: Vec<u32>,

    /// Tokens that finish custom row entry.
    pub sentinels: Vec<String>,
}

/// Unchecked wire form of `BoardConfig`.
#[derive(Deserialize)]
struct BoardConfigRepr {
    max_bits: u32,
    default_rows: Vec<u32>,
    sentinels: Vec<String>,
}

impl TryFrom<BoardConfigRepr> for BoardConfig {
    type Error = NimError;

    fn try_from(repr: BoardConfigRepr) -> Result<Self> {
        check_max_bits(repr.max_bits)?;
        Ok(Self {
            max_bits: repr.max_bits,
            default_rows: repr.default_rows,
            sentinels: repr.sentinels,
        })
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_bits: DEFAULT_MAX_BITS,
            default_rows: DEFAULT_ROWS.to_vec(),
            sentinels: vec!["done".to_string(), "end".to_string()],
        }
    }
}

impl BoardConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bit width.
    ///
    /// # Panics
    ///
    /// Panics if `max_bits` is not in `1..=MAX_SUPPORTED_BITS`. Use
    /// [`check_max_bits`] first when the value comes from outside.
    #[must_use]
    pub fn with_max_bits(mut self, max_bits: u32) -> Self {
        assert!(
            check_max_bits(max_bits).is_ok(),
            "max_bits must be 1-{}",
            MAX_SUPPORTED_BITS
        );
        self.max_bits = max_bits;
        self
    }

    /// Set the default rows.
    #[must_use]
    pub fn with_default_rows(mut self, rows: &[u32]) -> Self {
        self.default_rows = rows.to_vec();
        self
    }

    /// Largest stick count a row may hold.
    #[must_use]
    pub fn max_row_value(&self) -> u32 {
        (1u32 << self.max_bits) - 1
    }

    /// Does `token` end custom row entry?
    #[must_use]
    pub fn is_sentinel(&self, token: &str) -> bool {
        let token = token.trim();
        self.sentinels.iter().any(|s| s.eq_ignore_ascii_case(token))
    }

    /// Validate a setup value for a new row.
    pub fn check_row_value(&self, value: u64) -> Result<u32> {
        if value == 0 {
            return Err(NimError::EmptyRow);
        }
        let max = self.max_row_value();
        if value > u64::from(max) {
            return Err(NimError::RowTooLarge {
                value: value.to_string(),
                max,
            });
        }
        Ok(value as u32)
    }

    /// Parse and validate a setup token for a new row.
    ///
    /// Digit strings too long for any integer type are still `RowTooLarge`.
    pub fn parse_row_token(&self, token: &str) -> Result<u32> {
        let trimmed = token.trim();
        match trimmed.parse::<u64>() {
            Ok(value) => self.check_row_value(value),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(NimError::RowTooLarge {
                value: trimmed.to_string(),
                max: self.max_row_value(),
            }),
            Err(e) => Err(NimError::parse(trimmed, format!("row size: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.max_bits, 8);
        assert_eq!(config.default_rows, vec![7, 5, 3]);
        assert_eq!(config.max_row_value(), 255);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BoardConfig::new()
            .with_max_bits(5)
            .with_default_rows(&[3, 4, 5]);

        assert_eq!(config.max_row_value(), 31);
        assert_eq!(config.default_rows, vec![3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "max_bits must be 1-16")]
    fn test_zero_bits() {
        let _ = BoardConfig::new().with_max_bits(0);
    }

    #[test]
    fn test_sentinels() {
        let config = BoardConfig::default();
        assert!(config.is_sentinel("done"));
        assert!(config.is_sentinel(" END\n"));
        assert!(!config.is_sentinel("7"));
        assert!(!config.is_sentinel("finished"));
    }

    #[test]
    fn test_row_too_large() {
        let config = BoardConfig::default();
        let err = config.parse_row_token("9999999").unwrap_err();
        assert!(matches!(err, NimError::RowTooLarge { ref value, max: 255 } if value == "9999999"));
        assert!(matches!(config.parse_row_token("256"), Err(NimError::RowTooLarge { .. })));
        assert!(matches!(
            config.parse_row_token("123456789012345678901234567890"),
            Err(NimError::RowTooLarge { .. })
        ));
    }

    #[test]
    fn test_row_bounds() {
        let config = BoardConfig::default();
        assert_eq!(config.parse_row_token("1").unwrap(), 1);
        assert_eq!(config.parse_row_token(" 255 ").unwrap(), 255);
        assert!(matches!(config.parse_row_token("0"), Err(NimError::EmptyRow)));
        assert!(matches!(config.parse_row_token("-3"), Err(NimError::Parse { .. })));
        assert!(matches!(config.parse_row_token("seven"), Err(NimError::Parse { .. })));
    }

    #[test]
    fn test_serialization() {
        let config = BoardConfig::default().with_max_bits(6);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_check_max_bits() {
        assert!(check_max_bits(1).is_ok());
        assert!(check_max_bits(16).is_ok());
        assert!(matches!(check_max_bits(0), Err(NimError::InvalidState(_))));
        assert!(matches!(check_max_bits(40), Err(NimError::InvalidState(_))));
    }

    #[test]
    fn test_deserialize_rejects_bad_width() {
        let json = r#"{"max_bits":40,"default_rows":[7,5,3],"sentinels":["done"]}"#;
        let err = serde_json::from_str::<BoardConfig>(json).unwrap_err();
        assert!(err.to_string().contains("max_bits must be 1-16"));

        let json = r#"{"max_bits":0,"default_rows":[],"sentinels":[]}"#;
        assert!(serde_json::from_str::<BoardConfig>(json).is_err());
    }
}
