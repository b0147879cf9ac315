//! Validated board positions (1-9, row-major).

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell on the board, numbered 1-9 in row-major order.
///
/// ```text
/// 1|2|3
/// -+-+-
/// 4|5|6
/// -+-+-
/// 7|8|9
/// ```
///
/// A `Position` can only hold a valid cell number, so the engine never has to
/// range-check what it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
        Position(9),
    ];

    /// Creates a position from a cell number (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPosition`] for anything outside 1-9.
    #[instrument]
    pub fn new(number: u8) -> Result<Self, EngineError> {
        if (1..=9).contains(&number) {
            Ok(Self(number))
        } else {
            Err(EngineError::InvalidPosition {
                value: u32::from(number),
            })
        }
    }

    /// Cell number as shown to players (1-9).
    pub fn number(self) -> u8 {
        self.0
    }

    /// Storage slot in the board array (0-8).
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Zero-based row (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Zero-based column (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }
}

impl TryFrom<u8> for Position {
    type Error = EngineError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: u32 = trimmed.parse().map_err(|_| EngineError::Parse {
            input: trimmed.to_string(),
        })?;
        u8::try_from(number)
            .map_err(|_| EngineError::InvalidPosition { value: number })
            .and_then(Self::new)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        for n in 1..=9u8 {
            let pos = Position::new(n).unwrap();
            assert_eq!(pos.number(), n);
            assert_eq!(pos.index(), usize::from(n - 1));
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Position::new(0),
            Err(EngineError::InvalidPosition { value: 0 })
        );
        assert_eq!(
            Position::new(10),
            Err(EngineError::InvalidPosition { value: 10 })
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!(" 5 ".parse::<Position>(), Position::new(5));
        assert_eq!(
            "300".parse::<Position>(),
            Err(EngineError::InvalidPosition { value: 300 })
        );
        assert!(matches!(
            "five".parse::<Position>(),
            Err(EngineError::Parse { .. })
        ));
        assert!(matches!(
            "-1".parse::<Position>(),
            Err(EngineError::Parse { .. })
        ));
    }

    #[test]
    fn test_row_and_col() {
        let pos = Position::new(6).unwrap();
        assert_eq!(pos.row(), 1);
        assert_eq!(pos.col(), 2);
    }

    #[test]
    fn test_all_is_row_major() {
        let numbers: Vec<u8> = Position::ALL.iter().map(|p| p.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }
}
