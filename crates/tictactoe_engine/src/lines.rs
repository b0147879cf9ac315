//! The eight winning lines and their identifiers.

use crate::position::Position;
use serde::{Deserialize, Serialize};

const fn p(number: u8) -> Position {
    Position::ALL[(number - 1) as usize]
}

/// Which winning triple completed the round, if any.
///
/// Hosts use this to highlight the winning cells.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum VictoryLine {
    /// Cells 1-2-3.
    Row1,
    /// Cells 4-5-6.
    Row2,
    /// Cells 7-8-9.
    Row3,
    /// Cells 1-4-7.
    Col1,
    /// Cells 2-5-8.
    Col2,
    /// Cells 3-6-9.
    Col3,
    /// Cells 1-5-9.
    DiagMain,
    /// Cells 3-5-7.
    DiagAnti,
    /// No line has been completed.
    #[default]
    None,
}

/// Winning lines in check order: rows, then columns, then diagonals.
pub const WINNING_LINES: [(VictoryLine, [Position; 3]); 8] = [
    (VictoryLine::Row1, [p(1), p(2), p(3)]),
    (VictoryLine::Row2, [p(4), p(5), p(6)]),
    (VictoryLine::Row3, [p(7), p(8), p(9)]),
    (VictoryLine::Col1, [p(1), p(4), p(7)]),
    (VictoryLine::Col2, [p(2), p(5), p(8)]),
    (VictoryLine::Col3, [p(3), p(6), p(9)]),
    (VictoryLine::DiagMain, [p(1), p(5), p(9)]),
    (VictoryLine::DiagAnti, [p(3), p(5), p(7)]),
];

impl VictoryLine {
    /// The three cells making up this line, or `None` for [`VictoryLine::None`].
    pub fn positions(self) -> Option<[Position; 3]> {
        WINNING_LINES
            .iter()
            .find(|(line, _)| *line == self)
            .map(|(_, cells)| *cells)
    }

    /// Returns true if `pos` is one of this line's cells.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().is_some_and(|cells| cells.contains(&pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_real_line_has_cells() {
        for line in VictoryLine::iter() {
            match line {
                VictoryLine::None => assert_eq!(line.positions(), None),
                _ => assert!(line.positions().is_some(), "{line} has no cells"),
            }
        }
    }

    #[test]
    fn test_diagonal_cells() {
        let numbers: Vec<u8> = VictoryLine::DiagAnti
            .positions()
            .unwrap()
            .iter()
            .map(|p| p.number())
            .collect();
        assert_eq!(numbers, vec![3, 5, 7]);
    }

    #[test]
    fn test_contains() {
        let center = Position::new(5).unwrap();
        assert!(VictoryLine::Col2.contains(center));
        assert!(!VictoryLine::Row1.contains(center));
        assert!(!VictoryLine::None.contains(center));
    }
}
