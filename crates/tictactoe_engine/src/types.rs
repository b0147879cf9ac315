//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Contents of one board cell.
///
/// `Circle` and `Cross` double as the two players' symbols. `Empty` also
/// serves as the "nobody's turn" marker once a round is won.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellValue {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// Player 'O' (moves first).
    Circle,
    /// Player 'X'.
    Cross,
}

impl CellValue {
    /// Returns the other player's symbol. `Empty` stays `Empty`.
    pub fn opponent(self) -> Self {
        match self {
            CellValue::Circle => CellValue::Cross,
            CellValue::Cross => CellValue::Circle,
            CellValue::Empty => CellValue::Empty,
        }
    }

    /// Display character: `'O'`, `'X'`, or `' '` for an empty cell.
    pub fn symbol(self) -> char {
        match self {
            CellValue::Circle => 'O',
            CellValue::Cross => 'X',
            CellValue::Empty => ' ',
        }
    }

    /// Returns true for `Empty`.
    pub fn is_empty(self) -> bool {
        self == CellValue::Empty
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [CellValue; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [CellValue::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> CellValue {
        self.cells[pos.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns true once no cell holds `Empty`.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Positions still open for a move, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: CellValue) -> usize {
        self.cells.iter().filter(|c| **c == value).count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[CellValue; 9] {
        &self.cells
    }

    pub(crate) fn set(&mut self, pos: Position, value: CellValue) {
        self.cells[pos.index()] = value;
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [CellValue::Empty; 9];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[CellValue; 9]> for Board {
    fn from(cells: [CellValue; 9]) -> Self {
        Self { cells }
    }
}

/// Empty cells show their number so players know what to type.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            for (col, cell) in chunk.iter().enumerate() {
                match cell {
                    CellValue::Empty => write!(f, "{}", row * 3 + col + 1)?,
                    occupied => write!(f, "{}", occupied.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(n: u8) -> Position {
        Position::new(n).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(CellValue::Empty), 9);
        assert_eq!(board.empty_positions().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(pos(5), CellValue::Cross);
        assert_eq!(board.get(pos(5)), CellValue::Cross);
        assert!(!board.is_empty(pos(5)));
        assert!(!board.empty_positions().contains(&pos(5)));
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        board.set(pos(1), CellValue::Circle);
        board.set(pos(9), CellValue::Cross);
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(pos(1), CellValue::Circle);
        board.set(pos(5), CellValue::Cross);
        assert_eq!(board.to_string(), "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(CellValue::Circle.opponent(), CellValue::Cross);
        assert_eq!(CellValue::Cross.opponent(), CellValue::Circle);
        assert_eq!(CellValue::Empty.opponent(), CellValue::Empty);
    }
}
