//! Win detection logic for tic-tac-toe.

use crate::lines::{VictoryLine, WINNING_LINES};
use crate::types::{Board, CellValue};
use tracing::instrument;

/// Checks whether `symbol` holds a complete line.
///
/// Lines are tried in [`WINNING_LINES`] order and the first full match is
/// returned. Returns [`VictoryLine::None`] when nothing matches, and always
/// for `CellValue::Empty`.
#[instrument(skip(board))]
pub fn check_victory(board: &Board, symbol: CellValue) -> VictoryLine {
    if symbol.is_empty() {
        return VictoryLine::None;
    }

    WINNING_LINES
        .iter()
        .find(|(_, cells)| cells.iter().all(|&pos| board.get(pos) == symbol))
        .map_or(VictoryLine::None, |(line, _)| *line)
}

/// Symbols that currently hold at least one complete line.
pub fn winners(board: &Board) -> Vec<CellValue> {
    [CellValue::Circle, CellValue::Cross]
        .into_iter()
        .filter(|&symbol| check_victory(board, symbol) != VictoryLine::None)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellValue::{Circle as O, Cross as X, Empty as E};

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_victory(&board, O), VictoryLine::None);
        assert_eq!(check_victory(&board, X), VictoryLine::None);
    }

    #[test]
    fn test_empty_symbol_never_wins() {
        assert_eq!(check_victory(&Board::new(), E), VictoryLine::None);
    }

    #[test]
    fn test_top_row() {
        let board = Board::from([O, O, O, X, X, E, E, E, E]);
        assert_eq!(check_victory(&board, O), VictoryLine::Row1);
        assert_eq!(check_victory(&board, X), VictoryLine::None);
    }

    #[test]
    fn test_each_line_detected() {
        for (line, cells) in WINNING_LINES {
            let mut squares = [E; 9];
            for pos in cells {
                squares[pos.index()] = X;
            }
            assert_eq!(check_victory(&Board::from(squares), X), line);
        }
    }

    #[test]
    fn test_only_checks_requested_symbol() {
        let board = Board::from([X, X, X, O, O, E, E, E, E]);
        assert_eq!(check_victory(&board, O), VictoryLine::None);
    }

    #[test]
    fn test_priority_order_on_double_line() {
        // O holds row 1 and column 1; rows are checked first.
        let board = Board::from([O, O, O, O, X, X, O, X, X]);
        assert_eq!(check_victory(&board, O), VictoryLine::Row1);
    }

    #[test]
    fn test_winners_on_malformed_board() {
        let board = Board::from([O, O, O, X, X, X, E, E, E]);
        assert_eq!(winners(&board), vec![O, X]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from([X, X, E, E, O, E, E, E, O]);
        assert!(winners(&board).is_empty());
    }
}
