//! Mark balance invariant: 'O' moves first, so it is never behind and never
//! more than one mark ahead.

use super::{Invariant, Snapshot};
use crate::types::CellValue;

/// Invariant: `circles - crosses` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<Snapshot<'_>> for MarkBalanceInvariant {
    fn holds(snapshot: &Snapshot<'_>) -> bool {
        let circles = snapshot.board.count(CellValue::Circle);
        let crosses = snapshot.board.count(CellValue::Cross);
        circles == crosses || circles == crosses + 1
    }

    fn description() -> &'static str {
        "Circles equal crosses or lead by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellValue::{Circle as O, Cross as X, Empty as E};
    use crate::{Board, GameState};

    fn holds(board: Board) -> bool {
        let state = GameState::default();
        MarkBalanceInvariant::holds(&Snapshot {
            board: &board,
            state: &state,
        })
    }

    #[test]
    fn test_empty_board_holds() {
        assert!(holds(Board::new()));
    }

    #[test]
    fn test_circle_one_ahead_holds() {
        assert!(holds(Board::from([O, X, O, E, E, E, E, E, E])));
    }

    #[test]
    fn test_cross_ahead_violates() {
        assert!(!holds(Board::from([X, E, E, E, E, E, E, E, E])));
    }

    #[test]
    fn test_circle_two_ahead_violates() {
        assert!(!holds(Board::from([O, O, E, E, E, E, E, E, E])));
    }
}
