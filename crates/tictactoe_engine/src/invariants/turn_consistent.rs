//! Turn consistency invariant: the turn pointer and win flag agree with the
//! board.

use super::{Invariant, Snapshot};
use crate::lines::VictoryLine;
use crate::types::CellValue;

/// Invariant: turn, win flag and victory line tell the same story as the
/// board.
///
/// - `has_won` is set exactly when nobody is entitled to move, and exactly
///   when a victory line is recorded.
/// - While play continues on a board with open cells, 'O' is to move iff
///   both symbols have placed the same number of marks.
///
/// A drawn board keeps whatever turn it had, so the parity rule does not
/// apply once the board is full.
pub struct TurnConsistentInvariant;

impl Invariant<Snapshot<'_>> for TurnConsistentInvariant {
    fn holds(snapshot: &Snapshot<'_>) -> bool {
        let state = snapshot.state;
        let turn = *state.current_turn();
        let has_won = *state.has_won();

        if has_won != turn.is_empty() {
            return false;
        }
        if has_won != (*state.victory_line() != VictoryLine::None) {
            return false;
        }
        if has_won || snapshot.board.is_full() {
            return true;
        }

        let circles = snapshot.board.count(CellValue::Circle);
        let crosses = snapshot.board.count(CellValue::Cross);
        (turn == CellValue::Circle) == (circles == crosses)
    }

    fn description() -> &'static str {
        "Turn and win flag agree with the board"
    }
}
