//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every dispatch.
//! The engine checks them in debug builds, and they can be tested
//! independently against hand-built positions.

use crate::state::GameState;
use crate::types::Board;

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S: ?Sized> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S: ?Sized, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S: ?Sized, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Board and snapshot viewed together, as the engine holds them.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// The board.
    pub board: &'a Board,
    /// The state snapshot.
    pub state: &'a GameState,
}

pub mod mark_balance;
pub mod single_winner;
pub mod turn_consistent;

pub use mark_balance::MarkBalanceInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use turn_consistent::TurnConsistentInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    MarkBalanceInvariant,
    SingleWinnerInvariant,
    TurnConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellValue::{Circle as O, Cross as X, Empty as E};
    use crate::GameEngine;

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        let engine = GameEngine::new();
        assert!(TicTacToeInvariants::check_all(&engine.snapshot()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new();
        for cell in [5, 1, 9] {
            engine.tap(cell).unwrap();
        }
        assert!(TicTacToeInvariants::check_all(&engine.snapshot()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        // Two wins on one board, and X is ahead on marks.
        let board = Board::from([X, X, X, O, O, O, X, E, E]);
        let state = GameState::initial();
        let result = TicTacToeInvariants::check_all(&Snapshot {
            board: &board,
            state: &state,
        });

        let violations = result.unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MarkBalanceInvariant, SingleWinnerInvariant);
        let engine = GameEngine::new();
        assert!(TwoInvariants::check_all(&engine.snapshot()).is_ok());
    }
}
