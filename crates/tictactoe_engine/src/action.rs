//! Engine inputs and the transitions they produce.
//!
//! Actions are domain events: they carry the player's intent and nothing
//! else. What the engine made of an action comes back as a [`Transition`].

use crate::lines::VictoryLine;
use crate::position::Position;
use crate::types::CellValue;
use serde::{Deserialize, Serialize};

/// Input from the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserAction {
    /// A player tapped a cell.
    CellTapped(Position),
    /// The "play again" control was pressed.
    ResetRequested,
}

impl std::fmt::Display for UserAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserAction::CellTapped(pos) => write!(f, "tap {}", pos),
            UserAction::ResetRequested => write!(f, "reset"),
        }
    }
}

/// Why a tap left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The cell already holds a symbol.
    #[display("cell {_0} is already occupied")]
    CellOccupied(Position),
    /// The round has been won; nobody is entitled to move.
    #[display("the round is over")]
    RoundOver,
}

/// What a single dispatch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// A symbol was placed and play passed to the other player.
    Placed {
        /// Cell that was filled.
        position: Position,
        /// Symbol placed there.
        symbol: CellValue,
    },
    /// The placed symbol completed a line.
    Won {
        /// Cell that was filled.
        position: Position,
        /// The winner.
        symbol: CellValue,
        /// The completed line.
        line: VictoryLine,
    },
    /// The placed symbol filled the board without completing a line.
    Drawn {
        /// Cell that was filled.
        position: Position,
        /// Symbol placed there.
        symbol: CellValue,
    },
    /// The tap was absorbed as a no-op.
    Ignored(IgnoreReason),
    /// The board was cleared for a new round.
    Reset,
}

impl Transition {
    /// Returns true if the dispatch replaced the state.
    pub fn changed_state(&self) -> bool {
        !matches!(self, Transition::Ignored(_))
    }

    /// Returns true if the dispatch concluded a round.
    pub fn ends_round(&self) -> bool {
        matches!(self, Transition::Won { .. } | Transition::Drawn { .. })
    }
}
