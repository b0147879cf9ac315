//! Immutable game state snapshots.

use crate::lines::VictoryLine;
use crate::types::CellValue;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Snapshot of everything a host needs to render the status area.
///
/// A snapshot is never changed in place: each transition builds the next one
/// from the previous, so hosts can hold on to an old snapshot and compare.
/// The board lives beside it in [`GameEngine`](crate::GameEngine).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// Status line: turn prompt, win announcement, or draw announcement.
    message: String,
    /// Symbol entitled to move. `Empty` once a round has been won.
    current_turn: CellValue,
    /// Line completed by the winning move, otherwise `None`.
    victory_line: VictoryLine,
    /// True on the snapshot where a win is detected.
    has_won: bool,
    /// Rounds won by 'O' during this engine's lifetime.
    circle_wins: u32,
    /// Rounds won by 'X' during this engine's lifetime.
    cross_wins: u32,
    /// Rounds drawn during this engine's lifetime.
    draws: u32,
}

fn turn_prompt(turn: CellValue) -> String {
    format!("Player '{}' turn", turn.symbol())
}

impl GameState {
    /// Fresh session: 'O' to move, all counters zero.
    pub(crate) fn initial() -> Self {
        Self {
            message: turn_prompt(CellValue::Circle),
            current_turn: CellValue::Circle,
            victory_line: VictoryLine::None,
            has_won: false,
            circle_wins: 0,
            cross_wins: 0,
            draws: 0,
        }
    }

    /// New round, counters carried over.
    pub(crate) fn next_round(&self) -> Self {
        Self {
            circle_wins: self.circle_wins,
            cross_wins: self.cross_wins,
            draws: self.draws,
            ..Self::initial()
        }
    }

    /// Hands the move to `turn`.
    pub(crate) fn pass_turn(&self, turn: CellValue) -> Self {
        Self {
            message: turn_prompt(turn),
            current_turn: turn,
            ..self.clone()
        }
    }

    /// `winner` completed `line`; further moves are blocked.
    pub(crate) fn won(&self, winner: CellValue, line: VictoryLine) -> Self {
        let (circle_wins, cross_wins) = match winner {
            CellValue::Circle => (self.circle_wins.saturating_add(1), self.cross_wins),
            CellValue::Cross => (self.circle_wins, self.cross_wins.saturating_add(1)),
            CellValue::Empty => (self.circle_wins, self.cross_wins),
        };
        Self {
            message: format!("Player '{}' Won", winner.symbol()),
            current_turn: CellValue::Empty,
            victory_line: line,
            has_won: true,
            circle_wins,
            cross_wins,
            draws: self.draws,
        }
    }

    /// Board filled without a line. Turn and win flag pass through unchanged.
    pub(crate) fn drawn(&self) -> Self {
        Self {
            message: "Game Draw".to_string(),
            draws: self.draws.saturating_add(1),
            ..self.clone()
        }
    }

    /// Returns true while a symbol is entitled to move.
    pub fn accepts_moves(&self) -> bool {
        !self.current_turn.is_empty()
    }

    /// Total rounds concluded during this engine's lifetime.
    pub fn rounds_played(&self) -> u32 {
        self.circle_wins + self.cross_wins + self.draws
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot() {
        let state = GameState::initial();
        assert_eq!(state.message(), "Player 'O' turn");
        assert_eq!(*state.current_turn(), CellValue::Circle);
        assert_eq!(*state.victory_line(), VictoryLine::None);
        assert!(!state.has_won());
        assert_eq!(state.rounds_played(), 0);
    }

    #[test]
    fn test_won_blocks_turn_and_counts() {
        let state = GameState::initial().won(CellValue::Cross, VictoryLine::Col3);
        assert_eq!(state.message(), "Player 'X' Won");
        assert_eq!(*state.current_turn(), CellValue::Empty);
        assert_eq!(*state.cross_wins(), 1);
        assert_eq!(*state.circle_wins(), 0);
        assert!(!state.accepts_moves());
    }

    #[test]
    fn test_drawn_keeps_turn() {
        let state = GameState::initial().drawn();
        assert_eq!(state.message(), "Game Draw");
        assert_eq!(*state.current_turn(), CellValue::Circle);
        assert!(!state.has_won());
        assert_eq!(*state.draws(), 1);
    }

    #[test]
    fn test_next_round_keeps_counters() {
        let state = GameState::initial()
            .won(CellValue::Circle, VictoryLine::Row1)
            .drawn()
            .next_round();
        assert_eq!(state.message(), "Player 'O' turn");
        assert_eq!(*state.current_turn(), CellValue::Circle);
        assert!(!state.has_won());
        assert_eq!(*state.circle_wins(), 1);
        assert_eq!(*state.draws(), 1);
    }
}
