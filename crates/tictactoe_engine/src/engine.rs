//! The tic-tac-toe rules engine.

use crate::action::{IgnoreReason, Transition, UserAction};
use crate::error::EngineError;
use crate::invariants::{InvariantSet, Snapshot, TicTacToeInvariants};
use crate::lines::VictoryLine;
use crate::observer::StateObserver;
use crate::position::Position;
use crate::rules::check_victory;
use crate::state::GameState;
use crate::types::Board;
use tracing::{debug, error, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board, the current [`GameState`] snapshot, and any registered
/// observers. Every input goes through [`dispatch`](Self::dispatch); invalid
/// moves are absorbed as no-ops rather than reported as errors.
pub struct GameEngine {
    board: Board,
    state: GameState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl GameEngine {
    /// Creates an engine with an empty board, 'O' to move and zeroed counters.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::initial(),
            observers: Vec::new(),
        }
    }

    /// Returns the current state snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board and state together, for invariant checks.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: &self.board,
            state: &self.state,
        }
    }

    /// Registers an observer notified after every state-changing dispatch.
    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Observer registered");
    }

    /// Applies a user action and returns what it did.
    ///
    /// The new snapshot is available from [`state`](Self::state) when this
    /// returns. Observers run before it returns and only when the state
    /// actually changed.
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn dispatch(&mut self, action: UserAction) -> Transition {
        let transition = match action {
            UserAction::CellTapped(pos) => self.place(pos),
            UserAction::ResetRequested => self.reset(),
        };

        if transition.changed_state() {
            self.check_invariants();
            self.notify();
        }

        transition
    }

    /// Validates a raw cell number and dispatches the tap.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPosition`] if `cell` is outside 1-9. The
    /// engine state is untouched in that case.
    #[instrument(skip(self))]
    pub fn tap(&mut self, cell: u8) -> Result<Transition, EngineError> {
        let pos = Position::new(cell)?;
        Ok(self.dispatch(UserAction::CellTapped(pos)))
    }

    fn reset(&mut self) -> Transition {
        self.board.clear();
        self.state = self.state.next_round();
        info!(
            circle_wins = self.state.circle_wins(),
            cross_wins = self.state.cross_wins(),
            draws = self.state.draws(),
            "New round"
        );
        Transition::Reset
    }

    fn place(&mut self, pos: Position) -> Transition {
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Tap on occupied cell ignored");
            return Transition::Ignored(IgnoreReason::CellOccupied(pos));
        }

        let symbol = *self.state.current_turn();
        if symbol.is_empty() {
            debug!(position = %pos, "Tap after round end ignored");
            return Transition::Ignored(IgnoreReason::RoundOver);
        }

        self.board.set(pos, symbol);

        let line = check_victory(&self.board, symbol);
        if line != VictoryLine::None {
            self.state = self.state.won(symbol, line);
            info!(winner = %symbol.symbol(), line = %line, "Round won");
            return Transition::Won {
                position: pos,
                symbol,
                line,
            };
        }

        if self.board.is_full() {
            self.state = self.state.drawn();
            info!(draws = self.state.draws(), "Round drawn");
            return Transition::Drawn {
                position: pos,
                symbol,
            };
        }

        let next = symbol.opponent();
        self.state = self.state.pass_turn(next);
        debug!(position = %pos, placed = %symbol.symbol(), next = %next.symbol(), "Move accepted");
        Transition::Placed {
            position: pos,
            symbol,
        }
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.on_state(&self.state, &self.board);
        }
    }

    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = TicTacToeInvariants::check_all(&self.snapshot()) {
            for violation in &violations {
                error!(%violation, "Engine invariant broken");
            }
            debug_assert!(violations.is_empty(), "{violations:?}");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
