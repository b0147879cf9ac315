//! Tic-tac-toe rules engine.
//!
//! The engine owns a 3x3 board and an immutable [`GameState`] snapshot that
//! is replaced on every transition. Hosts feed it [`UserAction`] values through
//! [`GameEngine::dispatch`] and render from [`GameEngine::state`] and
//! [`GameEngine::board`], or register a [`StateObserver`] to be told about
//! each new snapshot.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{CellValue, GameEngine, UserAction, VictoryLine};
//!
//! # fn main() -> Result<(), tictactoe_engine::EngineError> {
//! let mut engine = GameEngine::new();
//! for cell in [1, 4, 2, 5, 3] {
//!     engine.tap(cell)?;
//! }
//! assert_eq!(engine.state().message(), "Player 'O' Won");
//! assert_eq!(*engine.state().victory_line(), VictoryLine::Row1);
//! assert_eq!(*engine.state().current_turn(), CellValue::Empty);
//!
//! engine.dispatch(UserAction::ResetRequested);
//! assert_eq!(*engine.state().circle_wins(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
pub mod invariants;
mod lines;
mod observer;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{IgnoreReason, Transition, UserAction};
pub use engine::GameEngine;
pub use error::EngineError;
pub use lines::{VictoryLine, WINNING_LINES};
pub use observer::StateObserver;
pub use position::Position;
pub use state::GameState;
pub use types::{Board, CellValue};
