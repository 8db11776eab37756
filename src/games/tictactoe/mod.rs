//! Tic-tac-toe: board types, rules, and the minimax decision engine.

mod action;
mod engine;
mod game;
mod minimax;
mod position;
mod rules;
mod types;

pub use action::{Action, ActionError};
pub use engine::{actions, initial_state, player, result, status, terminal, utility, winner};
pub use game::{Game, GameError};
pub use minimax::{SearchStats, max_value, min_value, minimax, minimax_with_stats};
pub use position::Position;
pub use rules::LINES;
pub use types::{Board, BoardParseError, GameStatus, Player, Square};

/// Alias matching the engine's vocabulary: a cell holds a mark or nothing.
pub type Cell = Square;
