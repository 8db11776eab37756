//! Strictly Minimax - optimal tic-tac-toe by exhaustive game-tree search
//!
//! The engine is a set of pure functions over an immutable [`Board`]:
//! inspect a position, apply a move, or search for the best one.
//!
//! # Architecture
//!
//! - **Inspection**: [`player`], [`actions`], [`winner`], [`terminal`], [`utility`]
//! - **Transition**: [`result`] derives a new board, failing on illegal actions
//! - **Search**: [`minimax`] returns the first optimal action in row-major order
//! - **Driver**: [`Game`] keeps history for front ends
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = result(&board, action).unwrap();
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, PlayConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, ActionError, Board, BoardParseError, Cell, Game, GameError, GameStatus, LINES,
    Player, Position, SearchStats, Square, actions, initial_state, max_value, min_value, minimax,
    minimax_with_stats, player, result, status, terminal, utility, winner,
};
