//! A game in progress, for front ends.
//!
//! The engine is stateless; `Game` is the caller side of the contract. It
//! holds the boards produced by [`result`] so a front end can show history
//! and take moves back.

use super::action::{Action, ActionError};
use super::engine::{initial_state, player, result, status, terminal};
use super::minimax::minimax;
use super::types::{Board, GameStatus, Player};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Errors from driving a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The game has already ended.
    #[display("Game is already over")]
    Finished,

    /// The engine rejected the action.
    #[display("Invalid action: {source}")]
    Action {
        /// The engine's error.
        source: ActionError,
    },
}

impl From<ActionError> for GameError {
    fn from(source: ActionError) -> Self {
        Self::Action { source }
    }
}

/// Sequence of boards from a starting position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    start: Board,
    boards: Vec<Board>,
    history: Vec<Action>,
}

impl Game {
    /// Starts a game from the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(initial_state())
    }

    /// Starts a game from an arbitrary board.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board(board: Board) -> Self {
        Self {
            start: board,
            boards: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Plays both sides with [`minimax`] until the game ends.
    #[instrument(skip(board), fields(board = %board))]
    pub fn self_play(board: Board) -> Self {
        let mut game = Self::from_board(board);
        while let Ok(Some(_)) = game.play_best() {}
        info!(status = %game.status(), moves = game.history.len(), "Self-play finished");
        game
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        self.boards.last().unwrap_or(&self.start)
    }

    /// Actions played since the starting board.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Every board from the start to now.
    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        std::iter::once(&self.start).chain(&self.boards)
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        status(self.board())
    }

    /// The player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        (!terminal(self.board())).then(|| player(self.board()))
    }

    /// Applies `action` for the player to move.
    ///
    /// # Errors
    ///
    /// [`GameError::Finished`] on a terminal board, [`GameError::Action`]
    /// if the engine rejects the action.
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn play(&mut self, action: Action) -> Result<GameStatus, GameError> {
        if terminal(self.board()) {
            return Err(GameError::Finished);
        }

        let next = result(self.board(), action)?;
        self.boards.push(next);
        self.history.push(action);
        debug!(board = %next, "Move applied");
        Ok(self.status())
    }

    /// Lets the engine move for the player to move.
    ///
    /// Returns the action taken, or `None` if the game was already over.
    #[instrument(skip(self))]
    pub fn play_best(&mut self) -> Result<Option<Action>, GameError> {
        let Some(action) = minimax(self.board()) else {
            return Ok(None);
        };
        self.play(action)?;
        Ok(Some(action))
    }

    /// Takes back the last action. Returns it, or `None` at the start.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Action> {
        let action = self.history.pop()?;
        self.boards.pop();
        Some(action)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
