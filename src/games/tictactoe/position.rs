//! Named board positions for human input and display.

use super::action::{Action, ActionError};
use super::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board, named for humans.
///
/// Front ends talk in positions; the engine talks in [`Action`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (square 1)
    TopLeft,
    /// Top-center (square 2)
    TopCenter,
    /// Top-right (square 3)
    TopRight,
    /// Middle-left (square 4)
    MiddleLeft,
    /// Center (square 5)
    Center,
    /// Middle-right (square 6)
    MiddleRight,
    /// Bottom-left (square 7)
    BottomLeft,
    /// Bottom-center (square 8)
    BottomCenter,
    /// Bottom-right (square 9)
    BottomRight,
}

impl Position {
    /// Label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// The square number shown by [`Board::pretty`] (1-9).
    pub fn number(self) -> usize {
        self as usize + 1
    }

    /// The engine action for this position.
    pub fn to_action(self) -> Action {
        let index = self as usize;
        Action::new(index / 3, index % 3)
    }

    /// The position an action addresses, or `None` if off the board.
    pub fn from_action(action: Action) -> Option<Self> {
        let index = action.index()?;
        Position::iter().nth(index)
    }

    /// Parses a square number (1-9) or a label.
    ///
    /// Labels match case-insensitively and ignore `-`, `_` and spaces, so
    /// `center`, `Top-left` and `bottom right` are all accepted.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, ActionError> {
        let trimmed = input.trim();
        let unrecognized = || ActionError::Unrecognized {
            input: trimmed.to_string(),
        };

        if let Ok(num) = trimmed.parse::<usize>() {
            return num
                .checked_sub(1)
                .and_then(|i| Position::iter().nth(i))
                .ok_or_else(unrecognized);
        }

        let wanted = normalize(trimmed);
        Position::iter()
            .find(|pos| normalize(pos.label()) == wanted)
            .ok_or_else(unrecognized)
    }

    /// Positions still open on the board, top-left to bottom-right.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Position::iter()
            .filter(|pos| board.is_empty(pos.to_action()))
            .collect()
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
