//! Moves as plain coordinates.
//!
//! An action names the square the next move fills. It carries no player:
//! whose mark lands there is derived from the board at the time it is applied.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A (row, column) move specification.
///
/// Ordering is row-major, so a set of actions iterates top-left to
/// bottom-right. The search relies on this to break ties reproducibly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("({row}, {col})")]
pub struct Action {
    /// Row, 0-2 from the top.
    pub row: usize,
    /// Column, 0-2 from the left.
    pub col: usize,
}

impl Action {
    /// Creates a new action. Coordinates are not checked here.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major board index (0-8), or `None` if off the board.
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then_some(self.row * 3 + self.col)
    }

    /// Creates an action from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Error returned when an action cannot be applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ActionError {
    /// One of the coordinates is outside 0-2.
    #[display("Action ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square already holds a mark.
    #[display("Square {action} is already occupied")]
    Occupied {
        /// The rejected action.
        action: Action,
    },

    /// Text that names no square.
    #[display("Unrecognized position: {input}")]
    Unrecognized {
        /// The text that failed to parse.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..9 {
            let action = Action::from_index(index).unwrap();
            assert_eq!(action.index(), Some(index));
        }
        assert_eq!(Action::from_index(9), None);
    }

    #[test]
    fn test_out_of_range_has_no_index() {
        assert_eq!(Action::new(3, 0).index(), None);
        assert_eq!(Action::new(0, 3).index(), None);
    }

    #[test]
    fn test_row_major_ordering() {
        assert!(Action::new(0, 2) < Action::new(1, 0));
        assert!(Action::new(1, 0) < Action::new(1, 1));
    }

    #[test]
    fn test_error_messages() {
        let err = ActionError::Occupied {
            action: Action::new(1, 1),
        };
        assert_eq!(err.to_string(), "Square (1, 1) is already occupied");
        let err = ActionError::OutOfBounds { row: 4, col: 0 };
        assert!(err.to_string().contains("off the board"));
    }
}
