//! Core domain types for tic-tac-toe.

use super::action::Action;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// The mark a move places. X always moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    #[serde(alias = "x")]
    X,
    /// Player O (goes second).
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Character used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: the engine never mutates one in place, it derives a
/// new board for every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from three rows of squares.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (row, cells) in rows.iter().enumerate() {
            squares[row * 3..row * 3 + 3].copy_from_slice(cells);
        }
        Self { squares }
    }

    /// Gets the square addressed by `action`, or `None` if it is off the board.
    pub fn get(&self, action: Action) -> Option<Square> {
        action.index().map(|i| self.squares[i])
    }

    /// Checks if the square addressed by `action` is on the board and empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Square::Empty))
    }

    /// Returns a copy of this board with one square replaced.
    pub(crate) fn with(&self, index: usize, square: Square) -> Self {
        let mut next = *self;
        next.squares[index] = square;
        next
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Counts the occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|&&s| s != Square::Empty).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-9 number so a human can type it back.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from(b'1' + pos as u8),
                    Square::Occupied(player) => player.symbol(),
                };
                out.push(symbol);
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

/// Error parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Notation did not describe exactly nine squares.
    #[display("Expected 9 squares, found {found}")]
    WrongLength {
        /// Number of squares read.
        found: usize,
    },
    /// A character that is not a mark or an empty marker.
    #[display("Unrecognized square symbol '{symbol}'")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `XX./O../...` style notation.
    ///
    /// Whitespace, `/` and `|` are separators. `.`, `_` and `-` mark empty
    /// squares; `X` and `O` are accepted in either case.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                c if c.is_whitespace() || c == '/' || c == '|' => continue,
                '.' | '_' | '-' => Square::Empty,
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                other => return Err(BoardParseError::InvalidSymbol { symbol: other }),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength { found: v.len() })?;
        Ok(Self { squares })
    }
}

/// Current status of the game, derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_round_trip() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "XO./.X./..O");
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
    }

    #[test]
    fn test_parse_accepts_separators_and_case() {
        let board: Board = "x o _ | - x . | o . .".parse().unwrap();
        assert_eq!(board.get(Action::new(0, 0)), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(Action::new(2, 0)), Some(Square::Occupied(Player::O)));
        assert_eq!(board.filled(), 4);
    }

    #[test]
    fn test_parse_rejects_short_board() {
        assert_eq!(
            "XO.".parse::<Board>(),
            Err(BoardParseError::WrongLength { found: 3 })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        assert_eq!(
            "XO?/.../...".parse::<Board>(),
            Err(BoardParseError::InvalidSymbol { symbol: '?' })
        );
    }

    #[test]
    fn test_get_off_board() {
        assert_eq!(Board::new().get(Action::new(3, 0)), None);
        assert!(!Board::new().is_empty(Action::new(0, 3)));
    }

    #[test]
    fn test_pretty_numbers_empty_squares() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(board.pretty(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }
}
