//! State inspection and transition for tic-tac-toe.
//!
//! Every function here is pure: it reads the board it is given and, for
//! [`result`], returns a fresh board. Whose turn it is is always derived
//! from the marks on the board, never stored.

use super::action::{Action, ActionError};
use super::rules::{check_winner, is_full};
use super::types::{Board, GameStatus, Player, Square};
use std::collections::BTreeSet;
use tracing::{instrument, warn};

/// Returns the starting board: nine empty squares.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next on `board`.
///
/// O moves when X has more marks, X otherwise. The answer on a terminal
/// board carries no meaning.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Returns every empty square as an action, in row-major order.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, square)| **square == Square::Empty)
        .filter_map(|(index, _)| Action::from_index(index))
        .collect()
}

/// Returns the board that results from the player to move taking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`ActionError::OutOfBounds`] if either coordinate is outside
/// 0-2, or [`ActionError::Occupied`] if the square already holds a mark.
#[instrument(skip(board, action), fields(board = %board, action = %action))]
pub fn result(board: &Board, action: Action) -> Result<Board, ActionError> {
    let Some(index) = action.index() else {
        warn!("Rejected off-board action");
        return Err(ActionError::OutOfBounds {
            row: action.row,
            col: action.col,
        });
    };

    if board.squares()[index] != Square::Empty {
        warn!("Rejected action on occupied square");
        return Err(ActionError::Occupied { action });
    }

    Ok(board.with(index, Square::Occupied(player(board))))
}

/// Returns the winner of the game, if there is one.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    check_winner(board)
}

/// Returns true if the game is over: someone has won or no square is empty.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a board: 1 if X has won, -1 if O has won, 0 otherwise.
///
/// Only meaningful on terminal boards.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Derives the game status from a board.
#[instrument(level = "trace", skip(board))]
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

/// Legal successors of `board`, paired with the action that reaches each.
///
/// Skips the validation in [`result`]: every action comes from [`actions`].
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mark = Square::Occupied(player(board));
    actions(board).into_iter().filter_map(move |action| {
        action
            .index()
            .map(|index| (action, board.with(index, mark)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_state_is_empty() {
        let b = initial_state();
        assert_eq!(b.filled(), 0);
        assert_eq!(actions(&b).len(), 9);
        assert_eq!(player(&b), Player::X);
    }

    #[test]
    fn test_player_alternates() {
        assert_eq!(player(&board("X../.../...")), Player::O);
        assert_eq!(player(&board("X../.O./...")), Player::X);
    }

    #[test]
    fn test_player_on_malformed_board() {
        // More O than X: not reachable, still answers X.
        assert_eq!(player(&board("OO./.../...")), Player::X);
    }

    #[test]
    fn test_actions_row_major() {
        let open: Vec<_> = actions(&board("X.X/.O./XOX")).into_iter().collect();
        assert_eq!(
            open,
            vec![Action::new(0, 1), Action::new(1, 0), Action::new(1, 2)]
        );
    }

    #[test]
    fn test_actions_full_board() {
        assert!(actions(&board("XOX/OXX/OXO")).is_empty());
    }

    #[test]
    fn test_result_places_current_mark() {
        let before = board("X../.../...");
        let after = result(&before, Action::new(1, 1)).unwrap();
        assert_eq!(after, board("X../.O./..."));
        assert_eq!(before, board("X../.../..."));
    }

    #[test]
    fn test_result_rejects_occupied() {
        let b = board("X../.../...");
        assert_eq!(
            result(&b, Action::new(0, 0)),
            Err(ActionError::Occupied {
                action: Action::new(0, 0)
            })
        );
    }

    #[test]
    fn test_result_rejects_out_of_bounds() {
        assert_eq!(
            result(&Board::new(), Action::new(0, 3)),
            Err(ActionError::OutOfBounds { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_status() {
        assert_eq!(status(&Board::new()), GameStatus::InProgress);
        assert_eq!(status(&board("XXX/OO./...")), GameStatus::Won(Player::X));
        assert_eq!(status(&board("XOX/OXX/OXO")), GameStatus::Draw);
    }

    #[test]
    fn test_successors_match_result() {
        let b = board("X../.O./...");
        for (action, next) in successors(&b) {
            assert_eq!(result(&b, action), Ok(next));
        }
        assert_eq!(successors(&b).count(), 7);
    }
}
