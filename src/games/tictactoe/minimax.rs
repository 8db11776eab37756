//! Exhaustive minimax search.
//!
//! X maximizes [`utility`], O minimizes it. The search visits every
//! reachable board below the one it is given: no pruning, no caching, no
//! depth limit. Nine plies at most keeps that well under a second.
//!
//! Candidate actions are tried in row-major order and a later action only
//! replaces the current best when strictly better, so the chosen action is
//! the first optimal one in that order.

use super::action::Action;
use super::engine::{player, successors, terminal, utility};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What a search learned about a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Minimax value of the position under optimal play.
    pub value: i32,
    /// Boards visited, the root included.
    pub nodes: u64,
}

/// Returns the optimal action for the player to move, or `None` if the
/// game is over.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Option<Action> {
    minimax_with_stats(board).0
}

/// Like [`minimax`], also reporting the position's value and search size.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax_with_stats(board: &Board) -> (Option<Action>, SearchStats) {
    if terminal(board) {
        debug!("Board is terminal, no move to make");
        return (
            None,
            SearchStats {
                value: utility(board),
                nodes: 1,
            },
        );
    }

    let mut nodes = 0;
    let (value, action) = match player(board) {
        Player::X => search_max(board, &mut nodes),
        Player::O => search_min(board, &mut nodes),
    };

    debug!(action = ?action, value, nodes, "Search complete");
    (action, SearchStats { value, nodes })
}

/// Best value X can force from `board`, and the first action achieving it.
///
/// Returns `(utility(board), None)` on a terminal board.
pub fn max_value(board: &Board) -> (i32, Option<Action>) {
    search_max(board, &mut 0)
}

/// Best value O can force from `board`, and the first action achieving it.
///
/// Returns `(utility(board), None)` on a terminal board.
pub fn min_value(board: &Board) -> (i32, Option<Action>) {
    search_min(board, &mut 0)
}

fn search_max(board: &Board, nodes: &mut u64) -> (i32, Option<Action>) {
    *nodes += 1;
    if terminal(board) {
        return (utility(board), None);
    }

    let mut best = (i32::MIN, None);
    for (action, next) in successors(board) {
        let (value, _) = search_min(&next, nodes);
        if value > best.0 {
            best = (value, Some(action));
        }
    }
    best
}

fn search_min(board: &Board, nodes: &mut u64) -> (i32, Option<Action>) {
    *nodes += 1;
    if terminal(board) {
        return (utility(board), None);
    }

    let mut best = (i32::MAX, None);
    for (action, next) in successors(board) {
        let (value, _) = search_max(&next, nodes);
        if value < best.0 {
            best = (value, Some(action));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        assert_eq!(minimax(&board("XXX/OO./...")), None);
        assert_eq!(max_value(&board("XXX/OO./...")), (1, None));
        assert_eq!(min_value(&board("XOX/OXX/OXO")), (0, None));
    }

    #[test]
    fn test_completes_winning_row() {
        assert_eq!(max_value(&board("XX./OO./...")), (1, Some(Action::new(0, 2))));
    }

    #[test]
    fn test_contested_top_row() {
        // O to move; blocking is forced even though X still wins.
        let b = board("XX./O../...");
        assert_eq!(minimax(&b), Some(Action::new(0, 2)));
        assert_eq!(min_value(&b).0, 1);
    }

    #[test]
    fn test_o_blocks() {
        // X threatens the top row; O has no win of its own.
        assert_eq!(minimax(&board("XX./.O./...")), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_o_takes_win_over_block() {
        // Both X and O threaten; O to move wins on the middle row.
        let b = board("XX./OO./X..");
        assert_eq!(minimax(&b), Some(Action::new(1, 2)));
        assert_eq!(min_value(&b).0, -1);
    }

    #[test]
    fn test_empty_board_value_is_draw() {
        let (action, stats) = minimax_with_stats(&Board::new());
        assert_eq!(stats.value, 0);
        assert_eq!(action, Some(Action::new(0, 0)));
        // Full tree: 549,946 boards including the root.
        assert_eq!(stats.nodes, 549_946);
    }

    #[test]
    fn test_single_square_left() {
        let b = board("XOX/OXO/OX.");
        assert_eq!(max_value(&b), (1, Some(Action::new(2, 2))));
    }
}
