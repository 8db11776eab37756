//! Tests for named positions.

use strictly_minimax::{Action, Board, Player, Position, Square, result};

#[test]
fn test_position_to_action() {
    assert_eq!(Position::TopLeft.to_action(), Action::new(0, 0));
    assert_eq!(Position::Center.to_action(), Action::new(1, 1));
    assert_eq!(Position::BottomRight.to_action(), Action::new(2, 2));
}

#[test]
fn test_position_numbers_match_pretty_board() {
    let board = Board::new();
    let pretty = board.pretty();
    for pos in Position::valid_moves(&board) {
        assert!(pretty.contains(&pos.number().to_string()));
    }
}

#[test]
fn test_valid_moves_empty_board() {
    assert_eq!(Position::valid_moves(&Board::new()).len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let board = result(&Board::new(), Action::new(0, 0)).unwrap();
    let board = result(&board, Action::new(1, 1)).unwrap();
    assert_eq!(board.get(Action::new(1, 1)), Some(Square::Occupied(Player::O)));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_parse_then_play() {
    let pos = Position::parse("top right").unwrap();
    let board = result(&Board::new(), pos.to_action()).unwrap();
    assert_eq!(board.to_string(), "..X/.../...");
}
