//! Tests for tic-tac-toe position enum.

use strictly_timeline::{Board, Player, Position};

#[test]
fn test_index_conversion_covers_every_cell() {
    for (index, pos) in Position::ALL.iter().enumerate() {
        assert_eq!(pos.to_index(), index);
        assert_eq!(Position::from_index(index), Some(*pos));
    }
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_numbers_are_one_based() {
    assert_eq!(Position::from_label_or_number("1"), Some(Position::TopLeft));
    assert_eq!(Position::from_label_or_number("5"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number(" 9 "), Some(Position::BottomRight));
    assert_eq!(Position::from_label_or_number("0"), None);
    assert_eq!(Position::from_label_or_number("10"), None);
}

#[test]
fn test_labels_ignore_case_and_separators() {
    for input in ["top left", "Top-left", "TOP_LEFT", "topleft"] {
        assert_eq!(
            Position::from_label_or_number(input),
            Some(Position::TopLeft),
            "{input}"
        );
    }
    assert_eq!(
        Position::from_label_or_number("bottom center"),
        Some(Position::BottomCenter)
    );
    assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
}

#[test]
fn test_unknown_labels_rejected() {
    assert_eq!(Position::from_label_or_number(""), None);
    assert_eq!(Position::from_label_or_number("--"), None);
    assert_eq!(Position::from_label_or_number("top"), None);
    assert_eq!(Position::from_label_or_number("left top"), None);
}

#[test]
fn test_label_round_trip() {
    for pos in Position::ALL {
        assert_eq!(Position::from_label_or_number(pos.label()), Some(pos));
    }
}

#[test]
fn test_valid_moves_shrink_as_marks_land() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board), Position::ALL.to_vec());

    let board = board
        .with_mark(Position::TopLeft, Player::X)
        .with_mark(Position::Center, Player::O);
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
}
