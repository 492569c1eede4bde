//! Single cell delta invariant: each step adds exactly one mark.

use super::super::{GameHistory, Position, Square};
use super::Invariant;

/// Invariant: adjacent snapshots differ in exactly one square, and that
/// square went from empty to occupied.
///
/// Marks are never removed or overwritten between steps.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameHistory> for SingleCellDeltaInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots.windows(2).all(|pair| {
            let changed: Vec<Position> = Position::ALL
                .iter()
                .copied()
                .filter(|pos| pair[0].get(*pos) != pair[1].get(*pos))
                .collect();

            match changed.as_slice() {
                [pos] => pair[0].get(*pos) == Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each step fills exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player};

    #[test]
    fn test_multiple_moves_hold() {
        let history = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .unwrap();
        assert!(SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut history = GameHistory::new();
        history.snapshots.push(
            Board::new()
                .with_mark(Position::TopLeft, Player::X)
                .with_mark(Position::Center, Player::O),
        );
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut history = GameHistory::replay(&[Position::Center]).unwrap();
        let overwritten = history.snapshots[1].with_mark(Position::Center, Player::O);
        history.snapshots.push(overwritten);
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let mut history = GameHistory::new();
        history.snapshots.push(Board::new());
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }
}
