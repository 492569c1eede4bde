//! Tests for history invariants and the move contract.

use strictly_timeline::{
    AlternatingMarksInvariant, Contract, CursorInBoundsInvariant, FillMatchesStepInvariant,
    GameHistory, HistoryInvariants, Invariant, InvariantSet, Move, MoveContract, MoveError,
    Player, Position, SingleCellDeltaInvariant,
};

/// Plays every game reachable by always taking the lowest free square,
/// branching back to each earlier step once.
fn exercised_history() -> GameHistory {
    let mut history = GameHistory::new();
    while !history.verdict().is_concluded() {
        let free = Position::valid_moves(history.current_snapshot());
        history.apply_move(free[0]).unwrap();
    }
    for step in (0..history.len() - 1).rev() {
        history.jump_to(step).unwrap();
        let free = Position::valid_moves(history.current_snapshot());
        history.apply_move(*free.last().unwrap()).unwrap();
    }
    history
}

#[test]
fn test_invariants_hold_after_play_and_branching() {
    let history = exercised_history();
    assert!(CursorInBoundsInvariant::holds(&history));
    assert!(SingleCellDeltaInvariant::holds(&history));
    assert!(FillMatchesStepInvariant::holds(&history));
    assert!(AlternatingMarksInvariant::holds(&history));
    assert!(HistoryInvariants::check_all(&history).is_ok());
}

#[test]
fn test_contract_precondition_order() {
    let history = GameHistory::replay(&[
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ])
    .unwrap();

    // Concluded game reports GameOver even for an occupied square.
    let occupied = Move::new(Player::O, Position::Center);
    assert_eq!(
        MoveContract::pre(&history, &occupied),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_contract_postcondition_on_real_transition() {
    let mut before = GameHistory::replay(&[Position::Center, Position::TopLeft]).unwrap();
    before.jump_to(1).unwrap();

    let mut after = before.clone();
    after.apply_move(Position::BottomRight).unwrap();

    assert!(MoveContract::post(&before, &after).is_ok());
}

#[test]
fn test_postcondition_rejects_unchanged_history() {
    let before = GameHistory::replay(&[Position::Center]).unwrap();
    let violations = MoveContract::post(&before, &before).unwrap_err();
    assert!(!violations.is_empty());
}

#[test]
fn test_invariant_descriptions_are_distinct() {
    let descriptions = [
        CursorInBoundsInvariant::description(),
        SingleCellDeltaInvariant::description(),
        FillMatchesStepInvariant::description(),
        AlternatingMarksInvariant::description(),
    ];
    for (i, a) in descriptions.iter().enumerate() {
        for b in &descriptions[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
