//! Alternating marks invariant: X, O, X, O, ...

use super::super::{GameHistory, Player};
use super::Invariant;

/// Invariant: the mark added to reach step k is X for odd k and O for even k.
///
/// First move is always X.
pub struct AlternatingMarksInvariant;

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(history: &GameHistory) -> bool {
        let mut expected = Player::X;
        (1..history.snapshots.len()).all(|step| {
            let ok = history
                .move_at(step)
                .is_some_and(|mov| mov.player == expected);
            expected = expected.opponent();
            ok
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
