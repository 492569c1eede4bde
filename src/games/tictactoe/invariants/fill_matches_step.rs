//! Fill count invariant: the snapshot at step k holds k marks.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `snapshots[k].filled_count() == k` for every recorded step.
pub struct FillMatchesStepInvariant;

impl Invariant<GameHistory> for FillMatchesStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots
            .iter()
            .enumerate()
            .all(|(step, board)| board.filled_count() == step)
    }

    fn description() -> &'static str {
        "Snapshot at step k has exactly k marks"
    }
}
