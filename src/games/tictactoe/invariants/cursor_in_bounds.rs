//! Cursor bounds invariant: the cursor always names a recorded snapshot.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `0 <= step_number <= len - 1`, and the log is never empty.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.step_number < history.snapshots.len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}
