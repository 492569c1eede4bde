//! Contract-based validation for moves on the history.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::{GameHistory, rules};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// A failure here is a bug in the engine, not a caller error.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the snapshot under the cursor must not be won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`MoveError::GameOver`] once the current verdict is final.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), MoveError> {
        if rules::evaluate(history.current_snapshot()).is_concluded() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with [`MoveError::CellOccupied`] when the square is taken.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &GameHistory) -> Result<(), MoveError> {
        if !history.current_snapshot().is_empty(mov.position) {
            Err(MoveError::CellOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game is live and the square is free.
///
/// Game-over is checked first, so a concluded board reports `GameOver`
/// even when the requested square is also occupied.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &GameHistory) -> Result<(), MoveError> {
        GameNotOver::check(history)?;
        SquareIsEmpty::check(mov, history)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for applying a move to the history.
///
/// Preconditions:
/// - Game not over at the cursor
/// - Square must be empty
///
/// Postconditions:
/// - Every history invariant holds
/// - The log was cut right after the old cursor and grew by one
/// - Snapshots up to the old cursor are unchanged
pub struct MoveContract;

impl Contract<GameHistory, Move> for MoveContract {
    fn pre(history: &GameHistory, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, history)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match HistoryInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let kept = before.step_number + 1;
        if after.len() != kept + 1 || after.step_number != kept {
            violations.push(InvariantViolation::new(
                "Log holds old cursor + 2 snapshots with the cursor on the new tip",
            ));
        }
        if after.snapshots.get(..kept) != before.snapshots.get(..kept) {
            violations.push(InvariantViolation::new(
                "Snapshots up to the old cursor are preserved",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(?violations, "Move postcondition failed");
            Err(violations)
        }
    }
}
