//! Game rules for tic-tac-toe.
//!
//! Pure functions for classifying a board snapshot. Rules are kept apart
//! from the history so any board can be judged, whether or not it was
//! reached through legal play.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, LINES};

use super::{Board, Verdict};
use tracing::{instrument, trace};

/// Classifies a board as won, drawn, or still in progress.
///
/// Total over every 9-square layout; a completed line takes precedence
/// over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Verdict {
    let verdict = match check_winner(board) {
        Some((player, line)) => Verdict::Win { player, line },
        None if is_full(board) => Verdict::Draw,
        None => Verdict::InProgress,
    };
    trace!(?verdict, "Evaluated board");
    verdict
}
