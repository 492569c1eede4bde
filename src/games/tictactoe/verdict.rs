//! Classification of a board snapshot.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Always derived from a snapshot on demand, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No winner yet and at least one empty square.
    InProgress,
    /// Every square is filled and no line is complete.
    Draw,
    /// A player completed a line.
    Win {
        /// The winning player.
        player: Player,
        /// The three squares forming the winning line.
        line: [Position; 3],
    },
}

impl Verdict {
    /// Returns true once the game has concluded (win or draw).
    pub fn is_concluded(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Win { player, .. } => Some(*player),
            Verdict::InProgress | Verdict::Draw => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            Verdict::Win { line, .. } => Some(*line),
            Verdict::InProgress | Verdict::Draw => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::InProgress => write!(f, "In progress"),
            Verdict::Draw => write!(f, "Draw"),
            Verdict::Win { player, .. } => write!(f, "Winner: {}", player),
        }
    }
}
