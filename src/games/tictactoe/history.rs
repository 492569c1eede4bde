//! Branchable move history with a navigable cursor.
//!
//! The history is a log of immutable board snapshots. Index 0 is always the
//! empty board and every later entry adds exactly one mark to the one before
//! it. A cursor selects the snapshot being viewed and acted upon.
//!
//! Jumping moves only the cursor. Applying a move while the cursor sits
//! behind the tip discards every snapshot after the cursor before the new
//! one is appended, so at most one future branch exists at a time.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::{Board, Player, Position, Verdict, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Display order for the move list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest step first.
    #[default]
    Ascending,
    /// Newest step first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct MoveDescriptor {
    /// Index into the history log.
    pub step: usize,
    /// Whether the cursor currently points at this step.
    pub is_current: bool,
}

/// Ordered snapshot log plus cursor for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    /// Recorded snapshots; never empty.
    pub(super) snapshots: Vec<Board>,
    /// Index of the current snapshot.
    pub(super) step_number: usize,
}

impl GameHistory {
    /// Starts a session on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            step_number: 0,
        }
    }

    /// Discards the whole session and starts over on the empty board.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn reset(&mut self) {
        info!("Starting a new game");
        *self = Self::new();
    }

    /// Builds a history by applying `positions` in order.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for pos in positions {
            history.apply_move(*pos)?;
        }
        Ok(history)
    }

    /// Places the current player's mark at `position`.
    ///
    /// Snapshots after the cursor are dropped before the new one is
    /// appended, and the cursor advances onto it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current snapshot is won or drawn.
    /// - [`MoveError::CellOccupied`] if the square is taken.
    ///
    /// On error the history is unchanged.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn apply_move(&mut self, position: Position) -> Result<(), MoveError> {
        let action = Move::new(self.current_turn(), position);

        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let next = self.current_snapshot().with_mark(position, action.player);
        let discarded = self.snapshots.len() - (self.step_number + 1);
        self.snapshots.truncate(self.step_number + 1);
        self.snapshots.push(next);
        self.step_number += 1;

        if discarded > 0 {
            info!(discarded, "Branched from an earlier step; later snapshots dropped");
        }
        debug!(player = %action.player, new_step = self.step_number, "Move applied");

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, self);
            debug_assert!(post.is_ok(), "Move postcondition failed: {:?}", post);
        }

        Ok(())
    }

    /// Moves the cursor to a recorded step without touching the log.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidStep`] if `step` is not a recorded index.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.snapshots.len() {
            let e = MoveError::InvalidStep {
                step,
                len: self.snapshots.len(),
            };
            warn!(error = %e, "Jump rejected");
            return Err(e);
        }

        self.step_number = step;
        debug!(to = step, "Cursor moved");
        Ok(())
    }

    /// Returns the snapshot under the cursor.
    pub fn current_snapshot(&self) -> &Board {
        &self.snapshots[self.step_number]
    }

    /// Returns the player to move at the cursor.
    ///
    /// Meaningless once the game is concluded; check [`Self::verdict`] first.
    pub fn current_turn(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// Evaluates the snapshot under the cursor.
    pub fn verdict(&self) -> Verdict {
        rules::evaluate(self.current_snapshot())
    }

    /// Lists every recorded step in the requested order.
    #[instrument(skip(self))]
    pub fn move_list(&self, order: SortOrder) -> Vec<MoveDescriptor> {
        let ascending = (0..self.snapshots.len())
            .map(|step| MoveDescriptor::new(step, step == self.step_number));
        match order {
            SortOrder::Ascending => ascending.collect(),
            SortOrder::Descending => ascending.rev().collect(),
        }
    }

    /// Returns the move that produced snapshot `step`.
    ///
    /// `None` for step 0 and for steps outside the log.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        let prev = self.snapshots.get(step.checked_sub(1)?)?;
        let next = self.snapshots.get(step)?;
        Position::ALL.iter().find_map(|pos| {
            match (prev.get(*pos).player(), next.get(*pos).player()) {
                (None, Some(player)) => Some(Move::new(player, *pos)),
                _ => None,
            }
        })
    }

    /// Index of the current snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Number of recorded snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history holds at least the empty board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
