//! Read-only projection of a session for display.

use crate::games::tictactoe::{GameHistory, Move, SortOrder, Square, Verdict};
use crate::session_config::BoardStyle;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One line of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Index into the history log.
    step: usize,
    /// Whether the cursor is on this step.
    is_current: bool,
    /// Text shown for the entry.
    label: String,
    /// Move that produced this step (none for the start).
    played: Option<Move>,
}

/// Everything the console shows for one session state.
///
/// Built fresh from the history on every redraw, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Snapshot squares under the cursor, row-major.
    squares: [Square; 9],
    /// Verdict for that snapshot.
    verdict: Verdict,
    /// Status line: winner, draw, or next player.
    status: String,
    /// Index of the current snapshot.
    step_number: usize,
    /// Order the move list is presented in.
    sort_order: SortOrder,
    /// Move list in presentation order.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Projects the history through the caller's sort order.
    #[instrument(skip(history), fields(step = history.step_number()))]
    pub fn new(history: &GameHistory, sort_order: SortOrder) -> Self {
        let verdict = history.verdict();
        let status = match verdict {
            Verdict::Win { player, .. } => format!("Winner: {}", player),
            Verdict::Draw => "Draw".to_string(),
            Verdict::InProgress => format!("Next player: {}", history.current_turn()),
        };

        let moves = history
            .move_list(sort_order)
            .into_iter()
            .map(|desc| MoveEntry {
                step: desc.step,
                is_current: desc.is_current,
                label: entry_label(desc.step, desc.is_current),
                played: history.move_at(desc.step),
            })
            .collect();

        Self {
            squares: *history.current_snapshot().squares(),
            verdict,
            status,
            step_number: history.step_number(),
            sort_order,
            moves,
        }
    }

    /// Renders the board, winning squares wrapped in brackets.
    pub fn render_board(&self, style: BoardStyle) -> String {
        let winning = self.verdict.winning_line();
        let rows: Vec<String> = self
            .squares
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, square)| {
                        let index = row * 3 + col;
                        let symbol = match (square, style) {
                            (Square::Occupied(player), _) => player.to_string(),
                            (Square::Empty, BoardStyle::Numbered) => (index + 1).to_string(),
                            (Square::Empty, BoardStyle::Blank) => " ".to_string(),
                        };
                        let highlighted = winning
                            .is_some_and(|line| line.iter().any(|pos| pos.to_index() == index));
                        if highlighted {
                            format!("[{}]", symbol)
                        } else {
                            format!(" {} ", symbol)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n---+---+---\n")
    }

    /// Renders the move list, one entry per line.
    ///
    /// With `hints`, each entry also names the mark and square played.
    pub fn render_moves(&self, hints: bool) -> String {
        self.moves
            .iter()
            .map(|entry| {
                let marker = if entry.is_current { '>' } else { ' ' };
                match (&entry.played, hints) {
                    (Some(mov), true) => format!(
                        "{} {:>2}. {} ({} at {})",
                        marker,
                        entry.step,
                        entry.label,
                        mov.player,
                        mov.position.label()
                    ),
                    _ => format!("{} {:>2}. {}", marker, entry.step, entry.label),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders board, status and move list together.
    pub fn render(&self, style: BoardStyle, hints: bool) -> String {
        format!(
            "{}\n\n{}\n\nMoves ({}):\n{}",
            self.render_board(style),
            self.status,
            match self.sort_order {
                SortOrder::Ascending => "ascending",
                SortOrder::Descending => "descending",
            },
            self.render_moves(hints)
        )
    }
}

fn entry_label(step: usize, is_current: bool) -> String {
    if is_current {
        format!("You are at move #{}", step)
    } else if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}
