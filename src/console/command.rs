//! Line commands understood by the console.

use crate::games::tictactoe::Position;
use tracing::instrument;

/// A single parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Play(Position),
    /// Move the cursor to a recorded step.
    Jump(usize),
    /// Flip the move-list order.
    Sort,
    /// Start a new game.
    New,
    /// Redraw the board and move list.
    Show,
    /// Print the current view as JSON.
    Json,
    /// Print the command summary.
    Help,
    /// Leave the console.
    Quit,
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  1-9 | <square>    place a mark (e.g. `5`, `center`, `top-left`)
  jump <n>         go to move #n (`goto <n>`, `start` for move #0)
  sort             toggle move list order
  new              start a new game
  show             redraw the board
  json             print the current view as JSON
  help             show this help
  quit             leave";

impl Command {
    /// Parses one input line. Returns `None` for blank or unknown input.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_lowercase();
        let mut words = line.split_whitespace();
        let head = words.next()?;

        match (head, words.next(), words.next()) {
            ("jump" | "goto", Some(step), None) => {
                step.trim_start_matches('#').parse().ok().map(Command::Jump)
            }
            ("start", None, None) => Some(Command::Jump(0)),
            ("sort", None, None) => Some(Command::Sort),
            ("new" | "restart", None, None) => Some(Command::New),
            ("show" | "board", None, None) => Some(Command::Show),
            ("json", None, None) => Some(Command::Json),
            ("help" | "?", None, None) => Some(Command::Help),
            ("quit" | "exit" | "q", None, None) => Some(Command::Quit),
            _ => Position::from_label_or_number(&line).map(Command::Play),
        }
    }
}
