//! Line-oriented console front end.
//!
//! The console owns one [`GameHistory`] and the caller-side sort order. It
//! reads commands, feeds them to the engine and redraws a [`GameView`].
//! Rejected moves and jumps are reported and otherwise ignored.

mod command;
mod view;

pub use command::{Command, HELP};
pub use view::{GameView, MoveEntry};

use crate::games::tictactoe::{GameHistory, SortOrder};
use crate::session_config::SessionConfig;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop the session.
    Quit,
}

/// Interactive session over any line source and sink.
pub struct Console<R, W> {
    input: R,
    output: W,
    history: GameHistory,
    sort_order: SortOrder,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console on a fresh game.
    #[instrument(skip(input, output))]
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            history: GameHistory::new(),
            sort_order: *config.sort_order(),
            config,
        }
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        info!("Console session started");
        self.show()?;

        let mut line = String::new();
        loop {
            write!(self.output, "\n> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match Command::parse(&line) {
                Some(command) => {
                    if self.execute(command)? == Flow::Quit {
                        break;
                    }
                }
                None if line.trim().is_empty() => {}
                None => {
                    debug!(input = %line.trim(), "Unrecognized command");
                    writeln!(
                        self.output,
                        "Unrecognized command: {} (type `help`)",
                        line.trim()
                    )?;
                }
            }
        }

        info!(steps = self.history.len(), "Console session ended");
        Ok(())
    }

    /// Applies one command and prints its result.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> Result<Flow, ConsoleError> {
        match command {
            Command::Play(position) => match self.history.apply_move(position) {
                Ok(()) => self.show()?,
                Err(e) => writeln!(self.output, "{}", e)?,
            },
            Command::Jump(step) => match self.history.jump_to(step) {
                Ok(()) => self.show()?,
                Err(e) => writeln!(self.output, "{}", e)?,
            },
            Command::Sort => {
                self.sort_order = self.sort_order.toggle();
                debug!(sort_order = ?self.sort_order, "Sort order toggled");
                self.show()?;
            }
            Command::New => {
                self.history.reset();
                self.show()?;
            }
            Command::Show => self.show()?,
            Command::Json => {
                let json = serde_json::to_string_pretty(&self.view())?;
                writeln!(self.output, "{}", json)?;
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {
                warn_if_unfinished(&self.history);
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Current projection of the session.
    pub fn view(&self) -> GameView {
        GameView::new(&self.history, self.sort_order)
    }

    /// The engine state behind the console.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Consumes the console, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn show(&mut self) -> Result<(), ConsoleError> {
        let rendered = self
            .view()
            .render(*self.config.board_style(), *self.config.show_hints());
        writeln!(self.output, "{}", rendered)?;
        Ok(())
    }
}

fn warn_if_unfinished(history: &GameHistory) {
    if !history.verdict().is_concluded() {
        warn!(step = history.step_number(), "Leaving an unfinished game");
    }
}

/// Console I/O or encoding error.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for ConsoleError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
