//! Strictly Timeline - tic-tac-toe with a branchable move history
//!
//! The engine keeps every board snapshot of a game. A cursor selects the
//! snapshot being viewed; jumping moves only the cursor, and playing from an
//! earlier step discards the snapshots after it.
//!
//! # Architecture
//!
//! - **Rules**: pure classification of a board (win with line, draw, in progress)
//! - **History**: snapshot log, cursor, move application and time travel
//! - **Console**: line-oriented front end that drives the engine
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{GameHistory, MoveError, Position, Verdict, evaluate};
//!
//! let mut history = GameHistory::new();
//! for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter,
//!             Position::Center, Position::TopRight] {
//!     history.apply_move(pos).unwrap();
//! }
//! assert!(matches!(evaluate(history.current_snapshot()), Verdict::Win { .. }));
//! assert_eq!(history.apply_move(Position::BottomRight), Err(MoveError::GameOver));
//!
//! history.jump_to(2).unwrap();
//! history.apply_move(Position::BottomRight).unwrap();
//! assert_eq!(history.len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod console;
mod games;
mod session_config;

// Crate-level exports - Console front end
pub use console::{Command, Console, ConsoleError, Flow, GameView, MoveEntry, HELP};

// Crate-level exports - Configuration
pub use session_config::{BoardStyle, ConfigError, SessionConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Contract, GameHistory, GameNotOver, LegalMove, Move, MoveContract, MoveDescriptor,
    MoveError, Player, Position, SortOrder, Square, SquareIsEmpty, Verdict, evaluate,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{
    AlternatingMarksInvariant, CursorInBoundsInvariant, FillMatchesStepInvariant,
    HistoryInvariants, Invariant, InvariantSet, InvariantViolation, SingleCellDeltaInvariant,
};
pub use games::tictactoe::rules::{LINES, check_winner, is_full};
