//! Tic-tac-toe with a branchable, time-travelling history.

mod action;
mod contracts;
mod history;
mod position;
mod types;
mod verdict;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, SquareIsEmpty};
pub use history::{GameHistory, MoveDescriptor, SortOrder};
pub use position::Position;
pub use rules::evaluate;
pub use types::{Board, Player, Square};
pub use verdict::Verdict;
