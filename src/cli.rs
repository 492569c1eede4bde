//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timeline - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Tic-tac-toe with a branchable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// List moves newest first
        #[arg(long)]
        descending: bool,
    },

    /// Apply a list of moves and print the resulting view
    Replay {
        /// Comma-separated cells, 1-9 or labels (e.g. `1,5,9`)
        #[arg(value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Jump to this step after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
