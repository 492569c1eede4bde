//! Strictly Timeline - console entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io;
use strictly_timeline::{Console, GameHistory, GameView, Position, SessionConfig, SortOrder};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Command};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SessionConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play { descending } => run_play(with_order(config, descending)),
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => run_replay(with_order(config, descending), &moves, jump, json),
    }
}

fn with_order(config: SessionConfig, descending: bool) -> SessionConfig {
    if descending {
        config.with_sort_order(SortOrder::Descending)
    } else {
        config
    }
}

/// Runs the interactive console on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: SessionConfig) -> Result<()> {
    info!("Starting interactive session");
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config);
    console.run()?;
    Ok(())
}

/// Replays `moves`, optionally jumps, and prints the view.
#[instrument(skip(config))]
fn run_replay(config: SessionConfig, moves: &[String], jump: Option<usize>, json: bool) -> Result<()> {
    let positions = moves
        .iter()
        .map(|m| {
            Position::from_label_or_number(m).ok_or_else(|| anyhow!("Not a square: {}", m))
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(count = positions.len(), "Parsed moves");

    let mut history = GameHistory::replay(&positions).context("Replay failed")?;
    if let Some(step) = jump {
        history.jump_to(step).context("Jump failed")?;
    }

    let view = GameView::new(&history, *config.sort_order());
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.render(*config.board_style(), *config.show_hints()));
    }

    info!(steps = history.len(), verdict = %history.verdict(), "Replay finished");
    Ok(())
}
