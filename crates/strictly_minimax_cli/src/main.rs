//! Strictly Minimax - command-line harness
//!
//! Feeds boards to the alpha-beta engine and prints what it chooses.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::{OutputFormat, PlayConfig};
use report::BestMoveReport;
use strictly_minimax::{Board, analyze, initial_state, self_play};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PlayConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => PlayConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format.unwrap_or(*config.format());

    match cli.command {
        Command::BestMove { board } => run_best_move(&board, format, *config.report_stats()),
        Command::SelfPlay { board } => {
            let start = match board {
                Some(board) => board,
                None => config.opening_board()?.unwrap_or_else(initial_state),
            };
            run_self_play(&start, format)
        }
    }
}

/// Prints the engine's choice for a single board.
#[instrument(skip(board), fields(board = %board))]
fn run_best_move(board: &Board, format: OutputFormat, show_stats: bool) -> Result<()> {
    info!("Searching for best move");
    let report = BestMoveReport::new(board, analyze(board));
    println!("{}", report::best_move(&report, format, show_stats)?);
    Ok(())
}

/// Plays the engine against itself and prints the game.
#[instrument(skip(start), fields(start = %start))]
fn run_self_play(start: &Board, format: OutputFormat) -> Result<()> {
    info!("Starting self-play");
    let record = self_play(start).context("Self-play hit an invalid action")?;
    println!("{}", report::game(&record, format)?);
    Ok(())
}
