//! Command-line interface for strictly_minimax.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use strictly_minimax::Board;

/// Strictly Minimax - optimal tic-tac-toe moves
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Optimal tic-tac-toe play via alpha-beta minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the player to act
    BestMove {
        /// Board in row notation, e.g. "XO./.X./..O"
        #[arg(short, long)]
        board: Board,
    },

    /// Let the engine play both sides until the game ends
    SelfPlay {
        /// Starting board (defaults to the configured opening, else empty)
        #[arg(short, long)]
        board: Option<Board>,
    },
}
