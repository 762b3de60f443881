//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};

/// Strictly Minimax - tic-tac-toe against an exhaustive minimax engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe with a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "strictly_minimax.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine in the terminal
    Play {
        /// Mark to play as (X moves first); overrides the config file
        #[arg(short, long)]
        mark: Option<String>,
    },

    /// Print the optimal move for a board
    Solve {
        /// Nine squares in row-major order, e.g. "XX./O../..."
        board: String,

        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides from the empty board
    Selfplay,
}
