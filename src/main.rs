//! Strictly Minimax - terminal driver
//!
//! Plays tic-tac-toe against the minimax engine, solves positions and
//! runs self-play.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_minimax::{EngineConfig, Mark};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();
    // The log filter lives in the config, so it is read before tracing starts.
    let from_file = cli.config.exists();
    let config = EngineConfig::load_or_default(&cli.config)?;
    initialize_tracing(&config);
    info!(
        path = %cli.config.display(),
        from_file,
        human_mark = %config.human_mark(),
        show_stats = *config.show_stats(),
        "Configuration loaded"
    );

    match cli.command {
        Command::Play { mark } => run_play(config, mark),
        Command::Solve { board, json } => run_solve(&board, json),
        Command::Selfplay => run_selfplay(&config),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: EngineConfig, mark: Option<String>) -> Result<()> {
    let config = match mark {
        Some(mark) => config.with_human_mark(mark.parse::<Mark>()?),
        None => config,
    };
    info!(human = %config.human_mark(), "Starting interactive game");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout().lock();
    strictly_minimax::play(&config, &mut input, &mut output)?;
    Ok(())
}

/// Print the optimal move for a board
#[instrument]
fn run_solve(board: &str, json: bool) -> Result<()> {
    let mut output = std::io::stdout().lock();
    strictly_minimax::solve(board, json, &mut output)?;
    Ok(())
}

/// Let the engine play itself
#[instrument(skip(config))]
fn run_selfplay(config: &EngineConfig) -> Result<()> {
    let mut output = std::io::stdout().lock();
    let outcome = strictly_minimax::selfplay(config, &mut output)?;
    info!(%outcome, "Self-play finished");
    Ok(())
}

/// `RUST_LOG` when set, otherwise the configured filter.
fn env_filter(config: &EngineConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

fn initialize_tracing(config: &EngineConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
