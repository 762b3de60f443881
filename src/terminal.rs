//! Plain-text driver: play, solve and self-play over any reader/writer.
//!
//! The driver only talks to the engine through its public functions; it
//! validates human input through [`Game::play`] and reprompts on rejection.

use crate::config::EngineConfig;
use crate::games::tictactoe::{
    Action, Board, Game, GameError, Mark, Outcome, initial_state, player, search, terminal,
};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Parses a human move: `row col` (zero-based) or a square number 1-9.
#[instrument]
pub fn parse_action(input: &str) -> Option<Action> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [single] => {
            let number: usize = single.parse().ok()?;
            number.checked_sub(1).and_then(Action::from_index)
        }
        [row, col] => Some(Action::new(row.parse().ok()?, col.parse().ok()?)),
        _ => None,
    }
}

/// Runs an interactive game, the human playing `config.human_mark()`.
///
/// Returns the outcome, or `None` if input ended before the game did.
#[instrument(skip_all, fields(human = %config.human_mark()))]
pub fn play<R: BufRead, W: Write>(
    config: &EngineConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Outcome>> {
    let human = *config.human_mark();
    let mut game = Game::new();
    writeln!(output, "You are {}. Enter a square 1-9 or \"row col\".", human)?;

    while game.outcome().is_none() {
        writeln!(output, "\n{}\n", game.board())?;

        if game.to_move() != human {
            let (mv, found) = game.engine_move()?;
            writeln!(output, "Engine plays {}", mv)?;
            if *config.show_stats() {
                writeln!(
                    output,
                    "  value {} after {} boards",
                    found.outcome.value, found.nodes
                )?;
            }
            continue;
        }

        write!(output, "{} to move> ", human)?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            info!("Input closed before the game ended");
            return Ok(None);
        }

        let Some(action) = parse_action(&line) else {
            writeln!(output, "Could not read \"{}\"", line.trim())?;
            continue;
        };
        match game.play(action) {
            Ok(mv) => debug!(%mv, "Human move accepted"),
            Err(GameError::InvalidAction(err)) => {
                warn!(error = %err.kind, "Human move rejected");
                writeln!(output, "Not allowed: {}", err.kind)?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(output, "\n{}\n", game.board())?;
    let outcome = game.outcome();
    if let Some(outcome) = outcome {
        writeln!(output, "{}", outcome)?;
    }
    Ok(outcome)
}

/// Engine analysis of a single board.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// The analysed board.
    pub board: Board,
    /// Mark to move.
    pub to_move: Mark,
    /// Whether the game is already over.
    pub terminal: bool,
    /// Value under optimal play (the utility itself on a terminal board).
    pub value: i32,
    /// Optimal action, if the game is not over.
    pub best: Option<Action>,
    /// Boards visited by the search.
    pub nodes: u64,
}

/// Searches `board` and collects what a driver would want to show.
///
/// A terminal board is still searched: the search visits only the root and
/// reports its utility.
#[instrument(skip(board))]
pub fn analyse(board: &Board) -> Analysis {
    let found = search(board);
    Analysis {
        board: *board,
        to_move: player(board),
        terminal: terminal(board),
        value: found.outcome.value,
        best: found.outcome.action,
        nodes: found.nodes,
    }
}

/// Parses `board`, searches it and writes the answer as text or JSON.
#[instrument(skip(output))]
pub fn solve<W: Write>(board: &str, json: bool, output: &mut W) -> Result<Analysis> {
    let board: Board = board.parse().context("Invalid board")?;
    let analysis = analyse(&board);

    if json {
        serde_json::to_writer_pretty(&mut *output, &analysis)?;
        writeln!(output)?;
        return Ok(analysis);
    }

    writeln!(output, "{}\n", analysis.board)?;
    match analysis.best {
        Some(best) => writeln!(
            output,
            "{} to move. Best: {} (value {}, {} boards searched)",
            analysis.to_move, best, analysis.value, analysis.nodes
        )?,
        None => writeln!(output, "Game over, utility {}", analysis.value)?,
    }
    Ok(analysis)
}

/// Plays the engine against itself from the initial board.
#[instrument(skip_all)]
pub fn selfplay<W: Write>(config: &EngineConfig, output: &mut W) -> Result<Outcome> {
    let mut game = Game::new();
    writeln!(output, "{}", initial_state())?;

    loop {
        if let Some(outcome) = game.outcome() {
            writeln!(output, "\n{}", outcome)?;
            return Ok(outcome);
        }
        let (mv, found) = game.engine_move()?;
        writeln!(output, "\n{}", mv)?;
        if *config.show_stats() {
            writeln!(
                output,
                "  value {} after {} boards",
                found.outcome.value, found.nodes
            )?;
        }
        writeln!(output, "{}", game.board())?;
        if game.history().len() > 9 {
            bail!("Self-play ran past nine moves");
        }
    }
}
