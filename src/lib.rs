//! Strictly Minimax library - tic-tac-toe with an exhaustive minimax engine
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe engine: board model, move enumeration,
//!   terminal evaluation and minimax search, all pure functions
//! - **Config**: TOML configuration for the terminal driver
//! - **Terminal**: a plain-text driver that plays, solves and self-plays
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, initial_state, minimax, result};
//!
//! let board = initial_state();
//! let board = result(&board, Action::new(1, 1)).unwrap();
//! assert!(minimax(&board).is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Terminal driver
pub use terminal::{Analysis, analyse, parse_action, play, selfplay, solve};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, Game, GameError, InvalidAction, InvalidActionKind, Mark, Move, Outcome,
    ParseError, Search, SearchOutcome, Square, actions, initial_state, minimax, outcome, player,
    result, search, terminal, utility, winner,
};

/// Rule helpers below the public API (line table, full-board check).
pub mod rules {
    pub use crate::games::tictactoe::rules::{is_full, win::LINES};
}
