//! Tic-tac-toe game engine.
//!
//! Board model, move enumeration, terminal evaluation and minimax search
//! as pure functions over [`Board`] values, plus a [`Game`] session for
//! drivers that want history.

mod action;
mod engine;
mod error;
mod game;
pub mod rules;
mod solver;
mod status;
mod types;

pub use action::{Action, Move};
pub use engine::{actions, initial_state, player, result};
pub use error::{InvalidAction, InvalidActionKind, ParseError};
pub use game::{Game, GameError};
pub use rules::{outcome, terminal, utility, winner};
pub use solver::{Search, SearchOutcome, minimax, search};
pub use status::Outcome;
pub use types::{Board, Mark, Square};
