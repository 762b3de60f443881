//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board: who won, whether play is over,
//! and what the finished position is worth.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winner;

use super::status::Outcome;
use super::{Board, Mark};
use tracing::instrument;

/// Returns true when the game is over: someone has won or no square is empty.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished board from X's point of view.
///
/// 1 if X has won, -1 if O has won, 0 otherwise. Only meaningful on a
/// terminal board; debug builds assert that precondition.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i32 {
    debug_assert!(terminal(board), "utility called on a board still in play");
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}

/// Returns the outcome of a finished game, or `None` while play continues.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(mark) => Some(Outcome::Winner(mark)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}
