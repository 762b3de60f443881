//! Board model, move enumeration and transitions.
//!
//! These are the operations a driver calls to validate and apply moves.
//! Every function is pure: boards go in by reference, new boards come out.

use super::error::InvalidAction;
use super::{Action, Board, Mark, Square};
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

/// Returns the starting board: nine empty squares.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the mark that moves next on `board`.
///
/// X moves first, so equal counts mean X is to move; anything else means O.
/// Boards that break the count invariant are a precondition violation,
/// asserted in debug builds only.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Mark {
    debug_assert!(
        board.is_consistent(),
        "board violates the X/O count invariant"
    );
    if board.count(Mark::X) == board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Returns every empty square on `board`.
///
/// Iterates in row-major order; callers should treat it as an unordered set.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|action| board.get(*action) == Some(Square::Empty))
        .collect()
}

/// Returns the board that results from the player to move taking `action`.
///
/// The mover is decided on the input board. The input is left untouched.
///
/// # Errors
///
/// Returns [`InvalidAction`] if `action` is off the board or names an
/// occupied square.
#[instrument(level = "trace", skip(board), fields(action = %action))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    if !board.is_empty(action) {
        let err = InvalidAction::for_action(action);
        warn!(error = %err.kind, "Rejected action");
        return Err(err);
    }

    let mark = player(board);
    let next = board
        .with(action, mark)
        .ok_or_else(|| InvalidAction::for_action(action))?;
    debug!(%mark, "Applied action");
    Ok(next)
}
