//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. The whole remaining game tree is
//! walked without pruning; at most nine plies deep, that stays small.

use super::engine::{actions, player, result};
use super::rules::{terminal, utility};
use super::{Action, Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Value of a position together with the action that achieves it.
///
/// `action` is `None` only for terminal boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Utility reached under optimal play by both sides.
    pub value: i32,
    /// First action found that reaches `value`.
    pub action: Option<Action>,
}

/// Result of a full search, with the number of boards it visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    /// Best value and action for the player to move.
    pub outcome: SearchOutcome,
    /// Boards evaluated, the root included.
    pub nodes: u64,
}

/// Returns the optimal action for the player to move, or `None` if the
/// game is already over.
///
/// When several actions are equally good the first one found is returned;
/// callers should rely only on its value being optimal.
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Option<Action> {
    if terminal(board) {
        debug!("Board is terminal, no action");
        return None;
    }
    search(board).outcome.action
}

/// Searches `board` for the player to move and reports the effort spent.
///
/// On a terminal board the outcome carries the board's utility and no action.
#[instrument(skip(board))]
pub fn search(board: &Board) -> Search {
    let mut nodes = 0;
    let outcome = match player(board) {
        Mark::X => max_value(board, &mut nodes),
        Mark::O => min_value(board, &mut nodes),
    };
    info!(
        value = outcome.value,
        action = ?outcome.action,
        nodes,
        "Search complete"
    );
    Search { outcome, nodes }
}

/// Every legal action paired with the board it produces.
///
/// `actions` only yields empty squares, so `result` accepts each of them.
fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    actions(board)
        .into_iter()
        .filter_map(move |action| match result(board, action) {
            Ok(next) => Some((action, next)),
            Err(err) => {
                debug_assert!(false, "enumerated action was rejected: {}", err);
                warn!(error = %err, "Skipping rejected action");
                None
            }
        })
}

fn max_value(board: &Board, nodes: &mut u64) -> SearchOutcome {
    *nodes += 1;
    if terminal(board) {
        return SearchOutcome {
            value: utility(board),
            action: None,
        };
    }

    let mut best = SearchOutcome {
        value: i32::MIN,
        action: None,
    };
    for (action, next) in successors(board) {
        let reply = min_value(&next, nodes);
        // Strictly better only: the first action to reach a value keeps it.
        if reply.value > best.value {
            best = SearchOutcome {
                value: reply.value,
                action: Some(action),
            };
        }
    }
    best
}

fn min_value(board: &Board, nodes: &mut u64) -> SearchOutcome {
    *nodes += 1;
    if terminal(board) {
        return SearchOutcome {
            value: utility(board),
            action: None,
        };
    }

    let mut best = SearchOutcome {
        value: i32::MAX,
        action: None,
    };
    for (action, next) in successors(board) {
        let reply = max_value(&next, nodes);
        if reply.value < best.value {
            best = SearchOutcome {
                value: reply.value,
                action: Some(action),
            };
        }
    }
    best
}
