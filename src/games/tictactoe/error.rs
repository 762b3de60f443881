//! Error types for the tic-tac-toe engine.

use super::Action;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidActionKind {
    /// The coordinates are not on the 3x3 board.
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The square is already taken.
    #[display("square {} is already occupied", _0)]
    Occupied(Action),
}

/// An action that does not name an empty square on the board it was applied to.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid action: {} at {}:{}", kind, file, line)]
pub struct InvalidAction {
    /// What was wrong with the action.
    pub kind: InvalidActionKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidAction {
    /// Creates a new invalid action error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: InvalidActionKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Classifies `action` as off the board or occupied.
    #[track_caller]
    pub fn for_action(action: Action) -> Self {
        if action.index().is_none() {
            Self::new(InvalidActionKind::OutOfBounds {
                row: action.row,
                col: action.col,
            })
        } else {
            Self::new(InvalidActionKind::Occupied(action))
        }
    }
}

/// Board or mark text that could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Parse error: {} at {}:{}", message, file, line)]
pub struct ParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
