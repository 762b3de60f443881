//! First-class action types for tic-tac-toe.
//!
//! An action names a square; it only means something relative to a board.
//! Whether it is legal is decided by [`result`](super::result).

use super::Mark;
use serde::{Deserialize, Serialize};

/// A zero-based `(row, col)` coordinate naming a square to fill.
///
/// Construction is unchecked so that a driver can hand over whatever a
/// human typed; out-of-range coordinates are rejected when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Action {
    /// All nine squares in row-major order.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    /// Creates an action for `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates an action from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }

    /// Converts to a row-major board index, or `None` when off the board.
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then(|| self.row * 3 + self.col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A played move: which mark went where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// The square it was placed on.
    pub action: Action,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, action: Action) -> Self {
        Self { mark, action }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.action)
    }
}
