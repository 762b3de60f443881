//! Core domain types for tic-tac-toe.

use super::action::Action;
use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player mark, used both as cell content and as turn indicator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl FromStr for Mark {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(ParseError::new(format!("Unknown mark '{}'", other))),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Nothing mutates a board after it has been
/// built; applying an action produces a new board (see [`Board::with`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square named by an action, or `None` if it is off the board.
    pub fn get(&self, action: Action) -> Option<Square> {
        action.index().map(|i| self.squares[i])
    }

    /// Checks if the square named by an action exists and is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a copy of this board with `mark` placed at `action`.
    ///
    /// Unchecked apart from bounds: callers validate legality first.
    /// Returns `None` when the action is off the board.
    pub(crate) fn with(&self, action: Action, mark: Mark) -> Option<Self> {
        let index = action.index()?;
        let mut squares = self.squares;
        squares[index] = Square::Occupied(mark);
        Some(Self { squares })
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Checks the turn-order invariant: X has as many marks as O, or one more.
    #[instrument(level = "trace", skip(self))]
    pub fn is_consistent(&self) -> bool {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        x_count == o_count || x_count == o_count + 1
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` are marks, `.`, `-` and `_` are empty squares. Whitespace,
    /// `|` and `/` are ignored so `"XX./O../..."` and `"X X . | O . ."` work.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut filled = 0;

        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' => Square::Empty,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                other => {
                    return Err(ParseError::new(format!(
                        "Unexpected character '{}' in board",
                        other
                    )));
                }
            };
            if filled == 9 {
                return Err(ParseError::new("Board has more than 9 squares"));
            }
            squares[filled] = square;
            filled += 1;
        }

        if filled != 9 {
            return Err(ParseError::new(format!(
                "Board needs 9 squares, found {}",
                filled
            )));
        }

        let board = Board::from_squares(squares);
        if !board.is_consistent() {
            return Err(ParseError::new(format!(
                "Mark counts X={} O={} are not reachable with X moving first",
                board.count(Mark::X),
                board.count(Mark::O)
            )));
        }
        Ok(board)
    }
}
