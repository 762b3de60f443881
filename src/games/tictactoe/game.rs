//! Game session: a board plus the moves that produced it.
//!
//! Drivers use this to keep history while the engine functions stay pure.
//! Every board a game holds was produced by [`result`], so boards handed
//! out earlier remain valid after later moves.

use super::engine::{initial_state, player, result};
use super::error::InvalidAction;
use super::rules::outcome;
use super::solver::{Search, search};
use super::status::Outcome;
use super::{Action, Board, Mark, Move};
use derive_more::{Display, Error, From};
use tracing::{info, instrument};

/// Errors from playing a move in a [`Game`].
#[derive(Debug, Clone, Display, Error, From)]
pub enum GameError {
    /// The game has already finished.
    #[display("Game is already over: {}", outcome)]
    GameOver {
        /// How the game ended.
        outcome: Outcome,
    },
    /// The action does not name an empty square.
    #[display("{}", _0)]
    #[from]
    InvalidAction(InvalidAction),
    /// The search returned no action for a board still in play.
    #[display("Engine found no legal move")]
    NoLegalMove,
}

/// A game in progress or finished, with its move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game on the initial board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: initial_state(),
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by playing `actions` in order from the initial board.
    ///
    /// # Errors
    ///
    /// Fails on the first action that is illegal or comes after the end.
    #[instrument]
    pub fn replay(actions: &[Action]) -> Result<Self, GameError> {
        let mut game = Self::new();
        for action in actions {
            game.play(*action)?;
        }
        Ok(game)
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the mark to move.
    pub fn to_move(&self) -> Mark {
        player(&self.board)
    }

    /// Returns the outcome, or `None` while the game is still being played.
    pub fn outcome(&self) -> Option<Outcome> {
        outcome(&self.board)
    }

    /// Plays `action` for the mark to move and returns the move made.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once the game has ended and
    /// [`GameError::InvalidAction`] for an illegal square.
    #[instrument(skip(self), fields(action = %action))]
    pub fn play(&mut self, action: Action) -> Result<Move, GameError> {
        if let Some(outcome) = self.outcome() {
            return Err(GameError::GameOver { outcome });
        }

        let mark = self.to_move();
        self.board = result(&self.board, action)?;
        let mv = Move::new(mark, action);
        self.history.push(mv);
        info!(%mv, "Move played");

        if let Some(outcome) = self.outcome() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        }
        Ok(mv)
    }

    /// Lets the engine choose and play a move.
    ///
    /// Returns the search that chose the move alongside the move itself.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] if there is nothing left to play.
    #[instrument(skip(self))]
    pub fn engine_move(&mut self) -> Result<(Move, Search), GameError> {
        if let Some(outcome) = self.outcome() {
            return Err(GameError::GameOver { outcome });
        }

        let found = search(&self.board);
        let action = found.outcome.action.ok_or(GameError::NoLegalMove)?;
        let mv = self.play(action)?;
        Ok((mv, found))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_x_to_move() {
        let game = Game::new();
        assert_eq!(game.to_move(), Mark::X);
        assert!(game.history().is_empty());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_play_records_history() {
        let mut game = Game::new();
        let first = game.play(Action::new(1, 1)).unwrap();
        let second = game.play(Action::new(0, 0)).unwrap();
        assert_eq!(first, Move::new(Mark::X, Action::new(1, 1)));
        assert_eq!(second, Move::new(Mark::O, Action::new(0, 0)));
        assert_eq!(game.history(), &[first, second]);
    }

    #[test]
    fn test_occupied_square_leaves_game_unchanged() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        let before = game.clone();
        let err = game.play(Action::new(1, 1)).unwrap_err();
        assert!(matches!(err, GameError::InvalidAction(_)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_no_moves_after_win() {
        // X takes the top row.
        let actions = [
            Action::new(0, 0),
            Action::new(1, 0),
            Action::new(0, 1),
            Action::new(1, 1),
            Action::new(0, 2),
        ];
        let mut game = Game::replay(&actions).unwrap();
        assert_eq!(game.outcome(), Some(Outcome::Winner(Mark::X)));
        let err = game.play(Action::new(2, 2)).unwrap_err();
        assert!(matches!(
            err,
            GameError::GameOver {
                outcome: Outcome::Winner(Mark::X)
            }
        ));
        assert!(matches!(game.engine_move(), Err(GameError::GameOver { .. })));
    }
}
