//! Tests for the board model, move enumeration and terminal evaluation.

use strictly_minimax::rules::LINES;
use strictly_minimax::{
    Action, Board, InvalidActionKind, Mark, Square, actions, initial_state, player, result,
    terminal, utility, winner,
};
use strum::IntoEnumIterator;

/// Boards reached by playing `moves` from the empty board.
fn play_out(moves: &[(usize, usize)]) -> Board {
    moves.iter().fold(initial_state(), |board, &(row, col)| {
        result(&board, Action::new(row, col)).expect("legal move")
    })
}

#[test]
fn test_initial_state_is_empty() {
    let board = initial_state();
    assert!(board.squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(player(&board), Mark::X);
}

#[test]
fn test_player_flips_after_each_move() {
    let start = initial_state();
    for action in actions(&start) {
        let next = result(&start, action).unwrap();
        assert_eq!(next.get(action), Some(Square::Occupied(Mark::X)));
        assert_eq!(player(&next), Mark::O);

        for reply in actions(&next) {
            let after = result(&next, reply).unwrap();
            assert_eq!(after.get(reply), Some(Square::Occupied(Mark::O)));
            assert_eq!(player(&after), Mark::X);
        }
    }
}

#[test]
fn test_actions_plus_marks_is_nine() {
    let boards = [
        initial_state(),
        play_out(&[(1, 1)]),
        play_out(&[(1, 1), (0, 0), (2, 2)]),
        play_out(&[(0, 0), (1, 1), (0, 1), (0, 2), (2, 0), (1, 0), (1, 2), (2, 1), (2, 2)]),
    ];
    for board in boards {
        assert_eq!(actions(&board).len() + board.occupied(), 9, "{}", board);
    }
}

#[test]
fn test_result_does_not_mutate_input() {
    let original = play_out(&[(1, 1), (0, 0)]);
    let snapshot = original;

    let left = result(&original, Action::new(2, 0)).unwrap();
    let right = result(&original, Action::new(0, 2)).unwrap();

    assert_eq!(original, snapshot);
    for board in [left, right] {
        let changed = Action::ALL
            .iter()
            .filter(|a| board.get(**a) != original.get(**a))
            .count();
        assert_eq!(changed, 1);
    }
    assert_ne!(left, right);
}

#[test]
fn test_result_rejects_every_occupied_square() {
    let board = play_out(&[(1, 1), (0, 0), (2, 2), (0, 2)]);
    for action in Action::ALL {
        if board.is_empty(action) {
            continue;
        }
        let err = result(&board, action).unwrap_err();
        assert_eq!(err.kind, InvalidActionKind::Occupied(action));
    }
}

#[test]
fn test_result_rejects_out_of_range() {
    for action in [Action::new(3, 0), Action::new(0, 3), Action::new(7, 7)] {
        let err = result(&initial_state(), action).unwrap_err();
        assert!(matches!(err.kind, InvalidActionKind::OutOfBounds { .. }));
    }
}

#[test]
fn test_winner_on_each_line() {
    for line in LINES {
        for mark in Mark::iter() {
            let mut squares = [Square::Empty; 9];
            for action in line {
                squares[action.index().unwrap()] = Square::Occupied(mark);
            }
            let board = Board::from_squares(squares);
            assert_eq!(winner(&board), Some(mark), "{:?}", line);
            assert!(terminal(&board));
        }
    }
}

#[test]
fn test_no_winner_without_three_in_a_row() {
    assert_eq!(winner(&initial_state()), None);

    let board: Board = "XOX/XOO/OX.".parse().unwrap();
    assert_eq!(winner(&board), None);
    assert!(!terminal(&board));
}

#[test]
fn test_terminal_and_utility() {
    let in_play = play_out(&[(1, 1), (0, 0)]);
    assert!(!terminal(&in_play));

    let x_wins: Board = "XXX/OO./...".parse().unwrap();
    let o_wins: Board = "XX./OOO/X..".parse().unwrap();
    let draw: Board = "XOX/XOO/OXX".parse().unwrap();

    for (board, expected) in [(x_wins, 1), (o_wins, -1), (draw, 0)] {
        assert!(terminal(&board));
        assert_eq!(utility(&board), expected);
        let from_winner = match winner(&board) {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        };
        assert_eq!(utility(&board), from_winner);
    }
}
