//! End-to-end tests for the minimax search.

use strictly_minimax::{
    Action, Board, Mark, actions, initial_state, minimax, player, result, search, terminal,
    utility, winner,
};

#[test]
fn test_optimal_play_from_empty_board_draws() {
    let mut board = initial_state();
    let mut plies = 0;

    while !terminal(&board) {
        let action = minimax(&board).expect("non-terminal board has a move");
        assert!(actions(&board).contains(&action));
        board = result(&board, action).unwrap();
        plies += 1;
    }

    assert_eq!(plies, 9);
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
    assert_eq!(minimax(&board), None);
}

#[test]
fn test_empty_board_value_and_tree_size() {
    let found = search(&initial_state());
    assert_eq!(found.outcome.value, 0);
    assert!(found.outcome.action.is_some());
    // Every board in the full game tree, root included.
    assert_eq!(found.nodes, 549_946);
}

#[test]
fn test_x_takes_immediate_win() {
    // X X . / O O . / . . . with X to move: only (0, 2) wins.
    let board: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(player(&board), Mark::X);
    assert_eq!(minimax(&board), Some(Action::new(0, 2)));
    assert_eq!(search(&board).outcome.value, 1);
}

#[test]
fn test_two_x_one_o_blocks_row() {
    // X on (0, 0) and (0, 1), O on (1, 0). Counts put O on move, and the
    // engine closes the top row.
    let board: Board = "XX./O../...".parse().unwrap();
    assert_eq!(player(&board), Mark::O);
    assert_eq!(minimax(&board), Some(Action::new(0, 2)));
}

#[test]
fn test_x_blocks_o_threat() {
    // X . . / . O O / . X . with X to move: O threatens (1, 0).
    let board: Board = "X../.OO/.X.".parse().unwrap();
    assert_eq!(player(&board), Mark::X);
    assert_eq!(minimax(&board), Some(Action::new(1, 0)));
    assert_eq!(search(&board).outcome.value, 0);
}

#[test]
fn test_x_blocks_o_column_threat() {
    // X . O / . X . / . . O with X to move: O threatens (1, 2).
    let board: Board = "X.O/.X./..O".parse().unwrap();
    assert_eq!(minimax(&board), Some(Action::new(1, 2)));
}

#[test]
fn test_chosen_action_is_optimal_for_o() {
    // Whatever action is picked, its value must match the best reply value.
    let board = result(&initial_state(), Action::new(1, 1)).unwrap();
    let found = search(&board);
    let chosen = found.outcome.action.unwrap();
    let after = result(&board, chosen).unwrap();
    assert_eq!(search(&after).outcome.value, found.outcome.value);
    assert_eq!(found.outcome.value, 0);
}

#[test]
fn test_search_leaves_board_untouched() {
    let board: Board = "X../.O./...".parse().unwrap();
    let copy = board;
    let _ = minimax(&board);
    assert_eq!(board, copy);
}
