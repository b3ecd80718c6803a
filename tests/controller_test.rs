//! End-to-end games driven through the controller.

use tic_tac_toe::{
    check_winner, Board, Conclusion, GameController, GameState, Mark, MoveError, Status, TileId,
};

fn click_all(controller: &mut GameController, tiles: &[TileId]) {
    for &tile in tiles {
        controller.on_cell_clicked(tile).unwrap();
    }
}

fn assert_single_step_history(state: &GameState) {
    for pair in state.history().windows(2) {
        assert_eq!(pair[0].diff(&pair[1]).count(), 1);
    }
}

#[test]
fn empty_board_waits_for_x() {
    let controller = GameController::new();
    let view = controller.view();

    assert_eq!(check_winner(&view.board), None);
    assert_eq!(view.status.to_string(), "Next player: X");
    assert_eq!(view.conclusion, None);
}

#[test]
fn top_row_wins_and_locks_the_board() {
    let mut controller = GameController::new();
    click_all(
        &mut controller,
        &[TileId::A1, TileId::A2, TileId::B1, TileId::B2, TileId::C1],
    );

    let expected = Board::from([
        Some(Mark::X),
        Some(Mark::X),
        Some(Mark::X),
        Some(Mark::O),
        Some(Mark::O),
        None,
        None,
        None,
        None,
    ]);
    assert_eq!(controller.state().current_board(), &expected);
    assert_eq!(controller.view().status.to_string(), "Winner: X");

    for tile in [TileId::C2, TileId::A3, TileId::B3, TileId::C3] {
        assert_eq!(
            controller.on_cell_clicked(tile),
            Err(MoveError::GameOver(Mark::X))
        );
    }
    assert_eq!(controller.state().current_board(), &expected);
    assert_eq!(controller.state().history().len(), 6);
}

#[test]
fn branching_from_the_start_discards_the_old_line() {
    let mut controller = GameController::new();
    click_all(&mut controller, &[TileId::A1, TileId::B1]);
    let original = controller.state().history().to_vec();

    controller.on_history_entry_clicked(0).unwrap();
    assert_eq!(controller.state().current_move(), 0);
    assert_eq!(controller.state().current_board(), &Board::empty());
    assert_eq!(controller.state().history(), original.as_slice());

    controller.on_cell_clicked(TileId::C3).unwrap();
    let history = controller.state().history();
    assert_eq!(history.len(), 2);
    assert_eq!(controller.state().current_move(), 1);
    assert_eq!(history[0], Board::empty());
    assert_eq!(history[1], Board::empty().with_mark(TileId::C3, Mark::X));
    assert!(!history.contains(&original[1]));
}

#[test]
fn full_board_without_winner_still_names_next_player() {
    // X O X
    // X O O
    // O X X
    let mut controller = GameController::new();
    click_all(
        &mut controller,
        &[
            TileId::A1,
            TileId::B1,
            TileId::C1,
            TileId::B2,
            TileId::A2,
            TileId::C2,
            TileId::B3,
            TileId::A3,
            TileId::C3,
        ],
    );

    let view = controller.view();
    assert!(view.board.is_full());
    assert_eq!(check_winner(&view.board), None);
    assert_eq!(view.status, Status::NextPlayer(Mark::O));
    assert_eq!(view.status.to_string(), "Next player: O");
    assert_eq!(view.conclusion, Some(Conclusion::Draw));
}

#[test]
fn jump_is_idempotent() {
    let mut controller = GameController::new();
    click_all(&mut controller, &[TileId::B2, TileId::A1, TileId::C3]);

    controller.on_history_entry_clicked(1).unwrap();
    let first = controller.view();
    controller.on_history_entry_clicked(1).unwrap();
    let second = controller.view();

    assert_eq!(first, second);
    assert_eq!(first.status, Status::NextPlayer(Mark::O));
}

#[test]
fn history_grows_one_tile_at_a_time_across_branches() {
    let mut controller = GameController::new();
    click_all(&mut controller, &[TileId::B2, TileId::A1, TileId::C3]);
    controller.on_history_entry_clicked(1).unwrap();
    click_all(&mut controller, &[TileId::C1, TileId::A3]);
    controller.on_history_entry_clicked(2).unwrap();
    click_all(&mut controller, &[TileId::B1]);

    let state = controller.state();
    assert_eq!(state.history().len(), 4);
    assert_single_step_history(state);
    for (k, board) in state.history().iter().enumerate() {
        assert_eq!(board.mark_count(), k);
    }
}

#[test]
fn winner_can_still_browse_history() {
    let mut controller = GameController::new();
    click_all(
        &mut controller,
        &[TileId::A1, TileId::A2, TileId::B1, TileId::B2, TileId::C1],
    );

    controller.on_history_entry_clicked(4).unwrap();
    assert_eq!(controller.view().status, Status::NextPlayer(Mark::X));

    // a different fifth move replaces the winning one
    controller.on_cell_clicked(TileId::C3).unwrap();
    assert_eq!(controller.state().history().len(), 6);
    assert_eq!(controller.view().status, Status::NextPlayer(Mark::O));
}

#[test]
fn state_survives_ron_round_trip() {
    let mut controller = GameController::new();
    click_all(&mut controller, &[TileId::B2, TileId::A1]);
    controller.on_history_entry_clicked(1).unwrap();

    let text = ron::to_string(controller.state()).unwrap();
    let restored: GameState = ron::from_str(&text).unwrap();
    assert_eq!(&restored, controller.state());
}

#[test]
fn malformed_state_is_rejected() {
    assert!(ron::from_str::<GameState>("(history: [], current_move: 3)").is_err());

    let mut controller = GameController::new();
    click_all(&mut controller, &[TileId::B2]);
    let history = ron::to_string(controller.state().history()).unwrap();
    let past_end = format!("(history: {history}, current_move: 5)");
    assert!(ron::from_str::<GameState>(&past_end).is_err());
}
