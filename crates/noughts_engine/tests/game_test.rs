//! Scenario tests for the game engine.

use noughts_engine::{Game, MoveResult, Player, RejectReason, RoundStatus, Square};

fn play(game: &mut Game, indices: &[usize]) -> MoveResult {
    let mut last = MoveResult::Continue(Player::X);
    for &index in indices {
        last = game.apply_move(index);
    }
    last
}

#[test]
fn test_new_game_initial_state() {
    let game = Game::new();
    let state = game.state();

    assert!(state.active());
    assert_eq!(state.current_player(), Player::X);
    assert!(state.board().squares().iter().all(|&s| s == Square::Empty));
    assert_eq!(state.scores().wins(Player::X), 0);
    assert_eq!(state.scores().wins(Player::O), 0);
}

#[test]
fn test_out_of_range_index_rejected_without_state_change() {
    let mut game = Game::new();
    let before = game.state().clone();

    for index in [9, 10, usize::MAX] {
        assert_eq!(
            game.apply_move(index),
            MoveResult::Rejected(RejectReason::OutOfBounds(index))
        );
    }

    assert_eq!(game.state(), &before);
}

#[test]
fn test_occupied_square_rejected_without_state_change() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(0), MoveResult::Continue(Player::O));

    let before = game.state().clone();
    let result = game.apply_move(0);

    assert!(matches!(
        result,
        MoveResult::Rejected(RejectReason::Occupied(_))
    ));
    assert_eq!(game.state(), &before);
    assert_eq!(game.state().current_player(), Player::O);
}

#[test]
fn test_move_after_round_end_rejected() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert!(!game.state().active());

    let before = game.state().clone();
    assert_eq!(
        game.apply_move(5),
        MoveResult::Rejected(RejectReason::RoundOver)
    );
    assert_eq!(game.state(), &before);
}

#[test]
fn test_turn_alternation() {
    let mut game = Game::new();

    assert_eq!(game.state().current_player(), Player::X);
    assert_eq!(game.apply_move(4), MoveResult::Continue(Player::O));
    assert_eq!(game.apply_move(0), MoveResult::Continue(Player::X));
    assert_eq!(game.apply_move(8), MoveResult::Continue(Player::O));
    assert_eq!(game.apply_move(1), MoveResult::Continue(Player::X));
}

#[test]
fn test_x_wins_top_row() {
    // X at 0, 1, 2; O at 3, 4.
    let mut game = Game::new();
    let result = play(&mut game, &[0, 3, 1, 4, 2]);

    let MoveResult::Won(win) = result else {
        panic!("expected a win, got {result:?}");
    };
    assert_eq!(win.player(), Player::X);
    assert_eq!(win.indices(), [0, 1, 2]);

    let state = game.state();
    assert!(!state.active());
    assert_eq!(state.scores().wins(Player::X), 1);
    assert_eq!(state.scores().wins(Player::O), 0);
}

#[test]
fn test_won_status_carries_the_line() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    // A frontend re-querying state can still find the highlight line.
    let RoundStatus::Won(win) = game.state().status() else {
        panic!("expected won status");
    };
    assert_eq!(win.indices(), [0, 1, 2]);
}

#[test]
fn test_o_can_win_a_round() {
    // X at 0, 1, 8; O at 3, 4, 5.
    let mut game = Game::new();
    let result = play(&mut game, &[0, 3, 1, 4, 8, 5]);

    let MoveResult::Won(win) = result else {
        panic!("expected a win, got {result:?}");
    };
    assert_eq!(win.player(), Player::O);
    assert_eq!(win.indices(), [3, 4, 5]);
    assert_eq!(game.state().scores().wins(Player::O), 1);
}

#[test]
fn test_interleaved_draw_scenario() {
    // X = [0, 1, 5, 6, 8], O = [2, 3, 4, 7], no line completed.
    let mut game = Game::new();
    let result = play(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(result, MoveResult::Draw);
    assert!(!game.state().active());
    assert_eq!(game.state().status(), RoundStatus::Draw);
    assert_eq!(game.state().scores().wins(Player::X), 0);
    assert_eq!(game.state().scores().wins(Player::O), 0);
}

#[test]
fn test_double_press_is_harmless() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(0), MoveResult::Continue(Player::O));
    assert!(matches!(game.apply_move(0), MoveResult::Rejected(_)));

    assert_eq!(
        game.state().board().get(noughts_engine::Position::TopLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(game.state().current_player(), Player::O);
}

#[test]
fn test_double_line_reports_first_in_check_order() {
    // X holds 1, 2, 4, 8; the final move at 0 completes both the top
    // row and the main diagonal. Rows are checked first.
    let mut game = Game::new();
    let result = play(&mut game, &[1, 3, 2, 5, 4, 6, 8, 7, 0]);

    let MoveResult::Won(win) = result else {
        panic!("expected a win, got {result:?}");
    };
    assert_eq!(win.player(), Player::X);
    assert_eq!(win.indices(), [0, 1, 2]);
    // One round, one tally - even with two completed lines.
    assert_eq!(game.state().scores().wins(Player::X), 1);
}

#[test]
fn test_reset_board_yields_fresh_round() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    let state = game.reset_board();
    assert!(state.active());
    assert_eq!(state.current_player(), Player::X);
    assert!(state.board().squares().iter().all(|&s| s == Square::Empty));
    assert!(state.history().is_empty());
}

#[test]
fn test_reset_mid_round() {
    let mut game = Game::new();
    play(&mut game, &[4, 0]);

    let state = game.reset_board();
    assert!(state.board().squares().iter().all(|&s| s == Square::Empty));
    assert_eq!(state.current_player(), Player::X);
}

#[test]
fn test_state_snapshot_serializes() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    let json = serde_json::to_string(game.state()).expect("state serializes");
    let restored: noughts_engine::GameState =
        serde_json::from_str(&json).expect("state deserializes");
    assert_eq!(&restored, game.state());
}
