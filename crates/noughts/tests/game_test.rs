//! Tests for the game controller.

use noughts::{
    BandResolver, Board, Game, GameMode, GameSettings, GameState, Mark, Move, MoveError,
    MoveResult, Outcome, Position,
};

/// Plays every possible human line against the AI and returns the outcomes seen.
fn explore_all_replies(game: &Game, outcomes: &mut Vec<Outcome>) {
    if let Some(outcome) = game.outcome() {
        outcomes.push(outcome);
        return;
    }
    for pos in Position::ALL {
        if !game.board().is_empty(pos) {
            continue;
        }
        let mut next = game.clone();
        let result = next.play(pos.row(), pos.col());
        assert!(result.is_accepted(), "{pos} should be playable:\n{}", game.board());
        explore_all_replies(&next, outcomes);
    }
}

#[test]
fn test_ai_moving_first_never_loses() {
    let mut game = Game::new(GameSettings::new(GameMode::SinglePlayer, Mark::X));
    game.play_ai_turn().expect("AI opens");

    let mut outcomes = Vec::new();
    explore_all_replies(&game, &mut outcomes);

    assert!(!outcomes.is_empty());
    assert!(outcomes.iter().all(|o| matches!(o, Outcome::XWins | Outcome::Draw)));
    assert!(outcomes.contains(&Outcome::XWins), "AI should punish weak play");
}

#[test]
fn test_ai_moving_second_never_loses() {
    let game = Game::new(GameSettings::new(GameMode::SinglePlayer, Mark::O));

    let mut outcomes = Vec::new();
    explore_all_replies(&game, &mut outcomes);

    assert!(outcomes.iter().all(|o| matches!(o, Outcome::OWins | Outcome::Draw)));
}

#[test]
fn test_full_board_draw_ends_game() {
    let mut game = Game::with_mode(GameMode::TwoPlayer);
    let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
    for (index, (row, col)) in moves.into_iter().enumerate() {
        assert_eq!(game.state(), GameState::InProgress, "over too early at move {index}");
        assert!(game.play(row, col).is_accepted());
    }
    assert_eq!(game.board().to_string(), "X O X\nX O O\nO X X");
    assert_eq!(game.state(), GameState::Over);
    assert_eq!(game.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_state_never_reverts_after_over() {
    let mut game = Game::with_mode(GameMode::TwoPlayer);
    for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
        game.play(row, col);
    }
    assert_eq!(game.outcome(), Some(Outcome::XWins));
    for (row, col) in [(0, 1), (0, 2), (9, 9)] {
        assert!(!game.play(row, col).is_accepted());
        assert_eq!(game.state(), GameState::Over);
    }
}

#[test]
fn test_new_game_always_resets() {
    let histories: [&[(usize, usize)]; 3] = [
        &[],
        &[(1, 1), (0, 0), (2, 2)],
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
    ];
    for history in histories {
        for mode in [GameMode::SinglePlayer, GameMode::TwoPlayer] {
            let mut game = Game::with_mode(GameMode::TwoPlayer);
            for &(row, col) in history {
                game.play(row, col);
            }
            game.new_game(mode);
            assert_eq!(*game.board(), Board::new());
            assert_eq!(game.board().move_count(), 0);
            assert_eq!(game.state(), GameState::InProgress);
            assert_eq!(game.turn(), Mark::X);
            assert_eq!(game.mode(), mode);
        }
    }
}

#[test]
fn test_clicks_resolve_through_the_window_mapping() {
    let mut game = Game::with_mode(GameMode::TwoPlayer);
    let window = BandResolver::default();
    let click = |x: f64, y: f64| (x, y);

    assert_eq!(
        game.attempt_move(click(850.0, 50.0), &window),
        MoveResult::Accepted {
            placed: Move::new(Mark::X, Position::TopRight),
            reply: None,
        }
    );
    assert_eq!(game.attempt_move(click(-5.0, 50.0), &window), MoveResult::OffBoard);
    assert_eq!(
        game.attempt_move(click(899.0, 0.0), &window),
        MoveResult::Rejected(MoveError::Occupied(Position::TopRight))
    );
    assert_eq!(game.board().move_count(), 1);
    assert_eq!(game.turn(), Mark::O);
}

#[test]
fn test_sloppy_resolver_is_out_of_range() {
    let mut game = Game::with_mode(GameMode::TwoPlayer);
    let sloppy = |n: usize| Some((n, n));
    let result = game.attempt_move(4usize, &sloppy);
    assert_eq!(result, MoveResult::Rejected(MoveError::OutOfRange { row: 4, col: 4 }));
    assert!(matches!(result, MoveResult::Rejected(err) if err.is_out_of_range()));
    assert_eq!(game.board().move_count(), 0);
}

#[test]
fn test_single_player_reply_in_same_call() {
    let mut game = Game::new(GameSettings::new(GameMode::SinglePlayer, Mark::O));
    let result = game.play(1, 1);
    let MoveResult::Accepted { placed, reply: Some(reply) } = result else {
        panic!("expected an accepted move with a reply, got {result:?}");
    };
    assert_eq!(placed, Move::new(Mark::X, Position::Center));
    // Against the center every corner draws; the first corner is chosen.
    assert_eq!(reply, Move::new(Mark::O, Position::TopLeft));
    assert_eq!(game.turn(), Mark::X);
    assert_eq!(game.history(), &[placed, reply]);
}
