//! Tests for the game state machine and session scoring on the product board.

use tictactoe_engine::{
    GameConfig, GameStatus, MatchResult, Move, MoveError, Outcome, Player, Session,
};

/// X plays down column 0 while O plays column 8; X completes five first.
const X_WINS_COLUMN: [usize; 9] = [0, 8, 9, 17, 18, 26, 27, 35, 36];

#[test]
fn test_game_lifecycle_to_win() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    assert_eq!(session.game().status_message(), "Next player: X");

    for &index in &X_WINS_COLUMN[..8] {
        let status = session.place(index).unwrap();
        assert_eq!(status, GameStatus::InProgress);
    }

    let status = session.place(X_WINS_COLUMN[8]).unwrap();
    match status {
        GameStatus::Won(win) => {
            assert_eq!(win.mark, Player::X);
            assert_eq!(win.line.cells(), &[0, 9, 18, 27, 36]);
        }
        other => panic!("Expected a win, got {:?}", other),
    }
    assert_eq!(session.game().status_message(), "Winner: X");
    assert_eq!(session.place(40), Err(MoveError::GameOver));
}

#[test]
fn test_scores_accumulate_across_games() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    for &index in &X_WINS_COLUMN {
        session.place(index).unwrap();
    }
    session.new_game();

    // O wins the second game along row 8
    for index in [0, 72, 1, 73, 2, 74, 3, 75, 10, 76] {
        session.place(index).unwrap();
    }

    assert_eq!(session.scores().wins(Player::X), 1);
    assert_eq!(session.scores().wins(Player::O), 1);
    let results: Vec<_> = session
        .matches()
        .iter()
        .map(|m| m.result_for(Player::X))
        .collect();
    assert_eq!(results, vec![MatchResult::Win, MatchResult::Loss]);
    assert_eq!(*session.matches()[1].outcome(), Outcome::Winner(Player::O));
}

#[test]
fn test_replay_rejects_out_of_turn_history() {
    let game = tictactoe_engine::Game::new(GameConfig::default()).unwrap();
    let moves = [Move::new(Player::X, 0), Move::new(Player::X, 1)];
    assert_eq!(
        game.replay(&moves).unwrap_err(),
        MoveError::WrongPlayer(Player::X)
    );
}

#[test]
fn test_status_serializes_to_json() {
    let mut session = Session::new(GameConfig::new(3, 3).unwrap()).unwrap();
    for index in [0, 3, 1, 4, 2] {
        session.place(index).unwrap();
    }
    let json = serde_json::to_value(session.game().status()).unwrap();
    assert_eq!(json["Won"]["mark"], "X");
    assert_eq!(json["Won"]["line"]["cells"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["Won"]["line"]["direction"], "Horizontal");
}
