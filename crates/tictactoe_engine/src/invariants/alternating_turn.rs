//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: Players alternate turns, X first.
///
/// While the game is running the player to move must follow the history.
/// After the last move of a finished game the turn no longer advances.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.first().is_some_and(|m| m.player != Player::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        if game.status().is_terminal() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
