//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, Game, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never hit an
/// occupied square and must reproduce the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let Ok(mut reconstructed) = Board::new(game.board().size()) else {
            return false;
        };

        for mov in game.history() {
            if !reconstructed.is_empty(mov.index) {
                return false;
            }
            if reconstructed
                .set(mov.index, Square::Occupied(mov.player))
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Move, Player};

    #[test]
    fn test_empty_game_holds() {
        let game = Game::new(GameConfig::default()).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let moves = [
            Move::new(Player::X, 0),
            Move::new(Player::O, 40),
            Move::new(Player::X, 8),
            Move::new(Player::O, 72),
        ];
        let game = Game::new(GameConfig::default())
            .unwrap()
            .replay(&moves)
            .unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.make_move(40).unwrap();
        game.board.set(40, Square::Occupied(Player::O)).unwrap();
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
