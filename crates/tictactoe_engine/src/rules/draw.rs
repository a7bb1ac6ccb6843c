//! Draw detection.

use super::win::check_winner;
use crate::error::RulesError;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winning line.
///
/// Win detection runs first, so a full board that also holds a line is
/// a win rather than a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board, run_length: usize) -> Result<bool, RulesError> {
    Ok(check_winner(board, run_length)?.is_none() && is_full(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(9).unwrap();
        assert!(!is_full(&board));
        assert_eq!(is_draw(&board, 5), Ok(false));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(9).unwrap();
        board.set(40, Square::Occupied(Player::X)).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_classic_draw() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(is_draw(&board, 3), Ok(true));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full, with X across the top row
        let board: Board = "XXX OOX XOO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(is_draw(&board, 3), Ok(false));
    }

    #[test]
    fn test_draw_propagates_bad_run_length() {
        let board = Board::new(3).unwrap();
        assert_eq!(is_draw(&board, 0), Err(RulesError::ZeroRunLength));
    }
}
