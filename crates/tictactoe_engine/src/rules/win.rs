//! Win detection for N-in-a-row boards.

use super::lines::{WinLine, candidate_lines};
use crate::error::RulesError;
use crate::types::{Board, Player, Square, cell_count};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A completed line and the player who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// The winning mark.
    pub mark: Player,
    /// The first winning line in enumeration order.
    pub line: WinLine,
}

/// Checks a flat board for `run_length` identical marks in a row.
///
/// Returns the first matching line from [`candidate_lines`], or `None`.
/// A run length longer than the board is legal and never wins.
///
/// # Errors
///
/// Fails when `size` or `run_length` is zero, when `size * size` overflows,
/// or when `board` does not hold exactly `size * size` cells.
#[instrument(skip(board), fields(len = board.len()))]
pub fn detect_win(
    board: &[Square],
    size: usize,
    run_length: usize,
) -> Result<Option<WinResult>, RulesError> {
    if size == 0 {
        return Err(RulesError::ZeroBoardSize);
    }
    if run_length == 0 {
        return Err(RulesError::ZeroRunLength);
    }
    let expected = cell_count(size)?;
    if board.len() != expected {
        return Err(RulesError::BoardLength {
            expected,
            actual: board.len(),
        });
    }

    for line in candidate_lines(size, run_length) {
        if let Some(mark) = line_owner(board, &line) {
            debug!(%mark, cells = ?line.cells(), "Winning line found");
            return Ok(Some(WinResult { mark, line }));
        }
    }

    Ok(None)
}

/// Checks if there is a winner on the board.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board, run_length: usize) -> Result<Option<WinResult>, RulesError> {
    detect_win(board.squares(), board.size(), run_length)
}

/// The player holding every cell of `line`, if one does.
fn line_owner(board: &[Square], line: &WinLine) -> Option<Player> {
    let (first, rest) = line.cells().split_first()?;
    let mark = board[*first].player()?;
    rest.iter()
        .all(|&i| board[i] == Square::Occupied(mark))
        .then_some(mark)
}
