//! Core domain types for N-in-a-row tic-tac-toe.

use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Uppercase board symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Parses a single board character.
    ///
    /// `X`/`x` and `O`/`o` are marks, `.`, `-` and `_` are empty.
    pub fn from_symbol(symbol: char) -> Result<Self, RulesError> {
        match symbol {
            'X' | 'x' => Ok(Square::Occupied(Player::X)),
            'O' | 'o' => Ok(Square::Occupied(Player::O)),
            '.' | '-' | '_' => Ok(Square::Empty),
            other => Err(RulesError::InvalidCell(other)),
        }
    }
}

/// Number of cells on a `size * size` board.
pub(crate) fn cell_count(size: usize) -> Result<usize, RulesError> {
    if size == 0 {
        return Err(RulesError::ZeroBoardSize);
    }
    size.checked_mul(size).ok_or(RulesError::BoardTooLarge(size))
}

/// Square board of `size * size` cells in row-major order.
///
/// Cell `(row, col)` lives at index `row * size + col`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, RulesError> {
        let count = cell_count(size)?;
        let mut squares = Vec::new();
        squares
            .try_reserve_exact(count)
            .map_err(|_| RulesError::BoardTooLarge(size))?;
        squares.resize(count, Square::Empty);
        Ok(Self { size, squares })
    }

    /// Wraps an existing cell sequence, checking it holds exactly `size * size` cells.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(size: usize, squares: Vec<Square>) -> Result<Self, RulesError> {
        let expected = cell_count(size)?;
        if squares.len() != expected {
            return Err(RulesError::BoardLength {
                expected,
                actual: squares.len(),
            });
        }
        Ok(Self { size, squares })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// True when no square is occupied.
    pub fn is_empty_board(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at `(row, col)`.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Square> {
        self.index_of(row, col).and_then(|index| self.get(index))
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), RulesError> {
        let len = self.squares.len();
        let cell = self
            .squares
            .get_mut(index)
            .ok_or(RulesError::OutOfBounds { index, len })?;
        *cell = square;
        Ok(())
    }

    /// Empties every square.
    pub fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Checks if a square is empty. Out-of-range indices are not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Row-major index of `(row, col)`, or `None` off the board.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// `(row, col)` of a row-major index, or `None` off the board.
    pub fn coords(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.squares.len()).then(|| (index / self.size, index % self.size))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Indices of all empty squares in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Formats the board with row and column headers.
    ///
    /// Cells listed in `highlight` are drawn with lowercase marks.
    pub fn render(&self, highlight: &[usize]) -> String {
        let width = (self.size.saturating_sub(1)).to_string().len();
        let mut out = format!("{:width$} ", "");
        for col in 0..self.size {
            out.push_str(&format!(" {:>width$}", col));
        }
        out.push('\n');
        for row in 0..self.size {
            out.push_str(&format!("{:>width$} ", row));
            for col in 0..self.size {
                let index = row * self.size + col;
                let symbol = match self.squares[index] {
                    Square::Empty => '.',
                    Square::Occupied(player) if highlight.contains(&index) => {
                        player.symbol().to_ascii_lowercase()
                    }
                    Square::Occupied(player) => player.symbol(),
                };
                out.push_str(&format!(" {:>width$}", symbol));
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

impl FromStr for Board {
    type Err = RulesError;

    /// Parses a board from its cell symbols, ignoring whitespace.
    ///
    /// The number of cells must be a positive perfect square.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let squares = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Square::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;

        let count = squares.len();
        let size = (0..=count).find(|n| n * n >= count).unwrap_or(0);
        if count == 0 || size * size != count {
            return Err(RulesError::NotSquare(count));
        }
        Board::from_squares(size, squares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9).unwrap();
        assert_eq!(board.len(), 81);
        assert!(board.is_empty_board());
        assert_eq!(board.empty_indices().len(), 81);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(RulesError::ZeroBoardSize));
    }

    #[test]
    fn test_oversized_board_rejected() {
        let size = usize::MAX / 2;
        assert_eq!(Board::new(size), Err(RulesError::BoardTooLarge(size)));
        assert_eq!(
            Board::from_squares(size, Vec::new()),
            Err(RulesError::BoardTooLarge(size))
        );
    }

    #[test]
    fn test_from_squares_checks_length() {
        let result = Board::from_squares(3, vec![Square::Empty; 8]);
        assert_eq!(
            result,
            Err(RulesError::BoardLength {
                expected: 9,
                actual: 8
            })
        );
    }

    #[test]
    fn test_index_and_coords() {
        let board = Board::new(9).unwrap();
        assert_eq!(board.index_of(4, 4), Some(40));
        assert_eq!(board.index_of(9, 0), None);
        assert_eq!(board.coords(40), Some((4, 4)));
        assert_eq!(board.coords(81), None);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(
            board.set(9, Square::Occupied(Player::X)),
            Err(RulesError::OutOfBounds { index: 9, len: 9 })
        );
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "X.O\n.X.\n..O".parse().unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.get_at(0, 0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get_at(0, 2), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get_at(2, 0), Some(Square::Empty));
    }

    #[test]
    fn test_parse_rejects_non_square() {
        assert_eq!("X.O.X".parse::<Board>(), Err(RulesError::NotSquare(5)));
        assert_eq!("".parse::<Board>(), Err(RulesError::NotSquare(0)));
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        assert_eq!("X.?.".parse::<Board>(), Err(RulesError::InvalidCell('?')));
    }

    #[test]
    fn test_render_highlights_cells() {
        let board: Board = "XX.\n...\n...".parse().unwrap();
        let text = board.render(&[1]);
        assert!(text.contains("X x ."));
    }
}
