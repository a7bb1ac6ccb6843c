//! Error types for board construction, rule evaluation and moves.

use crate::types::Player;

/// Malformed input to the board model or win detector.
///
/// These are caller precondition violations. Unwinnable configurations
/// are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RulesError {
    /// Board size of zero.
    #[display("Board size must be positive")]
    ZeroBoardSize,

    /// Run length of zero.
    #[display("Run length must be positive")]
    ZeroRunLength,

    /// Cell count does not match `size * size`.
    #[display("Board has {} cells, expected {}", actual, expected)]
    BoardLength {
        /// Required number of cells.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },

    /// `size * size` cells cannot be counted or allocated.
    #[display("Board size {} is too large", _0)]
    BoardTooLarge(usize),

    /// Index past the end of the board.
    #[display("Index {} is outside a board of {} cells", index, len)]
    OutOfBounds {
        /// Offending index.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },

    /// Unrecognised cell symbol while parsing.
    #[display("Invalid cell symbol {:?}", _0)]
    InvalidCell(char),

    /// Parsed cell count is not a positive perfect square.
    #[display("{} cells do not form a square board", _0)]
    NotSquare(usize),
}

impl std::error::Error for RulesError {}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index is not on the board.
    #[display("Position {} is off the board", _0)]
    OutOfBounds(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),

    /// Rule evaluation rejected the board.
    #[display("{}", _0)]
    Rules(RulesError),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Rules(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RulesError> for MoveError {
    fn from(err: RulesError) -> Self {
        MoveError::Rules(err)
    }
}
