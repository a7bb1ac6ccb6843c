//! Move types for tic-tac-toe.

use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark on a board index.
///
/// Moves are first-class domain events that can be validated before
/// application, kept as history and replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Row-major board index the mark goes on.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}
