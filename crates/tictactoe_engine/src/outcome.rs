//! Game status and finished-game outcomes.

use crate::rules::WinResult;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Current status of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(WinResult),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The outcome of a finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(win) => Some(Outcome::Winner(win.mark)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }

    /// Cells of the winning line, empty unless won.
    pub fn winning_cells(&self) -> &[usize] {
        match self {
            GameStatus::Won(win) => win.line.cells(),
            _ => &[],
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// The outcome from one player's point of view.
    pub fn result_for(&self, player: Player) -> MatchResult {
        match self {
            Outcome::Winner(winner) if *winner == player => MatchResult::Win,
            Outcome::Winner(_) => MatchResult::Loss,
            Outcome::Draw => MatchResult::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Winner: {}", player),
            Outcome::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// A finished game seen by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchResult {
    /// The player won.
    Win,
    /// The opponent won.
    Loss,
    /// Nobody won.
    Draw,
}
