//! Play session: consecutive games with a running score and match history.

use crate::config::{ConfigError, GameConfig};
use crate::error::MoveError;
use crate::game::Game;
use crate::outcome::{GameStatus, MatchResult, Outcome};
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Wins per player and draws across a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Games drawn.
    draws: u32,
}

impl Scoreboard {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Games won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Finished games counted so far.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}  O: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// One finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchRecord {
    /// 1-based game number within the session.
    number: usize,
    /// How the game ended.
    outcome: Outcome,
    /// Moves played.
    moves: usize,
}

impl MatchRecord {
    /// The game from `player`'s side.
    pub fn result_for(&self, player: Player) -> MatchResult {
        self.outcome.result_for(player)
    }
}

/// A run of games sharing a scoreboard.
///
/// Starting a new game keeps the score; unfinished games are not recorded.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    scores: Scoreboard,
    matches: Vec<MatchRecord>,
}

impl Session {
    /// Starts a session with one empty game.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            game: Game::new(config)?,
            scores: Scoreboard::default(),
            matches: Vec::new(),
        })
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Score so far.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Finished games, oldest first.
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Places the current player's mark and records the game if it ends.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let status = self.game.make_move(index)?.clone();
        if let Some(outcome) = status.outcome() {
            self.scores.record(outcome);
            let record = MatchRecord {
                number: self.matches.len() + 1,
                outcome,
                moves: self.game.history().len(),
            };
            info!(number = record.number, %outcome, scores = %self.scores, "Match recorded");
            self.matches.push(record);
        }
        Ok(status)
    }

    /// Clears the board for the next game, keeping scores and history.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.game.reset();
    }
}
