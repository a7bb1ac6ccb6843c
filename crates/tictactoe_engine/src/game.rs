//! Game engine: turn order, move validation and status tracking.

use crate::action::Move;
use crate::config::{ConfigError, GameConfig};
use crate::error::{MoveError, RulesError};
use crate::outcome::GameStatus;
use crate::rules::{check_winner, is_full};
use crate::types::{Board, Player, Square};
use tracing::{debug, info, instrument, warn};

/// A single game: `Turn(X) → Turn(O) → … → Won | Draw`.
///
/// X always moves first. Once the status is terminal every further move
/// is rejected with [`MoveError::GameOver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(*config.board_size())
            .map_err(|e| ConfigError::new(format!("Invalid board: {}", e)))?;
        Ok(Self {
            config,
            board,
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the last mover once the game is over).
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Empty indices, or none once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<usize> {
        if self.is_over() {
            Vec::new()
        } else {
            self.board.empty_indices()
        }
    }

    /// Status line shown under the board.
    pub fn status_message(&self) -> String {
        match self.status.outcome() {
            Some(outcome) => outcome.to_string(),
            None => format!("Next player: {}", self.to_move),
        }
    }

    /// Places the current player's mark at `index`.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, index: usize) -> Result<&GameStatus, MoveError> {
        self.apply(Move::new(self.to_move, index))
    }

    /// Applies an explicit move after checking it is legal.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Move) -> Result<&GameStatus, MoveError> {
        if let Err(err) = self.check_legal(&action) {
            warn!(%action, error = %err, "Move rejected");
            return Err(err);
        }

        self.board
            .set(action.index, Square::Occupied(action.player))?;
        self.history.push(action);
        self.status = self.evaluate()?;

        match &self.status {
            GameStatus::InProgress => {
                self.to_move = self.to_move.opponent();
                debug!(%action, next = %self.to_move, "Move placed");
            }
            GameStatus::Won(win) => {
                info!(winner = %win.mark, cells = ?win.line.cells(), "Game won");
            }
            GameStatus::Draw => info!(moves = self.history.len(), "Game drawn"),
        }

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(&self.status)
    }

    /// Clears the board for a new game with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
        debug!("Game reset");
    }

    /// Applies `moves` in order, stopping at the first illegal one.
    #[instrument(skip(self, moves), fields(moves = moves.len()))]
    pub fn replay(mut self, moves: &[Move]) -> Result<Self, MoveError> {
        for action in moves {
            self.apply(*action)?;
        }
        Ok(self)
    }

    fn check_legal(&self, action: &Move) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if action.index >= self.board.len() {
            return Err(MoveError::OutOfBounds(action.index));
        }
        if !self.board.is_empty(action.index) {
            return Err(MoveError::SquareOccupied(action.index));
        }
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }
        Ok(())
    }

    /// Win first, then draw.
    fn evaluate(&self) -> Result<GameStatus, RulesError> {
        if let Some(win) = check_winner(&self.board, *self.config.run_length())? {
            return Ok(GameStatus::Won(win));
        }
        if is_full(&self.board) {
            return Ok(GameStatus::Draw);
        }
        Ok(GameStatus::InProgress)
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), MoveError> {
        use crate::invariants::{GameInvariants, InvariantSet};

        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(size: usize, run: usize) -> Game {
        Game::new(GameConfig::new(size, run).unwrap()).unwrap()
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = small(9, 5);
        assert_eq!(game.to_move(), Player::X);
        game.make_move(0).unwrap();
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.status_message(), "Next player: O");
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = small(9, 5);
        game.make_move(40).unwrap();
        assert_eq!(game.make_move(40), Err(MoveError::SquareOccupied(40)));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = small(9, 5);
        assert_eq!(game.make_move(81), Err(MoveError::OutOfBounds(81)));
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut game = small(9, 5);
        assert_eq!(
            game.apply(Move::new(Player::O, 0)),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_win_is_terminal() {
        let mut game = small(3, 3);
        for index in [0, 3, 1, 4] {
            game.make_move(index).unwrap();
        }
        let status = game.make_move(2).unwrap().clone();
        assert!(matches!(status, GameStatus::Won(ref w) if w.mark == Player::X));
        assert_eq!(game.status_message(), "Winner: X");
        assert_eq!(game.make_move(5), Err(MoveError::GameOver));
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn test_draw_is_terminal() {
        let mut game = small(3, 3);
        // X O X / X O O / O X X
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.make_move(index).unwrap();
        }
        assert_eq!(game.status(), &GameStatus::Draw);
        assert_eq!(game.status_message(), "It's a Draw!");
        assert_eq!(game.make_move(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_winning_final_move_is_not_a_draw() {
        let mut game = small(3, 3);
        // X O X / O X O / O X X -- last move completes the diagonal
        for index in [0, 1, 2, 3, 4, 5, 7, 6] {
            game.make_move(index).unwrap();
        }
        let status = game.make_move(8).unwrap();
        assert!(matches!(status, GameStatus::Won(w) if w.line.cells() == [0, 4, 8]));
    }

    #[test]
    fn test_unwinnable_board_ends_in_draw() {
        let mut game = small(2, 3);
        for index in 0..4 {
            game.make_move(index).unwrap();
        }
        assert_eq!(game.status(), &GameStatus::Draw);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut game = small(3, 3);
        game.make_move(4).unwrap();
        game.reset();
        assert!(game.board().is_empty_board());
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.status(), &GameStatus::InProgress);
    }

    #[test]
    fn test_replay_matches_history() {
        let moves = [Move::new(Player::X, 10), Move::new(Player::O, 20)];
        let game = Game::new(GameConfig::default())
            .unwrap()
            .replay(&moves)
            .unwrap();
        assert_eq!(game.history(), &moves);
        assert_eq!(game.to_move(), Player::X);
    }
}
