//! N-in-a-row tic-tac-toe rules engine.
//!
//! The product configuration is a 9×9 board where five in a row wins.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a flat, row-major board
//! - **Game**: turn order and move validation, re-running the rules after
//!   every move
//! - **Session**: consecutive games with a running score and match history
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Player, Square, detect_win};
//!
//! let mut cells = vec![Square::Empty; 81];
//! for index in 0..5 {
//!     cells[index] = Square::Occupied(Player::X);
//! }
//! let win = detect_win(&cells, 9, 5).unwrap().unwrap();
//! assert_eq!(win.mark, Player::X);
//! assert_eq!(win.line.cells(), &[0, 1, 2, 3, 4]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod error;
mod game;
pub mod invariants;
mod outcome;
pub mod rules;
mod session;
mod types;

pub use action::Move;
pub use config::{
    ConfigError, DEFAULT_BOARD_SIZE, DEFAULT_RUN_LENGTH, GameConfig, MAX_BOARD_SIZE,
};
pub use error::{MoveError, RulesError};
pub use game::Game;
pub use outcome::{GameStatus, MatchResult, Outcome};
pub use rules::{
    Direction, WinLine, WinResult, candidate_lines, check_winner, detect_win, is_draw, is_full,
};
pub use session::{MatchRecord, Scoreboard, Session};
pub use types::{Board, Player, Square};
