//! Game rules for N-in-a-row tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the game engine, the CLI and tests can call them directly.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{Direction, WinLine, candidate_lines};
pub use win::{WinResult, check_winner, detect_win};
