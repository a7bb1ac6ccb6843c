//! Terminal client for five-in-a-row tic-tac-toe.
//!
//! - `play`: interactive game with a running score
//! - `check`: evaluate a saved board for a winner or draw

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod check;
pub mod cli;
pub mod logging;
pub mod play;
pub mod settings;

pub use check::{BoardState, CheckReport, check_board, read_board, render_report, run_check};
pub use cli::{Cli, Command};
pub use play::{Input, parse_input, run_play};
pub use settings::resolve_config;
