//! Command-line interface for the tictactoe client.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe 9x9 - get five in a row to win
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Five-in-a-row tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (board_size, run_length)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Board rows and columns (overrides config)
        #[arg(long)]
        size: Option<usize>,

        /// Marks in a row needed to win (overrides config)
        #[arg(long)]
        run_length: Option<usize>,
    },

    /// Report the winner or draw state of a saved board
    ///
    /// The board size is taken from the board itself; only `run_length`
    /// is read from the config file.
    Check {
        /// Board file of X, O and . cells, or - for stdin
        board: PathBuf,

        /// Marks in a row needed to win (overrides config)
        #[arg(long)]
        run_length: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
