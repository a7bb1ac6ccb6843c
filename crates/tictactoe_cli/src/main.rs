//! Tic Tac Toe 9x9 - terminal client
//!
//! Play five-in-a-row against a friend on one terminal, or check a saved board.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_cli::{
    Cli, Command, logging, read_board, render_report, resolve_config, run_check, run_play,
};
use tictactoe_engine::Session;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { size, run_length } => play(cli.config, size, run_length),
        Command::Check {
            board,
            run_length,
            json,
        } => check(cli.config, board, run_length, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn play(
    config: Option<std::path::PathBuf>,
    size: Option<usize>,
    run_length: Option<usize>,
) -> Result<()> {
    let config = resolve_config(config.as_deref(), size, run_length)?;
    let mut session = Session::new(config)?;
    info!("Starting interactive game");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut session, stdin.lock(), &mut stdout)
}

/// Evaluate a board file (or stdin) and print the result
#[instrument]
fn check(
    config: Option<std::path::PathBuf>,
    board: std::path::PathBuf,
    run_length: Option<usize>,
    json: bool,
) -> Result<()> {
    let text = read_board(&board, io::stdin().lock())?;
    let report = run_check(config.as_deref(), run_length, &text)?;
    println!("{}", render_report(&report, json)?);
    Ok(())
}
