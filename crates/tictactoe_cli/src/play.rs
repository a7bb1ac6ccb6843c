//! Interactive game loop over any line-based reader and writer.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Session};
use tracing::{debug, instrument, warn};

const HELP: &str = "\
Enter a cell as an index (e.g. 40) or as `row col` (e.g. 4 4).
Commands: new, score, history, help, quit";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at this index.
    Place(usize),
    /// Clear the board, keeping scores.
    NewGame,
    /// Show the scoreboard.
    Score,
    /// List finished games.
    History,
    /// Show usage.
    Help,
    /// Leave the game.
    Quit,
}

/// Parses a line against the current board's dimensions.
#[instrument(skip(board))]
pub fn parse_input(line: &str, board: &Board) -> Result<Input, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Err("Enter a move or `help`".to_string()),
        ["new"] | ["n"] => Ok(Input::NewGame),
        ["score"] | ["s"] => Ok(Input::Score),
        ["history"] | ["h"] => Ok(Input::History),
        ["help"] | ["?"] => Ok(Input::Help),
        ["quit"] | ["q"] | ["exit"] => Ok(Input::Quit),
        [index] => index
            .parse::<usize>()
            .map(Input::Place)
            .map_err(|_| format!("Unrecognised input: {}", index)),
        [row, col] => {
            let row = row
                .parse::<usize>()
                .map_err(|_| format!("Invalid row: {}", row))?;
            let col = col
                .parse::<usize>()
                .map_err(|_| format!("Invalid column: {}", col))?;
            board
                .index_of(row, col)
                .map(Input::Place)
                .ok_or_else(|| format!("({}, {}) is off the board", row, col))
        }
        _ => Err(format!("Unrecognised input: {}", line.trim())),
    }
}

/// Runs the game until `quit` or end of input.
#[instrument(skip_all)]
pub fn run_play<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> Result<()> {
    let config = session.game().config();
    writeln!(
        output,
        "Tic Tac Toe {0}x{0} - get {1} in a row to win!",
        config.board_size(),
        config.run_length()
    )?;
    writeln!(output, "{}", HELP)?;
    show_game(session, output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = match parse_input(&line, session.game().board()) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };
        debug!(?command, "Player input");

        match command {
            Input::Place(index) => match session.place(index) {
                Ok(status) => {
                    show_game(session, output)?;
                    if status.is_terminal() {
                        writeln!(output, "{}", session.scores())?;
                        writeln!(output, "Type `new` for another game.")?;
                    }
                }
                Err(err) => {
                    warn!(index, error = %err, "Move not accepted");
                    writeln!(output, "{}", err)?;
                }
            },
            Input::NewGame => {
                session.new_game();
                show_game(session, output)?;
            }
            Input::Score => writeln!(output, "{}", session.scores())?,
            Input::History => {
                if session.matches().is_empty() {
                    writeln!(output, "No finished games yet.")?;
                }
                for record in session.matches() {
                    writeln!(
                        output,
                        "#{} {} in {} moves",
                        record.number(),
                        record.outcome(),
                        record.moves()
                    )?;
                }
            }
            Input::Help => writeln!(output, "{}", HELP)?,
            Input::Quit => break,
        }
    }

    writeln!(output, "Final score: {}", session.scores())?;
    Ok(())
}

fn show_game<W: Write>(session: &Session, output: &mut W) -> Result<()> {
    let game = session.game();
    write!(
        output,
        "{}",
        game.board().render(game.status().winning_cells())
    )?;
    writeln!(output, "{}", game.status_message())?;
    Ok(())
}
