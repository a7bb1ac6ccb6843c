//! One-shot evaluation of a saved board.

use crate::settings::resolve_config;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tictactoe_engine::{Board, Player, WinResult, check_winner, is_full};
use tracing::{debug, instrument, warn};

/// State of a checked board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BoardState {
    /// A line of marks was found.
    Won {
        /// The winning mark.
        mark: Player,
        /// Cells of the first winning line.
        cells: Vec<usize>,
    },
    /// Full board with no line.
    Draw,
    /// Empty cells remain and nobody has won.
    InProgress,
}

/// Result of checking a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Rows (and columns) of the parsed board.
    pub size: usize,
    /// Run length the board was checked against.
    pub run_length: usize,
    /// Outcome of the check.
    pub state: BoardState,
}

impl CheckReport {
    /// Human-readable summary line.
    pub fn message(&self) -> String {
        match &self.state {
            BoardState::Won { mark, cells } => format!("Winner: {} {:?}", mark, cells),
            BoardState::Draw => "It's a Draw!".to_string(),
            BoardState::InProgress => "In progress".to_string(),
        }
    }
}

/// Parses `text` as a board and runs win then draw detection on it.
#[instrument(skip(text), fields(len = text.len()))]
pub fn check_board(text: &str, run_length: usize) -> Result<CheckReport> {
    let board: Board = text.parse().context("Failed to parse board")?;
    let win = check_winner(&board, run_length).context("Failed to evaluate board")?;
    let state = match win {
        Some(WinResult { mark, line }) => BoardState::Won {
            mark,
            cells: line.cells().to_vec(),
        },
        None if is_full(&board) => BoardState::Draw,
        None => BoardState::InProgress,
    };
    debug!(?state, "Board checked");
    Ok(CheckReport {
        size: board.size(),
        run_length,
        state,
    })
}

/// Reads board text from `path`, or from `stdin` when `path` is `-`.
#[instrument(skip(path, stdin), fields(path = %path.display()))]
pub fn read_board<R: Read>(path: &Path, mut stdin: R) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .context("Failed to read board from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file {}", path.display()))
    }
}

/// Checks `text` with the run length from `config_path` and `run_length`.
///
/// The board size always comes from the parsed board. A config file whose
/// `board_size` differs is logged and otherwise ignored.
#[instrument(skip(text))]
pub fn run_check(
    config_path: Option<&Path>,
    run_length: Option<usize>,
    text: &str,
) -> Result<CheckReport> {
    let config = resolve_config(config_path, None, run_length)?;
    let report = check_board(text, *config.run_length())?;
    if config_path.is_some() && report.size != *config.board_size() {
        warn!(
            board_size = *config.board_size(),
            parsed_size = report.size,
            "Config board_size ignored; using the size of the parsed board"
        );
    }
    Ok(report)
}

/// Formats a report as pretty JSON or as its summary line.
pub fn render_report(report: &CheckReport, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(report).context("Failed to serialize report")
    } else {
        Ok(report.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_detects_row_win() {
        let report = check_board("XXX\nOO.\n...", 3).unwrap();
        assert_eq!(
            report.state,
            BoardState::Won {
                mark: Player::X,
                cells: vec![0, 1, 2]
            }
        );
        assert_eq!(report.message(), "Winner: X [0, 1, 2]");
    }

    #[test]
    fn test_detects_draw() {
        let report = check_board("XOX OXX OXO", 3).unwrap();
        assert_eq!(report.state, BoardState::Draw);
    }

    #[test]
    fn test_in_progress() {
        let report = check_board("X.. ... ...", 3).unwrap();
        assert_eq!(report.state, BoardState::InProgress);
        assert_eq!(report.message(), "In progress");
    }

    #[test]
    fn test_bad_board_is_error() {
        assert!(check_board("XO?", 3).is_err());
        assert!(check_board("XO", 3).is_err());
    }

    #[test]
    fn test_json_shape() {
        let report = check_board("OOO ... ...", 3).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["state"]["state"], "won");
        assert_eq!(json["state"]["mark"], "O");
        assert_eq!(json["size"], 3);
    }

    #[test]
    fn test_read_board_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "XXX\nOO.\n...").unwrap();
        let text = read_board(file.path(), std::io::empty()).unwrap();
        assert_eq!(check_board(&text, 3).unwrap().message(), "Winner: X [0, 1, 2]");
    }

    #[test]
    fn test_read_board_from_stdin_dash() {
        let text = read_board(Path::new("-"), Cursor::new("O.. .O. ..O")).unwrap();
        assert_eq!(text, "O.. .O. ..O");
    }

    #[test]
    fn test_read_missing_board_file() {
        let err =
            read_board(Path::new("/definitely/not/here.txt"), std::io::empty()).unwrap_err();
        assert!(err.to_string().contains("Failed to read board file"));
    }

    #[test]
    fn test_run_check_takes_run_length_from_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 9\nrun_length = 2").unwrap();
        // 3x3 board against a 9x9 config: the parsed size wins
        let report = run_check(Some(file.path()), None, "XX. ... ...").unwrap();
        assert_eq!(report.size, 3);
        assert_eq!(report.run_length, 2);
        assert_eq!(report.message(), "Winner: X [0, 1]");
    }

    #[test]
    fn test_run_check_flag_overrides_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "run_length = 2").unwrap();
        let report = run_check(Some(file.path()), Some(3), "XX. ... ...").unwrap();
        assert_eq!(report.state, BoardState::InProgress);
    }

    #[test]
    fn test_render_report_json_and_text() {
        let report = run_check(None, Some(3), "XOX OXX OXO").unwrap();
        assert_eq!(render_report(&report, false).unwrap(), "It's a Draw!");

        let json: serde_json::Value =
            serde_json::from_str(&render_report(&report, true).unwrap()).unwrap();
        assert_eq!(json["state"]["state"], "draw");
        assert_eq!(json["run_length"], 3);
        assert_eq!(json["size"], 3);
    }
}
