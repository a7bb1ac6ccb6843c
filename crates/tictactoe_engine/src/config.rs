//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Board dimensions and winning run length.
///
/// ```toml
/// board_size = 9
/// run_length = 5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Rows (and columns) on the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Consecutive identical marks needed to win.
    #[serde(default = "default_run_length")]
    run_length: usize,
}

/// Board size used by the product configuration.
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Run length used by the product configuration.
pub const DEFAULT_RUN_LENGTH: usize = 5;

/// Largest accepted board size.
pub const MAX_BOARD_SIZE: usize = 1024;

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_run_length() -> usize {
    DEFAULT_RUN_LENGTH
}

impl GameConfig {
    /// Creates and validates a configuration.
    #[instrument]
    pub fn new(board_size: usize, run_length: usize) -> Result<Self, ConfigError> {
        let config = Self {
            board_size,
            run_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            board_size = config.board_size,
            run_length = config.run_length,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks that both dimensions are positive and the board is at most
    /// [`MAX_BOARD_SIZE`] wide.
    ///
    /// A run length longer than the board is legal but no game can be won.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be positive".to_string()));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "board_size {} exceeds the maximum of {}",
                self.board_size, MAX_BOARD_SIZE
            )));
        }
        if self.run_length == 0 {
            return Err(ConfigError::new("run_length must be positive".to_string()));
        }
        if self.run_length > self.board_size {
            warn!(
                board_size = self.board_size,
                run_length = self.run_length,
                "Run length exceeds board size; games cannot be won"
            );
        }
        Ok(())
    }

    /// True when some line of `run_length` cells fits on the board.
    pub fn is_winnable(&self) -> bool {
        self.run_length <= self.board_size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            run_length: DEFAULT_RUN_LENGTH,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
