//! Resolves the game configuration from file and command-line overrides.

use std::path::Path;
use tictactoe_engine::{ConfigError, GameConfig};
use tracing::{debug, instrument};

/// Loads `path` (or the defaults) and applies any overrides.
#[instrument]
pub fn resolve_config(
    path: Option<&Path>,
    size: Option<usize>,
    run_length: Option<usize>,
) -> Result<GameConfig, ConfigError> {
    let mut config = match path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = size {
        config = config.with_board_size(size);
    }
    if let Some(run_length) = run_length {
        config = config.with_run_length(run_length);
    }
    config.validate()?;
    debug!(?config, "Resolved game config");
    Ok(config)
}
