//! CLI command implementations for hexrail.

pub(crate) mod listing;
pub(crate) mod query;
pub(crate) mod survey;

mod output;

use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use clap::ValueEnum;
use hexrail::board::{Board, Placement};
use hexrail::config::EngineConfig;
use hexrail::error::{CatalogError, Indeterminate, PlacementError, StationError};
use hexrail::registry::{Game, GameRegistry};

/// Output format shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// The JSON the board UI consumes.
    Json,
}

/// Options every command takes.
#[derive(Debug, Clone)]
pub(crate) struct GameOptions {
    /// Game directory name.
    pub(crate) game: String,
    /// Overrides `HEXRAIL_DATA_DIR`.
    pub(crate) data_dir: Option<PathBuf>,
    /// Overrides `HEXRAIL_ALWAYS_RELOAD`.
    pub(crate) always_reload: bool,
    /// Tiles laid before the query runs.
    pub(crate) placed: Vec<Placement>,
    /// How to print results.
    pub(crate) format: OutputFormat,
}

impl GameOptions {
    /// Load the game and lay the `placed` tiles on a copy of its board.
    pub(crate) fn load(&self, config: &EngineConfig) -> Result<(Arc<Game>, Board), CliError> {
        let mut config = config.clone();
        if let Some(dir) = &self.data_dir {
            config.data_dir.clone_from(dir);
        }
        config.always_reload |= self.always_reload;

        let registry = GameRegistry::from_config(&config);
        let game = registry.get(&self.game)?;
        let board = game.board.with_placements(&self.placed, &game.catalog)?;
        Ok((game, board))
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("Failed to encode JSON: {e}"))
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<Indeterminate> for CliError {
    fn from(e: Indeterminate) -> Self {
        Self::new(format!("Cannot answer: {e}"))
    }
}

impl From<PlacementError> for CliError {
    fn from(e: PlacementError) -> Self {
        Self::new(format!("Failed to lay tiles: {e}"))
    }
}

impl From<StationError> for CliError {
    fn from(e: StationError) -> Self {
        Self::new(e.to_string())
    }
}
