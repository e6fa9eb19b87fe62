//! Board listing commands: cities and tile coordinates.

use hexrail::config::EngineConfig;
use hexrail::query::Engine;

use super::output::{emit, join};
use super::{CliError, GameOptions};

/// Execute the cities command.
///
/// # Errors
///
/// Returns an error if the game cannot be loaded.
pub(crate) fn cities(options: &GameOptions, config: &EngineConfig) -> Result<(), CliError> {
    let (game, board) = options.load(config)?;
    let listing = Engine::new(&board, &game.catalog).cities();
    emit(options.format, &listing, |l| {
        format!(
            "Cities: {}\nSplit cities: {}\n",
            join(&l.cities),
            join(&l.split_cities)
        )
    })
}

/// Execute the tile-coords command.
///
/// Without `existing` or `current` this lists every cell that can host a
/// tile; otherwise it lists the cells still free for a new one.
///
/// # Errors
///
/// Returns an error if the game cannot be loaded or `current` is invalid.
pub(crate) fn tile_coords(
    options: &GameOptions,
    config: &EngineConfig,
    existing: &[String],
    current: Option<&str>,
) -> Result<(), CliError> {
    let (game, board) = options.load(config)?;
    let engine = Engine::new(&board, &game.catalog);
    let response = if existing.is_empty() && current.is_none() {
        engine.tile_coords()
    } else {
        let existing: Vec<&str> = existing.iter().map(String::as_str).collect();
        engine.legal_tile_coords(&existing, current)?
    };
    emit(options.format, &response, |r| {
        format!("Tile coordinates: {}\n", join(&r.tile_coords))
    })
}
