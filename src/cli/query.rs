//! Per-cell query commands: tiles, orientations, stations, space.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use hexrail::config::EngineConfig;
use hexrail::hex::Coordinate;
use hexrail::query::{Engine, OrientationsResponse};

use super::output::{emit, join};
use super::{CliError, GameOptions, OutputFormat};

/// Execute the tiles command.
///
/// # Errors
///
/// Returns an error if the game cannot be loaded or the coordinate is invalid.
pub(crate) fn tiles(options: &GameOptions, config: &EngineConfig, coord: &str) -> Result<(), CliError> {
    let (game, board) = options.load(config)?;
    let response = Engine::new(&board, &game.catalog).legal_tiles(coord)?;
    emit(options.format, &response, |r| {
        format!("Legal tiles at {coord}: {}\n", join(&r.legal_tile_ids))
    })
}

/// Execute the orientations command.
///
/// Indeterminate input is reported as an error in text mode and as `null`
/// fields in JSON mode.
///
/// # Errors
///
/// Returns an error if the game cannot be loaded, or in text mode if the
/// coordinate or tile is invalid.
pub(crate) fn orientations(
    options: &GameOptions,
    config: &EngineConfig,
    coord: &str,
    tile: &str,
) -> Result<(), CliError> {
    let (game, board) = options.load(config)?;
    let engine = Engine::new(&board, &game.catalog);
    let response = engine.legal_orientations(coord, tile);
    if response == OrientationsResponse::default() && options.format == OutputFormat::Text {
        engine.resolve(coord, tile)?;
    }
    emit(options.format, &response, |r| render_orientations(r, coord, tile))
}

fn render_orientations(response: &OrientationsResponse, coord: &str, tile: &str) -> String {
    let mut text = String::new();
    let canonical = response.legal_orientations.as_deref().unwrap_or_default();
    let _ = writeln!(text, "Tile {tile} at {coord}: {}", join(canonical));
    for (from, to) in response.translations.iter().flatten() {
        let _ = writeln!(text, "  {from} -> {to}");
    }
    text
}

/// Execute the stations command.
///
/// # Errors
///
/// Returns an error if the game cannot be loaded, the input is malformed,
/// or the cell is not a split city.
pub(crate) fn stations(
    options: &GameOptions,
    config: &EngineConfig,
    coord: &str,
    tile: Option<&str>,
    orientation: Option<&str>,
    existing: &[String],
) -> Result<(), CliError> {
    let (game, board) = options.load(config)?;
    let existing: BTreeSet<Coordinate> = existing
        .iter()
        .filter_map(|raw| raw.parse().ok())
        .collect();
    let response = Engine::new(&board, &game.catalog).legal_split_city_stations(
        coord,
        tile,
        orientation,
        &existing,
    )?;
    emit(options.format, &response, |r| {
        format!("Stations of {coord}: {}\n", join(&r.split_city_stations))
    })
}

/// Execute the space command.
///
/// # Errors
///
/// Returns an error if the game cannot be loaded or the input is malformed.
pub(crate) fn space(
    options: &GameOptions,
    config: &EngineConfig,
    coord: &str,
    tile: Option<&str>,
    orientation: Option<&str>,
) -> Result<(), CliError> {
    let (game, board) = options.load(config)?;
    let response = Engine::new(&board, &game.catalog).space_info(coord, tile, orientation)?;
    emit(options.format, &response, |r| {
        let phase = r
            .info
            .phase
            .map_or_else(|| "none".to_string(), |phase| phase.to_string());
        format!(
            "{coord}: capacity {}, phase {phase}{}\n",
            r.info.capacity,
            if r.info.is_split_city { ", split city" } else { "" }
        )
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use hexrail::hex::Orientation;

    use super::*;

    fn o(i: u8) -> Orientation {
        Orientation::new(i).unwrap_or(Orientation::ALL[0])
    }

    #[test]
    fn test_render_orientations() {
        let response = OrientationsResponse {
            legal_orientations: Some(vec![o(0), o(1)]),
            translations: Some(BTreeMap::from([(o(3), o(0))])),
        };
        let text = render_orientations(&response, "C5", "9");
        assert_eq!(text, "Tile 9 at C5: 0 1\n  3 -> 0\n");
    }
}
