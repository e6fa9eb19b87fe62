//! The legality engine: which tiles fit a cell, at which orientations, and
//! where a split city's stations are.
//!
//! All resolvers are pure functions of a [`BoardQuery`] and a
//! [`TileCatalog`]. They can run concurrently from any number of threads.

mod orientation;
mod stations;
mod survey;
mod tiles;

pub use orientation::{LegalOrientations, resolve_orientations};
pub use stations::{representative_side, split_city_stations};
pub use survey::{CityListing, cities, legal_tile_coords, survey, survey_with, tile_coords};
pub use tiles::{is_upgrade_candidate, legal_tiles};

use crate::board::BoardQuery;
use crate::error::Indeterminate;
use crate::hex::{Coordinate, Orientation};
use crate::tile::{Tile, TileCatalog};

/// Parse a coordinate that must lie on `board`.
///
/// # Errors
///
/// [`Indeterminate::MissingInput`] for blank input,
/// [`Indeterminate::InvalidCoordinate`] if it does not parse or is off the board.
pub fn parse_coordinate<B>(board: &B, raw: &str) -> Result<Coordinate, Indeterminate>
where
    B: BoardQuery + ?Sized,
{
    if raw.trim().is_empty() {
        return Err(Indeterminate::MissingInput("coordinate"));
    }
    board
        .parse_coordinate(raw)
        .ok_or_else(|| Indeterminate::InvalidCoordinate(raw.to_string()))
}

/// Look up a tile by its raw id.
///
/// # Errors
///
/// [`Indeterminate::MissingInput`] for blank input,
/// [`Indeterminate::UnknownTile`] if the catalog has no such tile.
pub fn lookup_tile<'c>(catalog: &'c TileCatalog, raw: &str) -> Result<&'c Tile, Indeterminate> {
    if raw.trim().is_empty() {
        return Err(Indeterminate::MissingInput("tile"));
    }
    catalog
        .lookup(raw)
        .ok_or_else(|| Indeterminate::UnknownTile(raw.to_string()))
}

/// Parse an orientation in `0..6`.
///
/// # Errors
///
/// [`Indeterminate::MissingInput`] for blank input,
/// [`Indeterminate::InvalidOrientation`] otherwise.
pub fn parse_orientation(raw: &str) -> Result<Orientation, Indeterminate> {
    if raw.trim().is_empty() {
        return Err(Indeterminate::MissingInput("orientation"));
    }
    Orientation::parse(raw).ok_or_else(|| Indeterminate::InvalidOrientation(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::hex::Direction;
    use crate::tile::PathMap;

    fn board() -> Board {
        Board::new(["C5", "C7"].iter().map(|raw| raw.parse().unwrap()))
    }

    #[test]
    fn test_parse_coordinate_distinguishes_missing_from_invalid() {
        assert_eq!(parse_coordinate(&board(), "  "), Err(Indeterminate::MissingInput("coordinate")));
        assert_eq!(
            parse_coordinate(&board(), "Z99"),
            Err(Indeterminate::InvalidCoordinate("Z99".to_string()))
        );
        assert_eq!(parse_coordinate(&board(), "c7").unwrap().to_string(), "C7");
    }

    #[test]
    fn test_lookup_tile() {
        let d = |i| Direction::new(i).unwrap();
        let catalog = TileCatalog::from_tiles([Tile::track("9", 1, PathMap::from_pairs([(d(0), d(3))]))]).unwrap();
        assert!(lookup_tile(&catalog, "9").is_ok());
        assert_eq!(lookup_tile(&catalog, "8"), Err(Indeterminate::UnknownTile("8".to_string())));
        assert_eq!(lookup_tile(&catalog, ""), Err(Indeterminate::MissingInput("tile")));
    }

    #[test]
    fn test_parse_orientation_range() {
        assert_eq!(parse_orientation("5").unwrap().index(), 5);
        assert_eq!(parse_orientation("6"), Err(Indeterminate::InvalidOrientation("6".to_string())));
        assert_eq!(parse_orientation("-1"), Err(Indeterminate::InvalidOrientation("-1".to_string())));
        assert_eq!(parse_orientation(""), Err(Indeterminate::MissingInput("orientation")));
    }
}
