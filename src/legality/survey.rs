//! Board-wide listings: which cells take tiles, where the cities are, and a
//! parallel sweep of legal tiles over the whole board.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::legal_tiles;
use crate::board::BoardQuery;
use crate::hex::Coordinate;
use crate::tile::{TileCatalog, TileId};

/// Cells that can host a tile: empty cells, cities, and anything not fixed.
#[must_use]
pub fn tile_coords<B>(board: &B) -> Vec<Coordinate>
where
    B: BoardQuery + ?Sized,
{
    board
        .cells()
        .into_iter()
        .filter(|coord| {
            board
                .space(*coord)
                .is_none_or(|space| space.shape.is_city || !space.is_fixed())
        })
        .collect()
}

/// [`tile_coords`] minus cells that already hold a laid tile, plus the cell
/// being edited (so it stays selectable). Sorted.
#[must_use]
pub fn legal_tile_coords<B>(
    board: &B,
    existing: &BTreeSet<Coordinate>,
    current: Option<Coordinate>,
) -> Vec<Coordinate>
where
    B: BoardQuery + ?Sized,
{
    let mut coords: BTreeSet<Coordinate> = tile_coords(board)
        .into_iter()
        .filter(|coord| !existing.contains(coord))
        .collect();
    coords.extend(current);
    coords.into_iter().collect()
}

/// City cells of a board, and which of them are split cities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CityListing {
    /// Every city, ascending.
    pub cities: Vec<Coordinate>,
    /// Cities whose stations are tied to branches, ascending.
    #[serde(rename = "split-cities")]
    pub split_cities: Vec<Coordinate>,
}

/// List the cities on `board`.
#[must_use]
pub fn cities<B>(board: &B) -> CityListing
where
    B: BoardQuery + ?Sized,
{
    let mut listing = CityListing::default();
    for coord in board.cells() {
        let Some(space) = board.space(coord).filter(|space| space.shape.is_city) else {
            continue;
        };
        listing.cities.push(coord);
        if space.has_branches() {
            listing.split_cities.push(coord);
        }
    }
    listing
}

/// Legal tiles for every tile-hosting cell of `board`.
#[must_use]
pub fn survey<B>(board: &B, catalog: &TileCatalog) -> BTreeMap<Coordinate, Vec<TileId>>
where
    B: BoardQuery + Sync + ?Sized,
{
    survey_with(board, catalog, || {})
}

/// [`survey`], calling `on_cell` once per finished cell from whichever
/// worker thread finished it.
///
/// Cells are evaluated in parallel; the result is in coordinate order.
#[must_use]
pub fn survey_with<B, F>(board: &B, catalog: &TileCatalog, on_cell: F) -> BTreeMap<Coordinate, Vec<TileId>>
where
    B: BoardQuery + Sync + ?Sized,
    F: Fn() + Sync,
{
    let coords = tile_coords(board);
    let results: BTreeMap<_, _> = coords
        .par_iter()
        .map(|coord| {
            let tiles = legal_tiles(board, catalog, *coord);
            on_cell();
            (*coord, tiles)
        })
        .collect();

    debug!(cells = results.len(), "survey complete");
    results
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::board::{Board, Space, UpgradeLevel};
    use crate::hex::Direction;
    use crate::tile::{Branch, Capacity, PathMap, Shape, Tile};

    fn c(raw: &str) -> Coordinate {
        raw.parse().unwrap()
    }

    fn d(i: u8) -> Direction {
        Direction::new(i).unwrap()
    }

    fn board() -> Board {
        let split = Capacity::Split(
            [
                (Branch::new([d(0)]).unwrap(), 1),
                (Branch::new([d(3)]).unwrap(), 1),
            ]
            .into_iter()
            .collect(),
        );
        let center = c("E9");
        Board::new(std::iter::once(center).chain(center.neighbors().into_iter().flatten()))
            .with_space(c("E7"), Space::printed(Shape::city(), UpgradeLevel::Phase(0)))
            .with_space(
                c("E11"),
                Space::printed(Shape::city(), UpgradeLevel::Phase(1)).with_capacity(split),
            )
            .with_space(c("D8"), Space::printed(Shape::town(), UpgradeLevel::Fixed))
            .with_space(c("F8"), Space::printed(Shape::city(), UpgradeLevel::Fixed))
    }

    #[test]
    fn test_tile_coords_skip_fixed_non_cities() {
        let board = board();
        let names: Vec<_> = tile_coords(&board).iter().map(ToString::to_string).collect();
        assert_eq!(names, ["D10", "E7", "E9", "E11", "F8", "F10"]);
    }

    #[test]
    fn test_legal_tile_coords_excludes_existing_but_keeps_current() {
        let existing: BTreeSet<_> = [c("E9"), c("E7")].into_iter().collect();
        let names: Vec<_> = legal_tile_coords(&board(), &existing, Some(c("E9")))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, ["D10", "E9", "E11", "F8", "F10"]);
    }

    #[test]
    fn test_cities_and_split_cities() {
        let listing = cities(&board());
        assert_eq!(listing.cities, [c("E7"), c("E11"), c("F8")]);
        assert_eq!(listing.split_cities, [c("E11")]);
    }

    #[test]
    fn test_survey_covers_every_tile_coord() {
        let catalog = TileCatalog::from_tiles([Tile::track("9", 1, PathMap::from_pairs([(d(1), d(4))]))]).unwrap();
        let board = board();
        let calls = AtomicUsize::new(0);
        let result = survey_with(&board, &catalog, || {
            calls.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(result.keys().copied().collect::<Vec<_>>(), tile_coords(&board));
        assert_eq!(calls.load(Ordering::Relaxed), result.len());
        // Side 1 of E9 is E7 and side 4 is E11: both on the board.
        assert_eq!(result[&c("E9")], [TileId::new("9")]);
        assert!(result[&c("E7")].is_empty());
        assert_eq!(survey(&board, &catalog), result);
    }
}
