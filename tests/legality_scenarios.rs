//! Scenario tests for the legality resolvers on small synthetic boards.
//!
//! Run with: cargo test legality_scenarios

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::collections::{BTreeMap, BTreeSet};

use hexrail::board::{Board, BoardQuery, Space, UpgradeLevel};
use hexrail::error::{Indeterminate, StationError};
use hexrail::hex::{Coordinate, Direction, Orientation};
use hexrail::legality::{legal_tiles, resolve_orientations, split_city_stations};
use hexrail::query::Engine;
use hexrail::tile::{Branch, Capacity, PathMap, Shape, Tile, TileCatalog, TileId};

fn c(raw: &str) -> Coordinate {
    raw.parse().unwrap()
}

fn d(i: u8) -> Direction {
    Direction::new(i).unwrap()
}

fn o(i: u8) -> Orientation {
    Orientation::new(i).unwrap()
}

fn orientations(items: &[u8]) -> BTreeSet<Orientation> {
    items.iter().map(|i| o(*i)).collect()
}

/// A center cell with all six neighbors on the board.
fn symmetric_board(center: &str) -> Board {
    let center = c(center);
    Board::new(std::iter::once(center).chain(center.neighbors().into_iter().flatten()))
}

fn city_tile(id: &str, level: u8) -> Tile {
    Tile::track(id, level, PathMap::from_pairs([(d(0), d(0)), (d(3), d(3))])).with_shape(Shape::city())
}

#[test]
fn test_opposite_exits_collapse_onto_lowest_orientation() {
    let straight = Tile::track("S", 1, PathMap::from_pairs([(d(0), d(3))]));
    let result = resolve_orientations(&symmetric_board("E9"), c("E9"), &straight);

    assert_eq!(result.canonical, orientations(&[0, 1, 2]));
    assert_eq!(
        result.translations,
        BTreeMap::from([(o(3), o(0)), (o(4), o(1)), (o(5), o(2))])
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let board = symmetric_board("E9").with_blocked_edge(c("E9"), d(4));
    let y = Tile::track("Y", 1, PathMap::from_pairs([(d(0), d(2)), (d(2), d(4))]));
    let first = resolve_orientations(&board, c("E9"), &y);
    let second = resolve_orientations(&board, c("E9"), &y);
    assert_eq!(first, second);
}

#[test]
fn test_partition_between_canonical_and_translations() {
    let board = symmetric_board("E9");
    let x = Tile::track("X", 2, PathMap::from_pairs([(d(0), d(3)), (d(1), d(4)), (d(2), d(5))]));
    let result = resolve_orientations(&board, c("E9"), &x);

    assert_eq!(result.canonical, orientations(&[0]));
    assert_eq!(result.translations.len(), 5);
    for (from, to) in &result.translations {
        assert!(!result.canonical.contains(from));
        assert!(result.canonical.contains(to));
    }
}

#[test]
fn test_lower_level_tile_listed_first() {
    let catalog = TileCatalog::from_tiles([
        Tile::track("5", 2, PathMap::from_pairs([(d(0), d(3))])),
        Tile::track("9", 1, PathMap::from_pairs([(d(0), d(3))])),
    ])
    .unwrap();
    let ids = legal_tiles(&symmetric_board("E9"), &catalog, c("E9"));
    assert_eq!(ids, [TileId::new("9"), TileId::new("5")]);
}

#[test]
fn test_upgrades_strictly_raise_level() {
    let board = symmetric_board("E9").with_space(c("E9"), Space::printed(Shape::city(), UpgradeLevel::Phase(1)));
    let catalog =
        TileCatalog::from_tiles([city_tile("57", 1), city_tile("14", 2), city_tile("63", 3)]).unwrap();

    let ids = legal_tiles(&board, &catalog, c("E9"));
    assert_eq!(ids, [TileId::new("14"), TileId::new("63")]);
    for id in &ids {
        assert!(catalog.get(id).unwrap().upgrade_level > 1);
    }
}

#[test]
fn test_fixed_space_takes_nothing() {
    let board = symmetric_board("E9").with_space(c("E9"), Space::printed(Shape::city(), UpgradeLevel::Fixed));
    let catalog = TileCatalog::from_tiles([city_tile("57", 1), city_tile("14", 2), city_tile("X9", 9)]).unwrap();
    assert!(legal_tiles(&board, &catalog, c("E9")).is_empty());
}

#[test]
fn test_existing_track_must_be_kept() {
    let curve = PathMap::from_pairs([(d(0), d(1))]);
    let occupied = symmetric_board("E9").with_space(
        c("E9"),
        Space::printed(Shape::track(), UpgradeLevel::Phase(1)).with_paths(curve),
    );
    // Green tile with a sharp curve 0-1 and a straight 0-3.
    let green = Tile::track("green", 2, PathMap::from_pairs([(d(0), d(1)), (d(0), d(3))]));
    let result = resolve_orientations(&occupied, c("E9"), &green);
    assert_eq!(result.all_legal(), orientations(&[0]));
}

#[test]
fn test_split_city_branch_stations() {
    let split = Capacity::Split(BTreeMap::from([
        (Branch::new([d(0)]).unwrap(), 1),
        (Branch::new([d(2), d(3)]).unwrap(), 1),
    ]));
    let space = Space::printed(Shape::city(), UpgradeLevel::Phase(1)).with_capacity(split);
    let board = symmetric_board("E9").with_space(c("E9"), space);

    let stations = split_city_stations(&board, c("E9"), None).unwrap();
    let expected: BTreeSet<_> = [d(0), d(2)]
        .into_iter()
        .map(|dir| board.neighbor(c("E9"), dir).unwrap())
        .collect();
    assert_eq!(stations, expected);
}

#[test]
fn test_station_query_on_plain_city_fails() {
    let board = symmetric_board("E9").with_space(
        c("E9"),
        Space::printed(Shape::city(), UpgradeLevel::Phase(1)).with_capacity(Capacity::Single(2)),
    );
    assert_eq!(
        split_city_stations(&board, c("E9"), None),
        Err(StationError::NotASplitCity(c("E9")))
    );
}

#[test]
fn test_indeterminate_is_not_empty() {
    let board = symmetric_board("E9").with_space(c("E9"), Space::printed(Shape::city(), UpgradeLevel::Fixed));
    let catalog = TileCatalog::from_tiles([city_tile("57", 1)]).unwrap();
    let engine = Engine::new(&board, &catalog);

    let empty = engine.resolve("E9", "57").unwrap();
    assert!(empty.is_empty());

    assert_eq!(
        engine.resolve("Q99", "57"),
        Err(Indeterminate::InvalidCoordinate("Q99".to_string()))
    );
    assert_eq!(
        engine.resolve("E9", "58"),
        Err(Indeterminate::UnknownTile("58".to_string()))
    );
    assert_eq!(engine.legal_orientations("E9", "58").legal_orientations, None);
    assert_eq!(engine.legal_orientations("E9", "57").legal_orientations, Some(Vec::new()));
}
