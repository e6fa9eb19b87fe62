#![no_main]

use arbitrary::Arbitrary;
use hexrail::board::{Board, Space, UpgradeLevel};
use hexrail::hex::{Coordinate, Direction, Orientation};
use hexrail::legality::{legal_tiles, resolve_orientations};
use hexrail::tile::{PathMap, Shape, Tile, TileCatalog};
use libfuzzer_sys::fuzz_target;

/// Structured input for orientation fuzzing.
#[derive(Arbitrary, Debug)]
struct OrientationInput {
    /// Track of the candidate tile as side pairs (taken mod 6).
    pairs: Vec<(u8, u8)>,
    /// Which neighbors of the center exist.
    present: [bool; 6],
    /// Which sides of the center are blocked.
    blocked: [bool; 6],
    /// Track already on the center, if any.
    occupant: Option<Vec<(u8, u8)>>,
    /// Level of the candidate tile.
    level: u8,
}

fn paths(pairs: &[(u8, u8)]) -> PathMap {
    let side = |i: u8| Direction::ALL[usize::from(i % 6)];
    PathMap::from_pairs(pairs.iter().take(12).map(|(a, b)| (side(*a), side(*b))))
}

fuzz_target!(|input: OrientationInput| {
    let Some(center) = Coordinate::new(4, 9) else {
        return;
    };
    let neighbors = center
        .neighbors()
        .into_iter()
        .zip(input.present)
        .filter_map(|(neighbor, keep)| neighbor.filter(|_| keep));
    let mut board = Board::new(std::iter::once(center).chain(neighbors));
    for (direction, blocked) in Direction::ALL.into_iter().zip(input.blocked) {
        if blocked {
            board = board.with_blocked_edge(center, direction);
        }
    }
    if let Some(occupant) = &input.occupant {
        let space = Space::printed(Shape::track(), UpgradeLevel::Phase(1)).with_paths(paths(occupant));
        board = board.with_space(center, space);
    }

    let tile = Tile::track("F", input.level, paths(&input.pairs));
    let result = resolve_orientations(&board, center, &tile);

    assert!(result.canonical.len() <= 6);
    for (from, to) in &result.translations {
        assert!(!result.canonical.contains(from));
        assert!(result.canonical.contains(to));
    }
    for orientation in Orientation::ALL {
        let legal = board.place_tile(center, &tile, orientation).is_ok();
        assert_eq!(legal, result.canonical_for(orientation).is_some());
    }

    if let Ok(catalog) = TileCatalog::from_tiles([tile]) {
        let ids = legal_tiles(&board, &catalog, center);
        assert_eq!(ids.is_empty(), result.is_empty());
    }
});
