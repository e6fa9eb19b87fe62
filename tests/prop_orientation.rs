//! Property-based tests for orientation resolution.
//!
//! Tiles are random path maps over random boards (random holes and blocked
//! edges around a center cell).
//! Run with: cargo test --release prop_orientation

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use hexrail::board::Board;
use hexrail::hex::{Coordinate, Direction, Orientation};
use hexrail::legality::resolve_orientations;
use hexrail::tile::{PathMap, Tile};

fn center() -> Coordinate {
    "E9".parse().unwrap()
}

fn direction() -> impl Strategy<Value = Direction> {
    (0u8..6).prop_map(|i| Direction::new(i).unwrap())
}

fn tile() -> impl Strategy<Value = Tile> {
    prop::collection::vec((direction(), direction()), 1..5)
        .prop_map(|pairs| Tile::track("T", 1, PathMap::from_pairs(pairs)))
}

/// Which of the six neighbors exist, and which sides of the center are blocked.
fn board() -> impl Strategy<Value = Board> {
    (prop::array::uniform6(any::<bool>()), prop::array::uniform6(any::<bool>())).prop_map(|(present, blocked)| {
        let center = center();
        let neighbors = center
            .neighbors()
            .into_iter()
            .zip(present)
            .filter_map(|(neighbor, keep)| neighbor.filter(|_| keep));
        let mut board = Board::new(std::iter::once(center).chain(neighbors));
        for (direction, blocked) in Direction::ALL.into_iter().zip(blocked) {
            if blocked {
                board = board.with_blocked_edge(center, direction);
            }
        }
        board
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Resolving twice gives the same answer.
    #[test]
    fn prop_deterministic(board in board(), tile in tile()) {
        let first = resolve_orientations(&board, center(), &tile);
        let second = resolve_orientations(&board, center(), &tile);
        prop_assert_eq!(first, second);
    }

    /// Canonical set and translation keys never overlap, and every
    /// translation points at a canonical orientation with the same track.
    #[test]
    fn prop_partition(board in board(), tile in tile()) {
        let result = resolve_orientations(&board, center(), &tile);
        prop_assert!(result.canonical.len() <= 6);
        prop_assert!(result.canonical.len() + result.translations.len() <= 6);
        for (from, to) in &result.translations {
            prop_assert!(!result.canonical.contains(from));
            prop_assert!(result.canonical.contains(to));
            prop_assert!(to < from);
            prop_assert_eq!(tile.paths_at(*from).signature(), tile.paths_at(*to).signature());
        }
    }

    /// Canonical orientations all produce distinct track.
    #[test]
    fn prop_canonical_distinct(board in board(), tile in tile()) {
        let result = resolve_orientations(&board, center(), &tile);
        let signatures: std::collections::HashSet<_> =
            result.canonical.iter().map(|o| tile.paths_at(*o).signature()).collect();
        prop_assert_eq!(signatures.len(), result.canonical.len());
    }

    /// On a full open board, turning the tile first does not change how many
    /// distinct layouts it has.
    #[test]
    fn prop_rotation_keeps_layout_count(tile in tile(), turn in 0u8..6) {
        let center = center();
        let board = Board::new(std::iter::once(center).chain(center.neighbors().into_iter().flatten()));
        let turned = Tile::track("T", 1, tile.paths_at(Orientation::new(turn).unwrap()));
        let original = resolve_orientations(&board, center, &tile);
        let rotated = resolve_orientations(&board, center, &turned);
        prop_assert_eq!(original.canonical.len(), rotated.canonical.len());
        prop_assert_eq!(original.all_legal().len(), 6);
    }
}
