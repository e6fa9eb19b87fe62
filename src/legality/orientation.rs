//! Legal rotations of one tile on one cell, collapsed by track connectivity.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::collections::hash_map::Entry;

use serde::Serialize;
use tracing::{debug, trace};

use crate::board::BoardQuery;
use crate::hex::{Coordinate, Orientation};
use crate::tile::{PathSignature, Tile};

/// Legal orientations of a tile at a cell.
///
/// `canonical` holds one orientation per distinct track layout: the lowest
/// legal orientation that produces it. Every other legal orientation is a
/// key of `translations`, mapped to the canonical orientation with the same
/// track. The two never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LegalOrientations {
    /// Distinct layouts, ascending.
    pub canonical: BTreeSet<Orientation>,
    /// Redundant legal orientation -> its canonical equivalent.
    pub translations: BTreeMap<Orientation, Orientation>,
}

impl LegalOrientations {
    /// Whether the tile cannot be laid at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// The canonical orientation for `orientation`, or `None` if it is not legal.
    #[must_use]
    pub fn canonical_for(&self, orientation: Orientation) -> Option<Orientation> {
        if self.canonical.contains(&orientation) {
            Some(orientation)
        } else {
            self.translations.get(&orientation).copied()
        }
    }

    /// Every legal orientation, canonical or not, ascending.
    #[must_use]
    pub fn all_legal(&self) -> BTreeSet<Orientation> {
        self.canonical
            .iter()
            .chain(self.translations.keys())
            .copied()
            .collect()
    }
}

/// Find every orientation at which `tile` may occupy `coord`.
///
/// Orientations are tried in ascending order. Each must pass both board
/// validators; a failing validator just drops that orientation. Survivors
/// are grouped by the signature of their track, and the first orientation
/// seen for each signature becomes canonical.
#[must_use]
pub fn resolve_orientations<B>(board: &B, coord: Coordinate, tile: &Tile) -> LegalOrientations
where
    B: BoardQuery + ?Sized,
{
    let space = board.space(coord);
    let mut first_seen: HashMap<PathSignature, Orientation> = HashMap::new();
    let mut result = LegalOrientations::default();

    for orientation in Orientation::ALL {
        let legality = board
            .validate_neighbors(coord, tile, orientation)
            .and_then(|()| board.validate_upgrade(space, coord, tile, orientation));
        if let Err(reason) = legality {
            trace!(%coord, tile = %tile.id, %orientation, %reason, "orientation rejected");
            continue;
        }

        let signature = board.path_map(coord, tile, orientation).signature();
        match first_seen.entry(signature) {
            Entry::Occupied(canonical) => {
                result.translations.insert(orientation, *canonical.get());
            }
            Entry::Vacant(slot) => {
                slot.insert(orientation);
                result.canonical.insert(orientation);
            }
        }
    }

    debug!(
        %coord,
        tile = %tile.id,
        canonical = result.canonical.len(),
        redundant = result.translations.len(),
        "orientations resolved"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Space, UpgradeLevel};
    use crate::hex::Direction;
    use crate::tile::{PathMap, Shape};

    fn c(raw: &str) -> Coordinate {
        raw.parse().unwrap()
    }

    fn d(i: u8) -> Direction {
        Direction::new(i).unwrap()
    }

    fn o(i: u8) -> Orientation {
        Orientation::new(i).unwrap()
    }

    fn flower() -> Board {
        let center = c("E9");
        Board::new(std::iter::once(center).chain(center.neighbors().into_iter().flatten()))
    }

    #[test]
    fn test_straight_collapses_half_turns() {
        let straight = Tile::track("9", 1, PathMap::from_pairs([(d(0), d(3))]));
        let result = resolve_orientations(&flower(), c("E9"), &straight);

        assert_eq!(result.canonical, [o(0), o(1), o(2)].into_iter().collect());
        assert_eq!(
            result.translations,
            [(o(3), o(0)), (o(4), o(1)), (o(5), o(2))].into_iter().collect()
        );
        assert_eq!(result.canonical_for(o(4)), Some(o(1)));
        assert_eq!(result.all_legal().len(), 6);
    }

    #[test]
    fn test_asymmetric_tile_keeps_all_six() {
        let curve = Tile::track("7", 1, PathMap::from_pairs([(d(0), d(1))]));
        let result = resolve_orientations(&flower(), c("E9"), &curve);
        assert_eq!(result.canonical.len(), 6);
        assert!(result.translations.is_empty());
    }

    #[test]
    fn test_three_way_symmetry() {
        let y = Tile::track("Y", 1, PathMap::from_pairs([(d(0), d(2)), (d(2), d(4)), (d(0), d(4))]));
        let result = resolve_orientations(&flower(), c("E9"), &y);
        assert_eq!(result.canonical, [o(0), o(1)].into_iter().collect());
        assert_eq!(result.translations.get(&o(2)), Some(&o(0)));
        assert_eq!(result.translations.get(&o(5)), Some(&o(1)));
    }

    #[test]
    fn test_tie_break_uses_lowest_surviving_orientation() {
        // Block side 0 of E9: orientations 0 and 3 of a straight both use it.
        let board = flower().with_blocked_edge(c("E9"), d(0));
        let straight = Tile::track("9", 1, PathMap::from_pairs([(d(0), d(3))]));
        let result = resolve_orientations(&board, c("E9"), &straight);
        assert_eq!(result.canonical, [o(1), o(2)].into_iter().collect());
        assert_eq!(result.translations, [(o(4), o(1)), (o(5), o(2))].into_iter().collect());
    }

    #[test]
    fn test_nothing_legal_is_empty_not_error() {
        let board = flower().with_space(c("E9"), Space::printed(Shape::city(), UpgradeLevel::Fixed));
        let city = Tile::track("57", 1, PathMap::from_pairs([(d(0), d(3))])).with_shape(Shape::city());
        let result = resolve_orientations(&board, c("E9"), &city);
        assert!(result.is_empty());
        assert!(result.translations.is_empty());
    }
}
