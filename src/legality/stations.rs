//! Addressable station cells of split cities.
//!
//! A split city holds several independently tokenable stations, each tied
//! to a branch (a group of sides). A station is addressed by the neighbor
//! across one representative side of its branch.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::board::{BoardQuery, Space};
use crate::error::StationError;
use crate::hex::{Coordinate, Direction, Orientation};
use crate::tile::{Branch, Capacity, Tile};

/// The side that identifies `branch` among all `branches` of a split city.
///
/// Prefers the lowest side that no other branch shares. When every side is
/// shared, falls back to the lowest side of the branch.
#[must_use]
pub fn representative_side<V>(branch: &Branch, branches: &BTreeMap<Branch, V>) -> Direction {
    let lowest = branch.sides().next();
    let unique = branch.sides().find(|side| {
        branches
            .keys()
            .filter(|other| *other != branch)
            .all(|other| !other.contains(*side))
    });
    // Branches are never empty.
    unique.or(lowest).unwrap_or(Direction::ALL[0])
}

/// Station cells of the split city at `coord`, one per branch.
///
/// With `hypothetical`, the space is the one that laying that tile at that
/// orientation would produce; the placement is not re-validated here.
///
/// # Errors
///
/// Returns [`StationError::NotASplitCity`] if the space has no branches, and
/// [`StationError::UnaddressableBranch`] if a representative side points
/// outside the grid.
pub fn split_city_stations<B>(
    board: &B,
    coord: Coordinate,
    hypothetical: Option<(&Tile, Orientation)>,
) -> Result<BTreeSet<Coordinate>, StationError>
where
    B: BoardQuery + ?Sized,
{
    let space: Cow<'_, Space> = match hypothetical {
        Some((tile, orientation)) => Cow::Owned(board.place(coord, tile, orientation)),
        None => Cow::Borrowed(board.space(coord).ok_or(StationError::NotASplitCity(coord))?),
    };
    let Capacity::Split(branches) = &space.capacity else {
        return Err(StationError::NotASplitCity(coord));
    };

    let mut stations = BTreeSet::new();
    for branch in branches.keys() {
        let direction = representative_side(branch, branches);
        let station = board
            .neighbor(coord, direction)
            .ok_or(StationError::UnaddressableBranch { coord, direction })?;
        stations.insert(station);
    }

    debug!(%coord, count = stations.len(), "split city stations resolved");
    Ok(stations)
}
