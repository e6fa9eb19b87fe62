//! Which catalog tiles can be laid on a cell.

use tracing::debug;

use super::resolve_orientations;
use crate::board::{BoardQuery, Space};
use crate::hex::Coordinate;
use crate::tile::{Tile, TileCatalog, TileId};

/// Whether `tile` could replace `space` before looking at orientations.
///
/// Empty cells only take plain track. Occupied cells need a strictly higher
/// level and the same stop category and attributes. Fixed occupants take
/// nothing.
#[must_use]
pub fn is_upgrade_candidate(space: Option<&Space>, tile: &Tile) -> bool {
    let Some(space) = space else {
        return !tile.is_stop();
    };
    let Some(level) = space.upgrade_level.phase() else {
        return false;
    };
    tile.upgrade_level > level && tile.shape == space.shape
}

/// Ids of every tile that has at least one legal orientation at `coord`,
/// ordered by upgrade level and then id.
#[must_use]
pub fn legal_tiles<B>(board: &B, catalog: &TileCatalog, coord: Coordinate) -> Vec<TileId>
where
    B: BoardQuery + ?Sized,
{
    let space = board.space(coord);
    if space.is_some_and(Space::is_fixed) {
        debug!(%coord, "fixed space; no upgrades");
        return Vec::new();
    }

    let mut legal: Vec<&Tile> = catalog
        .iter()
        .filter(|tile| is_upgrade_candidate(space, tile))
        .filter(|tile| !resolve_orientations(board, coord, tile).is_empty())
        .collect();
    legal.sort_by(|a, b| {
        a.upgrade_level
            .cmp(&b.upgrade_level)
            .then_with(|| a.id.cmp(&b.id))
    });

    debug!(%coord, count = legal.len(), "legal tiles resolved");
    legal.into_iter().map(|tile| tile.id.clone()).collect()
}
