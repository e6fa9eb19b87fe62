//! The board model the legality engine queries.
//!
//! [`BoardQuery`] is the narrow contract the resolvers depend on. [`Board`]
//! is the reference implementation: a set of cells, the printed spaces on
//! them, and impassable hex sides, loaded from a game's `board.json`.

mod grid;
mod layout;
mod space;

pub use grid::{Board, Placement};
pub use space::{Space, SpaceOrigin, UpgradeLevel};

use crate::error::InvalidPlacement;
use crate::hex::{Coordinate, Direction, Orientation};
use crate::tile::{PathMap, Tile};

/// Read-only questions the legality engine asks of a board.
///
/// Validators return `Err` for placements that break a rule; callers that
/// enumerate candidates treat that as "not legal", not as a failure.
pub trait BoardQuery {
    /// Whether `coord` is a cell of this board.
    fn contains(&self, coord: Coordinate) -> bool;

    /// All cells, ascending.
    fn cells(&self) -> Vec<Coordinate>;

    /// Current occupant of `coord`, if any.
    fn space(&self, coord: Coordinate) -> Option<&Space>;

    /// Parse user input into a coordinate of this board.
    fn parse_coordinate(&self, raw: &str) -> Option<Coordinate> {
        raw.parse().ok().filter(|coord| self.contains(*coord))
    }

    /// The cell across side `direction` of `coord`, whether or not it is on
    /// this board. `None` only when it is outside the addressable grid.
    fn neighbor(&self, coord: Coordinate, direction: Direction) -> Option<Coordinate> {
        coord.neighbor(direction)
    }

    /// Track `tile` would have at `coord` when laid at `orientation`.
    fn path_map(&self, _coord: Coordinate, tile: &Tile, orientation: Orientation) -> PathMap {
        tile.paths_at(orientation)
    }

    /// The occupant that laying `tile` at `orientation` would produce.
    /// Rules are not checked.
    fn place(&self, coord: Coordinate, tile: &Tile, orientation: Orientation) -> Space {
        Space::placed(tile, orientation, self.space(coord))
    }

    /// Check that the tile's exits meet the board and the neighboring track.
    ///
    /// # Errors
    ///
    /// Returns the first rule the placement breaks.
    fn validate_neighbors(
        &self,
        coord: Coordinate,
        tile: &Tile,
        orientation: Orientation,
    ) -> Result<(), InvalidPlacement>;

    /// Check that the tile is a legal upgrade of `space`, the occupant of `coord`.
    ///
    /// # Errors
    ///
    /// Returns the first rule the placement breaks.
    fn validate_upgrade(
        &self,
        space: Option<&Space>,
        coord: Coordinate,
        tile: &Tile,
        orientation: Orientation,
    ) -> Result<(), InvalidPlacement>;
}
