//! Reference board: cells, printed spaces, blocked sides, and the placement rules.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::{BoardQuery, Space, UpgradeLevel};
use crate::error::{Indeterminate, InvalidPlacement, PlacementError};
use crate::hex::{Coordinate, Direction, Orientation};
use crate::tile::{Tile, TileCatalog, TileId};

/// A hex board and its current occupants.
///
/// Boards are values: laying tiles produces a new board and leaves the
/// original untouched, so a shared base board can back many queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: BTreeSet<Coordinate>,
    spaces: BTreeMap<Coordinate, Space>,
    blocked: BTreeSet<(Coordinate, Direction)>,
}

impl Board {
    /// A board of empty cells.
    #[must_use]
    pub fn new(cells: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Put `space` on `coord`, adding the cell if needed.
    #[must_use]
    pub fn with_space(mut self, coord: Coordinate, space: Space) -> Self {
        self.cells.insert(coord);
        self.spaces.insert(coord, space);
        self
    }

    /// Make the side `direction` of `coord` impassable from both cells.
    #[must_use]
    pub fn with_blocked_edge(mut self, coord: Coordinate, direction: Direction) -> Self {
        self.blocked.insert((coord, direction));
        if let Some(other) = coord.neighbor(direction) {
            self.blocked.insert((other, direction.opposite()));
        }
        self
    }

    /// Whether the side `direction` of `coord` is impassable.
    #[must_use]
    pub fn is_blocked(&self, coord: Coordinate, direction: Direction) -> bool {
        self.blocked.contains(&(coord, direction))
    }

    /// Spaces in coordinate order.
    pub fn spaces(&self) -> impl Iterator<Item = (Coordinate, &Space)> {
        self.spaces.iter().map(|(coord, space)| (*coord, space))
    }

    /// Lay `tile` at `coord`, checking both validators first.
    ///
    /// # Errors
    ///
    /// Returns the rule the placement breaks. The board is unchanged.
    pub fn place_tile(
        &self,
        coord: Coordinate,
        tile: &Tile,
        orientation: Orientation,
    ) -> Result<Board, InvalidPlacement> {
        self.validate_neighbors(coord, tile, orientation)?;
        self.validate_upgrade(self.space(coord), coord, tile, orientation)?;

        let space = self.place(coord, tile, orientation);
        debug!(%coord, tile = %tile.id, %orientation, "tile placed");

        let mut next = self.clone();
        next.spaces.insert(coord, space);
        Ok(next)
    }

    /// Lay a sequence of tiles in order, as recorded in a game's board state.
    ///
    /// # Errors
    ///
    /// Returns an error for the first placement that names an unknown tile,
    /// an off-board cell, or breaks a rule.
    pub fn with_placements(
        &self,
        placements: &[Placement],
        catalog: &TileCatalog,
    ) -> Result<Board, PlacementError> {
        let mut board = self.clone();
        for placement in placements {
            if !board.contains(placement.coord) {
                return Err(Indeterminate::InvalidCoordinate(placement.coord.to_string()).into());
            }
            let tile = catalog
                .get(&placement.tile)
                .ok_or_else(|| Indeterminate::UnknownTile(placement.tile.to_string()))?;
            board = board.place_tile(placement.coord, tile, placement.orientation)?;
        }
        Ok(board)
    }
}

impl BoardQuery for Board {
    fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    fn cells(&self) -> Vec<Coordinate> {
        self.cells.iter().copied().collect()
    }

    fn space(&self, coord: Coordinate) -> Option<&Space> {
        self.spaces.get(&coord)
    }

    fn validate_neighbors(
        &self,
        coord: Coordinate,
        tile: &Tile,
        orientation: Orientation,
    ) -> Result<(), InvalidPlacement> {
        let paths = self.path_map(coord, tile, orientation);
        for direction in paths.exits() {
            if self.is_blocked(coord, direction) {
                return Err(InvalidPlacement::BlockedEdge { coord, direction });
            }
            let neighbor = self
                .neighbor(coord, direction)
                .filter(|neighbor| self.contains(*neighbor))
                .ok_or(InvalidPlacement::OffBoard { coord, direction })?;

            if let Some(space) = self.space(neighbor) {
                let faces_back = space.paths.exits().any(|exit| exit == direction.opposite());
                if space.is_fixed() && !faces_back {
                    return Err(InvalidPlacement::UnmatchedNeighbor {
                        coord,
                        direction,
                        neighbor,
                    });
                }
            }
        }
        Ok(())
    }

    fn validate_upgrade(
        &self,
        space: Option<&Space>,
        coord: Coordinate,
        tile: &Tile,
        orientation: Orientation,
    ) -> Result<(), InvalidPlacement> {
        let Some(space) = space else {
            if tile.is_stop() {
                return Err(InvalidPlacement::StopOnEmptyCell { coord });
            }
            return Ok(());
        };

        let UpgradeLevel::Phase(space_level) = space.upgrade_level else {
            return Err(InvalidPlacement::FixedSpace { coord });
        };
        if tile.upgrade_level <= space_level {
            return Err(InvalidPlacement::NotAnUpgrade {
                coord,
                space_level,
                tile_level: tile.upgrade_level,
            });
        }
        if space.shape != tile.shape {
            return Err(InvalidPlacement::CategoryMismatch { coord });
        }

        let paths = self.path_map(coord, tile, orientation);
        if let Some((from, to)) = space.paths.connections().find(|(a, b)| !paths.connects(*a, *b)) {
            return Err(InvalidPlacement::DroppedConnection { coord, from, to });
        }
        Ok(())
    }
}

/// One tile laid on the board: `coord`, `tile`, and `orientation`.
///
/// Parses from `"C5=57:2"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Where the tile is.
    pub coord: Coordinate,
    /// Which tile.
    pub tile: TileId,
    /// Its rotation.
    pub orientation: Orientation,
}

impl FromStr for Placement {
    type Err = Indeterminate;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (coord, rest) = raw
            .split_once('=')
            .ok_or_else(|| Indeterminate::InvalidCoordinate(raw.to_string()))?;
        let (tile, orientation) = rest
            .split_once(':')
            .ok_or_else(|| Indeterminate::InvalidOrientation(rest.to_string()))?;

        let coord = coord
            .parse()
            .map_err(|_| Indeterminate::InvalidCoordinate(coord.to_string()))?;
        let orientation = Orientation::parse(orientation)
            .ok_or_else(|| Indeterminate::InvalidOrientation(orientation.to_string()))?;
        let tile = TileId::new(tile);
        if tile.as_str().is_empty() {
            return Err(Indeterminate::MissingInput("tile"));
        }

        Ok(Self {
            coord,
            tile,
            orientation,
        })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}:{}", self.coord, self.tile, self.orientation)
    }
}
