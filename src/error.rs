//! Error types for legality queries, placement rules, and catalog loading.
//!
//! The three query families keep their outcomes apart:
//! - [`Indeterminate`]: the input could not be interpreted, so there is no answer.
//! - [`InvalidPlacement`]: a placement breaks a board rule. Resolvers treat this
//!   as "not legal" and keep enumerating.
//! - [`StationError`]: station derivation was asked of a space without branches.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::hex::{Coordinate, Direction};

/// Malformed query input. Distinct from a legal-but-empty answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Indeterminate {
    /// A required input was empty or not supplied.
    #[error("missing {0}")]
    MissingInput(&'static str),
    /// The coordinate did not parse or is not on the board.
    #[error("invalid coordinate {0:?}")]
    InvalidCoordinate(String),
    /// The tile id is not in the catalog.
    #[error("unknown tile {0:?}")]
    UnknownTile(String),
    /// The orientation is not an integer in `0..6`.
    #[error("invalid orientation {0:?}")]
    InvalidOrientation(String),
}

/// A board rule rejected a tile placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidPlacement {
    /// A track exit points at a cell that is not on the board.
    #[error("exit {direction} of {coord} leads off the board")]
    OffBoard {
        /// Cell being placed on.
        coord: Coordinate,
        /// Offending exit.
        direction: Direction,
    },
    /// A track exit crosses an impassable hex side.
    #[error("exit {direction} of {coord} crosses a blocked edge")]
    BlockedEdge {
        /// Cell being placed on.
        coord: Coordinate,
        /// Offending exit.
        direction: Direction,
    },
    /// A track exit runs into a fixed neighbor with no track facing back.
    #[error("exit {direction} of {coord} runs into {neighbor}, which has no matching exit")]
    UnmatchedNeighbor {
        /// Cell being placed on.
        coord: Coordinate,
        /// Offending exit.
        direction: Direction,
        /// The fixed neighbor.
        neighbor: Coordinate,
    },
    /// Stop tiles (cities, towns) cannot be laid on an empty cell.
    #[error("{coord} is empty and cannot take a stop tile")]
    StopOnEmptyCell {
        /// Cell being placed on.
        coord: Coordinate,
    },
    /// The occupant is a fixed tile and cannot be upgraded.
    #[error("{coord} holds a fixed tile")]
    FixedSpace {
        /// Cell being placed on.
        coord: Coordinate,
    },
    /// The tile does not raise the upgrade level.
    #[error("level {tile_level} does not upgrade level {space_level} at {coord}")]
    NotAnUpgrade {
        /// Cell being placed on.
        coord: Coordinate,
        /// Level of the occupant.
        space_level: u8,
        /// Level of the candidate tile.
        tile_level: u8,
    },
    /// City/town/attribute category differs from the occupant's.
    #[error("tile category does not match the occupant of {coord}")]
    CategoryMismatch {
        /// Cell being placed on.
        coord: Coordinate,
    },
    /// The tile drops a connection the occupant already has.
    #[error("upgrade at {coord} drops the connection {from}-{to}")]
    DroppedConnection {
        /// Cell being placed on.
        coord: Coordinate,
        /// One end of the lost connection.
        from: Direction,
        /// Other end of the lost connection.
        to: Direction,
    },
}

/// Failure laying a tile onto a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The input could not be interpreted.
    #[error(transparent)]
    Indeterminate(#[from] Indeterminate),
    /// A board rule rejected the tile.
    #[error(transparent)]
    Rejected(#[from] InvalidPlacement),
}

/// Failure deriving split-city station coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StationError {
    /// The input could not be interpreted.
    #[error(transparent)]
    Indeterminate(#[from] Indeterminate),
    /// The resolved space has no branch structure.
    #[error("{0} is not a split city")]
    NotASplitCity(Coordinate),
    /// A branch's representative side points outside the addressable grid.
    #[error("branch of {coord} at side {direction} has no addressable neighbor")]
    UnaddressableBranch {
        /// The split-city cell.
        coord: Coordinate,
        /// The representative side.
        direction: Direction,
    },
}

/// Failure loading a game's tile catalog or board.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading a data file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A data file is not valid JSON for its schema.
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
    /// In-memory JSON is not valid for its schema.
    #[error("failed to parse game data: {0}")]
    Parse(#[from] serde_json::Error),
    /// The data parsed but breaks a structural rule.
    #[error("invalid game data: {0}")]
    Invalid(String),
    /// No game directory with this name exists.
    #[error("unknown game {0:?}")]
    UnknownGame(String),
}

/// Result type for catalog and board loading.
pub type CatalogResult<T> = Result<T, CatalogError>;
