//! `board.json`: the printed map.
//!
//! ```json
//! {
//!   "rows": { "A": [15, 19], "B": [2, 20] },
//!   "cells": ["C5"],
//!   "spaces": [
//!     { "coord": "D6", "nickname": "Chicago", "upgrade_level": 0, "is_city": true,
//!       "upgrade_attrs": ["chicago"], "capacity": 4 },
//!     { "coord": "A15", "nickname": "Detroit", "upgrade_level": null, "is_city": true,
//!       "paths": { "3": [3] } }
//!   ],
//!   "blocked_edges": [ { "coord": "C5", "side": 1 } ]
//! }
//! ```
//!
//! `rows` gives the first and last column of each row (columns step by two).
//! A space with a missing or `null` `upgrade_level` is fixed.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::{Board, BoardQuery, Space, SpaceOrigin, UpgradeLevel};
use crate::error::{CatalogError, CatalogResult};
use crate::hex::{Coordinate, Direction};
use crate::tile::{CapacitySpec, PathMap, Shape, read_json};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BoardSpec {
    #[serde(default)]
    rows: BTreeMap<String, [u16; 2]>,
    #[serde(default)]
    cells: Vec<Coordinate>,
    #[serde(default)]
    spaces: Vec<SpaceSpec>,
    #[serde(default)]
    blocked_edges: Vec<EdgeSpec>,
}

#[derive(Debug, Deserialize)]
struct SpaceSpec {
    coord: Coordinate,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    upgrade_level: Option<u8>,
    #[serde(flatten)]
    shape: Shape,
    #[serde(default)]
    paths: PathMap,
    #[serde(default)]
    capacity: Option<CapacitySpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeSpec {
    coord: Coordinate,
    side: Direction,
}

impl Board {
    /// Parse a board from `board.json` contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the schema or a space or
    /// blocked edge refers to a cell that is not on the board.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let spec: BoardSpec = serde_json::from_str(json)?;
        spec.into_board()
    }

    /// Load a board from a `board.json` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let spec: BoardSpec = read_json(path)?;
        spec.into_board()
    }
}

impl BoardSpec {
    fn into_board(self) -> CatalogResult<Board> {
        let mut cells = self.cells;
        for (letter, [first, last]) in &self.rows {
            let probe = format!("{letter}{first}");
            let start: Coordinate = probe
                .parse()
                .map_err(|e| CatalogError::Invalid(format!("row {letter:?}: {e}")))?;
            if last < first {
                return Err(CatalogError::Invalid(format!(
                    "row {letter:?} ends at {last} before it starts at {first}"
                )));
            }
            cells.extend(
                (*first..=*last)
                    .step_by(2)
                    .filter_map(|col| Coordinate::new(start.row(), col)),
            );
        }

        let mut board = Board::new(cells);
        for spec in self.spaces {
            let coord = spec.coord;
            if !board.contains(coord) {
                return Err(CatalogError::Invalid(format!("space {coord} is not a board cell")));
            }
            let space = spec.into_space()?;
            board = board.with_space(coord, space);
        }
        for edge in self.blocked_edges {
            if !board.contains(edge.coord) {
                return Err(CatalogError::Invalid(format!(
                    "blocked edge on {} which is not a board cell",
                    edge.coord
                )));
            }
            board = board.with_blocked_edge(edge.coord, edge.side);
        }
        Ok(board)
    }
}

impl SpaceSpec {
    fn into_space(self) -> CatalogResult<Space> {
        let coord = self.coord;
        let capacity = self
            .capacity
            .map(CapacitySpec::into_capacity)
            .transpose()
            .map_err(|reason| CatalogError::Invalid(format!("space {coord}: {reason}")))?
            .unwrap_or_default();
        Ok(Space {
            origin: SpaceOrigin::Printed,
            nickname: self.nickname,
            upgrade_level: self.upgrade_level.map_or(UpgradeLevel::Fixed, UpgradeLevel::Phase),
            shape: self.shape,
            paths: self.paths.symmetrized(),
            capacity,
        })
    }
}
