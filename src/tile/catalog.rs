//! The tile manifest for a game and its JSON format.
//!
//! `tiles.json` is an array of tile records:
//!
//! ```json
//! [
//!   { "id": "8", "upgrade_level": 1, "paths": { "0": [2] } },
//!   { "id": "57", "upgrade_level": 1, "is_city": true, "paths": { "0": [3] }, "capacity": 1 },
//!   { "id": "X1", "upgrade_level": 2, "is_city": true, "upgrade_attrs": ["oo"],
//!     "paths": { "0": [1], "3": [4] },
//!     "capacity": { "branches": [ { "sides": [0, 1] }, { "sides": [3, 4] } ] } }
//! ]
//! ```
//!
//! Paths are symmetrized on load, so listing each connection once is enough.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{Branch, Capacity, PathMap, Shape, Tile, TileId};
use crate::error::{CatalogError, CatalogResult};
use crate::hex::Direction;

/// All tiles available in a game, keyed and ordered by id.
#[derive(Debug, Clone, Default)]
pub struct TileCatalog {
    tiles: BTreeMap<TileId, Tile>,
}

impl TileCatalog {
    /// Build a catalog, rejecting duplicate ids and malformed capacities.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Invalid`] if two tiles share an id or a split
    /// city names a branch side with no track.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> CatalogResult<Self> {
        let mut by_id = BTreeMap::new();
        for tile in tiles {
            validate_tile(&tile)?;
            if by_id.contains_key(&tile.id) {
                return Err(CatalogError::Invalid(format!("duplicate tile id {}", tile.id)));
            }
            by_id.insert(tile.id.clone(), tile);
        }
        Ok(Self { tiles: by_id })
    }

    /// Parse a catalog from `tiles.json` contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the schema or the tiles
    /// fail validation.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let specs: Vec<TileSpec> = serde_json::from_str(json)?;
        Self::from_specs(specs)
    }

    /// Load a catalog from a `tiles.json` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let specs: Vec<TileSpec> = read_json(path)?;
        Self::from_specs(specs)
    }

    fn from_specs(specs: Vec<TileSpec>) -> CatalogResult<Self> {
        let tiles = specs
            .into_iter()
            .map(TileSpec::into_tile)
            .collect::<CatalogResult<Vec<_>>>()?;
        Self::from_tiles(tiles)
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn get(&self, id: &TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// Look up a tile by its raw id string.
    #[must_use]
    pub fn lookup(&self, raw: &str) -> Option<&Tile> {
        self.tiles.get(&TileId::new(raw))
    }

    /// All tiles in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

fn validate_tile(tile: &Tile) -> CatalogResult<()> {
    if let Capacity::Split(branches) = &tile.capacity {
        if branches.len() < 2 {
            return Err(CatalogError::Invalid(format!(
                "tile {} is a split city with fewer than two branches",
                tile.id
            )));
        }
        for side in branches.keys().flat_map(Branch::sides) {
            if !tile.paths.exits().any(|exit| exit == side) {
                return Err(CatalogError::Invalid(format!(
                    "tile {} has a branch on side {side} with no track",
                    tile.id
                )));
            }
        }
    }
    Ok(())
}

/// Read and deserialize a JSON data file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> CatalogResult<T> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// One record of `tiles.json`.
#[derive(Debug, Deserialize)]
struct TileSpec {
    id: TileId,
    upgrade_level: u8,
    #[serde(flatten)]
    shape: Shape,
    #[serde(default)]
    paths: PathMap,
    #[serde(default)]
    capacity: Option<CapacitySpec>,
}

impl TileSpec {
    fn into_tile(self) -> CatalogResult<Tile> {
        let capacity = self
            .capacity
            .map(CapacitySpec::into_capacity)
            .transpose()
            .map_err(|reason| CatalogError::Invalid(format!("tile {}: {reason}", self.id)))?
            .unwrap_or_default();
        Ok(Tile {
            id: self.id,
            upgrade_level: self.upgrade_level,
            shape: self.shape,
            paths: self.paths.symmetrized(),
            capacity,
        })
    }
}

/// Station capacity as written in data files: a slot count or a list of branches.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CapacitySpec {
    Slots(u8),
    Branches { branches: Vec<BranchSpec> },
}

#[derive(Debug, Deserialize)]
pub(crate) struct BranchSpec {
    sides: Vec<Direction>,
    #[serde(default = "default_branch_slots")]
    slots: u8,
}

const fn default_branch_slots() -> u8 {
    1
}

impl CapacitySpec {
    pub(crate) fn into_capacity(self) -> Result<Capacity, String> {
        match self {
            CapacitySpec::Slots(0) => Ok(Capacity::None),
            CapacitySpec::Slots(n) => Ok(Capacity::Single(n)),
            CapacitySpec::Branches { branches } => {
                let mut split = BTreeMap::new();
                for spec in branches {
                    let branch = Branch::new(spec.sides)
                        .ok_or_else(|| "branch with no sides".to_string())?;
                    if split.insert(branch, spec.slots).is_some() {
                        return Err("duplicate branch".to_string());
                    }
                }
                Ok(Capacity::Split(split))
            }
        }
    }
}
