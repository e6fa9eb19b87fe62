//! Tile definitions: identifiers, shape categories, track, and station capacity.

mod catalog;
mod paths;

pub use catalog::TileCatalog;
pub(crate) use catalog::{CapacitySpec, read_json};
pub use paths::{PathMap, PathSignature};

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hex::{Direction, Orientation};

/// Width tile ids are zero-padded to when ordering them for display.
const ID_SORT_WIDTH: usize = 3;

/// Catalog identifier of a tile, e.g. `"57"` or `"X3"`.
///
/// Ordered as if left-padded with zeros to three characters, so numeric ids
/// sort numerically (`"9" < "14" < "57"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TileIdRepr", into = "String")]
pub struct TileId(String);

/// Tile ids may be written as JSON strings or numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum TileIdRepr {
    Text(String),
    Number(u64),
}

impl TileId {
    /// Wrap a raw id. Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// The id as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn padded(&self) -> impl Iterator<Item = char> + '_ {
        let pad = ID_SORT_WIDTH.saturating_sub(self.0.chars().count());
        std::iter::repeat_n('0', pad).chain(self.0.chars())
    }
}

impl TryFrom<TileIdRepr> for TileId {
    type Error = String;

    fn try_from(repr: TileIdRepr) -> Result<Self, Self::Error> {
        let id = match repr {
            TileIdRepr::Text(text) => Self::new(&text),
            TileIdRepr::Number(number) => Self(number.to_string()),
        };
        if id.0.is_empty() {
            Err("tile id must not be empty".to_string())
        } else {
            Ok(id)
        }
    }
}

impl From<TileId> for String {
    fn from(id: TileId) -> Self {
        id.0
    }
}

impl Ord for TileId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.padded()
            .cmp(other.padded())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for TileId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category of a tile or space, used to decide upgrade compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    /// Has one or more city stations.
    #[serde(default)]
    pub is_city: bool,
    /// Has a town (a stop without stations).
    #[serde(default)]
    pub is_town: bool,
    /// Finer upgrade classes, e.g. `"chicago"`, `"oo"`.
    #[serde(default)]
    pub upgrade_attrs: BTreeSet<String>,
}

impl Shape {
    /// Plain track: no city, no town, no attributes.
    #[must_use]
    pub fn track() -> Self {
        Self::default()
    }

    /// A city shape with no extra attributes.
    #[must_use]
    pub fn city() -> Self {
        Self {
            is_city: true,
            ..Self::default()
        }
    }

    /// A town shape with no extra attributes.
    #[must_use]
    pub fn town() -> Self {
        Self {
            is_town: true,
            ..Self::default()
        }
    }

    /// Add an upgrade attribute.
    #[must_use]
    pub fn with_attr(mut self, attr: &str) -> Self {
        self.upgrade_attrs.insert(attr.to_string());
        self
    }

    /// Whether this is a revenue stop (city or town).
    #[must_use]
    pub fn is_stop(&self) -> bool {
        self.is_city || self.is_town
    }
}

/// Sides that together make up one independently tokenable station of a
/// split city.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Branch(BTreeSet<Direction>);

impl Branch {
    /// Build a branch; `None` if no sides are given.
    #[must_use]
    pub fn new(sides: impl IntoIterator<Item = Direction>) -> Option<Self> {
        let sides: BTreeSet<_> = sides.into_iter().collect();
        (!sides.is_empty()).then_some(Self(sides))
    }

    /// Sides of this branch, ascending.
    pub fn sides(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.iter().copied()
    }

    /// Whether `side` belongs to this branch.
    #[must_use]
    pub fn contains(&self, side: Direction) -> bool {
        self.0.contains(&side)
    }

    /// The same branch after turning the tile by `orientation`.
    #[must_use]
    pub fn rotated(&self, orientation: Orientation) -> Self {
        Self(self.0.iter().map(|side| side.rotate(orientation)).collect())
    }
}

/// How many station tokens a tile or space holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Capacity {
    /// No stations (plain track or towns).
    #[default]
    None,
    /// A single city with `n` station slots.
    Single(u8),
    /// A split city: slots per independently reachable branch.
    Split(BTreeMap<Branch, u8>),
}

impl Capacity {
    /// Whether stations are tied to separate branches.
    #[must_use]
    pub fn has_branches(&self) -> bool {
        matches!(self, Capacity::Split(_))
    }

    /// Total station slots across all branches.
    #[must_use]
    pub fn total(&self) -> u32 {
        match self {
            Capacity::None => 0,
            Capacity::Single(n) => u32::from(*n),
            Capacity::Split(branches) => branches.values().map(|n| u32::from(*n)).sum(),
        }
    }

    /// The same capacity after turning the tile by `orientation`.
    #[must_use]
    pub fn rotated(&self, orientation: Orientation) -> Self {
        match self {
            Capacity::Split(branches) => Capacity::Split(
                branches
                    .iter()
                    .map(|(branch, n)| (branch.rotated(orientation), *n))
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

/// A tile from the game's tile manifest, in its unrotated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Catalog id.
    pub id: TileId,
    /// Game phase the tile belongs to (yellow = 1, green = 2, ...).
    pub upgrade_level: u8,
    /// City/town category and upgrade attributes.
    pub shape: Shape,
    /// Track at orientation 0.
    pub paths: PathMap,
    /// Station slots at orientation 0.
    pub capacity: Capacity,
}

impl Tile {
    /// A plain track tile.
    #[must_use]
    pub fn track(id: &str, upgrade_level: u8, paths: PathMap) -> Self {
        Self {
            id: TileId::new(id),
            upgrade_level,
            shape: Shape::track(),
            paths,
            capacity: Capacity::None,
        }
    }

    /// Replace the shape.
    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Replace the capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether this is a city or town tile.
    #[must_use]
    pub fn is_stop(&self) -> bool {
        self.shape.is_stop()
    }

    /// Track as laid at `orientation`.
    #[must_use]
    pub fn paths_at(&self, orientation: Orientation) -> PathMap {
        self.paths.rotated(orientation)
    }

    /// Station slots as laid at `orientation`.
    #[must_use]
    pub fn capacity_at(&self, orientation: Orientation) -> Capacity {
        self.capacity.rotated(orientation)
    }
}
