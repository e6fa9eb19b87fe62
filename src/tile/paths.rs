//! Track connectivity within a tile.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::hex::{Direction, Orientation};

/// Which sides of a hex are joined by track.
///
/// Maps each exit to the set of exits it connects to. A side connected to
/// itself is a stub that ends at the tile's stop. Both the map and the sets
/// are ordered, so two path maps with the same connections compare and hash
/// equal regardless of how they were built.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathMap(BTreeMap<Direction, BTreeSet<Direction>>);

/// Fully ordered connectivity fingerprint of a placed tile.
///
/// Orientations whose signatures match lay identical track.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathSignature(Vec<(Direction, Vec<Direction>)>);

impl PathMap {
    /// An empty path map (no track).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a symmetric path map from pairs of connected sides.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Direction, Direction)>) -> Self {
        let mut paths = Self::new();
        for (a, b) in pairs {
            paths.connect(a, b);
        }
        paths
    }

    /// Join two sides in both directions.
    pub fn connect(&mut self, a: Direction, b: Direction) {
        self.0.entry(a).or_default().insert(b);
        self.0.entry(b).or_default().insert(a);
    }

    /// Whether there is no track at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sides with at least one connection, ascending.
    pub fn exits(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.keys().copied()
    }

    /// Whether side `a` connects to side `b`.
    #[must_use]
    pub fn connects(&self, a: Direction, b: Direction) -> bool {
        self.0.get(&a).is_some_and(|targets| targets.contains(&b))
    }

    /// Every `(from, to)` connection in ascending order.
    pub fn connections(&self) -> impl Iterator<Item = (Direction, Direction)> + '_ {
        self.0
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (*from, *to)))
    }

    /// The same track turned clockwise by `orientation`.
    #[must_use]
    pub fn rotated(&self, orientation: Orientation) -> Self {
        Self(
            self.0
                .iter()
                .map(|(from, targets)| {
                    (
                        from.rotate(orientation),
                        targets.iter().map(|to| to.rotate(orientation)).collect(),
                    )
                })
                .collect(),
        )
    }

    /// Add the reverse of every connection, so `a -> b` implies `b -> a`.
    #[must_use]
    pub fn symmetrized(&self) -> Self {
        Self::from_pairs(self.connections())
    }

    /// Connectivity fingerprint: exits ascending, each with its sorted targets.
    #[must_use]
    pub fn signature(&self) -> PathSignature {
        PathSignature(
            self.0
                .iter()
                .map(|(from, targets)| (*from, targets.iter().copied().collect()))
                .collect(),
        )
    }
}

impl FromIterator<(Direction, BTreeSet<Direction>)> for PathMap {
    fn from_iter<I: IntoIterator<Item = (Direction, BTreeSet<Direction>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
