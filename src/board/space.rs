//! What occupies a board cell.

use std::fmt;

use crate::hex::Orientation;
use crate::tile::{Capacity, PathMap, Shape, Tile, TileId};

/// Upgrade level of a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpgradeLevel {
    /// Upgradable; new tiles must have a strictly higher level.
    Phase(u8),
    /// Printed fixed tile (off-board areas, gray hexes). Never upgradable.
    Fixed,
}

impl UpgradeLevel {
    /// The numeric level, or `None` for fixed spaces.
    #[must_use]
    pub const fn phase(self) -> Option<u8> {
        match self {
            UpgradeLevel::Phase(level) => Some(level),
            UpgradeLevel::Fixed => None,
        }
    }
}

impl fmt::Display for UpgradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpgradeLevel::Phase(level) => write!(f, "{level}"),
            UpgradeLevel::Fixed => f.write_str("fixed"),
        }
    }
}

/// Where a space came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpaceOrigin {
    /// Printed on the map.
    Printed,
    /// A tile laid during play.
    Placed {
        /// The tile laid.
        tile: TileId,
        /// Its rotation.
        orientation: Orientation,
    },
}

/// The occupant of a board cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    /// Printed or placed.
    pub origin: SpaceOrigin,
    /// Display name of the stop, e.g. `"Chicago"`.
    pub nickname: Option<String>,
    /// Current upgrade level.
    pub upgrade_level: UpgradeLevel,
    /// City/town category and upgrade attributes.
    pub shape: Shape,
    /// Track currently on the space.
    pub paths: PathMap,
    /// Station slots.
    pub capacity: Capacity,
}

impl Space {
    /// A printed space with no track or stations.
    #[must_use]
    pub fn printed(shape: Shape, upgrade_level: UpgradeLevel) -> Self {
        Self {
            origin: SpaceOrigin::Printed,
            nickname: None,
            upgrade_level,
            shape,
            paths: PathMap::new(),
            capacity: Capacity::None,
        }
    }

    /// The space that results from laying `tile` at `orientation` over
    /// `previous`. The stop name carries over from the previous occupant.
    /// No rules are checked here.
    #[must_use]
    pub fn placed(tile: &Tile, orientation: Orientation, previous: Option<&Space>) -> Self {
        Self {
            origin: SpaceOrigin::Placed {
                tile: tile.id.clone(),
                orientation,
            },
            nickname: previous.and_then(|space| space.nickname.clone()),
            upgrade_level: UpgradeLevel::Phase(tile.upgrade_level),
            shape: tile.shape.clone(),
            paths: tile.paths_at(orientation),
            capacity: tile.capacity_at(orientation),
        }
    }

    /// Set the stop name.
    #[must_use]
    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.nickname = Some(nickname.to_string());
        self
    }

    /// Replace the track.
    #[must_use]
    pub fn with_paths(mut self, paths: PathMap) -> Self {
        self.paths = paths;
        self
    }

    /// Replace the station slots.
    #[must_use]
    pub fn with_capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether this space is a split city with per-branch stations.
    #[must_use]
    pub fn has_branches(&self) -> bool {
        self.capacity.has_branches()
    }

    /// Whether this space can never be upgraded.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.upgrade_level == UpgradeLevel::Fixed
    }

    /// Whether this space is a city or town.
    #[must_use]
    pub fn is_stop(&self) -> bool {
        self.shape.is_stop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::Direction;
    use crate::tile::Branch;

    #[test]
    fn test_placed_rotates_track_and_branches() {
        let d = |i| Direction::new(i).unwrap();
        let branches = [
            (Branch::new([d(0)]).unwrap(), 1),
            (Branch::new([d(3)]).unwrap(), 1),
        ];
        let tile = Tile::track("X2", 2, PathMap::from_pairs([(d(0), d(0)), (d(3), d(3))]))
            .with_shape(Shape::city())
            .with_capacity(Capacity::Split(branches.into_iter().collect()));
        let previous = Space::printed(Shape::city(), UpgradeLevel::Phase(1)).with_nickname("Chicago");

        let space = Space::placed(&tile, Orientation::new(1).unwrap(), Some(&previous));

        assert_eq!(space.nickname.as_deref(), Some("Chicago"));
        assert_eq!(space.upgrade_level, UpgradeLevel::Phase(2));
        assert!(space.has_branches());
        assert!(space.paths.exits().eq([d(1), d(4)]));
        let Capacity::Split(turned) = &space.capacity else {
            panic!("expected split capacity");
        };
        assert!(turned.contains_key(&Branch::new([d(1)]).unwrap()));
    }

    #[test]
    fn test_fixed_space() {
        let space = Space::printed(Shape::city(), UpgradeLevel::Fixed);
        assert!(space.is_fixed());
        assert_eq!(space.upgrade_level.phase(), None);
        assert!(!space.has_branches());
    }
}
