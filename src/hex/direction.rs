//! Hex side directions and tile rotations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of sides on a hex (and number of distinct rotations).
pub const SIDES: u8 = 6;

/// One of the six sides of a hex, numbered clockwise from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Direction(u8);

impl Direction {
    /// All six directions in ascending order.
    pub const ALL: [Direction; 6] = [
        Direction(0),
        Direction(1),
        Direction(2),
        Direction(3),
        Direction(4),
        Direction(5),
    ];

    /// Create a direction, returning `None` if `value` is not in `0..6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < SIDES { Some(Self(value)) } else { None }
    }

    /// Raw index in `0..6`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The side this direction ends up on after turning the tile by `orientation`.
    #[must_use]
    pub const fn rotate(self, orientation: Orientation) -> Self {
        Self((self.0 + orientation.0) % SIDES)
    }

    /// The side facing this one across the shared edge.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self((self.0 + 3) % SIDES)
    }
}

impl TryFrom<u8> for Direction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("direction {value} out of range 0..{SIDES}"))
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.0
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 60-degree-per-step clockwise rotation applied to a tile before it is laid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Orientation(u8);

impl Orientation {
    /// All six orientations in ascending order.
    pub const ALL: [Orientation; 6] = [
        Orientation(0),
        Orientation(1),
        Orientation(2),
        Orientation(3),
        Orientation(4),
        Orientation(5),
    ];

    /// Create an orientation, returning `None` if `value` is not in `0..6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < SIDES { Some(Self(value)) } else { None }
    }

    /// Raw index in `0..6`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Parse an orientation from user input such as `"3"`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u8>().ok().and_then(Self::new)
    }
}

impl TryFrom<u8> for Orientation {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("orientation {value} out of range 0..{SIDES}"))
    }
}

impl From<Orientation> for u8 {
    fn from(orientation: Orientation) -> Self {
        orientation.0
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_bounds() {
        assert!(Direction::new(5).is_some());
        assert!(Direction::new(6).is_none());
        assert!(Orientation::new(6).is_none());
    }

    #[test]
    fn test_rotate_wraps() {
        let d = Direction::new(4).unwrap();
        let o = Orientation::new(3).unwrap();
        assert_eq!(d.rotate(o).index(), 1);
        assert_eq!(d.rotate(Orientation::ALL[0]), d);
    }

    #[test]
    fn test_opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn test_orientation_parse() {
        assert_eq!(Orientation::parse(" 2 "), Orientation::new(2));
        assert_eq!(Orientation::parse("6"), None);
        assert_eq!(Orientation::parse("-1"), None);
        assert_eq!(Orientation::parse("north"), None);
    }
}
