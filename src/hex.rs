//! Hex-grid geometry: cell addresses, sides, and rotations.

mod coord;
mod direction;

pub use coord::{Coordinate, MAX_ROWS, ParseCoordinateError};
pub use direction::{Direction, Orientation, SIDES};
