// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Hexrail: tile-placement legality for 18xx hex boards.
//!
//! Given a board cell and a candidate tile, the engine answers:
//! - which tiles may be laid there at all,
//! - at which orientations, with rotations that give identical track
//!   collapsed onto the lowest one,
//! - and for split cities, which neighboring cells address each station.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │  CLI / Engine (request parsing)        │
//! ├────────────────────────────────────────┤
//! │  Legality resolvers                    │
//! ├────────────────────────────────────────┤
//! │  BoardQuery  │  TileCatalog            │
//! ├────────────────────────────────────────┤
//! │  GameRegistry (tiles.json, board.json) │
//! └────────────────────────────────────────┘
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod hex;
pub mod legality;
pub mod query;
pub mod registry;
pub mod tile;

pub use board::{Board, BoardQuery, Placement, Space, UpgradeLevel};
pub use config::EngineConfig;
pub use error::{CatalogError, Indeterminate, InvalidPlacement, PlacementError, StationError};
pub use hex::{Coordinate, Direction, Orientation};
pub use legality::{LegalOrientations, legal_tiles, resolve_orientations, split_city_stations};
pub use query::Engine;
pub use registry::{Game, GameRegistry};
pub use tile::{Capacity, Shape, Tile, TileCatalog, TileId};
