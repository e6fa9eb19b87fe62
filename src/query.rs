//! Query operations over raw user input, with JSON-ready responses.
//!
//! [`Engine`] parses and validates request strings, runs the resolvers in
//! [`crate::legality`], and logs each request and response. Response field
//! names match the JSON the board UI consumes.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::info;

use crate::board::BoardQuery;
use crate::error::{Indeterminate, StationError};
use crate::hex::{Coordinate, Orientation};
use crate::legality::{self, CityListing};
use crate::tile::{Tile, TileCatalog, TileId};

/// Response of [`Engine::legal_tiles`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalTilesResponse {
    /// Legal tile ids ordered by upgrade level, then id.
    #[serde(rename = "legal-tile-ids")]
    pub legal_tile_ids: Vec<TileId>,
}

/// Response of [`Engine::legal_orientations`].
///
/// Both fields are `None` when the request could not be interpreted, which
/// is different from a tile with no legal orientations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrientationsResponse {
    /// Canonical orientations, ascending.
    #[serde(rename = "legal-orientations")]
    pub legal_orientations: Option<Vec<Orientation>>,
    /// Redundant orientation -> canonical orientation.
    pub translations: Option<BTreeMap<Orientation, Orientation>>,
}

/// Response of the split-city station queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationsResponse {
    /// Station cells, ascending.
    #[serde(rename = "split-city-stations")]
    pub split_city_stations: Vec<Coordinate>,
}

/// Station and phase details of one space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpaceInfo {
    /// Total station slots.
    pub capacity: u32,
    /// Upgrade level; `None` for fixed spaces and empty cells.
    pub phase: Option<u8>,
    /// Whether stations are tied to branches.
    #[serde(rename = "is-split-city")]
    pub is_split_city: bool,
}

/// Response of [`Engine::space_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpaceInfoResponse {
    /// Details of the space.
    pub info: SpaceInfo,
}

/// Response of the tile-coordinate listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileCoordsResponse {
    /// Cells that can take a tile, ascending.
    #[serde(rename = "tile-coords")]
    pub tile_coords: Vec<Coordinate>,
}

/// Legality queries bound to one board and tile catalog.
#[derive(Debug)]
pub struct Engine<'a, B: ?Sized> {
    board: &'a B,
    catalog: &'a TileCatalog,
}

impl<B: ?Sized> Clone for Engine<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for Engine<'_, B> {}

impl<'a, B> Engine<'a, B>
where
    B: BoardQuery + ?Sized,
{
    /// Bind queries to `board` and `catalog`.
    #[must_use]
    pub fn new(board: &'a B, catalog: &'a TileCatalog) -> Self {
        Self { board, catalog }
    }

    /// Legal tile ids for the cell `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`Indeterminate`] if `coord` is missing or not on the board.
    pub fn legal_tiles(&self, coord: &str) -> Result<LegalTilesResponse, Indeterminate> {
        info!(coord, "legal tiles request");
        let coord = legality::parse_coordinate(self.board, coord)?;
        let legal_tile_ids = legality::legal_tiles(self.board, self.catalog, coord);
        info!(%coord, ?legal_tile_ids, "legal tiles response");
        Ok(LegalTilesResponse { legal_tile_ids })
    }

    /// Canonical orientations and translations of `tile` at `coord`.
    ///
    /// Malformed input yields a response with both fields `None`.
    #[must_use]
    pub fn legal_orientations(&self, coord: &str, tile: &str) -> OrientationsResponse {
        info!(coord, tile, "legal orientations request");
        let response = match self.resolve(coord, tile) {
            Ok(legal) => OrientationsResponse {
                legal_orientations: Some(legal.canonical.into_iter().collect()),
                translations: Some(legal.translations),
            },
            Err(reason) => {
                info!(%reason, "legal orientations indeterminate");
                OrientationsResponse::default()
            }
        };
        info!(coord, tile, orientations = ?response.legal_orientations, "legal orientations response");
        response
    }

    /// Like [`Engine::legal_orientations`], but reports why the input was
    /// rejected instead of returning empty fields.
    ///
    /// # Errors
    ///
    /// Returns [`Indeterminate`] for a malformed coordinate or unknown tile.
    pub fn resolve(&self, coord: &str, tile: &str) -> Result<legality::LegalOrientations, Indeterminate> {
        let coord = legality::parse_coordinate(self.board, coord)?;
        let tile = legality::lookup_tile(self.catalog, tile)?;
        Ok(legality::resolve_orientations(self.board, coord, tile))
    }

    /// Station cells of the split city at `coord`.
    ///
    /// When both `tile` and `orientation` are given, the answer is for that
    /// hypothetical placement instead of the current occupant.
    ///
    /// # Errors
    ///
    /// Returns [`StationError::Indeterminate`] for malformed input and
    /// [`StationError::NotASplitCity`] if the space has no branches.
    pub fn split_city_stations(
        &self,
        coord: &str,
        tile: Option<&str>,
        orientation: Option<&str>,
    ) -> Result<StationsResponse, StationError> {
        self.legal_split_city_stations(coord, tile, orientation, &BTreeSet::new())
    }

    /// [`Engine::split_city_stations`] minus the stations in `existing`.
    ///
    /// # Errors
    ///
    /// As [`Engine::split_city_stations`].
    pub fn legal_split_city_stations(
        &self,
        coord: &str,
        tile: Option<&str>,
        orientation: Option<&str>,
        existing: &BTreeSet<Coordinate>,
    ) -> Result<StationsResponse, StationError> {
        info!(coord, ?tile, ?orientation, existing = existing.len(), "split city stations request");
        let coord = legality::parse_coordinate(self.board, coord)?;
        let hypothetical = self.hypothetical(tile, orientation)?;
        let stations = legality::split_city_stations(self.board, coord, hypothetical)?;
        let split_city_stations: Vec<_> = stations.difference(existing).copied().collect();
        info!(%coord, ?split_city_stations, "split city stations response");
        Ok(StationsResponse { split_city_stations })
    }

    /// Capacity, phase, and split-city status of the space at `coord`, or of
    /// the space a hypothetical `tile` at `orientation` would produce.
    ///
    /// # Errors
    ///
    /// Returns [`Indeterminate`] for malformed input.
    pub fn space_info(
        &self,
        coord: &str,
        tile: Option<&str>,
        orientation: Option<&str>,
    ) -> Result<SpaceInfoResponse, Indeterminate> {
        info!(coord, ?tile, ?orientation, "space info request");
        let coord = legality::parse_coordinate(self.board, coord)?;
        let info = match self.hypothetical(tile, orientation)? {
            Some((tile, orientation)) => {
                let space = self.board.place(coord, tile, orientation);
                SpaceInfo {
                    capacity: space.capacity.total(),
                    phase: space.upgrade_level.phase(),
                    is_split_city: space.has_branches(),
                }
            }
            None => self.board.space(coord).map_or(
                SpaceInfo {
                    capacity: 0,
                    phase: None,
                    is_split_city: false,
                },
                |space| SpaceInfo {
                    capacity: space.capacity.total(),
                    phase: space.upgrade_level.phase(),
                    is_split_city: space.has_branches(),
                },
            ),
        };
        info!(%coord, ?info, "space info response");
        Ok(SpaceInfoResponse { info })
    }

    /// Every city on the board, and the split cities among them.
    #[must_use]
    pub fn cities(&self) -> CityListing {
        info!("cities request");
        let listing = legality::cities(self.board);
        info!(cities = ?listing.cities, "cities response");
        listing
    }

    /// Every cell that can host a tile.
    #[must_use]
    pub fn tile_coords(&self) -> TileCoordsResponse {
        info!("tile coordinates request");
        let tile_coords = legality::tile_coords(self.board);
        info!(?tile_coords, "tile coordinates response");
        TileCoordsResponse { tile_coords }
    }

    /// Cells still free for a new tile, keeping `current` selectable.
    ///
    /// Entries of `existing` that do not parse are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Indeterminate::InvalidCoordinate`] if `current` is given and
    /// not on the board.
    pub fn legal_tile_coords(
        &self,
        existing: &[&str],
        current: Option<&str>,
    ) -> Result<TileCoordsResponse, Indeterminate> {
        info!(?existing, ?current, "legal tile coordinates request");
        let existing: BTreeSet<Coordinate> = existing
            .iter()
            .filter_map(|raw| raw.parse().ok())
            .collect();
        let current = current
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| legality::parse_coordinate(self.board, raw))
            .transpose()?;
        let tile_coords = legality::legal_tile_coords(self.board, &existing, current);
        info!(?tile_coords, "legal tile coordinates response");
        Ok(TileCoordsResponse { tile_coords })
    }

    fn hypothetical(
        &self,
        tile: Option<&str>,
        orientation: Option<&str>,
    ) -> Result<Option<(&'a Tile, Orientation)>, Indeterminate> {
        fn present(raw: Option<&str>) -> Option<&str> {
            raw.filter(|raw| !raw.trim().is_empty())
        }

        match (present(tile), present(orientation)) {
            (Some(tile), Some(orientation)) => Ok(Some((
                legality::lookup_tile(self.catalog, tile)?,
                legality::parse_orientation(orientation)?,
            ))),
            _ => Ok(None),
        }
    }
}
