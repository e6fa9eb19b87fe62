//! Loaded games and the cache that shares them between queries.
//!
//! A game directory holds `tiles.json` and `board.json`:
//!
//! ```text
//! games/
//!   demo/
//!     tiles.json
//!     board.json
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::query::Engine;
use crate::tile::TileCatalog;

/// Tile manifest file inside a game directory.
pub const TILES_FILE: &str = "tiles.json";
/// Board layout file inside a game directory.
pub const BOARD_FILE: &str = "board.json";

/// One game's immutable data: its tile catalog and printed board.
#[derive(Debug, Clone)]
pub struct Game {
    /// Directory name of the game.
    pub name: String,
    /// Every tile the game ships with.
    pub catalog: TileCatalog,
    /// The board before any tiles are laid.
    pub board: Board,
}

impl Game {
    /// Load the game stored in `dir`. The game is named after the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either data file is missing, malformed, or invalid.
    pub fn load(dir: &Path) -> CatalogResult<Self> {
        let name = dir
            .file_name()
            .map_or_else(|| dir.display().to_string(), |name| name.to_string_lossy().into_owned());
        let catalog = TileCatalog::load(&dir.join(TILES_FILE))?;
        let board = Board::load(&dir.join(BOARD_FILE))?;
        info!(game = %name, tiles = catalog.len(), "game loaded");
        Ok(Self { name, catalog, board })
    }

    /// Queries against the printed board.
    #[must_use]
    pub fn engine(&self) -> Engine<'_, Board> {
        Engine::new(&self.board, &self.catalog)
    }
}

/// Cache of loaded games keyed by name.
///
/// Readers get an `Arc<Game>` that never changes under them. A reload
/// builds the new game completely before swapping it into the map.
#[derive(Debug)]
pub struct GameRegistry {
    root: PathBuf,
    always_reload: bool,
    games: RwLock<HashMap<String, Arc<Game>>>,
}

impl GameRegistry {
    /// A registry over the game directories under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, always_reload: bool) -> Self {
        Self {
            root: root.into(),
            always_reload,
            games: RwLock::new(HashMap::new()),
        }
    }

    /// A registry configured from `config`.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.data_dir.clone(), config.always_reload)
    }

    /// Directory games are loaded from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The game named `name`, loading it on first use.
    ///
    /// With `always_reload` set, the game is reloaded from disk every time.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownGame`] if there is no such game
    /// directory, or the load error if its data is broken.
    pub fn get(&self, name: &str) -> CatalogResult<Arc<Game>> {
        let cached = if self.always_reload {
            None
        } else {
            self.games.read().get(name).cloned()
        };
        match cached {
            Some(game) => Ok(game),
            None => self.reload(name),
        }
    }

    /// Load `name` from disk and replace the cached copy.
    ///
    /// On failure the previously cached game, if any, stays in place.
    ///
    /// # Errors
    ///
    /// As [`GameRegistry::get`].
    pub fn reload(&self, name: &str) -> CatalogResult<Arc<Game>> {
        let dir = self.game_dir(name)?;
        let game = match Game::load(&dir) {
            Ok(game) => Arc::new(game),
            Err(e) => {
                warn!(game = name, error = %e, "game reload failed");
                return Err(e);
            }
        };
        let previous = self.games.write().insert(name.to_string(), Arc::clone(&game));
        info!(game = name, replaced = previous.is_some(), "game cached");
        Ok(game)
    }

    /// Names of the games currently cached, sorted.
    #[must_use]
    pub fn cached(&self) -> Vec<String> {
        let mut names: Vec<_> = self.games.read().keys().cloned().collect();
        names.sort();
        names
    }

    fn game_dir(&self, name: &str) -> CatalogResult<PathBuf> {
        let plain = !name.is_empty()
            && name
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        let dir = self.root.join(name);
        if plain && dir.is_dir() {
            Ok(dir)
        } else {
            Err(CatalogError::UnknownGame(name.to_string()))
        }
    }
}
