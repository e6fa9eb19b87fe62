//! Engine configuration loaded from environment variables.
//!
//! | Variable                | Default | Description                                   |
//! |-------------------------|---------|-----------------------------------------------|
//! | `HEXRAIL_DATA_DIR`      | `games` | Directory holding one subdirectory per game   |
//! | `HEXRAIL_ALWAYS_RELOAD` | off     | Reload game data on every lookup (`1`/`true`/`yes`) |
//! | `HEXRAIL_LOG_LEVEL`     | `1`     | `0` error, `1` info, `2` debug, or a tracing filter |

use std::path::PathBuf;

/// Environment variable naming the game data directory.
pub const DATA_DIR_VAR: &str = "HEXRAIL_DATA_DIR";
/// Environment variable enabling reload-on-every-lookup.
pub const ALWAYS_RELOAD_VAR: &str = "HEXRAIL_ALWAYS_RELOAD";
/// Environment variable setting log verbosity.
pub const LOG_LEVEL_VAR: &str = "HEXRAIL_LOG_LEVEL";

const DEFAULT_DATA_DIR: &str = "games";
const DEFAULT_VERBOSITY: i64 = 1;
const LEVELS: [&str; 3] = ["error", "info", "debug"];

/// Runtime configuration for the engine and CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Root directory; each game lives in `data_dir/<name>/`.
    pub data_dir: PathBuf,
    /// Reload a game from disk on every registry lookup.
    pub always_reload: bool,
    /// Raw log level setting, numeric verbosity or a filter directive.
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            always_reload: false,
            log_level: DEFAULT_VERBOSITY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from the process environment, using defaults for
    /// anything absent.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: lookup(DATA_DIR_VAR)
                .filter(|dir| !dir.trim().is_empty())
                .map_or(defaults.data_dir, PathBuf::from),
            always_reload: lookup(ALWAYS_RELOAD_VAR).is_some_and(|raw| is_truthy(&raw)),
            log_level: lookup(LOG_LEVEL_VAR).unwrap_or(defaults.log_level),
        }
    }

    /// The tracing filter directive for [`EngineConfig::log_level`].
    ///
    /// Integers are clamped into `0..=2` and mapped to error, info, and
    /// debug. Blank values mean info. Anything else is used as a filter
    /// directive verbatim.
    #[must_use]
    pub fn log_filter(&self) -> String {
        let raw = self.log_level.trim();
        if raw.is_empty() {
            return verbosity_filter(DEFAULT_VERBOSITY).to_string();
        }
        match raw.parse::<i64>() {
            Ok(verbosity) => verbosity_filter(verbosity).to_string(),
            Err(_) => raw.to_string(),
        }
    }
}

fn verbosity_filter(verbosity: i64) -> &'static str {
    let max = LEVELS.len() - 1;
    let index = usize::try_from(verbosity.max(0)).map_or(max, |index| index.min(max));
    LEVELS[index]
}

fn is_truthy(raw: &str) -> bool {
    let raw = raw.trim();
    raw == "1" || raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("yes")
}
