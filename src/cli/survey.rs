//! Survey command implementation.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::Instant;

use hexrail::config::EngineConfig;
use hexrail::hex::Coordinate;
use hexrail::legality;
use hexrail::tile::TileId;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use super::output::{emit, join};
use super::{CliError, GameOptions};

/// JSON-serializable survey result.
#[derive(Debug, Serialize)]
struct SurveyResult {
    /// Legal tile ids per tile-hosting cell.
    #[serde(rename = "legal-tile-ids")]
    legal_tile_ids: BTreeMap<Coordinate, Vec<TileId>>,
}

/// Execute the survey command.
///
/// # Errors
///
/// Returns an error if the game cannot be loaded or `threads` is rejected.
pub(crate) fn execute(
    options: &GameOptions,
    config: &EngineConfig,
    threads: Option<usize>,
    progress: bool,
) -> Result<(), CliError> {
    let (game, board) = options.load(config)?;

    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| CliError::new(format!("Failed to size thread pool: {e}")))?;
    }

    let pb = if progress {
        let total = legality::tile_coords(&board).len();
        let pb = ProgressBar::new(u64::try_from(total).unwrap_or(u64::MAX));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} cells ({per_sec})")
                .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let legal_tile_ids = legality::survey_with(&board, &game.catalog, || {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    });
    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }
    let duration = start.elapsed();

    let result = SurveyResult { legal_tile_ids };
    emit(options.format, &result, |r| {
        let mut text = String::new();
        for (coord, tiles) in &r.legal_tile_ids {
            let _ = writeln!(text, "{coord}: {}", join(tiles));
        }
        let _ = writeln!(
            text,
            "\n{} cells in {:.2}s",
            r.legal_tile_ids.len(),
            duration.as_secs_f64()
        );
        text
    })
}
