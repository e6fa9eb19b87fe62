//! Hexrail CLI - query tile-placement legality for an 18xx game board.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hexrail::board::Placement;
use hexrail::config::EngineConfig;
use tracing_subscriber::{EnvFilter, fmt};

/// Hexrail - tile-placement legality for 18xx hex boards
#[derive(Parser, Debug)]
#[command(name = "hexrail")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Game directory name under the data directory
    #[arg(short, long, global = true, default_value = "demo")]
    game: String,

    /// Data directory (default: `HEXRAIL_DATA_DIR` or ./games)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Reload game data on every lookup
    #[arg(long, global = true)]
    always_reload: bool,

    /// Tiles already laid, e.g. C5=57:2 (repeatable)
    #[arg(short, long, global = true)]
    placed: Vec<Placement>,

    /// Output format: text or json
    #[arg(short, long, global = true, default_value = "text")]
    format: cli::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List tiles that can be laid on a cell
    Tiles {
        /// Cell coordinate, e.g. C5
        coord: String,
    },

    /// List the distinct legal orientations of a tile on a cell
    Orientations {
        /// Cell coordinate
        coord: String,

        /// Tile id
        tile: String,
    },

    /// List the station cells of a split city
    Stations {
        /// Cell coordinate
        coord: String,

        /// Hypothetical tile to lay first
        #[arg(short, long, requires = "orientation")]
        tile: Option<String>,

        /// Orientation of the hypothetical tile (0-5)
        #[arg(short, long, requires = "tile")]
        orientation: Option<String>,

        /// Stations already claimed (repeatable)
        #[arg(short, long)]
        existing: Vec<String>,
    },

    /// Show capacity and phase of a space
    Space {
        /// Cell coordinate
        coord: String,

        /// Hypothetical tile to lay first
        #[arg(short, long, requires = "orientation")]
        tile: Option<String>,

        /// Orientation of the hypothetical tile (0-5)
        #[arg(short, long, requires = "tile")]
        orientation: Option<String>,
    },

    /// List city cells and split cities
    Cities,

    /// List cells that can host a tile
    TileCoords {
        /// Cells that already hold a tile (repeatable)
        #[arg(short, long)]
        existing: Vec<String>,

        /// Cell being edited; stays in the list
        #[arg(short, long)]
        current: Option<String>,
    },

    /// Legal tiles for every cell of the board
    Survey {
        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Show progress bar
        #[arg(long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = EngineConfig::from_env();

    let filter = EnvFilter::try_new(config.log_filter()).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();

    let options = cli::GameOptions {
        game: args.game,
        data_dir: args.data_dir,
        always_reload: args.always_reload,
        placed: args.placed,
        format: args.format,
    };

    let result = match args.command {
        Commands::Tiles { coord } => cli::query::tiles(&options, &config, &coord),

        Commands::Orientations { coord, tile } => cli::query::orientations(&options, &config, &coord, &tile),

        Commands::Stations {
            coord,
            tile,
            orientation,
            existing,
        } => cli::query::stations(
            &options,
            &config,
            &coord,
            tile.as_deref(),
            orientation.as_deref(),
            &existing,
        ),

        Commands::Space {
            coord,
            tile,
            orientation,
        } => cli::query::space(&options, &config, &coord, tile.as_deref(), orientation.as_deref()),

        Commands::Cities => cli::listing::cities(&options, &config),

        Commands::TileCoords { existing, current } => {
            cli::listing::tile_coords(&options, &config, &existing, current.as_deref())
        }

        Commands::Survey { threads, progress } => cli::survey::execute(&options, &config, threads, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
