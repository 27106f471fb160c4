//! baselayers CLI - inspect the base-layer imagery catalog
//!
//! Builds the default catalog the same way a globe host does and prints
//! entries, provider details, or tile request URLs.

mod commands;
mod error;

use std::path::{Path, PathBuf};

use baselayers::config::{ConfigFile, CrossOriginSupport};
use baselayers::logging::{init_logging, LoggingGuard};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use commands::common::{self, Catalog, Overrides};
use commands::config::ConfigAction;
use commands::tile_url::TileArgs;
use error::CliError;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CrossOrigin {
    /// Host can load cross-origin images directly
    Supported,
    /// Host needs a same-origin relay for cross-origin images
    Unsupported,
}

impl From<CrossOrigin> for CrossOriginSupport {
    fn from(value: CrossOrigin) -> Self {
        match value {
            CrossOrigin::Supported => CrossOriginSupport::Supported,
            CrossOrigin::Unsupported => CrossOriginSupport::Unsupported,
        }
    }
}

#[derive(Parser)]
#[command(name = "baselayers")]
#[command(version = baselayers::VERSION)]
#[command(about = "Inspect the base-layer imagery catalog", long_about = None)]
struct Cli {
    /// Config file (default: ~/.baselayers/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the host's cross-origin capability
    #[arg(long, value_enum, global = true)]
    cross_origin: Option<CrossOrigin>,

    /// Override the relay endpoint URL
    #[arg(long, global = true)]
    relay_url: Option<String>,

    /// Override the base URL for bundled icons and textures
    #[arg(long, global = true)]
    asset_base: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries in picker order
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Construct an entry's provider and describe it
    Show {
        /// Entry index or name (case-insensitive)
        entry: String,
    },

    /// Print the URL requested for one tile
    TileUrl {
        /// Entry index or name (case-insensitive)
        entry: String,

        /// Zoom level
        #[arg(long)]
        zoom: u8,

        /// Tile row (0 at north)
        #[arg(long)]
        row: u32,

        /// Tile column (0 at west)
        #[arg(long)]
        col: u32,

        /// Print the provider URL without relay wrapping
        #[arg(long)]
        direct: bool,
    },

    /// Manage config.ini
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = common::resolve_config_path(cli.config.as_deref());
    let overrides = Overrides {
        cross_origin: cli.cross_origin.map(CrossOriginSupport::from),
        relay_url: cli.relay_url,
        asset_base: cli.asset_base,
    };
    let level = if cli.verbose { "debug" } else { "warn" };

    match cli.command {
        Commands::Config { action } => commands::config::run(action, &config_path, || {
            common::load_config(&config_path, &overrides)
        }),
        Commands::List { json } => {
            let (_guard, catalog) = prepare(&config_path, &overrides, level)?;
            commands::list::run(&catalog, json)
        }
        Commands::Show { entry } => {
            let (_guard, catalog) = prepare(&config_path, &overrides, level)?;
            commands::show::run(&catalog, &entry)
        }
        Commands::TileUrl {
            entry,
            zoom,
            row,
            col,
            direct,
        } => {
            let (_guard, catalog) = prepare(&config_path, &overrides, level)?;
            let tile = TileArgs {
                zoom,
                row,
                col,
                direct,
            };
            commands::tile_url::run(&catalog, &entry, tile)
        }
    }
}

/// Loads config, starts logging and builds the catalog.
fn prepare(
    config_path: &Path,
    overrides: &Overrides,
    level: &str,
) -> Result<(LoggingGuard, Catalog), CliError> {
    let config = common::load_config(config_path, overrides)?;
    let guard = start_logging(&config, level)?;
    debug!(path = %config_path.display(), "Configuration loaded");

    let catalog = common::build_catalog(&config)?;
    Ok((guard, catalog))
}

fn start_logging(config: &ConfigFile, level: &str) -> Result<LoggingGuard, CliError> {
    init_logging(&config.logging.directory, &config.logging.file, level)
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}
