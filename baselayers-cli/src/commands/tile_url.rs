//! `baselayers tile-url` - print the URL a host would request for one tile.

use super::common::Catalog;
use crate::error::CliError;
use baselayers::coord::TileCoord;
use baselayers::provider::ProviderError;

/// Tile address from the command line.
#[derive(Debug, Clone, Copy)]
pub struct TileArgs {
    pub zoom: u8,
    pub row: u32,
    pub col: u32,
    pub direct: bool,
}

/// Builds the URL for `tile` from the entry matching `query`.
pub fn tile_url(catalog: &Catalog, query: &str, tile: TileArgs) -> Result<String, CliError> {
    let (_, entry) = catalog.select(query)?;
    let coord = TileCoord::new(tile.row, tile.col, tile.zoom)?;

    let provider_error = |error: ProviderError| CliError::Provider {
        name: entry.plain_name(),
        error,
    };
    let provider = entry.create_provider().map_err(provider_error)?;

    if tile.direct {
        provider.resource_url(&coord).map_err(provider_error)
    } else {
        provider.request_url(&coord).map_err(provider_error)
    }
}

/// Runs the command.
pub fn run(catalog: &Catalog, query: &str, tile: TileArgs) -> Result<(), CliError> {
    println!("{}", tile_url(catalog, query, tile)?);
    Ok(())
}
