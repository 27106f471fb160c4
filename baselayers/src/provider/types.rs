//! Provider types and traits

use crate::coord::{tiles_per_side, TileCoord};
use crate::relay::RelayEndpoint;
use crate::resource::LocatorError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

/// Errors that can occur while constructing or addressing a provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Construction parameters are malformed
    #[error("Invalid provider configuration: {0}")]
    InvalidConfiguration(String),

    /// Zoom level not supported by this provider
    #[error("Zoom level {0} not supported by provider")]
    UnsupportedZoom(u8),

    /// Coordinates outside provider's supported range
    #[error("Coordinates ({row}, {col}) at zoom {zoom} not supported by provider")]
    UnsupportedCoordinates { row: u32, col: u32, zoom: u8 },

    /// A bundled resource could not be located
    #[error("Resource error: {0}")]
    Resource(#[from] LocatorError),
}

/// The family of imagery service a provider talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Bing Maps quadkey tiles
    BingMaps,
    /// ArcGIS MapServer REST tiles
    ArcGisMapServer,
    /// OpenStreetMap-style `{z}/{x}/{y}.png` tiles
    OpenStreetMap,
    /// Tile Map Service with south-origin rows
    TileMapService,
    /// One image covering the whole globe
    SingleTile,
}

impl ProviderKind {
    /// Stable lowercase identifier, used in CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BingMaps => "bing",
            Self::ArcGisMapServer => "arcgis",
            Self::OpenStreetMap => "osm",
            Self::TileMapService => "tms",
            Self::SingleTile => "single-tile",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An imagery source that a globe can stream tiles from.
///
/// Implementors only describe where tiles live; fetching and decoding
/// belong to the caller.
pub trait ImageryProvider: Send + Sync {
    /// Returns the kind of service behind this provider.
    fn kind(&self) -> ProviderKind;

    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;

    /// Returns the configured service endpoint.
    fn url(&self) -> &str;

    /// Returns the relay requests are routed through, if any.
    fn proxy(&self) -> Option<&Arc<RelayEndpoint>>;

    /// Returns the attribution text to display with this imagery.
    fn credit(&self) -> Option<&str> {
        None
    }

    /// Returns the minimum supported zoom level.
    fn min_zoom(&self) -> u8 {
        0
    }

    /// Returns the maximum supported zoom level.
    fn max_zoom(&self) -> u8;

    /// Checks if this provider supports the given zoom level.
    fn supports_zoom(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom() && zoom <= self.max_zoom()
    }

    /// Returns the direct URL of a tile, ignoring any relay.
    fn resource_url(&self, tile: &TileCoord) -> Result<String, ProviderError>;

    /// Returns the URL to request for a tile, routed through the relay when
    /// the provider has one.
    fn request_url(&self, tile: &TileCoord) -> Result<String, ProviderError> {
        let resource = self.resource_url(tile)?;
        Ok(match self.proxy() {
            Some(relay) => relay.url_for(&resource),
            None => resource,
        })
    }
}

/// Rejects endpoints that are not absolute URLs.
pub(crate) fn validate_endpoint(url: &str) -> Result<(), ProviderError> {
    Url::parse(url)
        .map(|_| ())
        .map_err(|e| ProviderError::InvalidConfiguration(format!("bad endpoint '{}': {}", url, e)))
}

/// Checks a tile against the provider's zoom range and the pyramid bounds.
pub(crate) fn check_tile<P: ImageryProvider + ?Sized>(
    provider: &P,
    tile: &TileCoord,
) -> Result<(), ProviderError> {
    if !provider.supports_zoom(tile.zoom) {
        return Err(ProviderError::UnsupportedZoom(tile.zoom));
    }
    let per_side = tiles_per_side(tile.zoom);
    if tile.row >= per_side || tile.col >= per_side {
        return Err(ProviderError::UnsupportedCoordinates {
            row: tile.row,
            col: tile.col,
            zoom: tile.zoom,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint("http://tile.openstreetmap.org/").is_ok());
        assert!(matches!(
            validate_endpoint("tile.openstreetmap.org"),
            Err(ProviderError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ProviderKind::BingMaps.to_string(), "bing");
        assert_eq!(ProviderKind::SingleTile.to_string(), "single-tile");
    }

    #[test]
    fn test_error_from_locator() {
        let err: ProviderError = LocatorError::Unresolvable {
            path: "x".to_string(),
            reason: "nope".to_string(),
        }
        .into();
        assert!(matches!(err, ProviderError::Resource(_)));
        assert!(err.to_string().contains("Cannot resolve resource 'x'"));
    }
}
