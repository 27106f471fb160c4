//! Tile Map Service provider
//!
//! TMS rows count from the south edge, so the row is flipped before it goes
//! into the URL: `{url}/{z}/{x}/{2^z - y - 1}.png`.

use super::types::{check_tile, validate_endpoint, ImageryProvider, ProviderError, ProviderKind};
use crate::coord::TileCoord;
use crate::relay::RelayEndpoint;
use std::sync::Arc;

/// Maximum level used when the service doesn't say otherwise.
pub const TMS_DEFAULT_MAX_ZOOM: u8 = 18;

/// Tile Map Service provider.
#[derive(Debug)]
pub struct TileMapServiceProvider {
    url: String,
    max_zoom: u8,
    credit: Option<String>,
    proxy: Option<Arc<RelayEndpoint>>,
}

impl TileMapServiceProvider {
    /// Creates a provider for the TMS root at `url`.
    pub fn new(
        url: impl Into<String>,
        max_zoom: Option<u8>,
        credit: Option<&str>,
        proxy: Option<Arc<RelayEndpoint>>,
    ) -> Result<Self, ProviderError> {
        let url = url.into();
        validate_endpoint(&url)?;
        let max_zoom = max_zoom.unwrap_or(TMS_DEFAULT_MAX_ZOOM);
        if max_zoom > crate::coord::MAX_ZOOM {
            return Err(ProviderError::InvalidConfiguration(format!(
                "maximum level {} exceeds {}",
                max_zoom,
                crate::coord::MAX_ZOOM
            )));
        }
        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            max_zoom,
            credit: credit.map(str::to_string),
            proxy,
        })
    }
}

impl ImageryProvider for TileMapServiceProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::TileMapService
    }

    fn name(&self) -> &str {
        "Tile Map Service"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn proxy(&self) -> Option<&Arc<RelayEndpoint>> {
        self.proxy.as_ref()
    }

    fn credit(&self) -> Option<&str> {
        self.credit.as_deref()
    }

    fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    fn resource_url(&self, tile: &TileCoord) -> Result<String, ProviderError> {
        check_tile(self, tile)?;
        Ok(format!(
            "{}/{}/{}/{}.png",
            self.url,
            tile.zoom,
            tile.col,
            tile.tms_row()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK_MARBLE: &str = "http://cesium.agi.com/blackmarble";

    #[test]
    fn test_max_zoom_override() {
        let provider = TileMapServiceProvider::new(BLACK_MARBLE, Some(8), None, None).unwrap();
        assert_eq!(provider.max_zoom(), 8);
        assert!(!provider.supports_zoom(9));
    }

    #[test]
    fn test_default_max_zoom() {
        let provider = TileMapServiceProvider::new(BLACK_MARBLE, None, None, None).unwrap();
        assert_eq!(provider.max_zoom(), TMS_DEFAULT_MAX_ZOOM);
    }

    #[test]
    fn test_resource_url_flips_row() {
        let provider = TileMapServiceProvider::new(BLACK_MARBLE, Some(8), None, None).unwrap();
        let tile = TileCoord::new(0, 1, 2).unwrap();
        assert_eq!(
            provider.resource_url(&tile).unwrap(),
            "http://cesium.agi.com/blackmarble/2/1/3.png"
        );
    }

    #[test]
    fn test_excessive_max_zoom_rejected() {
        let result = TileMapServiceProvider::new(BLACK_MARBLE, Some(40), None, None);
        assert!(matches!(result, Err(ProviderError::InvalidConfiguration(_))));
    }
}
