//! Single-image provider
//!
//! One image covers the whole globe. Only tile `(0, 0)` at zoom 0 exists.

use super::types::{check_tile, validate_endpoint, ImageryProvider, ProviderError, ProviderKind};
use crate::coord::TileCoord;
use crate::relay::RelayEndpoint;
use std::sync::Arc;

/// Provider for a single static world image.
#[derive(Debug)]
pub struct SingleTileProvider {
    url: String,
    credit: Option<String>,
    proxy: Option<Arc<RelayEndpoint>>,
}

impl SingleTileProvider {
    /// Creates a provider serving the image at `url`.
    pub fn new(
        url: impl Into<String>,
        credit: Option<&str>,
        proxy: Option<Arc<RelayEndpoint>>,
    ) -> Result<Self, ProviderError> {
        let url = url.into();
        validate_endpoint(&url)?;
        Ok(Self {
            url,
            credit: credit.map(str::to_string),
            proxy,
        })
    }
}

impl ImageryProvider for SingleTileProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::SingleTile
    }

    fn name(&self) -> &str {
        "Single Tile"
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
        0
    }

    fn resource_url(&self, tile: &TileCoord) -> Result<String, ProviderError> {
        check_tile(self, tile)?;
        Ok(self.url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: &str = "http://localhost/Assets/Textures/NE2_LR_LC_SR_W_DR_2048.jpg";

    #[test]
    fn test_only_root_tile() {
        let provider = SingleTileProvider::new(IMAGE, None, None).unwrap();
        let root = TileCoord::new(0, 0, 0).unwrap();
        assert_eq!(provider.resource_url(&root).unwrap(), IMAGE);

        let child = TileCoord::new(0, 0, 1).unwrap();
        assert_eq!(
            provider.resource_url(&child),
            Err(ProviderError::UnsupportedZoom(1))
        );
    }

    #[test]
    fn test_no_relay_by_default() {
        let provider = SingleTileProvider::new(IMAGE, None, None).unwrap();
        let root = TileCoord::new(0, 0, 0).unwrap();
        assert!(provider.proxy().is_none());
        assert_eq!(provider.request_url(&root).unwrap(), IMAGE);
    }
}
