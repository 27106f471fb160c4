//! OpenStreetMap-style tile provider
//!
//! Serves any slippy-map server using `{url}/{z}/{x}/{y}.png`, including
//! OpenStreetMap itself, Stamen and MapQuest.

use super::types::{check_tile, validate_endpoint, ImageryProvider, ProviderError, ProviderKind};
use crate::coord::TileCoord;
use crate::relay::RelayEndpoint;
use std::sync::Arc;

/// Default tile server.
pub const OSM_DEFAULT_URL: &str = "http://tile.openstreetmap.org/";

/// Attribution used when none is configured.
pub const OSM_DEFAULT_CREDIT: &str = "MapQuest, Open Street Map and contributors, CC-BY-SA";

/// OpenStreetMap-style REST tile provider.
#[derive(Debug)]
pub struct OpenStreetMapProvider {
    url: String,
    credit: String,
    proxy: Option<Arc<RelayEndpoint>>,
}

impl OpenStreetMapProvider {
    /// Creates a provider for the tile server at `url`.
    ///
    /// `credit` falls back to [`OSM_DEFAULT_CREDIT`].
    pub fn new(
        url: impl Into<String>,
        credit: Option<&str>,
        proxy: Option<Arc<RelayEndpoint>>,
    ) -> Result<Self, ProviderError> {
        let mut url = url.into();
        validate_endpoint(&url)?;
        if !url.ends_with('/') {
            url.push('/');
        }
        Ok(Self {
            url,
            credit: credit.unwrap_or(OSM_DEFAULT_CREDIT).to_string(),
            proxy,
        })
    }
}

impl ImageryProvider for OpenStreetMapProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenStreetMap
    }

    fn name(&self) -> &str {
        "OpenStreetMap"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn proxy(&self) -> Option<&Arc<RelayEndpoint>> {
        self.proxy.as_ref()
    }

    fn credit(&self) -> Option<&str> {
        Some(&self.credit)
    }

    fn max_zoom(&self) -> u8 {
        18
    }

    fn resource_url(&self, tile: &TileCoord) -> Result<String, ProviderError> {
        check_tile(self, tile)?;
        Ok(format!(
            "{}{}/{}/{}.png",
            self.url, tile.zoom, tile.col, tile.row
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_credit() {
        let provider = OpenStreetMapProvider::new(OSM_DEFAULT_URL, None, None).unwrap();
        assert_eq!(provider.credit(), Some(OSM_DEFAULT_CREDIT));
    }

    #[test]
    fn test_custom_credit() {
        let provider =
            OpenStreetMapProvider::new("http://tile.stamen.com/toner/", Some("Stamen"), None)
                .unwrap();
        assert_eq!(provider.credit(), Some("Stamen"));
    }

    #[test]
    fn test_resource_url_is_column_major() {
        let provider = OpenStreetMapProvider::new(OSM_DEFAULT_URL, None, None).unwrap();
        let tile = TileCoord::new(1, 3, 2).unwrap();
        assert_eq!(
            provider.resource_url(&tile).unwrap(),
            "http://tile.openstreetmap.org/2/3/1.png"
        );
    }

    #[test]
    fn test_missing_trailing_slash_added() {
        let provider =
            OpenStreetMapProvider::new("http://tile.stamen.com/watercolor", None, None).unwrap();
        assert_eq!(provider.url(), "http://tile.stamen.com/watercolor/");
    }

    #[test]
    fn test_zoom_above_max_rejected() {
        let provider = OpenStreetMapProvider::new(OSM_DEFAULT_URL, None, None).unwrap();
        let tile = TileCoord::new(0, 0, 19).unwrap();
        assert_eq!(
            provider.resource_url(&tile),
            Err(ProviderError::UnsupportedZoom(19))
        );
    }
}
