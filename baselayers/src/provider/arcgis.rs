//! ArcGIS MapServer imagery provider
//!
//! # URL Pattern
//!
//! `{service}/tile/{z}/{y}/{x}`, with service metadata at `{service}?f=json`.

use super::types::{check_tile, validate_endpoint, ImageryProvider, ProviderError, ProviderKind};
use crate::coord::TileCoord;
use crate::relay::RelayEndpoint;
use std::sync::Arc;

/// ArcGIS MapServer provider.
#[derive(Debug)]
pub struct ArcGisMapServerProvider {
    url: String,
    proxy: Option<Arc<RelayEndpoint>>,
}

impl ArcGisMapServerProvider {
    /// Creates a provider for the MapServer at `url`.
    pub fn new(
        url: impl Into<String>,
        proxy: Option<Arc<RelayEndpoint>>,
    ) -> Result<Self, ProviderError> {
        let url = url.into();
        validate_endpoint(&url)?;
        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            proxy,
        })
    }

    /// Returns the service metadata URL, routed through the relay if any.
    pub fn metadata_url(&self) -> String {
        let resource = format!("{}?f=json", self.url);
        match &self.proxy {
            Some(relay) => relay.url_for(&resource),
            None => resource,
        }
    }
}

impl ImageryProvider for ArcGisMapServerProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::ArcGisMapServer
    }

    fn name(&self) -> &str {
        "ArcGIS"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn proxy(&self) -> Option<&Arc<RelayEndpoint>> {
        self.proxy.as_ref()
    }

    fn max_zoom(&self) -> u8 {
        19
    }

    fn resource_url(&self, tile: &TileCoord) -> Result<String, ProviderError> {
        check_tile(self, tile)?;
        Ok(format!(
            "{}/tile/{}/{}/{}",
            self.url, tile.zoom, tile.row, tile.col
        ))
    }
}
