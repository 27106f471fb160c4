//! Bing Maps imagery provider
//!
//! Tiles are addressed by quadkey on the `ecn.t{0..3}` tile hosts; the
//! configured service URL is the REST endpoint used for imagery metadata.

use super::types::{check_tile, validate_endpoint, ImageryProvider, ProviderError, ProviderKind};
use crate::coord::{tile_to_quadkey, TileCoord};
use crate::relay::RelayEndpoint;
use std::fmt;
use std::sync::Arc;

/// Default Bing Maps REST service.
pub const BING_DEFAULT_URL: &str = "http://dev.virtualearth.net";

const TILE_TEMPLATE: &str =
    "http://ecn.{subdomain}.tiles.virtualearth.net/tiles/{prefix}{quadkey}.jpeg?g=1";
const SUBDOMAINS: [&str; 4] = ["t0", "t1", "t2", "t3"];

/// Bing Maps imagery set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BingMapsStyle {
    /// Aerial imagery
    Aerial,
    /// Aerial imagery with a road overlay
    AerialWithLabels,
    /// Roads without additional imagery
    Road,
}

impl BingMapsStyle {
    /// Imagery set name used by the REST metadata API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aerial => "Aerial",
            Self::AerialWithLabels => "AerialWithLabels",
            Self::Road => "Road",
        }
    }

    /// Tile filename prefix on the tile hosts.
    fn tile_prefix(&self) -> &'static str {
        match self {
            Self::Aerial => "a",
            Self::AerialWithLabels => "h",
            Self::Road => "r",
        }
    }
}

impl fmt::Display for BingMapsStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bing Maps imagery provider.
#[derive(Debug)]
pub struct BingMapsProvider {
    url: String,
    style: BingMapsStyle,
    proxy: Option<Arc<RelayEndpoint>>,
}

impl BingMapsProvider {
    /// Creates a provider for `style` served by `url`.
    pub fn new(
        url: impl Into<String>,
        style: BingMapsStyle,
        proxy: Option<Arc<RelayEndpoint>>,
    ) -> Result<Self, ProviderError> {
        let url = url.into();
        validate_endpoint(&url)?;
        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            style,
            proxy,
        })
    }

    /// Returns the imagery set.
    pub fn style(&self) -> BingMapsStyle {
        self.style
    }

    /// Returns the imagery metadata URL, routed through the relay if any.
    pub fn metadata_url(&self) -> String {
        let resource = format!(
            "{}/REST/v1/Imagery/Metadata/{}?incl=ImageryProviders",
            self.url, self.style
        );
        match &self.proxy {
            Some(relay) => relay.url_for(&resource),
            None => resource,
        }
    }
}

impl ImageryProvider for BingMapsProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::BingMaps
    }

    fn name(&self) -> &str {
        "Bing Maps"
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn proxy(&self) -> Option<&Arc<RelayEndpoint>> {
        self.proxy.as_ref()
    }

    fn min_zoom(&self) -> u8 {
        1
    }

    fn max_zoom(&self) -> u8 {
        19
    }

    fn resource_url(&self, tile: &TileCoord) -> Result<String, ProviderError> {
        check_tile(self, tile)?;

        let subdomain = (tile.col as usize + tile.row as usize + tile.zoom as usize) % SUBDOMAINS.len();
        Ok(TILE_TEMPLATE
            .replace("{subdomain}", SUBDOMAINS[subdomain])
            .replace("{prefix}", self.style.tile_prefix())
            .replace("{quadkey}", &tile_to_quadkey(tile)))
    }
}
