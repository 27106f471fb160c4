//! Provider factory for centralized provider creation.
//!
//! [`ProviderConfig`] describes a provider declaratively so it can live in a
//! static table; [`ProviderFactory`] turns it into a live provider once a
//! relay argument is known.

use super::arcgis::ArcGisMapServerProvider;
use super::bing::{BingMapsProvider, BingMapsStyle};
use super::osm::OpenStreetMapProvider;
use super::single_tile::SingleTileProvider;
use super::tms::TileMapServiceProvider;
use super::types::{ImageryProvider, ProviderError, ProviderKind};
use crate::relay::RelayEndpoint;
use crate::resource::ResourceLocator;
use std::sync::Arc;
use tracing::debug;

/// Where a single-tile image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// An absolute URL
    Url(&'static str),
    /// A bundled asset, resolved through the resource locator
    Asset(&'static str),
}

/// Construction parameters for one provider.
///
/// # Example
///
/// ```
/// use baselayers::provider::{BingMapsStyle, ProviderConfig, ProviderKind};
///
/// let config = ProviderConfig::BingMaps {
///     url: "http://dev.virtualearth.net",
///     style: BingMapsStyle::Road,
/// };
/// assert_eq!(config.kind(), ProviderKind::BingMaps);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderConfig {
    /// Bing Maps REST service with an imagery set.
    BingMaps {
        url: &'static str,
        style: BingMapsStyle,
    },

    /// ArcGIS MapServer.
    ArcGisMapServer { url: &'static str },

    /// OpenStreetMap-style tile server.
    OpenStreetMap {
        url: &'static str,
        credit: Option<&'static str>,
    },

    /// Tile Map Service.
    TileMapService {
        url: &'static str,
        max_zoom: Option<u8>,
        credit: Option<&'static str>,
    },

    /// One image for the whole globe.
    SingleTile {
        image: ImageSource,
        credit: Option<&'static str>,
    },
}

impl ProviderConfig {
    /// Returns the kind of provider this configuration creates.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::BingMaps { .. } => ProviderKind::BingMaps,
            Self::ArcGisMapServer { .. } => ProviderKind::ArcGisMapServer,
            Self::OpenStreetMap { .. } => ProviderKind::OpenStreetMap,
            Self::TileMapService { .. } => ProviderKind::TileMapService,
            Self::SingleTile { .. } => ProviderKind::SingleTile,
        }
    }
}

/// Factory for creating provider instances.
///
/// Cheap to clone; deferred constructors each hold a copy.
#[derive(Clone)]
pub struct ProviderFactory {
    locator: Arc<dyn ResourceLocator>,
}

impl ProviderFactory {
    /// Create a new provider factory resolving assets with `locator`.
    pub fn new(locator: Arc<dyn ResourceLocator>) -> Self {
        Self { locator }
    }

    /// Create a provider from `config`, routing its requests through `relay`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is malformed or a bundled
    /// asset cannot be located.
    pub fn create(
        &self,
        config: &ProviderConfig,
        relay: Option<Arc<RelayEndpoint>>,
    ) -> Result<Box<dyn ImageryProvider>, ProviderError> {
        debug!(
            kind = %config.kind(),
            relayed = relay.is_some(),
            "Creating imagery provider"
        );

        let provider: Box<dyn ImageryProvider> = match *config {
            ProviderConfig::BingMaps { url, style } => {
                Box::new(BingMapsProvider::new(url, style, relay)?)
            }
            ProviderConfig::ArcGisMapServer { url } => {
                Box::new(ArcGisMapServerProvider::new(url, relay)?)
            }
            ProviderConfig::OpenStreetMap { url, credit } => {
                Box::new(OpenStreetMapProvider::new(url, credit, relay)?)
            }
            ProviderConfig::TileMapService {
                url,
                max_zoom,
                credit,
            } => Box::new(TileMapServiceProvider::new(url, max_zoom, credit, relay)?),
            ProviderConfig::SingleTile { image, credit } => {
                let url = match image {
                    ImageSource::Url(url) => url.to_string(),
                    ImageSource::Asset(path) => self.locator.resolve(path)?,
                };
                Box::new(SingleTileProvider::new(url, credit, relay)?)
            }
        };

        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{BaseUrlLocator, LocatorError};

    struct FailingLocator;

    impl ResourceLocator for FailingLocator {
        fn resolve(&self, path: &str) -> Result<String, LocatorError> {
            Err(LocatorError::Unresolvable {
                path: path.to_string(),
                reason: "offline".to_string(),
            })
        }
    }

    fn factory() -> ProviderFactory {
        ProviderFactory::new(Arc::new(
            BaseUrlLocator::new("http://example.com/Cesium/").unwrap(),
        ))
    }

    #[test]
    fn test_create_each_kind() {
        let configs = [
            ProviderConfig::BingMaps {
                url: "http://dev.virtualearth.net",
                style: BingMapsStyle::Aerial,
            },
            ProviderConfig::ArcGisMapServer {
                url: "http://services.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer",
            },
            ProviderConfig::OpenStreetMap {
                url: "http://tile.openstreetmap.org/",
                credit: None,
            },
            ProviderConfig::TileMapService {
                url: "http://cesium.agi.com/blackmarble",
                max_zoom: Some(8),
                credit: None,
            },
            ProviderConfig::SingleTile {
                image: ImageSource::Url("http://example.com/world.jpg"),
                credit: None,
            },
        ];

        for config in &configs {
            let provider = factory().create(config, None).unwrap();
            assert_eq!(provider.kind(), config.kind());
            assert!(provider.proxy().is_none());
        }
    }

    #[test]
    fn test_relay_passed_through() {
        let relay = Arc::new(RelayEndpoint::new("http://relay/"));
        let config = ProviderConfig::OpenStreetMap {
            url: "http://tile.openstreetmap.org/",
            credit: None,
        };

        let provider = factory().create(&config, Some(Arc::clone(&relay))).unwrap();
        assert!(Arc::ptr_eq(provider.proxy().unwrap(), &relay));
    }

    #[test]
    fn test_single_tile_asset_resolved() {
        let config = ProviderConfig::SingleTile {
            image: ImageSource::Asset("Assets/Textures/world.jpg"),
            credit: None,
        };

        let provider = factory().create(&config, None).unwrap();
        assert_eq!(
            provider.url(),
            "http://example.com/Cesium/Assets/Textures/world.jpg"
        );
    }

    #[test]
    fn test_single_tile_asset_failure_surfaces() {
        let factory = ProviderFactory::new(Arc::new(FailingLocator));
        let config = ProviderConfig::SingleTile {
            image: ImageSource::Asset("Assets/Textures/world.jpg"),
            credit: None,
        };

        let result = factory.create(&config, None);
        assert!(matches!(result, Err(ProviderError::Resource(_))));
    }

    #[test]
    fn test_malformed_url_fails() {
        let config = ProviderConfig::ArcGisMapServer { url: "::not a url" };
        let result = factory().create(&config, None);
        assert!(matches!(result, Err(ProviderError::InvalidConfiguration(_))));
    }
}
