//! Imagery provider abstraction
//!
//! Providers describe where a base map's tiles live and how to request them,
//! optionally through a relay. Each supported service family has its own
//! implementation of [`ImageryProvider`].
//!
//! # Factory Pattern
//!
//! For centralized provider creation, use the [`ProviderFactory`]:
//!
//! ```
//! use baselayers::provider::{ProviderConfig, ProviderFactory};
//! use baselayers::resource::BaseUrlLocator;
//! use std::sync::Arc;
//!
//! let locator = BaseUrlLocator::new("http://localhost:8080/Cesium/").unwrap();
//! let factory = ProviderFactory::new(Arc::new(locator));
//! let config = ProviderConfig::OpenStreetMap {
//!     url: "http://tile.openstreetmap.org/",
//!     credit: None,
//! };
//! let provider = factory.create(&config, None).unwrap();
//! assert_eq!(provider.max_zoom(), 18);
//! ```

mod arcgis;
mod bing;
mod factory;
mod osm;
mod single_tile;
mod tms;
mod types;

pub use arcgis::ArcGisMapServerProvider;
pub use bing::{BingMapsProvider, BingMapsStyle, BING_DEFAULT_URL};
pub use factory::{ImageSource, ProviderConfig, ProviderFactory};
pub use osm::{OpenStreetMapProvider, OSM_DEFAULT_CREDIT, OSM_DEFAULT_URL};
pub use single_tile::SingleTileProvider;
pub use tms::{TileMapServiceProvider, TMS_DEFAULT_MAX_ZOOM};
pub use types::{ImageryProvider, ProviderError, ProviderKind};
