//! baselayers - Base-map imagery catalog for globe layer pickers
//!
//! This library builds the list of imagery sources a map or globe widget
//! offers in its base-layer picker. Each entry pairs display metadata with a
//! deferred constructor, so providers are only created when selected. A
//! single relay decision, made once from the host's cross-origin capability,
//! is shared by every entry that needs it.
//!
//! # High-Level API
//!
//! ```
//! use baselayers::catalog::create_default_base_layers;
//! use baselayers::relay::{ProxyPolicy, StaticDetector};
//! use baselayers::resource::BaseUrlLocator;
//! use std::sync::Arc;
//!
//! let policy = ProxyPolicy::with_default_relay(Arc::new(StaticDetector::unsupported()));
//! let locator = Arc::new(BaseUrlLocator::new("http://localhost:8080/Cesium/").unwrap());
//!
//! let entries = create_default_base_layers(&policy, locator).unwrap();
//! let provider = entries[0].create_provider().unwrap();
//! assert!(provider.proxy().is_some());
//! ```

pub mod catalog;
pub mod config;
pub mod coord;
pub mod logging;
pub mod provider;
pub mod relay;
pub mod resource;

/// Version of the baselayers library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
