//! Base-layer catalog.
//!
//! A catalog is the ordered list of imagery sources a globe's layer picker
//! offers. Each [`CatalogEntry`] carries what the picker displays and a
//! deferred constructor for the provider; providers are only created when
//! the user picks one.
//!
//! ```text
//! ProxyPolicy::resolve() ──► ProxyDecision
//!                                 │
//! DEFAULT_SOURCES ──► BaseLayerCatalogBuilder::build(&decision)
//!                                 │
//!                                 ▼
//!                       Vec<CatalogEntry> ──► host picker
//! ```

mod builder;
mod defaults;
mod descriptor;
mod entry;
mod error;

pub use builder::{create_default_base_layers, BaseLayerCatalogBuilder};
pub use defaults::{DEFAULT_SOURCES, SINGLE_TILE_ASSET};
pub use descriptor::{RelayPolicy, SourceDescriptor};
pub use entry::{CatalogEntry, ProviderConstructor};
pub use error::CatalogError;
