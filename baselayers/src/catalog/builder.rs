//! Catalog construction.

use super::defaults::DEFAULT_SOURCES;
use super::descriptor::SourceDescriptor;
use super::entry::CatalogEntry;
use super::error::CatalogError;
use crate::provider::ProviderFactory;
use crate::relay::ProxyDecision;
use crate::resource::ResourceLocator;
use std::sync::Arc;
use tracing::{debug, info};

/// Turns a source table into catalog entries.
///
/// Building resolves each icon and wraps each provider in a deferred
/// constructor. Nothing is instantiated or fetched until an entry's
/// constructor is invoked.
///
/// # Example
///
/// ```
/// use baselayers::catalog::BaseLayerCatalogBuilder;
/// use baselayers::relay::{ProxyPolicy, StaticDetector};
/// use baselayers::resource::BaseUrlLocator;
/// use std::sync::Arc;
///
/// let locator = Arc::new(BaseUrlLocator::new("http://localhost:8080/Cesium/").unwrap());
/// let decision = ProxyPolicy::with_default_relay(Arc::new(StaticDetector::supported())).resolve();
///
/// let entries = BaseLayerCatalogBuilder::new(locator).build(&decision).unwrap();
/// assert_eq!(entries[0].name(), "Bing Maps Aerial");
/// ```
pub struct BaseLayerCatalogBuilder {
    descriptors: &'static [SourceDescriptor],
    locator: Arc<dyn ResourceLocator>,
    factory: ProviderFactory,
}

impl BaseLayerCatalogBuilder {
    /// Creates a builder over [`DEFAULT_SOURCES`].
    pub fn new(locator: Arc<dyn ResourceLocator>) -> Self {
        Self {
            descriptors: DEFAULT_SOURCES,
            factory: ProviderFactory::new(Arc::clone(&locator)),
            locator,
        }
    }

    /// Replaces the source table.
    pub fn with_descriptors(mut self, descriptors: &'static [SourceDescriptor]) -> Self {
        self.descriptors = descriptors;
        self
    }

    /// Returns the source table entries are built from.
    pub fn descriptors(&self) -> &'static [SourceDescriptor] {
        self.descriptors
    }

    /// Builds one entry per descriptor, in table order.
    ///
    /// # Errors
    ///
    /// Fails if any icon cannot be resolved. Provider construction errors
    /// are deferred to [`CatalogEntry::create_provider`].
    pub fn build(&self, decision: &ProxyDecision) -> Result<Vec<CatalogEntry>, CatalogError> {
        let entries = self
            .descriptors
            .iter()
            .map(|descriptor| self.build_entry(descriptor, decision))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            entries = entries.len(),
            relay_required = decision.is_required(),
            "Built base layer catalog"
        );

        Ok(entries)
    }

    fn build_entry(
        &self,
        descriptor: &'static SourceDescriptor,
        decision: &ProxyDecision,
    ) -> Result<CatalogEntry, CatalogError> {
        let icon_url =
            self.locator
                .resolve(descriptor.icon)
                .map_err(|source| CatalogError::IconResolution {
                    name: descriptor.name.to_string(),
                    source,
                })?;

        let relay = descriptor.relay.select(decision);
        debug!(
            name = descriptor.name,
            kind = %descriptor.provider.kind(),
            policy = ?descriptor.relay,
            relayed = relay.is_some(),
            "Catalog entry prepared"
        );

        let factory = self.factory.clone();
        let config = descriptor.provider;
        Ok(CatalogEntry::new(
            descriptor.name,
            icon_url,
            descriptor.tooltip,
            move || factory.create(&config, relay.clone()),
        ))
    }
}

/// Builds the default catalog in one call.
///
/// Resolves `policy` once and builds [`DEFAULT_SOURCES`] against the result.
pub fn create_default_base_layers(
    policy: &crate::relay::ProxyPolicy,
    locator: Arc<dyn ResourceLocator>,
) -> Result<Vec<CatalogEntry>, CatalogError> {
    let decision = policy.resolve();
    BaseLayerCatalogBuilder::new(locator).build(&decision)
}
