//! Presentation records handed to the selection host.

use crate::provider::{ImageryProvider, ProviderError};
use std::fmt;
use std::sync::Arc;

/// Deferred provider constructor.
///
/// Invoking it builds a fresh provider every time.
pub type ProviderConstructor =
    dyn Fn() -> Result<Box<dyn ImageryProvider>, ProviderError> + Send + Sync;

const SOFT_HYPHEN: char = '\u{00AD}';

/// A selectable base layer: display metadata plus a deferred constructor.
#[derive(Clone)]
pub struct CatalogEntry {
    name: String,
    icon_url: String,
    tooltip: String,
    constructor: Arc<ProviderConstructor>,
}

impl CatalogEntry {
    /// Creates an entry. `constructor` is stored, not called.
    pub fn new<F>(
        name: impl Into<String>,
        icon_url: impl Into<String>,
        tooltip: impl Into<String>,
        constructor: F,
    ) -> Self
    where
        F: Fn() -> Result<Box<dyn ImageryProvider>, ProviderError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            icon_url: icon_url.into(),
            tooltip: tooltip.into(),
            constructor: Arc::new(constructor),
        }
    }

    /// Display name. May contain soft hyphens as line-break hints.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name with soft hyphens removed.
    pub fn plain_name(&self) -> String {
        self.name.chars().filter(|c| *c != SOFT_HYPHEN).collect()
    }

    /// Resolved icon URL.
    pub fn icon_url(&self) -> &str {
        &self.icon_url
    }

    /// Tooltip text.
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Builds the provider for this entry.
    pub fn create_provider(&self) -> Result<Box<dyn ImageryProvider>, ProviderError> {
        (self.constructor)()
    }

    /// Case-insensitive name match that ignores soft hyphens.
    pub fn matches_name(&self, query: &str) -> bool {
        let query: String = query.chars().filter(|c| *c != SOFT_HYPHEN).collect();
        self.plain_name().to_lowercase() == query.trim().to_lowercase()
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("name", &self.name)
            .field("icon_url", &self.icon_url)
            .field("tooltip", &self.tooltip)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::OpenStreetMapProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn osm_entry(calls: Arc<AtomicUsize>) -> CatalogEntry {
        CatalogEntry::new(
            "Open\u{00AD}Street\u{00AD}Map",
            "http://example.com/osm.png",
            "OpenStreetMap",
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
                let provider =
                    OpenStreetMapProvider::new("http://tile.openstreetmap.org/", None, None)?;
                Ok(Box::new(provider) as Box<dyn ImageryProvider>)
            },
        )
    }

    #[test]
    fn test_constructor_not_called_on_creation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let _entry = osm_entry(Arc::clone(&calls));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_each_invocation_builds_new_provider() {
        let calls = Arc::new(AtomicUsize::new(0));
        let entry = osm_entry(Arc::clone(&calls));

        let first = entry.create_provider().unwrap();
        let second = entry.create_provider().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(first.url(), second.url());
    }

    #[test]
    fn test_matches_name_ignores_soft_hyphens() {
        let entry = osm_entry(Arc::new(AtomicUsize::new(0)));
        assert!(entry.matches_name("openstreetmap"));
        assert!(entry.matches_name(" OpenStreetMap "));
        assert!(!entry.matches_name("Open Street Map"));
        assert_eq!(entry.plain_name(), "OpenStreetMap");
    }

    #[test]
    fn test_debug_omits_constructor() {
        let entry = osm_entry(Arc::new(AtomicUsize::new(0)));
        let debug_str = format!("{:?}", entry);
        assert!(debug_str.contains("CatalogEntry"));
        assert!(debug_str.contains("osm.png"));
    }

    #[test]
    fn test_entry_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CatalogEntry>();
    }
}
