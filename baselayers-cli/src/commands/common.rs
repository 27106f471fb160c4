//! Shared plumbing for catalog commands.

use crate::error::CliError;
use baselayers::catalog::{BaseLayerCatalogBuilder, CatalogEntry, SourceDescriptor};
use baselayers::config::{config_file_path, ConfigFile, CrossOriginSupport};
use baselayers::relay::ProxyDecision;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Command-line values that take precedence over config.ini.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub cross_origin: Option<CrossOriginSupport>,
    pub relay_url: Option<String>,
    pub asset_base: Option<String>,
}

/// A built catalog together with what it was built from.
pub struct Catalog {
    pub decision: ProxyDecision,
    pub descriptors: &'static [SourceDescriptor],
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Finds an entry by zero-based index or by name.
    pub fn select(&self, query: &str) -> Result<(usize, &CatalogEntry), CliError> {
        if let Ok(index) = query.trim().parse::<usize>() {
            return self
                .entries
                .get(index)
                .map(|entry| (index, entry))
                .ok_or_else(|| CliError::UnknownEntry(query.to_string()));
        }

        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.matches_name(query))
            .ok_or_else(|| CliError::UnknownEntry(query.to_string()))
    }
}

/// Resolves the config path: explicit flag or ~/.baselayers/config.ini.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path)
}

/// Loads config.ini and applies command-line overrides.
pub fn load_config(path: &Path, overrides: &Overrides) -> Result<ConfigFile, CliError> {
    let mut config = ConfigFile::load_from(path)?;

    if let Some(cross_origin) = overrides.cross_origin {
        config.relay.cross_origin = cross_origin;
    }
    if let Some(url) = &overrides.relay_url {
        config.relay.url = url.clone();
    }
    if let Some(base) = &overrides.asset_base {
        config.resources.base_url = base.clone();
    }

    Ok(config)
}

/// Resolves the relay policy and builds the default catalog.
pub fn build_catalog(config: &ConfigFile) -> Result<Catalog, CliError> {
    let locator = Arc::new(config.locator()?);
    let decision = config.proxy_policy().resolve();

    let builder = BaseLayerCatalogBuilder::new(locator);
    let entries = builder.build(&decision)?;
    debug!(entries = entries.len(), "Catalog ready");

    Ok(Catalog {
        decision,
        descriptors: builder.descriptors(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn catalog() -> Catalog {
        build_catalog(&ConfigFile::default()).unwrap()
    }

    #[test]
    fn test_select_by_index() {
        let catalog = catalog();
        let (index, entry) = catalog.select("2").unwrap();
        assert_eq!(index, 2);
        assert_eq!(entry.name(), "Bing Maps Roads");
    }

    #[test]
    fn test_select_by_name() {
        let catalog = catalog();
        let (index, _) = catalog.select("mapquest openstreetmap").unwrap();
        assert_eq!(index, 9);
    }

    #[test]
    fn test_select_unknown() {
        let catalog = catalog();
        assert!(matches!(
            catalog.select("Google Satellite"),
            Err(CliError::UnknownEntry(_))
        ));
        assert!(matches!(catalog.select("99"), Err(CliError::UnknownEntry(_))));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[relay]\ncross_origin = supported\n").unwrap();

        let overrides = Overrides {
            cross_origin: Some(CrossOriginSupport::Unsupported),
            relay_url: Some("http://override/".to_string()),
            asset_base: None,
        };
        let config = load_config(&path, &overrides).unwrap();

        assert_eq!(config.relay.cross_origin, CrossOriginSupport::Unsupported);
        assert_eq!(config.relay.url, "http://override/");
    }

    #[test]
    fn test_bad_asset_base_reported() {
        let mut config = ConfigFile::default();
        config.resources.base_url = "no scheme".to_string();
        assert!(matches!(build_catalog(&config), Err(CliError::Locator(_))));
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let explicit = PathBuf::from("/tmp/custom.ini");
        assert_eq!(resolve_config_path(Some(&explicit)), explicit);
        assert_eq!(resolve_config_path(None), config_file_path());
    }
}
