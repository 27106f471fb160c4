//! Configuration for catalog hosts.
//!
//! The library itself takes its collaborators as arguments; this module
//! loads the values a host needs to construct them from `config.ini`.
//!
//! # Example
//!
//! ```no_run
//! use baselayers::config::ConfigFile;
//!
//! let config = ConfigFile::load()?;
//! let detector = config.detector();
//! # Ok::<(), baselayers::config::ConfigFileError>(())
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{default_log_directory, DEFAULT_LOG_FILE};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, CrossOriginSupport, LoggingSettings, RelaySettings, ResourceSettings};

use crate::relay::{ProxyPolicy, StaticDetector};
use crate::resource::{BaseUrlLocator, LocatorError};
use std::sync::Arc;

impl ConfigFile {
    /// Detector answering the configured cross-origin capability.
    pub fn detector(&self) -> StaticDetector {
        StaticDetector::new(self.relay.cross_origin.is_supported())
    }

    /// Relay policy built from the `[relay]` section.
    pub fn proxy_policy(&self) -> ProxyPolicy {
        ProxyPolicy::new(Arc::new(self.detector()), self.relay.url.clone())
    }

    /// Resource locator built from the `[resources]` section.
    pub fn locator(&self) -> Result<BaseUrlLocator, LocatorError> {
        BaseUrlLocator::new(&self.resources.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_does_not_require_relay() {
        let config = ConfigFile::default();
        assert!(!config.proxy_policy().resolve().is_required());
    }

    #[test]
    fn test_unsupported_policy_requires_relay() {
        let mut config = ConfigFile::default();
        config.relay.cross_origin = CrossOriginSupport::Unsupported;
        let decision = config.proxy_policy().resolve();
        assert!(decision.is_required());
        assert_eq!(decision.relay().base_url(), config.relay.url);
    }

    #[test]
    fn test_default_locator() {
        let locator = ConfigFile::default().locator().unwrap();
        assert_eq!(locator.base_url(), crate::resource::DEFAULT_ASSET_BASE_URL);
    }
}
