//! Resolution of logical resource paths (icons, bundled textures) to URLs.

use thiserror::Error;
use url::Url;

/// Base URL for bundled assets when nothing else is configured.
pub const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:8080/Cesium/";

/// Errors produced while resolving a resource path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocatorError {
    /// The configured base URL could not be parsed
    #[error("Invalid resource base URL '{url}': {reason}")]
    InvalidBase { url: String, reason: String },

    /// The logical path could not be joined onto the base
    #[error("Cannot resolve resource '{path}': {reason}")]
    Unresolvable { path: String, reason: String },
}

/// Resolves a logical resource path to a loadable URL.
pub trait ResourceLocator: Send + Sync {
    /// Returns the URL for `path`.
    fn resolve(&self, path: &str) -> Result<String, LocatorError>;
}

/// Resolves paths relative to a base URL.
///
/// The base is treated as a directory: a missing trailing slash is added so
/// `Widgets/Images/x.png` lands beneath it instead of replacing its last
/// segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrlLocator {
    base: Url,
}

impl BaseUrlLocator {
    /// Creates a locator rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, LocatorError> {
        let mut base = Url::parse(base_url).map_err(|e| LocatorError::InvalidBase {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(LocatorError::InvalidBase {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    /// Returns the normalized base URL.
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }
}

impl ResourceLocator for BaseUrlLocator {
    fn resolve(&self, path: &str) -> Result<String, LocatorError> {
        self.base
            .join(path)
            .map(String::from)
            .map_err(|e| LocatorError::Unresolvable {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }
}
