//! Relay endpoint and request rewriting.

use std::fmt;
use url::form_urlencoded;

/// An intermediary HTTP endpoint that forwards imagery requests.
///
/// A relayed request is the relay base URL followed by `?` and the fully
/// percent-encoded target URL.
#[derive(Debug, PartialEq, Eq)]
pub struct RelayEndpoint {
    base_url: String,
}

impl RelayEndpoint {
    /// Creates a relay pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Returns the relay base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rewrites `resource` so that it is fetched through this relay.
    pub fn url_for(&self, resource: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(resource.as_bytes()).collect();
        format!("{}?{}", self.base_url, encoded)
    }
}

impl fmt::Display for RelayEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url)
    }
}
