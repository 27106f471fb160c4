//! Catalog build errors.

use crate::resource::LocatorError;
use thiserror::Error;

/// Errors that abort a catalog build.
///
/// Provider construction problems are not reported here; they surface when
/// an entry's deferred constructor is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// An entry's icon could not be resolved
    #[error("Failed to resolve icon for '{name}': {source}")]
    IconResolution {
        name: String,
        #[source]
        source: LocatorError,
    },
}
