//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use baselayers::catalog::CatalogError;
use baselayers::config::ConfigFileError;
use baselayers::coord::CoordError;
use baselayers::provider::ProviderError;
use baselayers::resource::LocatorError;
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be loaded or written
    Config(ConfigFileError),
    /// Resource base URL is unusable
    Locator(LocatorError),
    /// Catalog build failed
    Catalog(CatalogError),
    /// No catalog entry matches the query
    UnknownEntry(String),
    /// Selected entry's provider failed to construct or address a tile
    Provider { name: String, error: ProviderError },
    /// Tile coordinates are invalid
    InvalidTile(CoordError),
    /// Failed to serialize output
    Output(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::UnknownEntry(_) => {
                eprintln!();
                eprintln!("Run `baselayers list` to see available entries.");
                eprintln!("Entries can be selected by index or by name (case-insensitive).");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Check the file shown by `baselayers config path`,");
                eprintln!("or recreate it with `baselayers config init`.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Locator(e) => write!(f, "Resource locator error: {}", e),
            CliError::Catalog(e) => write!(f, "Failed to build catalog: {}", e),
            CliError::UnknownEntry(query) => write!(f, "No catalog entry matches '{}'", query),
            CliError::Provider { name, error } => {
                write!(f, "Provider for '{}' failed: {}", name, error)
            }
            CliError::InvalidTile(e) => write!(f, "Invalid tile: {}", e),
            CliError::Output(msg) => write!(f, "Failed to write output: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Locator(e) => Some(e),
            CliError::Catalog(e) => Some(e),
            CliError::Provider { error, .. } => Some(error),
            CliError::InvalidTile(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<LocatorError> for CliError {
    fn from(e: LocatorError) -> Self {
        CliError::Locator(e)
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        CliError::Catalog(e)
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::InvalidTile(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unknown_entry_message() {
        let err = CliError::UnknownEntry("Google".to_string());
        assert_eq!(err.to_string(), "No catalog entry matches 'Google'");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_provider_error_has_source() {
        let err = CliError::Provider {
            name: "Bing Maps Aerial".to_string(),
            error: ProviderError::UnsupportedZoom(0),
        };
        assert!(err.to_string().contains("Bing Maps Aerial"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_coord_error() {
        let err: CliError = CoordError::InvalidZoom(40).into();
        assert!(matches!(err, CliError::InvalidTile(_)));
    }
}
