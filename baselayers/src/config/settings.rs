//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Relay settings
    pub relay: RelaySettings,
    /// Resource locator settings
    pub resources: ResourceSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Whether the host can read cross-origin imagery directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossOriginSupport {
    /// Imagery is read directly
    Supported,
    /// Imagery goes through the relay
    Unsupported,
}

impl CrossOriginSupport {
    /// Returns the config-file spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supported => "supported",
            Self::Unsupported => "unsupported",
        }
    }

    /// Returns `true` for [`CrossOriginSupport::Supported`].
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported)
    }
}

impl fmt::Display for CrossOriginSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrossOriginSupport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "supported" | "yes" | "true" => Ok(Self::Supported),
            "unsupported" | "no" | "false" => Ok(Self::Unsupported),
            other => Err(format!("unknown cross-origin setting '{}'", other)),
        }
    }
}

/// Relay configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaySettings {
    /// Base URL of the relay endpoint
    pub url: String,
    /// Host capability used by the detector
    pub cross_origin: CrossOriginSupport,
}

/// Resource locator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSettings {
    /// Base URL that icon and asset paths are resolved against
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Directory for log files
    pub directory: PathBuf,
    /// Log file name
    pub file: String,
}
