//! Default values and constants for all configuration settings.

use super::settings::*;
use crate::relay::DEFAULT_RELAY_URL;
use crate::resource::DEFAULT_ASSET_BASE_URL;
use std::path::PathBuf;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "baselayers.log";

/// Default log directory (~/.baselayers/logs).
pub fn default_log_directory() -> PathBuf {
    super::file::config_directory().join("logs")
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            relay: RelaySettings {
                url: DEFAULT_RELAY_URL.to_string(),
                cross_origin: CrossOriginSupport::Supported,
            },
            resources: ResourceSettings {
                base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            },
            logging: LoggingSettings {
                directory: default_log_directory(),
                file: DEFAULT_LOG_FILE.to_string(),
            },
        }
    }
}
