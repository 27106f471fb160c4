//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;
use url::Url;

use super::file::ConfigFileError;
use super::settings::{ConfigFile, CrossOriginSupport};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [relay] section
    if let Some(section) = ini.section(Some("relay")) {
        if let Some(v) = section.get("url") {
            config.relay.url = parse_url("relay", "url", v)?;
        }
        if let Some(v) = section.get("cross_origin") {
            config.relay.cross_origin =
                v.parse::<CrossOriginSupport>()
                    .map_err(|_| ConfigFileError::InvalidValue {
                        section: "relay".to_string(),
                        key: "cross_origin".to_string(),
                        value: v.to_string(),
                        reason: "must be one of: supported, unsupported".to_string(),
                    })?;
        }
    }

    // [resources] section
    if let Some(section) = ini.section(Some("resources")) {
        if let Some(v) = section.get("base_url") {
            config.resources.base_url = parse_url("resources", "base_url", v)?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if v.is_empty() || v.contains(['/', '\\']) {
                return Err(ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "file".to_string(),
                    value: v.to_string(),
                    reason: "must be a plain file name".to_string(),
                });
            }
            config.logging.file = v.to_string();
        }
    }

    Ok(config)
}

fn parse_url(section: &str, key: &str, value: &str) -> Result<String, ConfigFileError> {
    let value = value.trim();
    Url::parse(value)
        .map(|_| value.to_string())
        .map_err(|e| ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: format!("not an absolute URL ({})", e),
        })
}

pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
