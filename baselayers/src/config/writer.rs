//! INI serialization logic for converting `ConfigFile` → INI string.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[relay]
; Relay that forwards imagery requests for hosts without cross-origin support
url = {}
; Host capability:
;   supported   - read imagery directly (sources marked "always" still relay)
;   unsupported - route every relayable source through the relay
cross_origin = {}

[resources]
; Base URL that icon and bundled texture paths are resolved against
base_url = {}

[logging]
directory = {}
file = {}
"#,
        config.relay.url,
        config.relay.cross_origin,
        config.resources.base_url,
        config.logging.directory.to_string_lossy(),
        config.logging.file,
    )
}
