//! `baselayers config` - inspect and initialize config.ini.

use clap::Subcommand;
use baselayers::config::ConfigFile;
use std::path::Path;

use crate::error::CliError;

/// Config action subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the path of config.ini
    Path,
    /// Write a default config.ini if none exists
    Init,
    /// Print the effective configuration, including command-line overrides
    Show,
}

/// Run a config subcommand.
///
/// `config` is only needed by `show`, so a broken file does not block
/// `path` or `init`.
pub fn run(
    action: ConfigAction,
    config_path: &Path,
    config: impl FnOnce() -> Result<ConfigFile, CliError>,
) -> Result<(), CliError> {
    match action {
        ConfigAction::Path => {
            path(config_path);
            Ok(())
        }
        ConfigAction::Init => init(config_path),
        ConfigAction::Show => {
            show(&config()?);
            Ok(())
        }
    }
}

/// Prints the config file path.
pub fn path(config_path: &Path) {
    println!("{}", config_path.display());
}

/// Writes a default config file unless one exists.
pub fn init(config_path: &Path) -> Result<(), CliError> {
    if ConfigFile::ensure_exists_at(config_path)? {
        println!("Created {}", config_path.display());
    } else {
        println!("{} already exists; leaving it unchanged", config_path.display());
    }
    Ok(())
}

/// Prints the effective configuration.
pub fn show(config: &ConfigFile) {
    println!("[relay]");
    println!("url = {}", config.relay.url);
    println!("cross_origin = {}", config.relay.cross_origin);
    println!();
    println!("[resources]");
    println!("base_url = {}", config.resources.base_url);
    println!();
    println!("[logging]");
    println!("directory = {}", config.logging.directory.display());
    println!("file = {}", config.logging.file);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_file_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");

        init(&path).unwrap();
        assert!(path.exists());
        let first = std::fs::read_to_string(&path).unwrap();

        init(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
    }
}
