//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`common`] - Config loading, overrides and catalog construction
//! - [`config`] - Configuration management (path, init, show)
//! - [`list`] - Print the catalog
//! - [`show`] - Select an entry and describe its provider
//! - [`tile_url`] - Print the request URL of one tile

pub mod common;
pub mod config;
pub mod list;
pub mod show;
pub mod tile_url;
