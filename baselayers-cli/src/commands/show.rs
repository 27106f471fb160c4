//! `baselayers show` - select an entry and describe the provider it builds.

use super::common::Catalog;
use crate::error::CliError;
use tracing::info;

/// Runs the command.
pub fn run(catalog: &Catalog, query: &str) -> Result<(), CliError> {
    let (index, entry) = catalog.select(query)?;
    info!(index, name = entry.name(), "Selected base layer");

    let provider = entry.create_provider().map_err(|error| CliError::Provider {
        name: entry.plain_name(),
        error,
    })?;

    println!("{} (#{})", entry.plain_name(), index);
    println!();
    for line in entry.tooltip().lines() {
        println!("  {}", line);
    }
    println!();
    println!("  Icon:     {}", entry.icon_url());
    println!("  Provider: {} ({})", provider.name(), provider.kind());
    println!("  Endpoint: {}", provider.url());
    println!("  Zoom:     {}-{}", provider.min_zoom(), provider.max_zoom());
    if let Some(credit) = provider.credit() {
        println!("  Credit:   {}", credit);
    }
    match provider.proxy() {
        Some(relay) => println!("  Relay:    {}", relay.base_url()),
        None => println!("  Relay:    none"),
    }

    Ok(())
}
