//! `baselayers list` - print the catalog without constructing providers.

use super::common::Catalog;
use crate::error::CliError;
use baselayers::catalog::RelayPolicy;
use serde::Serialize;

/// One row of the listing.
#[derive(Debug, Serialize)]
pub struct EntrySummary {
    pub index: usize,
    pub name: String,
    pub kind: &'static str,
    pub relay_policy: &'static str,
    pub relayed: bool,
    pub default: bool,
    pub icon_url: String,
    pub tooltip: String,
}

fn policy_label(policy: RelayPolicy) -> &'static str {
    match policy {
        RelayPolicy::Never => "never",
        RelayPolicy::IfNeeded => "if-needed",
        RelayPolicy::Always => "always",
    }
}

/// Summarizes each entry from its descriptor and the relay decision.
pub fn summarize(catalog: &Catalog) -> Vec<EntrySummary> {
    catalog
        .entries
        .iter()
        .zip(catalog.descriptors)
        .enumerate()
        .map(|(index, (entry, descriptor))| EntrySummary {
            index,
            name: entry.plain_name(),
            kind: descriptor.provider.kind().as_str(),
            relay_policy: policy_label(descriptor.relay),
            relayed: descriptor.relay.select(&catalog.decision).is_some(),
            default: index == 0,
            icon_url: entry.icon_url().to_string(),
            tooltip: entry.tooltip().to_string(),
        })
        .collect()
}

/// Runs the command.
pub fn run(catalog: &Catalog, json: bool) -> Result<(), CliError> {
    let summaries = summarize(catalog);

    if json {
        let out =
            serde_json::to_string_pretty(&summaries).map_err(|e| CliError::Output(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    let relay_state = if catalog.decision.is_required() {
        "required"
    } else {
        "not required"
    };
    println!(
        "Relay {} ({})",
        relay_state,
        catalog.decision.relay().base_url()
    );
    println!();
    println!("{:>3}  {:<30} {:<12} {:<10}", "#", "NAME", "KIND", "RELAY");
    for s in &summaries {
        let marker = if s.default { "*" } else { "" };
        let relay = if s.relayed { "yes" } else { "no" };
        println!(
            "{:>3}  {:<30} {:<12} {:<10} {}",
            s.index, s.name, s.kind, relay, marker
        );
    }
    println!();
    println!("* default selection");
    Ok(())
}
