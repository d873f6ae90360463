//! Record retrieval by entity key.
//!
//! Loads only the authority named by the key prefix, so `facat get
//! dsn:31` reads `DSN.txt` and nothing else.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::ingest::build_catalog;
use crate::models::Record;
use crate::traits::AdapterRegistry;

/// Core lookup returning the record (used by the CLI and tests).
pub fn get_record(config: &Config, registry: &AdapterRegistry, key: &str) -> Result<Record> {
    let Some((authority, title)) = key.split_once(':') else {
        bail!("Entity key must look like '<authority>:<title>', got '{}'", key);
    };
    if title.is_empty() {
        bail!("Entity key has an empty title: '{}'", key);
    }

    let (mut catalog, report) = build_catalog(config, registry, authority, None)?;
    if let Some(location) = report.absent.first() {
        bail!("record not found: {} (input {} does not exist)", key, location);
    }
    match catalog.remove(key) {
        Some(record) => Ok(record),
        None => bail!("record not found: {}", key),
    }
}

/// CLI entry point: prints the record as pretty JSON to stdout.
pub fn run_get(config: &Config, registry: &AdapterRegistry, key: &str) -> Result<()> {
    let record = get_record(config, registry, key)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
