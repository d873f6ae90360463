//! Catalog build orchestration.
//!
//! Coordinates the full build: adapter selection → per-authority load →
//! aggregation, on top of an optional previously published catalog.
//! Absent inputs are tolerated and reported; malformed inputs abort.

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::Config;
use crate::existing::load_existing;
use crate::models::Catalog;
use crate::traits::{Adapter, AdapterRegistry, LoadContext, LoadOutcome};

/// What a build loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    /// Records contributed per authority, in load order.
    pub loaded: Vec<(String, usize)>,
    /// Inputs that did not exist or could not be fetched.
    pub absent: Vec<String>,
    /// Records taken from the existing catalog.
    pub existing_records: usize,
    /// Size of the aggregate catalog.
    pub total_records: usize,
}

/// Resolve a selector (`all` or a comma-separated list of authorities).
pub fn select_adapters<'r>(
    registry: &'r AdapterRegistry,
    selector: &str,
) -> Result<Vec<&'r dyn Adapter>> {
    if selector == "all" {
        return Ok(registry.adapters().iter().map(|a| a.as_ref()).collect());
    }

    let mut selected: Vec<&dyn Adapter> = Vec::new();
    for name in selector.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match registry.find(name) {
            Some(adapter) => {
                if !selected.iter().any(|a| a.authority() == name) {
                    selected.push(adapter);
                }
            }
            None => bail!(
                "Unknown authority: '{}'. Available: all, {}",
                name,
                registry.authorities().join(", ")
            ),
        }
    }
    if selected.is_empty() {
        bail!("No authority selected");
    }
    Ok(selected)
}

/// Build the aggregate catalog.
///
/// The existing catalog, when given, is the base; records loaded by the
/// adapters replace existing records with the same key.
pub fn build_catalog(
    config: &Config,
    registry: &AdapterRegistry,
    selector: &str,
    existing: Option<&str>,
) -> Result<(Catalog, BuildReport)> {
    let adapters = select_adapters(registry, selector)?;
    let vocabulary = config.vocabulary();
    let ctx = LoadContext::new(&config.data.dir, &vocabulary);
    let mut report = BuildReport::default();

    let mut catalog = match existing {
        Some(source) => {
            let timeout = Duration::from_secs(config.remote.timeout_secs);
            match load_existing(source, &ctx, timeout)
                .with_context(|| format!("Failed to load existing catalog '{}'", source))?
            {
                LoadOutcome::Loaded(catalog) => {
                    report.existing_records = catalog.len();
                    catalog
                }
                LoadOutcome::Absent { location } => {
                    report.absent.push(location);
                    Catalog::new()
                }
            }
        }
        None => Catalog::new(),
    };

    for adapter in adapters {
        let outcome = adapter
            .load(&ctx)
            .with_context(|| format!("Failed to load authority '{}'", adapter.authority()))?;
        match outcome {
            LoadOutcome::Loaded(records) => {
                report
                    .loaded
                    .push((adapter.authority().to_string(), records.len()));
                catalog.extend(records);
            }
            LoadOutcome::Absent { location } => report.absent.push(location),
        }
    }

    report.total_records = catalog.len();
    Ok((catalog, report))
}

/// Print a build summary to stderr.
pub fn print_report(selector: &str, report: &BuildReport) {
    let loaded: BTreeMap<&str, usize> = report
        .loaded
        .iter()
        .map(|(authority, n)| (authority.as_str(), *n))
        .collect();
    eprintln!("build {}", selector);
    for (authority, n) in &loaded {
        eprintln!("  {:<10} {} records", authority, n);
    }
    if report.existing_records > 0 {
        eprintln!("  existing   {} records", report.existing_records);
    }
    for location in &report.absent {
        eprintln!("  absent     {}", location);
    }
    eprintln!("  total      {} records", report.total_records);
}
