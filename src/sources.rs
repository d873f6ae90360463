use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::traits::{AdapterRegistry, LoadContext};

/// Input status of one registered authority.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceStatus {
    pub authority: String,
    pub path: PathBuf,
    pub present: bool,
}

pub fn source_statuses(config: &Config, registry: &AdapterRegistry) -> Vec<SourceStatus> {
    let vocabulary = config.vocabulary();
    let ctx = LoadContext::new(&config.data.dir, &vocabulary);
    registry
        .adapters()
        .iter()
        .map(|adapter| {
            let path = ctx.input_path(adapter.as_ref());
            SourceStatus {
                authority: adapter.authority().to_string(),
                present: path.is_file(),
                path,
            }
        })
        .collect()
}

pub fn list_sources(config: &Config, registry: &AdapterRegistry) -> Result<()> {
    println!("{:<16} {:<10} INPUT", "AUTHORITY", "STATUS");
    for status in source_statuses(config, registry) {
        let label = if status.present { "OK" } else { "MISSING" };
        println!(
            "{:<16} {:<10} {}",
            status.authority,
            label,
            status.path.display()
        );
    }
    Ok(())
}
