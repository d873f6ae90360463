//! Serialize the aggregate catalog as JSON.
//!
//! The output is a single JSON object keyed by entity key, sorted, with
//! empty fields omitted. Pretty-printed unless `--compact` is given.

use anyhow::{Context, Result};
use std::path::Path;

use crate::models::Catalog;

/// Render `catalog` as JSON text.
pub fn to_json(catalog: &Catalog, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(catalog)?
    } else {
        serde_json::to_string(catalog)?
    };
    Ok(json)
}

/// Write the catalog as JSON.
///
/// If `output` is `Some`, writes to that file path (creating parent
/// directories). Otherwise writes to stdout for piping.
pub fn write_catalog(catalog: &Catalog, output: Option<&Path>, pretty: bool) -> Result<()> {
    let json = to_json(catalog, pretty)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Exported {} records to {}", catalog.len(), path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
