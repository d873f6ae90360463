//! Loading a previously published catalog.
//!
//! The source is either an `http://`/`https://` URL, fetched with one
//! blocking GET and no retry, or a file name relative to the data directory.
//! Either way the records' `measurementType` values are translated after
//! loading. An unreachable URL or a missing file is logged and yields
//! [`LoadOutcome::Absent`].

use std::time::Duration;

use crate::error::AdapterError;
use crate::models::Catalog;
use crate::traits::{LoadContext, LoadOutcome};

const AUTHORITY: &str = "existing";

pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load the catalog at `source`; see the module docs.
pub fn load_existing(
    source: &str,
    ctx: &LoadContext<'_>,
    timeout: Duration,
) -> Result<LoadOutcome, AdapterError> {
    let outcome = if is_url(source) {
        fetch_remote(source, timeout)
    } else {
        read_local(source, ctx)?
    };

    Ok(match outcome {
        LoadOutcome::Loaded(mut catalog) => {
            ctx.vocabulary.apply(&mut catalog);
            tracing::info!(source, records = catalog.len(), "loaded existing catalog");
            LoadOutcome::Loaded(catalog)
        }
        absent => absent,
    })
}

fn read_local(file: &str, ctx: &LoadContext<'_>) -> Result<LoadOutcome, AdapterError> {
    let path = ctx.data_dir.join(file);
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "existing catalog file does not exist");
        return Ok(LoadOutcome::Absent {
            location: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(&path)?;
    let catalog: Catalog =
        serde_json::from_str(&content).map_err(|e| AdapterError::json(AUTHORITY, e))?;
    Ok(LoadOutcome::Loaded(catalog))
}

fn fetch_remote(url: &str, timeout: Duration) -> LoadOutcome {
    tracing::info!(url, "retrieving existing catalog");
    match get_catalog(url, timeout) {
        Ok(catalog) => LoadOutcome::Loaded(catalog),
        Err(e) => {
            tracing::warn!(url, error = %e, "could not read catalog from web service");
            LoadOutcome::Absent {
                location: url.to_string(),
            }
        }
    }
}

fn get_catalog(url: &str, timeout: Duration) -> Result<Catalog, reqwest::Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    client.get(url).send()?.error_for_status()?.json::<Catalog>()
}
