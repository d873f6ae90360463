//! The source adapter contract and registry.
//!
//! Every naming authority is served by one [`Adapter`]. An adapter reads a
//! single raw input file from the data directory and normalizes it into a
//! [`Catalog`] keyed by `"<authority>:<title>"`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               AdapterRegistry                │
//! │  ┌──────────┐ ┌──────┐ ┌────────────┐ ┌────┐ │
//! │  │ VOTable  │ │ JSON │ │ fixed-width│ │text│ │
//! │  │aas/nssdc/│ │ ppi  │ │ads/mpc/dsn │ │... │ │
//! │  │  naif    │ │      │ │            │ │    │ │
//! │  └──────────┘ └──────┘ └────────────┘ └────┘ │
//! └──────────────┬───────────────────────────────┘
//!                ▼
//!       build_catalog() → aggregate Catalog → JSON
//! ```
//!
//! # Usage
//!
//! ```rust
//! use facility_catalog::traits::{AdapterRegistry, LoadContext};
//! use facility_catalog::vocabulary::Vocabulary;
//!
//! let registry = AdapterRegistry::builtin();
//! let vocabulary = Vocabulary::default();
//! let ctx = LoadContext::new("data/", &vocabulary);
//! for adapter in registry.adapters() {
//!     let _path = ctx.input_path(adapter.as_ref());
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::error::AdapterError;
use crate::models::Catalog;
use crate::vocabulary::Vocabulary;

/// Everything an adapter needs besides its raw input.
///
/// Built once from configuration and passed by reference into every load.
#[derive(Debug, Clone, Copy)]
pub struct LoadContext<'a> {
    pub data_dir: &'a Path,
    pub vocabulary: &'a Vocabulary,
}

impl<'a> LoadContext<'a> {
    pub fn new(data_dir: &'a (impl AsRef<Path> + ?Sized), vocabulary: &'a Vocabulary) -> Self {
        Self {
            data_dir: data_dir.as_ref(),
            vocabulary,
        }
    }

    /// Path of `adapter`'s raw input inside the data directory.
    pub fn input_path(&self, adapter: &dyn Adapter) -> PathBuf {
        self.data_dir.join(adapter.file_name())
    }
}

/// Result of a load that did not fail.
///
/// `Absent` means the input did not exist (or could not be fetched), which is
/// distinct from a present input that holds no records.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Catalog),
    Absent { location: String },
}

impl LoadOutcome {
    pub fn is_absent(&self) -> bool {
        matches!(self, LoadOutcome::Absent { .. })
    }

    /// The loaded records; empty when the input was absent.
    pub fn into_catalog(self) -> Catalog {
        match self {
            LoadOutcome::Loaded(catalog) => catalog,
            LoadOutcome::Absent { .. } => Catalog::new(),
        }
    }
}

/// A parser for one naming authority's raw facility list.
///
/// # Example
///
/// ```rust
/// use facility_catalog::error::AdapterError;
/// use facility_catalog::models::{entity_key, AlternateName, Catalog, Record};
/// use facility_catalog::traits::Adapter;
/// use facility_catalog::vocabulary::Vocabulary;
///
/// pub struct LineListAdapter;
///
/// impl Adapter for LineListAdapter {
///     fn authority(&self) -> &str { "lines" }
///     fn description(&self) -> &str { "One facility name per line" }
///     fn file_name(&self) -> &str { "lines.txt" }
///
///     fn parse(&self, input: &str, _vocabulary: &Vocabulary) -> Result<Catalog, AdapterError> {
///         Ok(input
///             .lines()
///             .map(str::trim)
///             .filter(|l| !l.is_empty())
///             .map(|l| (entity_key("lines", l), Record::named(AlternateName::new(l, "lines"))))
///             .collect())
///     }
/// }
/// ```
pub trait Adapter: Send + Sync {
    /// Authority prefix of every key this adapter produces (e.g. `"aas"`).
    fn authority(&self) -> &str;

    /// One-line description shown by `facat sources`.
    fn description(&self) -> &str;

    /// Raw input file name, relative to the data directory.
    fn file_name(&self) -> &str;

    /// Normalize an in-memory raw input.
    ///
    /// Any malformed row aborts the whole parse.
    fn parse(&self, input: &str, vocabulary: &Vocabulary) -> Result<Catalog, AdapterError>;

    /// Read the raw input from the data directory and parse it.
    ///
    /// A missing file is logged and reported as [`LoadOutcome::Absent`].
    fn load(&self, ctx: &LoadContext<'_>) -> Result<LoadOutcome, AdapterError> {
        let path = ctx.data_dir.join(self.file_name());
        if !path.is_file() {
            tracing::warn!(
                authority = self.authority(),
                path = %path.display(),
                "input file does not exist"
            );
            return Ok(LoadOutcome::Absent {
                location: path.display().to_string(),
            });
        }

        tracing::debug!(authority = self.authority(), path = %path.display(), "reading input");
        let bytes = std::fs::read(&path)?;
        let text = String::from_utf8_lossy(&bytes);
        let catalog = self.parse(&text, ctx.vocabulary)?;
        tracing::info!(
            authority = self.authority(),
            records = catalog.len(),
            "loaded"
        );
        Ok(LoadOutcome::Loaded(catalog))
    }
}

/// Registry of adapters, looked up by authority.
///
/// Use [`AdapterRegistry::builtin`] for the nine built-in authorities, then
/// optionally [`register`](AdapterRegistry::register) more.
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn Adapter>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Registry pre-loaded with every built-in adapter.
    pub fn builtin() -> Self {
        use crate::adapter_aas::AasAdapter;
        use crate::adapter_ads::AdsAdapter;
        use crate::adapter_dsn::DsnAdapter;
        use crate::adapter_iraf::IrafAdapter;
        use crate::adapter_mpc::MpcAdapter;
        use crate::adapter_naif::NaifAdapter;
        use crate::adapter_nssdc::NssdcAdapter;
        use crate::adapter_ppi::PpiAdapter;
        use crate::adapter_xephem::XephemAdapter;

        let mut registry = Self::new();
        registry.register(Box::new(AasAdapter));
        registry.register(Box::new(PpiAdapter));
        registry.register(Box::new(AdsAdapter));
        registry.register(Box::new(NssdcAdapter));
        registry.register(Box::new(XephemAdapter));
        registry.register(Box::new(NaifAdapter));
        registry.register(Box::new(MpcAdapter));
        registry.register(Box::new(IrafAdapter));
        registry.register(Box::new(DsnAdapter));
        registry
    }

    /// Register an adapter. A later adapter for the same authority shadows
    /// the earlier one in [`find`](AdapterRegistry::find).
    pub fn register(&mut self, adapter: Box<dyn Adapter>) {
        self.adapters.retain(|a| a.authority() != adapter.authority());
        self.adapters.push(adapter);
    }

    pub fn adapters(&self) -> &[Box<dyn Adapter>] {
        &self.adapters
    }

    pub fn find(&self, authority: &str) -> Option<&dyn Adapter> {
        self.adapters
            .iter()
            .find(|a| a.authority() == authority)
            .map(|a| a.as_ref())
    }

    pub fn authorities(&self) -> Vec<&str> {
        self.adapters.iter().map(|a| a.authority()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
