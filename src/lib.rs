//! # Facility Catalog
//!
//! Normalizes the observatory, spacecraft and facility lists published by
//! many naming authorities (AAS, PDS-PPI, ADS, NSSDC, XEphem, NAIF, IAU-MPC,
//! IRAF, DSN) into one catalog keyed by `"<authority>:<title>"`.
//!
//! Each authority publishes its list in its own format: VOTable XML, a
//! search-service JSON dump, fixed-width text, delimited text, or a
//! block-structured parameter file. One [`traits::Adapter`] per authority
//! reads its file from the data directory and emits normalized
//! [`models::Record`]s; the build pipeline merges them over an optional
//! previously published catalog and writes JSON.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  Raw inputs  │──▶│   Adapters   │──▶│   Catalog    │──▶ JSON
//! │ XML/JSON/txt │   │ + vocabulary │   │ (BTreeMap)   │
//! └──────────────┘   └──────────────┘   └──────▲───────┘
//!                                              │
//!                              existing catalog (file / URL)
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! facat sources                         # which inputs are present
//! facat build all --output catalog.json # build everything
//! facat build aas,dsn --compact         # selected authorities to stdout
//! facat get iau-mpc:568                 # one record
//! facat translate Radio X-Rays          # vocabulary lookup
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Normalized record types |
//! | [`traits`] | `Adapter` trait, `LoadContext`, registry |
//! | [`vocabulary`] | Measurement-type label translation |
//! | [`coords`] | DMS and sexagesimal angle conversion |
//! | [`accumulate`] | Deduplicating merge helpers |
//! | [`votable`] | VOTable table reader |
//! | [`existing`] | Previously published catalog (file or URL) |
//! | [`ingest`] | Build pipeline |
//! | [`export`] | JSON output |
//! | [`adapter_aas`] … [`adapter_dsn`] | One module per authority |

pub mod accumulate;
pub mod adapter_aas;
pub mod adapter_ads;
pub mod adapter_dsn;
pub mod adapter_iraf;
pub mod adapter_mpc;
pub mod adapter_naif;
pub mod adapter_nssdc;
pub mod adapter_ppi;
pub mod adapter_xephem;
pub mod config;
pub mod coords;
pub mod error;
pub mod existing;
pub mod export;
pub mod get;
pub mod ingest;
pub mod models;
pub mod sources;
pub mod text;
pub mod traits;
pub mod vocabulary;
pub mod votable;
