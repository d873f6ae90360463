//! # Facility Catalog CLI (`facat`)
//!
//! The `facat` binary builds the normalized facility catalog from the raw
//! authority lists in the data directory.
//!
//! ## Usage
//!
//! ```bash
//! facat --config ./config/facat.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `facat sources` | List every authority and whether its input exists |
//! | `facat build [selector]` | Build the catalog and write JSON |
//! | `facat get <key>` | Print one record by entity key |
//! | `facat translate <label>...` | Translate measurement-type labels |
//!
//! ## Examples
//!
//! ```bash
//! # Build everything on top of the published catalog
//! facat build all --existing https://example.org/catalog.json --output out/catalog.json
//!
//! # Only the XEphem and IRAF site lists, read from another directory
//! facat --data-dir /srv/lists build xephem,iraf
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use facility_catalog::config;
use facility_catalog::traits::AdapterRegistry;
use facility_catalog::{export, get, ingest, sources};

/// Facility Catalog: normalize astronomical facility lists into one
/// JSON catalog.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. A missing file falls back to built-in defaults.
#[derive(Parser)]
#[command(
    name = "facat",
    about = "Normalize observatory and spacecraft lists from many naming authorities into one catalog",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/facat.toml")]
    config: PathBuf,

    /// Directory holding the raw input files; overrides `[data].dir`.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (`-v` info, `-vv` debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List every authority, its input path, and whether the input exists.
    Sources,

    /// Build the catalog and write it as JSON.
    ///
    /// A summary of per-authority counts and absent inputs goes to stderr.
    Build {
        /// `all` or a comma-separated list of authorities (e.g. `aas,dsn`).
        #[arg(default_value = "all")]
        selector: String,

        /// Previously published catalog to build on: a file name in the
        /// data directory or an `http(s)://` URL.
        #[arg(long)]
        existing: Option<String>,

        /// Write to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },

    /// Print one record by entity key (`<authority>:<title>`).
    Get {
        /// Entity key, e.g. `dsn:31`.
        key: String,
    },

    /// Translate measurement-type labels to their vocabulary codes.
    Translate {
        /// Labels to translate; unknown labels are printed unchanged.
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = config::load_config_or_default(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        cfg = cfg.with_data_dir(dir);
    }
    let registry = AdapterRegistry::builtin();

    match cli.command {
        Commands::Sources => {
            sources::list_sources(&cfg, &registry)?;
        }
        Commands::Build {
            selector,
            existing,
            output,
            compact,
        } => {
            let (catalog, report) =
                ingest::build_catalog(&cfg, &registry, &selector, existing.as_deref())?;
            ingest::print_report(&selector, &report);
            export::write_catalog(&catalog, output.as_deref(), !compact)?;
        }
        Commands::Get { key } => {
            get::run_get(&cfg, &registry, &key)?;
        }
        Commands::Translate { labels } => {
            let vocabulary = cfg.vocabulary();
            for label in &labels {
                println!("{}\t{}", label, vocabulary.translate(label));
            }
        }
    }

    Ok(())
}
