//! # cgquote CLI Library
//!
//! Command-line front end for cgquote-core. The binary in `main.rs` only
//! parses arguments and prints; everything else lives here so it can be
//! tested.
//!
//! ## Module Organization
//! ```text
//! cgquote_cli/
//! ├── lib.rs          ◄─── You are here (arguments, logging, dispatch)
//! ├── commands.rs     ◄─── estimate / validate / rates
//! ├── settings.rs     ◄─── cgquote.toml + CGQUOTE__* environment
//! └── error.rs        ◄─── CliError and the ApiError printed on failure
//! ```
//!
//! ## Streams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdout  ── JSON only (EstimateReport, RateTable, ValidationReport)     │
//! │  stderr  ── tracing events, and one ApiError JSON line on failure       │
//! │  exit    ── 0 on success, 1 on any error                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::CliError;
use settings::Settings;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cgquote", version, about = "Cost estimates for 3DCG video productions")]
pub struct Cli {
    /// Settings file (TOML); defaults to ./cgquote.toml when present
    #[arg(long, global = true, env = "CGQUOTE_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Print compact single-line JSON
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate a project file and print the report
    Estimate {
        /// Project configuration (JSON)
        project: PathBuf,

        /// Rate table (JSON); replaces the studio standard rates
        #[arg(long)]
        rates: Option<PathBuf>,

        /// Include the whole-yen quote
        #[arg(long)]
        quote: bool,
    },

    /// Validate a project file without estimating it
    Validate {
        /// Project configuration (JSON)
        project: PathBuf,

        /// Rate table (JSON) to validate alongside
        #[arg(long)]
        rates: Option<PathBuf>,
    },

    /// Print the effective rate table
    Rates {
        /// Rate table (JSON); replaces the studio standard rates
        #[arg(long)]
        rates: Option<PathBuf>,
    },
}

/// Runs one CLI invocation and returns the JSON to print on stdout.
///
/// ## Sequence
/// ```text
/// 1. Load settings ──► 2. Init logging ──► 3. Run command ──► 4. Render
/// ```
pub fn run(cli: Cli) -> Result<String, CliError> {
    let settings = Settings::load(cli.settings.as_deref())?;
    init_tracing(settings.log_level.as_deref());

    let pretty = settings.pretty && !cli.compact;

    match cli.command {
        Command::Estimate {
            project,
            rates,
            quote,
        } => {
            let report =
                commands::estimate_project(&project, rates.as_deref(), quote, &settings)?;
            commands::render(&report, pretty)
        }
        Command::Validate { project, rates } => {
            let report = commands::validate_project(&project, rates.as_deref())?;
            commands::render(&report, pretty)
        }
        Command::Rates { rates } => {
            let table = commands::effective_rates(rates.as_deref(), &settings)?;
            info!("Printing effective rate table");
            commands::render(&table, pretty)
        }
    }
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages, including engine stages
/// - `log_level` setting - Used when `RUST_LOG` is unset
/// - Default: INFO level
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_tracing(log_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
