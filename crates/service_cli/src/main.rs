//! PlotNomial CLI - Polynomial Interpolation from the Command Line
//!
//! This is the operational entry point for the interp_core library.
//!
//! # Commands
//!
//! - `plotnomial expand --input <file>` - Print the interpolating polynomial of every line
//! - `plotnomial compare --input <file>` - Compare timing and stability of the three methods
//! - `plotnomial sample --input <file>` - Sample interpolated curves for plotting
//! - `plotnomial check` - Validate and print the effective configuration
//!
//! # Input
//!
//! Input files hold a JSON list of lines, each `{label, color, points: [{x, y}]}`.
//! Logs go to stderr so stdout stays machine-readable.

use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::CliConfig;
pub use error::{CliError, Result};

/// PlotNomial polynomial interpolation CLI
#[derive(Parser)]
#[command(name = "plotnomial")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "plotnomial.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Lagrange, Newton and barycentric expressions of every line
    Expand {
        /// Path to point-set file (JSON)
        #[arg(short, long)]
        input: String,

        /// Arithmetic mode (exact, float)
        #[arg(short, long)]
        precision: Option<String>,

        /// Only expand the line with this label
        #[arg(short, long)]
        line: Option<String>,
    },

    /// Compare construction, expansion and evaluation cost plus stability
    Compare {
        /// Path to point-set file (JSON)
        #[arg(short, long)]
        input: String,

        /// Arithmetic mode (exact, float)
        #[arg(short, long)]
        precision: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Sample interpolated curves over each line's x-range
    Sample {
        /// Path to point-set file (JSON)
        #[arg(short, long)]
        input: String,

        /// Interpolation method (lagrange, newton, barycentric)
        #[arg(short, long, default_value = "barycentric")]
        method: String,

        /// Arithmetic mode (exact, float)
        #[arg(short, long)]
        precision: Option<String>,

        /// Number of samples per line
        #[arg(short, long)]
        samples: Option<usize>,

        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: String,
    },

    /// Check and print the effective configuration
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load_with_env_and_validate(Path::new(&cli.config))?;

    init_tracing(if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    });

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config_file = %cli.config, ?config, "configuration loaded");

    match cli.command {
        Commands::Expand {
            input,
            precision,
            line,
        } => commands::expand::run(&input, precision.as_deref(), line.as_deref(), &config),
        Commands::Compare {
            input,
            precision,
            format,
        } => commands::compare::run(&input, precision.as_deref(), &format, &config),
        Commands::Sample {
            input,
            method,
            precision,
            samples,
            format,
        } => commands::sample::run(
            &input,
            &method,
            precision.as_deref(),
            samples,
            &format,
            &config,
        ),
        Commands::Check => commands::check::run(&config),
    }
}
