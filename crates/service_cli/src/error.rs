//! CLI error type.

use crate::config::ConfigError;
use interp_core::dataset::DatasetError;
use interp_core::types::InterpolationError;
use interp_core::validation::ValidationError;
use thiserror::Error;

/// Everything a `plotnomial` command can fail with.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Reading input or writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A command-line value was not understood
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The point-set file is malformed
    #[error("Error loading data: {0}")]
    Dataset(#[from] DatasetError),

    /// A line failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// An interpolator could not be built
    #[error("Interpolation failed: {0}")]
    Interpolation(#[from] InterpolationError),

    /// JSON output failed
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output failed
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML output failed
    #[error("TOML output error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
