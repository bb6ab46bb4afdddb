//! CLI configuration management.
//!
//! Loads `CliConfig` from a TOML file (missing file → defaults), applies
//! `PLOTNOMIAL_*` environment overrides, and validates the result.
//!
//! ```toml
//! precision = "exact"
//! decimals = 6
//! perturbation = 1e-6
//! stability_samples = 100
//! curve_samples = 1000
//! log_level = "info"
//! ```

use interp_core::curve::DEFAULT_CURVE_SAMPLES;
use interp_core::instrument::{
    ProfileOptions, StabilityOptions, DEFAULT_PERTURBATION, DEFAULT_STABILITY_SAMPLES,
};
use interp_core::math::format::{FormatOptions, DEFAULT_DECIMALS};
use interp_core::types::Precision;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

const MAX_DECIMALS: usize = 17;
const MAX_SAMPLES: usize = 1_000_000;
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Arithmetic mode used when `--precision` is not given
    pub precision: Precision,
    /// Decimal places for float coefficients
    pub decimals: usize,
    /// Stability probe y-perturbation
    pub perturbation: f64,
    /// Stability probe sample count
    pub stability_samples: usize,
    /// Points per sampled curve
    pub curve_samples: usize,
    /// Log level
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            decimals: DEFAULT_DECIMALS,
            perturbation: DEFAULT_PERTURBATION,
            stability_samples: DEFAULT_STABILITY_SAMPLES,
            curve_samples: DEFAULT_CURVE_SAMPLES,
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary `PLOTNOMIAL_*` lookup.
    ///
    /// Unparseable values are logged and ignored.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(precision) = lookup("PLOTNOMIAL_PRECISION") {
            match precision.parse() {
                Ok(precision) => self.precision = precision,
                Err(e) => warn!(value = %precision, "ignoring PLOTNOMIAL_PRECISION: {}", e),
            }
        }

        override_parsed(&lookup, "PLOTNOMIAL_DECIMALS", &mut self.decimals);
        override_parsed(&lookup, "PLOTNOMIAL_PERTURBATION", &mut self.perturbation);
        override_parsed(&lookup, "PLOTNOMIAL_STABILITY_SAMPLES", &mut self.stability_samples);
        override_parsed(&lookup, "PLOTNOMIAL_CURVE_SAMPLES", &mut self.curve_samples);

        if let Some(log_level) = lookup("PLOTNOMIAL_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.decimals > MAX_DECIMALS {
            errors.push(format!(
                "decimals {} exceeds maximum allowed ({})",
                self.decimals, MAX_DECIMALS
            ));
        }

        if !self.perturbation.is_finite() || self.perturbation <= 0.0 {
            errors.push(format!(
                "perturbation must be a positive finite number, got {}",
                self.perturbation
            ));
        }

        if self.stability_samples == 0 || self.stability_samples > MAX_SAMPLES {
            errors.push(format!(
                "stability_samples must be between 1 and {}, got {}",
                MAX_SAMPLES, self.stability_samples
            ));
        }

        if self.curve_samples < 2 || self.curve_samples > MAX_SAMPLES {
            errors.push(format!(
                "curve_samples must be between 2 and {}, got {}",
                MAX_SAMPLES, self.curve_samples
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from `path` (or defaults), apply environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// Expression formatting derived from this configuration.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::with_decimals(self.decimals)
    }

    /// Profiling parameters derived from this configuration.
    pub fn profile_options(&self) -> ProfileOptions {
        ProfileOptions {
            format: self.format_options(),
            stability: StabilityOptions {
                perturbation: self.perturbation,
                samples: self.stability_samples,
            },
        }
    }
}

fn override_parsed<V: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    target: &mut V,
) {
    if let Some(raw) = lookup(key) {
        match raw.parse() {
            Ok(value) => *target = value,
            Err(_) => warn!(key, value = %raw, "ignoring unparseable override"),
        }
    }
}
