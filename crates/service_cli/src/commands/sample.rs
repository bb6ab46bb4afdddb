//! Sample command implementation
//!
//! Evaluates one interpolation method over an evenly spaced grid on every
//! line and prints the curve points for plotting.

use serde::Serialize;
use tracing::info;

use super::{load_point_sets, resolve_precision};
use crate::config::CliConfig;
use crate::{CliError, Result};
use interp_core::curve::{sample_method, CurvePoint};
use interp_core::dataset::PointSet;
use interp_core::math::interpolators::Method;
use interp_core::types::Precision;

/// A sampled curve ready for output.
#[derive(Debug, Serialize)]
pub struct SampledLine {
    /// Line label
    pub label: String,
    /// Line colour
    pub color: String,
    /// Method used
    pub method: Method,
    /// Curve points
    pub points: Vec<CurvePoint>,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    label: &'a str,
    x: f64,
    y: f64,
}

/// Run the sample command
pub fn run(
    input: &str,
    method: &str,
    precision: Option<&str>,
    samples: Option<usize>,
    format: &str,
    config: &CliConfig,
) -> Result<()> {
    let method: Method = method.parse().map_err(CliError::InvalidArgument)?;
    let precision = resolve_precision(precision, config)?;
    let samples = samples.unwrap_or(config.curve_samples);
    let sets = load_point_sets(input, None)?;
    info!(%method, %precision, samples, lines = sets.len(), "sampling curves");

    let lines = sample_lines(&sets, method, precision, samples)?;

    match format {
        "csv" => write_csv(&lines, std::io::stdout())?,
        "json" => println!("{}", serde_json::to_string_pretty(&lines)?),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: csv, json",
                other
            )));
        }
    }
    Ok(())
}

/// Samples `method` over every line.
pub fn sample_lines(
    sets: &[PointSet],
    method: Method,
    precision: Precision,
    samples: usize,
) -> Result<Vec<SampledLine>> {
    sets.iter()
        .map(|set| {
            Ok(SampledLine {
                label: set.label.clone(),
                color: set.color.clone(),
                method,
                points: sample_method(method, precision, &set.xs(), &set.ys(), samples)?,
            })
        })
        .collect()
}

/// Writes `label,x,y` rows with a header.
pub fn write_csv<W: std::io::Write>(lines: &[SampledLine], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for line in lines {
        for point in &line.points {
            csv.serialize(CsvRow {
                label: &line.label,
                x: point.x,
                y: point.y,
            })?;
        }
    }
    csv.flush()?;
    Ok(())
}
