//! Compare command implementation
//!
//! Profiles all three methods on every line and prints timing and
//! numerical stability side by side.

use serde::Serialize;
use tracing::info;

use super::{load_point_sets, resolve_precision};
use crate::config::CliConfig;
use crate::{CliError, Result};
use interp_core::dataset::PointSet;
use interp_core::instrument::{compare, InterpolationReport, ProfileOptions};
use interp_core::types::Precision;

/// Reports for one input line.
#[derive(Debug, Serialize)]
pub struct LineReport {
    /// Line label
    pub label: String,
    /// One report per method
    pub reports: Vec<InterpolationReport>,
}

/// Run the compare command
pub fn run(input: &str, precision: Option<&str>, format: &str, config: &CliConfig) -> Result<()> {
    let precision = resolve_precision(precision, config)?;
    let sets = load_point_sets(input, None)?;
    info!(lines = sets.len(), %precision, "comparing interpolation methods");

    let reports = profile_lines(&sets, precision, &config.profile_options())?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&reports)?),
        "table" => print!("{}", render_table(&reports)),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    info!("Comparison complete");
    Ok(())
}

/// Profiles every method on every line.
pub fn profile_lines(
    sets: &[PointSet],
    precision: Precision,
    options: &ProfileOptions,
) -> Result<Vec<LineReport>> {
    sets.iter()
        .map(|set| {
            Ok(LineReport {
                label: set.label.clone(),
                reports: compare(&set.xs(), &set.ys(), precision, options)?,
            })
        })
        .collect()
}

/// Renders one box-drawn table per line.
pub fn render_table(lines: &[LineReport]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&format!("\n{}\n", line.label));
        out.push_str("┌──────────────┬──────────────┬──────────────┬──────────────┬──────────────┐\n");
        out.push_str("│ Method       │ Construct(s) │ Expand(s)    │ Eval(s)      │ Stability    │\n");
        out.push_str("├──────────────┼──────────────┼──────────────┼──────────────┼──────────────┤\n");
        for report in &line.reports {
            out.push_str(&format!(
                "│ {:<12} │ {:>12.3e} │ {:>12.3e} │ {:>12.3e} │ {:>12.3e} │\n",
                report.method.display_name(),
                report.construction_secs,
                report.expansion_secs,
                report.evaluation_secs,
                report.stability
            ));
        }
        out.push_str("└──────────────┴──────────────┴──────────────┴──────────────┴──────────────┘\n");
    }
    out
}
