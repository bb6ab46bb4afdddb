//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands that read a
//! dataset share [`load_point_sets`], which decodes the file and validates
//! every line before any interpolator is built.

pub mod check;
pub mod compare;
pub mod expand;
pub mod sample;

use crate::config::CliConfig;
use crate::{CliError, Result};
use interp_core::dataset::{decode_point_sets, PointSet};
use interp_core::types::Precision;
use interp_core::validation::validate_point_sets;
use std::path::Path;
use tracing::info;

/// Reads and validates the point sets in `path`, keeping only the line
/// labelled `line` when one is given.
pub fn load_point_sets(path: &str, line: Option<&str>) -> Result<Vec<PointSet>> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }

    let text = std::fs::read_to_string(path)?;
    let mut sets = decode_point_sets(&text)?;
    info!(path, lines = sets.len(), "loaded point sets");

    if let Some(label) = line {
        sets.retain(|set| set.label == label);
        if sets.is_empty() {
            return Err(CliError::InvalidArgument(format!(
                "No line labelled '{}' in {}",
                label, path
            )));
        }
    }

    validate_point_sets(&sets)?;
    Ok(sets)
}

/// The `--precision` argument, falling back to the configured mode.
pub fn resolve_precision(arg: Option<&str>, config: &CliConfig) -> Result<Precision> {
    match arg {
        Some(value) => value.parse().map_err(CliError::InvalidArgument),
        None => Ok(config.precision),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use interp_core::validation::ValidationError;

    #[test]
    fn test_load_missing_file() {
        let result = load_point_sets("/nonexistent/points.json", None);
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_load_all_lines() {
        let file = write_input(QUADRATIC_AND_PARABOLA);
        let sets = load_point_sets(file.path().to_str().unwrap(), None).unwrap();
        assert_eq!(sets.len(), 2);
    }

    #[test]
    fn test_load_selects_line() {
        let file = write_input(QUADRATIC_AND_PARABOLA);
        let path = file.path().to_str().unwrap();

        let sets = load_point_sets(path, Some("Parabola")).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].xs(), vec![-1.0, 0.0, 1.0]);

        let result = load_point_sets(path, Some("Cubic"));
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_load_validates_lines() {
        let file = write_input(r#"[{"points": [{"x": 1, "y": 2}, {"x": 1, "y": 3}]}]"#);
        let result = load_point_sets(file.path().to_str().unwrap(), None);
        assert!(matches!(
            result,
            Err(CliError::Validation(ValidationError::DuplicateX { .. }))
        ));
    }

    #[test]
    fn test_load_reports_decode_errors() {
        let file = write_input(r#"{"points": []}"#);
        let result = load_point_sets(file.path().to_str().unwrap(), None);
        assert!(matches!(result, Err(CliError::Dataset(_))));
    }

    #[test]
    fn test_resolve_precision() {
        let config = CliConfig::default();
        assert_eq!(resolve_precision(None, &config).unwrap(), Precision::Float);
        assert_eq!(
            resolve_precision(Some("exact"), &config).unwrap(),
            Precision::Exact
        );
        assert!(matches!(
            resolve_precision(Some("double"), &config),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
