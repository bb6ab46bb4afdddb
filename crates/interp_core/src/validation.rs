//! Dataset validation, run before any interpolator is built.
//!
//! Messages are user-facing and identify duplicate nodes by their 1-based
//! position with Unicode subscripts, e.g. `x₍₁₎ and x₍₂₎`.

use crate::dataset::PointSet;
use crate::math::format::to_subscript;
use thiserror::Error;

/// Reasons a dataset cannot be interpolated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// No points at all
    #[error("Please enter some data points.")]
    Empty,

    /// A named line has no points
    #[error("Line \"{label}\" has no data points.")]
    EmptyLine {
        /// Line label
        label: String,
    },

    /// x and y counts differ
    #[error("Mismatched data: {xs} x-values but {ys} y-values")]
    LengthMismatch {
        /// Number of x-values
        xs: usize,
        /// Number of y-values
        ys: usize,
    },

    /// Two points share an x-value
    #[error("{}", duplicate_message(.label, .first, .second, .x))]
    DuplicateX {
        /// Line label, when validating a named line
        label: Option<String>,
        /// 1-based index of the first occurrence
        first: usize,
        /// 1-based index of the second occurrence
        second: usize,
        /// The repeated value
        x: f64,
    },

    /// The point-set list is empty
    #[error("Please enter at least one valid line with at least two data points.")]
    NoLines,
}

fn duplicate_message(label: &Option<String>, first: &usize, second: &usize, x: &f64) -> String {
    let pair = format!(
        "x₍{}₎ and x₍{}₎ = {}",
        to_subscript(*first),
        to_subscript(*second),
        x
    );
    match label {
        Some(label) => format!("Line \"{}\" has duplicate x-values: {}", label, pair),
        None => format!("Duplicate x-values: {}", pair),
    }
}

/// Checks one (x, y) dataset.
///
/// # Errors
///
/// * `Empty` - Either sequence is empty
/// * `LengthMismatch` - The sequences differ in length
/// * `DuplicateX` - The first pair of equal x-values, in input order
///
/// # Example
///
/// ```
/// use interp_core::validation::validate_dataset;
///
/// let err = validate_dataset(&[1.0, 1.0], &[2.0, 3.0]).unwrap_err();
/// assert_eq!(err.to_string(), "Duplicate x-values: x₍₁₎ and x₍₂₎ = 1");
/// ```
pub fn validate_dataset(xs: &[f64], ys: &[f64]) -> Result<(), ValidationError> {
    if xs.is_empty() || ys.is_empty() {
        return Err(ValidationError::Empty);
    }
    if xs.len() != ys.len() {
        return Err(ValidationError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    match first_duplicate(xs) {
        Some((first, second)) => Err(ValidationError::DuplicateX {
            label: None,
            first: first + 1,
            second: second + 1,
            x: xs[first],
        }),
        None => Ok(()),
    }
}

/// Checks every line of a point-set list.
///
/// # Errors
///
/// * `NoLines` - The list is empty
/// * `EmptyLine` - A line has no points
/// * `DuplicateX` - A line repeats an x-value; the error carries its label
pub fn validate_point_sets(sets: &[PointSet]) -> Result<(), ValidationError> {
    if sets.is_empty() {
        return Err(ValidationError::NoLines);
    }
    for set in sets {
        if set.points.is_empty() {
            return Err(ValidationError::EmptyLine {
                label: set.label.clone(),
            });
        }
        let xs = set.xs();
        if let Some((first, second)) = first_duplicate(&xs) {
            return Err(ValidationError::DuplicateX {
                label: Some(set.label.clone()),
                first: first + 1,
                second: second + 1,
                x: xs[first],
            });
        }
    }
    Ok(())
}

fn first_duplicate(xs: &[f64]) -> Option<(usize, usize)> {
    xs.iter().enumerate().find_map(|(i, a)| {
        xs[i + 1..]
            .iter()
            .position(|b| a == b)
            .map(|offset| (i, i + 1 + offset))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Point;

    // ========================================
    // Single Dataset Tests
    // ========================================

    #[test]
    fn test_valid_dataset() {
        assert_eq!(validate_dataset(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]), Ok(()));
        assert_eq!(validate_dataset(&[0.0], &[7.0]), Ok(()));
    }

    #[test]
    fn test_empty_dataset() {
        let err = validate_dataset(&[], &[]).unwrap_err();
        assert_eq!(err, ValidationError::Empty);
        assert_eq!(err.to_string(), "Please enter some data points.");
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            validate_dataset(&[0.0, 1.0], &[1.0]),
            Err(ValidationError::LengthMismatch { xs: 2, ys: 1 })
        );
    }

    #[test]
    fn test_first_duplicate_pair_reported() {
        let err = validate_dataset(&[0.0, 2.5, 3.0, 2.5, 0.0], &[0.0; 5]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateX {
                label: None,
                first: 1,
                second: 5,
                x: 0.0,
            }
        );
    }

    #[test]
    fn test_duplicate_message_uses_subscripts() {
        let mut xs: Vec<f64> = (0..12).map(f64::from).collect();
        xs.push(0.5);
        xs[11] = 0.5;
        let err = validate_dataset(&xs, &vec![0.0; xs.len()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duplicate x-values: x₍₁₂₎ and x₍₁₃₎ = 0.5"
        );
    }

    // ========================================
    // Point Set Tests
    // ========================================

    #[test]
    fn test_point_sets_empty_list() {
        assert_eq!(validate_point_sets(&[]), Err(ValidationError::NoLines));
    }

    #[test]
    fn test_point_sets_empty_line() {
        let sets = vec![PointSet::from_xy("blank", &[], &[])];
        assert_eq!(
            validate_point_sets(&sets).unwrap_err().to_string(),
            "Line \"blank\" has no data points."
        );
    }

    #[test]
    fn test_point_sets_duplicate_names_line() {
        let sets = vec![
            PointSet::from_xy("ok", &[0.0, 1.0], &[0.0, 1.0]),
            PointSet {
                label: "bad".to_string(),
                color: "#000000".to_string(),
                points: vec![
                    Point { x: 1.0, y: 2.0 },
                    Point { x: 1.0, y: 3.0 },
                ],
            },
        ];
        let err = validate_point_sets(&sets).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Line \"bad\" has duplicate x-values: x₍₁₎ and x₍₂₎ = 1"
        );
    }

    #[test]
    fn test_point_sets_valid() {
        let sets = vec![PointSet::from_xy("a", &[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0])];
        assert_eq!(validate_point_sets(&sets), Ok(()));
    }
}
