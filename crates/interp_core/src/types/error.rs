//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolator construction
//! - `ExpressionParseError`: Errors from reading a rendered polynomial back
//!
//! Dataset decoding and validation errors live next to the code that raises
//! them (`dataset::DatasetError`, `validation::ValidationError`).

use thiserror::Error;

/// Interpolation-related errors.
///
/// Raised while building an interpolator. Evaluation itself never fails:
/// degenerate evaluations fall back to a defined value instead.
///
/// # Variants
/// - `DuplicateAbscissa`: Two nodes share the same x-value
/// - `InsufficientData`: Not enough data points for interpolation
/// - `InvalidInput`: Mismatched lengths or values the number type cannot hold
///
/// # Examples
/// ```
/// use interp_core::types::InterpolationError;
///
/// let err = InterpolationError::DuplicateAbscissa { first: 0, second: 1, x: 1.0 };
/// assert!(format!("{}", err).contains("Duplicate x-value"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Two nodes share an x-value, detected as a zero denominator.
    #[error("Duplicate x-value {x} at nodes {first} and {second}")]
    DuplicateAbscissa {
        /// Index of the first node
        first: usize,
        /// Index of the second node
        second: usize,
        /// The shared x-value (as f64, for reporting)
        x: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// General invalid input error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors from parsing a rendered polynomial expression.
///
/// # Examples
/// ```
/// use interp_core::types::ExpressionParseError;
///
/// let err = ExpressionParseError::InvalidCoefficient("1/0".to_string());
/// assert_eq!(format!("{}", err), "Invalid coefficient: 1/0");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// The expression has no terms.
    #[error("Empty expression")]
    Empty,

    /// A coefficient could not be read as a number or fraction.
    #[error("Invalid coefficient: {0}")]
    InvalidCoefficient(String),

    /// A term is not of the form `[coefficient][x][power]`.
    #[error("Malformed term: {0}")]
    MalformedTerm(String),
}
