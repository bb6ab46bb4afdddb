//! Core numeric and error types.
//!
//! This module provides:
//! - `number`: The [`Number`] ring abstraction and its f64 / `BigRational` implementations
//! - `error`: Structured error types for interpolation and expression parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Number`], [`Precision`], [`Exact`], [`Float`], [`convert_slice`] from `number`
//! - [`InterpolationError`], [`ExpressionParseError`] from `error`

pub mod error;
pub mod number;

// Re-export commonly used types at module level
pub use error::{ExpressionParseError, InterpolationError};
pub use number::{convert_slice, Exact, Float, Number, Precision};
