//! # interp_core: Polynomial Interpolation Engine
//!
//! interp_core builds the unique polynomial of degree at most `n - 1` through
//! `n` points with distinct x-values, using three classical algorithms, and
//! renders it as a human-readable Unicode expression.
//!
//! ## Modules
//!
//! - Numeric ring abstraction and error types (`types`)
//! - Dense polynomials, divided differences and the expression formatter (`math`)
//! - Lagrange, Newton and barycentric interpolators (`math::interpolators`)
//! - Timing and stability reports (`instrument`)
//! - Curve sampling for plotting (`curve`)
//! - Point-set records and their JSON form (`dataset`)
//! - Dataset validation before construction (`validation`)
//!
//! ## Precision Modes
//!
//! Every interpolator is generic over [`types::Number`], implemented for:
//! - `f64`: fast, subject to round-off; coefficients render with fixed decimals
//! - `BigRational`: exact arithmetic; coefficients render as reduced fractions
//!
//! ## Usage Examples
//!
//! ```rust
//! use interp_core::math::interpolators::{Interpolator, NewtonInterpolator};
//! use interp_core::types::Exact;
//!
//! // Float mode
//! let interp = NewtonInterpolator::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
//! assert_eq!(interp.polynomial_expression(), "P(x) = x² + 1");
//! # assert!((interp.interpolate(&1.5) - 3.25).abs() < 1e-12);
//!
//! // Exact mode
//! let exact = NewtonInterpolator::<Exact>::from_f64(&[1.0, 2.0], &[0.5, 0.25]).unwrap();
//! assert_eq!(exact.polynomial_expression(), "P(x) = -1/4x + 3/4");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curve;
pub mod dataset;
pub mod instrument;
pub mod math;
pub mod types;
pub mod validation;
