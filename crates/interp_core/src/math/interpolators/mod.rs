//! Polynomial interpolation methods.
//!
//! This module provides the three classical constructions of the unique
//! polynomial of degree at most `n - 1` through `n` nodes with distinct
//! abscissae, each generic over the [`Number`](crate::types::Number) ring so
//! the same code runs in exact (`BigRational`) and float (`f64`) mode.
//!
//! ## Available Interpolators
//!
//! - [`LagrangeInterpolator`]: Basis polynomials, O(n²) per evaluation
//! - [`NewtonInterpolator`]: Divided differences, O(n) nested evaluation
//! - [`BarycentricInterpolator`]: Precomputed weights, O(n) evaluation
//!
//! ## Core Trait
//!
//! All interpolators implement [`Interpolator`], which defines:
//! - `interpolate(x: &T) -> T`: evaluate the interpolant (total, never fails)
//! - `coefficients()` / `polynomial_expression()`: lazily expanded and cached
//! - `numerical_stability(perturbation, num_samples)`: forward-stability probe
//!
//! ## Example
//!
//! ```
//! use interp_core::math::interpolators::{
//!     BarycentricInterpolator, Interpolator, LagrangeInterpolator, NewtonInterpolator,
//! };
//!
//! let xs = [0.0, 1.0, 2.0];
//! let ys = [1.0, 2.0, 5.0];
//!
//! let lagrange = LagrangeInterpolator::new(&xs, &ys).unwrap();
//! let newton = NewtonInterpolator::new(&xs, &ys).unwrap();
//! let barycentric = BarycentricInterpolator::new(&xs, &ys).unwrap();
//!
//! for y in [
//!     lagrange.interpolate(&1.5),
//!     newton.interpolate(&1.5),
//!     barycentric.interpolate(&1.5),
//! ] {
//!     assert!((y - 3.25).abs() < 1e-12);
//! }
//! ```

mod barycentric;
mod lagrange;
mod newton;
mod nodes;
mod traits;

// Re-export public types at module level
pub use barycentric::BarycentricInterpolator;
pub use lagrange::LagrangeInterpolator;
pub use newton::NewtonInterpolator;
pub use nodes::Nodes;
pub use traits::{ExpansionCache, Interpolator, Method};
