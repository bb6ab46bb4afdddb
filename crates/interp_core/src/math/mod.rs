//! Numerical building blocks and the interpolation algorithms.
//!
//! - `polynomial`: dense coefficient vectors and synthetic multiplication
//! - `divided_differences`: Newton's divided-difference table
//! - `format`: Unicode polynomial rendering and read-back
//! - `interpolators`: Lagrange, Newton and barycentric interpolators

pub mod divided_differences;
pub mod format;
pub mod interpolators;
pub mod polynomial;

pub use divided_differences::DividedDifferenceTable;
pub use format::FormatOptions;
pub use polynomial::Polynomial;
