//! Lagrange basis-polynomial interpolation.

use super::{ExpansionCache, Interpolator, Method, Nodes};
use crate::math::Polynomial;
use crate::types::{InterpolationError, Number};
use tracing::debug;

/// Lagrange form interpolator.
///
/// Evaluates `P(x) = Σ_k y_k L_k(x)` with basis polynomials
/// `L_k(x) = Π_{i≠k} (x - x_i) / (x_k - x_i)`. Nothing is precomputed
/// beyond the distinctness check, so every evaluation costs O(n²).
///
/// # Type Parameters
///
/// * `T` - Number type (`f64` or `BigRational`)
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Interpolator, LagrangeInterpolator};
///
/// let interp = LagrangeInterpolator::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
/// assert!((interp.interpolate(&1.5) - 3.25).abs() < 1e-12);
/// assert_eq!(interp.polynomial_expression(), "P(x) = x² + 1");
/// ```
#[derive(Debug, Clone)]
pub struct LagrangeInterpolator<T: Number> {
    nodes: Nodes<T>,
    cache: ExpansionCache<T>,
}

impl<T: Number> LagrangeInterpolator<T> {
    /// Construct a Lagrange interpolator from x and y values.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - Mismatched array lengths
    /// * `InsufficientData` - No data points
    /// * `DuplicateAbscissa` - Two x-values coincide
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::from_nodes(Nodes::new(xs, ys)?)
    }

    /// Construct from f64 inputs, converting into `T`.
    pub fn from_f64(xs: &[f64], ys: &[f64]) -> Result<Self, InterpolationError> {
        Self::from_nodes(Nodes::from_f64(xs, ys)?)
    }

    /// Evaluates the basis polynomial `L_k` at `x`.
    pub fn basis(&self, k: usize, x: &T) -> T {
        let xs = self.nodes.xs();
        let xk = &xs[k];
        xs.iter()
            .enumerate()
            .filter(|&(i, _)| i != k)
            .fold(T::one(), |acc, (_, xi)| {
                acc * ((x.clone() - xi.clone()) / (xk.clone() - xi.clone()))
            })
    }

    /// Expands the basis polynomial `L_k` into dense coefficients.
    ///
    /// Multiplies together the normalised linear factors
    /// `(x - x_i) / (x_k - x_i)` for every `i ≠ k`.
    pub fn basis_polynomial(&self, k: usize) -> Polynomial<T> {
        let xs = self.nodes.xs();
        let xk = &xs[k];
        let mut basis = Polynomial::one();
        for (i, xi) in xs.iter().enumerate() {
            if i == k {
                continue;
            }
            let denom = xk.clone() - xi.clone();
            let factor = Polynomial::from_coefficients(vec![
                -(xi.clone() / denom.clone()),
                T::one() / denom,
            ]);
            basis = &basis * &factor;
        }
        basis
    }
}

impl<T: Number> Interpolator<T> for LagrangeInterpolator<T> {
    const METHOD: Method = Method::Lagrange;

    fn from_nodes(nodes: Nodes<T>) -> Result<Self, InterpolationError> {
        nodes.ensure_distinct()?;
        debug!(nodes = nodes.len(), precision = %T::PRECISION, "built Lagrange interpolator");
        Ok(Self {
            nodes,
            cache: ExpansionCache::default(),
        })
    }

    #[inline]
    fn nodes(&self) -> &Nodes<T> {
        &self.nodes
    }

    fn interpolate(&self, x: &T) -> T {
        self.nodes
            .ys()
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (k, yk)| acc + yk.clone() * self.basis(k, x))
    }

    fn expand(&self) -> Polynomial<T> {
        let mut result = Polynomial::zeros(self.nodes.len());
        for (k, yk) in self.nodes.ys().iter().enumerate() {
            result.add_scaled(&self.basis_polynomial(k), yk);
        }
        result
    }

    #[inline]
    fn cache(&self) -> &ExpansionCache<T> {
        &self.cache
    }

    #[inline]
    fn cache_mut(&mut self) -> &mut ExpansionCache<T> {
        &mut self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::format::FormatOptions;
    use approx::assert_relative_eq;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_single_point() {
        let interp = LagrangeInterpolator::new(&[0.0], &[7.0]).unwrap();
        assert_eq!(interp.len(), 1);
        assert_eq!(interp.interpolate(&123.0), 7.0);
        assert_eq!(interp.polynomial_expression(), "P(x) = 7");
    }

    #[test]
    fn test_new_empty() {
        let result = LagrangeInterpolator::<f64>::new(&[], &[]);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::InsufficientData { got: 0, need: 1 }
        );
    }

    #[test]
    fn test_new_duplicate_exact() {
        let result = LagrangeInterpolator::new(&[q(1, 1), q(1, 1)], &[q(2, 1), q(3, 1)]);
        assert!(matches!(
            result,
            Err(InterpolationError::DuplicateAbscissa { first: 0, second: 1, .. })
        ));
    }

    #[test]
    fn test_new_duplicate_float() {
        let result = LagrangeInterpolator::new(&[1.0, 1.0], &[2.0, 3.0]);
        assert!(matches!(result, Err(InterpolationError::DuplicateAbscissa { .. })));
    }

    // ========================================
    // Evaluation Tests
    // ========================================

    #[test]
    fn test_basis_is_kronecker_delta_at_nodes() {
        let interp = LagrangeInterpolator::new(&[0.0, 1.0, 3.0], &[0.0, 0.0, 0.0]).unwrap();
        for k in 0..3 {
            for (i, xi) in interp.nodes().xs().iter().enumerate() {
                let expected = if i == k { 1.0 } else { 0.0 };
                assert_relative_eq!(interp.basis(k, xi), expected, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_basis_partition_of_unity() {
        let interp =
            LagrangeInterpolator::new(&[-1.0, 0.5, 2.0, 4.0], &[0.0, 0.0, 0.0, 0.0]).unwrap();
        let total: f64 = (0..4).map(|k| interp.basis(k, &1.7)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_scenario_a() {
        let interp = LagrangeInterpolator::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
        assert_relative_eq!(interp.interpolate(&1.5), 3.25, epsilon = 1e-12);
    }

    #[test]
    fn test_interpolate_exact_node_values() {
        let xs = vec![q(-1, 2), q(1, 3), q(2, 1)];
        let ys = vec![q(5, 1), q(-7, 4), q(0, 1)];
        let interp = LagrangeInterpolator::new(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_eq!(&interp.interpolate(x), y);
        }
    }

    // ========================================
    // Expansion Tests
    // ========================================

    #[test]
    fn test_basis_polynomial_exact() {
        // L_0 for nodes 0, 1, 2 is (x - 1)(x - 2) / 2 = x²/2 - 3x/2 + 1
        let interp =
            LagrangeInterpolator::new(&[q(0, 1), q(1, 1), q(2, 1)], &[q(0, 1), q(0, 1), q(0, 1)])
                .unwrap();
        assert_eq!(
            interp.basis_polynomial(0).coefficients(),
            &[q(1, 1), q(-3, 2), q(1, 2)]
        );
    }

    #[test]
    fn test_expression_exact_scenario_c() {
        let xs = vec![q(-1, 1), q(0, 1), q(1, 1)];
        let ys = vec![q(1, 1), q(0, 1), q(1, 1)];
        let interp = LagrangeInterpolator::new(&xs, &ys).unwrap();
        assert_eq!(interp.polynomial_expression(), "P(x) = x²");
        assert_eq!(interp.interpolate(&q(2, 1)), q(4, 1));
    }

    #[test]
    fn test_expression_with_fractions() {
        // Through (0, 0), (2, 1): P(x) = x/2
        let interp = LagrangeInterpolator::new(&[q(0, 1), q(2, 1)], &[q(0, 1), q(1, 1)]).unwrap();
        assert_eq!(interp.polynomial_expression(), "P(x) = 1/2x");
    }

    #[test]
    fn test_coefficients_cached() {
        let interp = LagrangeInterpolator::new(&[0.0, 1.0], &[1.0, 3.0]).unwrap();
        assert!(!interp.cache().is_expanded());
        let first = interp.coefficients() as *const Polynomial<f64>;
        let second = interp.coefficients() as *const Polynomial<f64>;
        assert!(interp.cache().is_expanded());
        assert_eq!(first, second);
        assert_eq!(interp.coefficients().coefficients(), &[1.0, 2.0]);
    }

    #[test]
    fn test_with_format_decimals() {
        let interp = LagrangeInterpolator::new(&[0.0, 3.0], &[0.0, 1.0])
            .unwrap()
            .with_format(FormatOptions::with_decimals(2));
        assert_eq!(interp.polynomial_expression(), "P(x) = 0.33x");
    }

    #[test]
    fn test_numerical_stability_single_point() {
        let interp = LagrangeInterpolator::new(&[0.0], &[7.0]).unwrap();
        assert_eq!(interp.numerical_stability(&1e-6, 100).unwrap(), 0.0);
    }
}
