//! Newton divided-difference interpolation.

use super::{ExpansionCache, Interpolator, Method, Nodes};
use crate::math::{DividedDifferenceTable, Polynomial};
use crate::types::{InterpolationError, Number};
use tracing::debug;

/// Newton form interpolator.
///
/// Builds the divided-difference table at construction (O(n²)) and
/// evaluates the nested form
///
/// ```text
/// P(x) = c_0 + c_1 (x - x_0) + c_2 (x - x_0)(x - x_1) + ...
/// ```
///
/// in O(n) per point.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Interpolator, NewtonInterpolator};
///
/// let interp = NewtonInterpolator::new(&[-1.0, 0.0, 1.0], &[1.0, 0.0, 1.0]).unwrap();
/// assert!((interp.interpolate(&2.0) - 4.0).abs() < 1e-12);
/// assert_eq!(interp.newton_coefficients(), &[1.0, -1.0, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonInterpolator<T: Number> {
    nodes: Nodes<T>,
    table: DividedDifferenceTable<T>,
    /// Top row of the table, `c_i = f[x_0, ..., x_i]`
    newton_coeffs: Vec<T>,
    cache: ExpansionCache<T>,
}

impl<T: Number> NewtonInterpolator<T> {
    /// Construct a Newton interpolator from x and y values.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - Mismatched array lengths
    /// * `InsufficientData` - No data points
    /// * `DuplicateAbscissa` - A divided difference has a zero denominator
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::from_nodes(Nodes::new(xs, ys)?)
    }

    /// Construct from f64 inputs, converting into `T`.
    pub fn from_f64(xs: &[f64], ys: &[f64]) -> Result<Self, InterpolationError> {
        Self::from_nodes(Nodes::from_f64(xs, ys)?)
    }

    /// The full divided-difference table.
    pub fn divided_differences(&self) -> &DividedDifferenceTable<T> {
        &self.table
    }

    /// Newton form coefficients `c_0 .. c_{n-1}`.
    pub fn newton_coefficients(&self) -> &[T] {
        &self.newton_coeffs
    }
}

impl<T: Number> Interpolator<T> for NewtonInterpolator<T> {
    const METHOD: Method = Method::Newton;

    fn from_nodes(nodes: Nodes<T>) -> Result<Self, InterpolationError> {
        let table = DividedDifferenceTable::build(nodes.xs(), nodes.ys())?;
        let newton_coeffs = table.coefficients();
        debug!(nodes = nodes.len(), precision = %T::PRECISION, "built Newton interpolator");
        Ok(Self {
            nodes,
            table,
            newton_coeffs,
            cache: ExpansionCache::default(),
        })
    }

    #[inline]
    fn nodes(&self) -> &Nodes<T> {
        &self.nodes
    }

    fn interpolate(&self, x: &T) -> T {
        let xs = self.nodes.xs();
        let mut result = self.newton_coeffs[0].clone();
        let mut term = T::one();
        for i in 1..self.newton_coeffs.len() {
            term = term * (x.clone() - xs[i - 1].clone());
            result = result + self.newton_coeffs[i].clone() * term.clone();
        }
        result
    }

    /// Accumulates `c_i Π_{j<i} (x - x_j)`, extending the running product by
    /// one synthetic multiplication per term.
    fn expand(&self) -> Polynomial<T> {
        let xs = self.nodes.xs();
        let mut result = Polynomial::zeros(self.nodes.len());
        let mut product = Polynomial::one();
        result.add_scaled(&product, &self.newton_coeffs[0]);
        for i in 1..self.newton_coeffs.len() {
            product.mul_linear(&xs[i - 1]);
            result.add_scaled(&product, &self.newton_coeffs[i]);
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
    use approx::assert_relative_eq;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_single_point_is_constant() {
        let interp = NewtonInterpolator::new(&[0.0], &[7.0]).unwrap();
        assert_eq!(interp.interpolate(&-3.0), 7.0);
        assert_eq!(interp.polynomial_expression(), "P(x) = 7");
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = NewtonInterpolator::new(&[q(1, 1), q(1, 1)], &[q(2, 1), q(3, 1)]);
        assert!(matches!(
            result,
            Err(InterpolationError::DuplicateAbscissa { first: 0, second: 1, .. })
        ));
    }

    #[test]
    fn test_newton_coefficients_scenario_a() {
        let interp = NewtonInterpolator::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
        assert_eq!(interp.newton_coefficients(), &[1.0, 1.0, 1.0]);
        assert_eq!(interp.divided_differences().len(), 3);
    }

    #[test]
    fn test_interpolate_scenario_a() {
        let interp = NewtonInterpolator::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
        assert_relative_eq!(interp.interpolate(&1.5), 3.25, epsilon = 1e-12);
        assert_eq!(interp.polynomial_expression(), "P(x) = x² + 1");
    }

    #[test]
    fn test_interpolate_reproduces_nodes() {
        let xs = [-2.0, -0.5, 0.25, 1.0, 3.0];
        let ys = [4.0, -1.0, 2.5, 0.0, 9.0];
        let interp = NewtonInterpolator::new(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(interp.interpolate(x), *y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_expand_exact_cubic() {
        // y = x³ - 2x sampled at 4 points
        let xs: Vec<BigRational> = [-1, 0, 1, 2].iter().map(|&v| q(v, 1)).collect();
        let ys: Vec<BigRational> = xs
            .iter()
            .map(|x| x.clone() * x.clone() * x.clone() - q(2, 1) * x.clone())
            .collect();
        let interp = NewtonInterpolator::new(&xs, &ys).unwrap();
        assert_eq!(
            interp.coefficients().coefficients(),
            &[q(0, 1), q(-2, 1), q(0, 1), q(1, 1)]
        );
        assert_eq!(interp.polynomial_expression(), "P(x) = x³ - 2x");
    }

    #[test]
    fn test_expand_matches_nested_evaluation() {
        let xs = [0.5, 1.5, 2.0, 4.0];
        let ys = [1.0, -2.0, 0.5, 3.0];
        let interp = NewtonInterpolator::new(&xs, &ys).unwrap();
        for x in [0.0, 1.0, 2.7, 5.0] {
            assert_relative_eq!(
                interp.coefficients().evaluate(&x),
                interp.interpolate(&x),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_stability_finite_non_negative() {
        let interp = NewtonInterpolator::new(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 2.0, 5.0]).unwrap();
        let stability = interp.numerical_stability(&1e-6, 50).unwrap();
        assert!(stability.is_finite());
        assert!(stability >= 0.0);
    }
}
