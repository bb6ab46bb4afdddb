//! Barycentric (Berrut-Trefethen) interpolation.

use super::{ExpansionCache, Interpolator, Method, Nodes};
use crate::math::Polynomial;
use crate::types::{InterpolationError, Number};
use tracing::{debug, trace};

/// Barycentric form interpolator.
///
/// Precomputes the weights `w_j = 1 / Π_{k≠j} (x_j - x_k)` once (O(n²)),
/// after which each evaluation
///
/// ```text
///        Σ_j w_j y_j / (x - x_j)
/// P(x) = -----------------------
///          Σ_j w_j / (x - x_j)
/// ```
///
/// costs O(n).
///
/// # Node handling
///
/// The formula is 0/0 at a node, so an exact hit on `x_j` returns `y_j`
/// directly. If the denominator is exactly zero anywhere else (float
/// underflow), evaluation returns zero instead of failing.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{BarycentricInterpolator, Interpolator};
///
/// let interp = BarycentricInterpolator::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
/// assert_eq!(interp.weights(), &[0.5, -1.0, 0.5]);
/// assert_eq!(interp.interpolate(&1.0), 2.0);
/// assert!((interp.interpolate(&1.5) - 3.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BarycentricInterpolator<T: Number> {
    nodes: Nodes<T>,
    weights: Vec<T>,
    cache: ExpansionCache<T>,
}

impl<T: Number> BarycentricInterpolator<T> {
    /// Construct a barycentric interpolator from x and y values.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - Mismatched array lengths
    /// * `InsufficientData` - No data points
    /// * `DuplicateAbscissa` - A weight has a zero denominator
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::from_nodes(Nodes::new(xs, ys)?)
    }

    /// Construct from f64 inputs, converting into `T`.
    pub fn from_f64(xs: &[f64], ys: &[f64]) -> Result<Self, InterpolationError> {
        Self::from_nodes(Nodes::from_f64(xs, ys)?)
    }

    /// The barycentric weights `w_j`.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    fn compute_weights(xs: &[T]) -> Result<Vec<T>, InterpolationError> {
        let mut weights = Vec::with_capacity(xs.len());
        for (j, xj) in xs.iter().enumerate() {
            let mut product = T::one();
            for (k, xk) in xs.iter().enumerate() {
                if j == k {
                    continue;
                }
                let diff = xj.clone() - xk.clone();
                if diff.is_zero() {
                    return Err(InterpolationError::DuplicateAbscissa {
                        first: j.min(k),
                        second: j.max(k),
                        x: xj.to_f64(),
                    });
                }
                product = product * diff;
            }
            weights.push(T::one() / product);
        }
        Ok(weights)
    }
}

impl<T: Number> Interpolator<T> for BarycentricInterpolator<T> {
    const METHOD: Method = Method::Barycentric;

    fn from_nodes(nodes: Nodes<T>) -> Result<Self, InterpolationError> {
        let weights = Self::compute_weights(nodes.xs())?;
        debug!(nodes = nodes.len(), precision = %T::PRECISION, "built barycentric interpolator");
        Ok(Self {
            nodes,
            weights,
            cache: ExpansionCache::default(),
        })
    }

    #[inline]
    fn nodes(&self) -> &Nodes<T> {
        &self.nodes
    }

    fn interpolate(&self, x: &T) -> T {
        if let [y] = self.nodes.ys() {
            return y.clone();
        }

        let mut numerator = T::zero();
        let mut denominator = T::zero();
        let points = self.nodes.xs().iter().zip(self.nodes.ys()).zip(&self.weights);
        for ((xj, yj), wj) in points {
            if x == xj {
                return yj.clone();
            }
            let temp = wj.clone() / (x.clone() - xj.clone());
            numerator = numerator + temp.clone() * yj.clone();
            denominator = denominator + temp;
        }

        if denominator.is_zero() {
            trace!(x = x.to_f64(), "barycentric denominator vanished, returning zero");
            return T::zero();
        }
        numerator / denominator
    }

    /// Sums `w_j y_j Π_{m≠j} (x - x_m)` over all nodes, expanding each
    /// product by synthetic multiplication.
    fn expand(&self) -> Polynomial<T> {
        let xs = self.nodes.xs();
        let mut result = Polynomial::zeros(self.nodes.len());
        for (j, (yj, wj)) in self.nodes.ys().iter().zip(&self.weights).enumerate() {
            let mut product = Polynomial::one();
            for (m, xm) in xs.iter().enumerate() {
                if m != j {
                    product.mul_linear(xm);
                }
            }
            result.add_scaled(&product, &(wj.clone() * yj.clone()));
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
