//! Dense univariate polynomials over a [`Number`] ring.
//!
//! Coefficients are stored lowest power first: index `i` holds the
//! coefficient of `x^i`. This is the coefficient vector every interpolator
//! expands into before formatting.

use crate::types::Number;
use std::ops::Mul;

/// Dense polynomial `c_0 + c_1 x + ... + c_d x^d`.
///
/// Trailing zero coefficients are kept: an interpolant through `n` nodes is
/// always represented with exactly `n` coefficients.
///
/// # Example
///
/// ```
/// use interp_core::math::Polynomial;
///
/// // (x - 1)(x - 2) = x² - 3x + 2
/// let p = Polynomial::from_roots(&[1.0, 2.0]);
/// assert_eq!(p.coefficients(), &[2.0, -3.0, 1.0]);
/// assert_eq!(p.evaluate(&3.0), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T: Number> {
    coeffs: Vec<T>,
}

impl<T: Number> Polynomial<T> {
    /// The zero polynomial with `len` coefficient slots.
    pub fn zeros(len: usize) -> Self {
        Self {
            coeffs: vec![T::zero(); len],
        }
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self {
            coeffs: vec![T::one()],
        }
    }

    /// Wraps a coefficient vector (lowest power first).
    pub fn from_coefficients(coeffs: Vec<T>) -> Self {
        Self { coeffs }
    }

    /// Expands `(x - r_0)(x - r_1)...` by synthetic multiplication.
    pub fn from_roots(roots: &[T]) -> Self {
        let mut poly = Self::one();
        for root in roots {
            poly.mul_linear(root);
        }
        poly
    }

    /// Coefficients, lowest power first.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    pub fn into_coefficients(self) -> Vec<T> {
        self.coeffs
    }

    /// Number of coefficient slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if there are no coefficient slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Highest power with a non-zero coefficient, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| !c.is_zero())
    }

    /// Multiplies in place by the linear factor `(x - root)`.
    ///
    /// Synthetic multiplication: `new[i] = old[i-1] - root * old[i]`.
    pub fn mul_linear(&mut self, root: &T) {
        let mut shifted = Vec::with_capacity(self.coeffs.len() + 1);
        shifted.push(T::zero());
        shifted.extend(self.coeffs.iter().cloned());
        for (i, c) in self.coeffs.iter().enumerate() {
            shifted[i] = shifted[i].clone() - root.clone() * c.clone();
        }
        self.coeffs = shifted;
    }

    /// Multiplies every coefficient by `factor`.
    pub fn scale(&mut self, factor: &T) {
        for c in &mut self.coeffs {
            *c = c.clone() * factor.clone();
        }
    }

    /// Accumulates `factor * other` into `self`, growing if `other` is longer.
    pub fn add_scaled(&mut self, other: &Polynomial<T>, factor: &T) {
        if other.coeffs.len() > self.coeffs.len() {
            self.coeffs.resize(other.coeffs.len(), T::zero());
        }
        for (acc, c) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *acc = acc.clone() + factor.clone() * c.clone();
        }
    }

    /// Evaluates at `x` with Horner's scheme.
    pub fn evaluate(&self, x: &T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| acc * x.clone() + c.clone())
    }
}

impl<'a, T: Number> Mul for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    /// Schoolbook product.
    fn mul(self, rhs: &'a Polynomial<T>) -> Polynomial<T> {
        if self.is_empty() || rhs.is_empty() {
            return Polynomial::zeros(0);
        }
        let mut out = vec![T::zero(); self.len() + rhs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                out[i + j] = out[i + j].clone() + a.clone() * b.clone();
            }
        }
        Polynomial { coeffs: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_one_and_zeros() {
        let one: Polynomial<f64> = Polynomial::one();
        assert_eq!(one.coefficients(), &[1.0]);
        assert_eq!(one.degree(), Some(0));

        let zero: Polynomial<f64> = Polynomial::zeros(3);
        assert_eq!(zero.len(), 3);
        assert_eq!(zero.degree(), None);
    }

    #[test]
    fn test_from_roots_empty_is_one() {
        let p: Polynomial<f64> = Polynomial::from_roots(&[]);
        assert_eq!(p.coefficients(), &[1.0]);
    }

    #[test]
    fn test_mul_linear() {
        // (x + 1)(x - 1) = x² - 1
        let mut p = Polynomial::from_coefficients(vec![1.0, 1.0]);
        p.mul_linear(&1.0);
        assert_eq!(p.coefficients(), &[-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_from_roots_exact() {
        // (x - 1/2)(x + 3) = x² + 5/2 x - 3/2
        let p = Polynomial::from_roots(&[q(1, 2), q(-3, 1)]);
        assert_eq!(p.coefficients(), &[q(-3, 2), q(5, 2), q(1, 1)]);
    }

    #[test]
    fn test_scale_and_add_scaled() {
        let mut acc = Polynomial::zeros(1);
        let p = Polynomial::from_coefficients(vec![1.0, 2.0, 3.0]);
        acc.add_scaled(&p, &2.0);
        assert_eq!(acc.coefficients(), &[2.0, 4.0, 6.0]);

        acc.scale(&0.5);
        assert_eq!(acc.coefficients(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_evaluate_horner() {
        // 2x² - 3x + 1 at x = 2 -> 3
        let p = Polynomial::from_coefficients(vec![1.0, -3.0, 2.0]);
        assert_eq!(p.evaluate(&2.0), 3.0);
        assert_eq!(Polynomial::<f64>::zeros(0).evaluate(&5.0), 0.0);
    }

    #[test]
    fn test_mul_matches_from_roots() {
        let a = Polynomial::from_roots(&[q(1, 1)]);
        let b = Polynomial::from_roots(&[q(2, 1), q(3, 1)]);
        let product = &a * &b;
        assert_eq!(product, Polynomial::from_roots(&[q(1, 1), q(2, 1), q(3, 1)]));
    }

    #[test]
    fn test_mul_by_empty() {
        let a = Polynomial::from_coefficients(vec![1.0, 2.0]);
        let empty = Polynomial::zeros(0);
        assert!((&a * &empty).is_empty());
    }

    #[test]
    fn test_degree_ignores_trailing_zeros() {
        let p = Polynomial::from_coefficients(vec![1.0, 0.0, 0.0]);
        assert_eq!(p.degree(), Some(0));
    }
}
