//! Owned interpolation datasets.

use crate::types::{convert_slice, InterpolationError, Number};

/// An ordered set of interpolation nodes `(x_i, y_i)`.
///
/// Values are copied (or converted) out of the caller's slices at
/// construction, so an interpolator never aliases caller-owned data.
/// At least one node is always present; distinctness of the x-values is
/// checked by each algorithm as it builds its precomputed state.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::Nodes;
///
/// let nodes = Nodes::<f64>::from_f64(&[2.0, 0.0, 1.0], &[4.0, 0.0, 1.0]).unwrap();
/// assert_eq!(nodes.len(), 3);
/// assert_eq!(nodes.range(), (0.0, 2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Nodes<T: Number> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Number> Nodes<T> {
    /// Copies `xs` and `ys` into a node set.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the slices differ in length
    /// - `InsufficientData` if they are empty
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::from_vecs(xs.to_vec(), ys.to_vec())
    }

    /// Converts f64 inputs into the target number type.
    ///
    /// # Errors
    ///
    /// As [`Nodes::new`], plus `InvalidInput` for NaN or infinite values.
    pub fn from_f64(xs: &[f64], ys: &[f64]) -> Result<Self, InterpolationError> {
        let xs = convert_slice::<T>(xs).map_err(|(i, v)| {
            InterpolationError::InvalidInput(format!("x-value at index {} is not finite: {}", i, v))
        })?;
        let ys = convert_slice::<T>(ys).map_err(|(i, v)| {
            InterpolationError::InvalidInput(format!("y-value at index {} is not finite: {}", i, v))
        })?;
        Self::from_vecs(xs, ys)
    }

    fn from_vecs(xs: Vec<T>, ys: Vec<T>) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }
        Ok(Self { xs, ys })
    }

    /// The x-values, in input order.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// The y-values, in input order.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if there are no nodes (never true for a constructed set).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Fails on the first pair of nodes whose x-difference is zero.
    pub fn ensure_distinct(&self) -> Result<(), InterpolationError> {
        for (i, xi) in self.xs.iter().enumerate() {
            for (j, xj) in self.xs.iter().enumerate().skip(i + 1) {
                if (xi.clone() - xj.clone()).is_zero() {
                    return Err(InterpolationError::DuplicateAbscissa {
                        first: i,
                        second: j,
                        x: xi.to_f64(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Smallest and largest x-value.
    pub fn range(&self) -> (T, T) {
        let mut lo = &self.xs[0];
        let mut hi = &self.xs[0];
        for x in &self.xs[1..] {
            if x < lo {
                lo = x;
            }
            if x > hi {
                hi = x;
            }
        }
        (lo.clone(), hi.clone())
    }

    /// `num_samples` evenly spaced points covering [`Nodes::range`].
    ///
    /// Both endpoints are included exactly; a single sample sits at the
    /// lower bound.
    pub fn sample_grid(&self, num_samples: usize) -> Vec<T> {
        let (lo, hi) = self.range();
        match num_samples {
            0 => Vec::new(),
            1 => vec![lo],
            m => {
                let step = (hi.clone() - lo.clone()) / T::from_usize(m - 1);
                let mut grid: Vec<T> = (0..m - 1)
                    .map(|i| lo.clone() + step.clone() * T::from_usize(i))
                    .collect();
                grid.push(hi);
                grid
            }
        }
    }

    /// A copy with `delta` added to every y-value.
    pub fn with_shifted_ys(&self, delta: &T) -> Self {
        Self {
            xs: self.xs.clone(),
            ys: self.ys.iter().map(|y| y.clone() + delta.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    #[test]
    fn test_new_copies_values() {
        let mut xs = vec![0.0, 1.0];
        let ys = vec![5.0, 6.0];
        let nodes = Nodes::new(&xs, &ys).unwrap();
        xs[0] = 100.0;
        assert_eq!(nodes.xs(), &[0.0, 1.0]);
        assert_eq!(nodes.ys(), &[5.0, 6.0]);
    }

    #[test]
    fn test_new_rejects_empty_and_mismatched() {
        assert_eq!(
            Nodes::<f64>::new(&[], &[]),
            Err(InterpolationError::InsufficientData { got: 0, need: 1 })
        );
        match Nodes::new(&[0.0, 1.0], &[0.0]) {
            Err(InterpolationError::InvalidInput(msg)) => assert!(msg.contains("same length")),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_f64_rejects_nan() {
        match Nodes::<BigRational>::from_f64(&[0.0, f64::NAN], &[1.0, 2.0]) {
            Err(InterpolationError::InvalidInput(msg)) => assert!(msg.contains("index 1")),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_f64_exact_conversion() {
        let nodes = Nodes::<BigRational>::from_f64(&[0.5], &[0.1]).unwrap();
        assert_eq!(
            nodes.ys()[0],
            BigRational::new(BigInt::from(1), BigInt::from(10))
        );
    }

    #[test]
    fn test_ensure_distinct() {
        let ok = Nodes::new(&[0.0, 1.0, 2.0], &[0.0, 0.0, 0.0]).unwrap();
        assert!(ok.ensure_distinct().is_ok());

        let dup = Nodes::new(&[0.0, 1.0, 0.0], &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(
            dup.ensure_distinct(),
            Err(InterpolationError::DuplicateAbscissa {
                first: 0,
                second: 2,
                x: 0.0
            })
        );
    }

    #[test]
    fn test_range_unsorted() {
        let nodes = Nodes::new(&[3.0, -1.0, 2.0], &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(nodes.range(), (-1.0, 3.0));
    }

    #[test]
    fn test_sample_grid_endpoints() {
        let nodes = Nodes::new(&[0.0, 2.0], &[0.0, 0.0]).unwrap();
        assert_eq!(nodes.sample_grid(5), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(nodes.sample_grid(1), vec![0.0]);
        assert!(nodes.sample_grid(0).is_empty());
    }

    #[test]
    fn test_sample_grid_single_node() {
        let nodes = Nodes::new(&[4.0], &[7.0]).unwrap();
        assert_eq!(nodes.sample_grid(3), vec![4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_with_shifted_ys() {
        let nodes = Nodes::new(&[0.0, 1.0], &[1.0, 2.0]).unwrap();
        let shifted = nodes.with_shifted_ys(&0.5);
        assert_eq!(shifted.xs(), nodes.xs());
        assert_eq!(shifted.ys(), &[1.5, 2.5]);
    }
}
