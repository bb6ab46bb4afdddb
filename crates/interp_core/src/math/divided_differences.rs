//! Newton divided-difference table.
//!
//! For nodes `(x_i, y_i)` the table is defined by
//!
//! ```text
//! D[i][0] = y_i
//! D[i][j] = (D[i+1][j-1] - D[i][j-1]) / (x_{i+j} - x_i)
//! ```
//!
//! Row `i` holds `n - i` entries. The top row `D[0][0..n]` are the Newton
//! form coefficients `f[x_0], f[x_0, x_1], ..., f[x_0, ..., x_{n-1}]`.

use crate::types::{InterpolationError, Number};

/// Triangular divided-difference table.
///
/// # Example
///
/// ```
/// use interp_core::math::DividedDifferenceTable;
///
/// let table = DividedDifferenceTable::build(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
/// assert_eq!(table.coefficients(), vec![1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferenceTable<T: Number> {
    rows: Vec<Vec<T>>,
}

impl<T: Number> DividedDifferenceTable<T> {
    /// Builds the full table in O(n²) time and space.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` if `xs` is empty
    /// - `InvalidInput` if `xs` and `ys` differ in length
    /// - `DuplicateAbscissa` when `x_{i+j} - x_i` is zero
    pub fn build(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        let n = xs.len();
        if n == 0 {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }

        let mut rows: Vec<Vec<T>> = ys
            .iter()
            .enumerate()
            .map(|(i, y)| {
                let mut row = Vec::with_capacity(n - i);
                row.push(y.clone());
                row
            })
            .collect();

        for j in 1..n {
            for i in 0..(n - j) {
                let denominator = xs[i + j].clone() - xs[i].clone();
                if denominator.is_zero() {
                    return Err(InterpolationError::DuplicateAbscissa {
                        first: i,
                        second: i + j,
                        x: xs[i].to_f64(),
                    });
                }
                let numerator = rows[i + 1][j - 1].clone() - rows[i][j - 1].clone();
                rows[i].push(numerator / denominator);
            }
        }

        Ok(Self { rows })
    }

    /// Number of nodes the table was built from.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table is empty (never true for a built table).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Entry `D[i][j]`, or `None` outside the triangle `i + j < n`.
    pub fn entry(&self, i: usize, j: usize) -> Option<&T> {
        self.rows.get(i).and_then(|row| row.get(j))
    }

    /// The Newton coefficients `D[0][0..n]`.
    pub fn coefficients(&self) -> Vec<T> {
        self.rows.first().cloned().unwrap_or_default()
    }
}
