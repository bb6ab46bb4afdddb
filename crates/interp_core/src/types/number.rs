//! Numeric ring abstraction shared by every interpolator.
//!
//! Interpolators are generic over [`Number`], which is implemented for:
//! - `f64`: IEEE double, for fast repeated evaluation
//! - `BigRational`: arbitrary-precision fractions, for exact coefficients
//!
//! The trait carries exactly what the algorithms need: field arithmetic,
//! ordering (for the sampling range), conversion from the f64 inputs the
//! collaborators hand over, and the coefficient stringification rule used
//! by the shared polynomial formatter.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Exact arithmetic mode number type.
pub type Exact = BigRational;

/// Floating-point arithmetic mode number type.
pub type Float = f64;

/// Arithmetic mode an interpolator runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Arbitrary-precision rationals
    Exact,
    /// IEEE 754 doubles
    #[default]
    Float,
}

impl Precision {
    /// Lowercase name, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Precision::Exact => "exact",
            Precision::Float => "float",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Precision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" | "rational" => Ok(Precision::Exact),
            "float" | "f64" => Ok(Precision::Float),
            other => Err(format!(
                "Unknown precision: {}. Supported: exact, float",
                other
            )),
        }
    }
}

/// A field element usable by the interpolation algorithms.
///
/// # Requirements
///
/// - Field operations (`+`, `-`, `*`, `/`, unary `-`) with `zero`/`one`
/// - `PartialOrd` for locating the sampling range
/// - Equality that is exact for rationals and bitwise-value equality for floats
///
/// Division by zero is never performed by the algorithms: every
/// denominator is checked with [`Zero::is_zero`] first.
pub trait Number:
    Clone
    + Debug
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// The arithmetic mode this type implements.
    const PRECISION: Precision;

    /// Converts an input value. Returns `None` for NaN or infinities.
    fn from_f64(value: f64) -> Option<Self>;

    /// Converts a count or index.
    fn from_usize(n: usize) -> Self;

    /// Nearest f64 approximation, used for reporting and stability metrics.
    fn to_f64(&self) -> f64;

    /// Absolute value.
    fn magnitude(&self) -> Self;

    /// Returns true for values strictly below zero.
    fn is_negative(&self) -> bool;

    /// Renders the value as a polynomial coefficient.
    ///
    /// `decimals` only affects floating-point rendering.
    fn render(&self, decimals: usize) -> String;
}

impl Number for f64 {
    const PRECISION: Precision = Precision::Float;

    #[inline]
    fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then_some(value)
    }

    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f64
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        *self
    }

    #[inline]
    fn magnitude(&self) -> Self {
        f64::abs(*self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        *self < 0.0
    }

    fn render(&self, decimals: usize) -> String {
        let fixed = format!("{:.*}", decimals, self);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

impl Number for BigRational {
    const PRECISION: Precision = Precision::Exact;

    fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // Shortest round-trip decimal, so 0.1 becomes 1/10 rather than the
        // binary expansion of the nearest double.
        decimal_to_rational(&value.to_string())
    }

    fn from_usize(n: usize) -> Self {
        BigRational::from_integer(BigInt::from(n))
    }

    fn to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    fn magnitude(&self) -> Self {
        Signed::abs(self)
    }

    fn is_negative(&self) -> bool {
        Signed::is_negative(self)
    }

    fn render(&self, _decimals: usize) -> String {
        if self.denom().is_one() {
            self.numer().to_string()
        } else {
            format!("{}/{}", self.numer(), self.denom())
        }
    }
}

/// Parses a plain decimal literal (`-12.375`, `0.1`, `42`) into an exact fraction.
fn decimal_to_rational(repr: &str) -> Option<BigRational> {
    let (negative, digits) = match repr.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, repr),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    let numer: BigInt = format!("{}{}", int_part, frac_part).parse().ok()?;
    let denom = num_traits::pow(BigInt::from(10u32), frac_part.len());
    let value = BigRational::new(numer, denom);
    Some(if negative { -value } else { value })
}

/// Converts a slice of f64 inputs into the target number type.
///
/// # Errors
///
/// Returns the index and value of the first non-finite entry.
pub fn convert_slice<T: Number>(values: &[f64]) -> Result<Vec<T>, (usize, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| T::from_f64(v).ok_or((i, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rational(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    // ========================================
    // Float Mode Tests
    // ========================================

    #[test]
    fn test_f64_render_trims_trailing_zeros() {
        assert_eq!(2.5_f64.render(4), "2.5");
        assert_eq!(3.0_f64.render(4), "3");
        assert_eq!(0.333333_f64.render(4), "0.3333");
        assert_eq!((-1.25_f64).render(2), "-1.25");
    }

    #[test]
    fn test_f64_render_negative_zero_after_rounding() {
        assert_eq!((-0.00001_f64).render(4), "0");
        assert_eq!((-0.0_f64).render(4), "0");
    }

    #[test]
    fn test_f64_render_zero_decimals() {
        assert_eq!(12.7_f64.render(0), "13");
    }

    #[test]
    fn test_f64_from_f64_rejects_non_finite() {
        assert_eq!(<f64 as Number>::from_f64(1.5), Some(1.5));
        assert_eq!(<f64 as Number>::from_f64(f64::NAN), None);
        assert_eq!(<f64 as Number>::from_f64(f64::INFINITY), None);
    }

    #[test]
    fn test_f64_sign_and_magnitude() {
        assert!(Number::is_negative(&-2.0_f64));
        assert!(!Number::is_negative(&0.0_f64));
        assert_eq!(Number::magnitude(&-2.0_f64), 2.0);
    }

    // ========================================
    // Exact Mode Tests
    // ========================================

    #[test]
    fn test_rational_from_decimal_literal() {
        assert_eq!(BigRational::from_f64(0.1), Some(rational(1, 10)));
        assert_eq!(BigRational::from_f64(-2.5), Some(rational(-5, 2)));
        assert_eq!(BigRational::from_f64(42.0), Some(rational(42, 1)));
        assert_eq!(BigRational::from_f64(-0.0), Some(rational(0, 1)));
    }

    #[test]
    fn test_rational_from_f64_rejects_non_finite() {
        assert_eq!(BigRational::from_f64(f64::NAN), None);
        assert_eq!(BigRational::from_f64(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_rational_render() {
        assert_eq!(rational(3, 1).render(4), "3");
        assert_eq!(rational(-1, 2).render(4), "-1/2");
        assert_eq!(rational(6, 4).render(4), "3/2");
        assert_eq!(rational(0, 5).render(4), "0");
    }

    #[test]
    fn test_rational_to_f64() {
        assert!((Number::to_f64(&rational(1, 4)) - 0.25).abs() < 1e-15);
        assert!((Number::to_f64(&rational(-7, 2)) + 3.5).abs() < 1e-15);
    }

    #[test]
    fn test_rational_to_f64_beyond_f64_range_parts() {
        let denom = num_traits::pow(BigInt::from(10), 399);
        let numer = num_traits::pow(BigInt::from(10), 400) + BigInt::one();
        let value = BigRational::new(numer, denom);
        assert_relative_eq!(Number::to_f64(&value), 10.0, max_relative = 1e-15);
    }

    #[test]
    fn test_rational_sign_and_magnitude() {
        assert!(Number::is_negative(&rational(-1, 3)));
        assert_eq!(Number::magnitude(&rational(-1, 3)), rational(1, 3));
    }

    // ========================================
    // Conversion Tests
    // ========================================

    #[test]
    fn test_convert_slice_reports_first_bad_value() {
        let result = convert_slice::<f64>(&[1.0, f64::NAN, f64::INFINITY]);
        match result {
            Err((index, value)) => {
                assert_eq!(index, 1);
                assert!(value.is_nan());
            }
            Ok(_) => panic!("Expected conversion failure"),
        }
    }

    #[test]
    fn test_convert_slice_exact() {
        let values = convert_slice::<BigRational>(&[0.5, 2.0]).unwrap();
        assert_eq!(values, vec![rational(1, 2), rational(2, 1)]);
    }

    #[test]
    fn test_precision_round_trip() {
        assert_eq!("exact".parse::<Precision>(), Ok(Precision::Exact));
        assert_eq!("FLOAT".parse::<Precision>(), Ok(Precision::Float));
        assert!("double".parse::<Precision>().is_err());
        assert_eq!(Precision::Exact.to_string(), "exact");
        assert_eq!(<BigRational as Number>::PRECISION, Precision::Exact);
        assert_eq!(<f64 as Number>::PRECISION, Precision::Float);
    }
}
