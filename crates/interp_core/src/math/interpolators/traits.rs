//! Interpolator trait definition.

use super::Nodes;
use crate::math::format::{format_polynomial, FormatOptions};
use crate::math::Polynomial;
use crate::types::{InterpolationError, Number};
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The three interpolation algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Lagrange basis polynomials
    Lagrange,
    /// Newton divided differences
    Newton,
    /// Barycentric (Berrut-Trefethen) form
    Barycentric,
}

impl Method {
    /// All methods, in comparison order.
    pub const ALL: [Method; 3] = [Method::Lagrange, Method::Newton, Method::Barycentric];

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Lagrange => "lagrange",
            Method::Newton => "newton",
            Method::Barycentric => "barycentric",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Method::Lagrange => "Lagrange",
            Method::Newton => "Newton",
            Method::Barycentric => "Barycentric",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lagrange" => Ok(Method::Lagrange),
            "newton" => Ok(Method::Newton),
            "barycentric" => Ok(Method::Barycentric),
            other => Err(format!(
                "Unknown method: {}. Supported: lagrange, newton, barycentric",
                other
            )),
        }
    }
}

/// Lazily computed coefficient expansion and rendered expression.
///
/// Filled on first request and kept for the interpolator's lifetime.
/// Changing the format options drops the rendered string only.
#[derive(Debug, Clone)]
pub struct ExpansionCache<T: Number> {
    options: FormatOptions,
    coefficients: OnceCell<Polynomial<T>>,
    expression: OnceCell<String>,
}

impl<T: Number> Default for ExpansionCache<T> {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

impl<T: Number> ExpansionCache<T> {
    /// An empty cache rendering with `options`.
    pub fn new(options: FormatOptions) -> Self {
        Self {
            options,
            coefficients: OnceCell::new(),
            expression: OnceCell::new(),
        }
    }

    /// Current format options.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Replaces the format options, discarding any rendered expression.
    pub fn set_options(&mut self, options: FormatOptions) {
        if self.options != options {
            self.options = options;
            self.expression = OnceCell::new();
        }
    }

    /// Returns true once the coefficients have been expanded.
    pub fn is_expanded(&self) -> bool {
        self.coefficients.get().is_some()
    }
}

/// Common interface for polynomial interpolators.
///
/// An implementor supplies construction from [`Nodes`], evaluation, and the
/// uncached coefficient expansion. Caching, formatting, and the stability
/// probe are provided on top, identically for every algorithm.
///
/// Implementations are single-owner: the lazy caches are `!Sync`.
pub trait Interpolator<T: Number>: Sized {
    /// Which algorithm this is.
    const METHOD: Method;

    /// Builds the interpolator, running all eager precomputation.
    ///
    /// # Errors
    ///
    /// `DuplicateAbscissa` when two nodes share an x-value.
    fn from_nodes(nodes: Nodes<T>) -> Result<Self, InterpolationError>;

    /// The nodes this interpolator owns.
    fn nodes(&self) -> &Nodes<T>;

    /// Evaluates the interpolating polynomial at `x`.
    ///
    /// Total: degenerate evaluations return a defined fallback rather than
    /// failing.
    fn interpolate(&self, x: &T) -> T;

    /// Expands the interpolant into dense coefficients (uncached).
    fn expand(&self) -> Polynomial<T>;

    /// The lazy expansion cache.
    fn cache(&self) -> &ExpansionCache<T>;

    /// Mutable access to the lazy expansion cache.
    fn cache_mut(&mut self) -> &mut ExpansionCache<T>;

    /// Number of nodes.
    fn len(&self) -> usize {
        self.nodes().len()
    }

    /// Returns true if there are no nodes (never true once constructed).
    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    /// Smallest and largest node abscissa.
    fn domain(&self) -> (T, T) {
        self.nodes().range()
    }

    /// Sets the rendering options used by [`Interpolator::polynomial_expression`].
    fn with_format(mut self, options: FormatOptions) -> Self {
        self.cache_mut().set_options(options);
        self
    }

    /// Dense coefficients, lowest power first, expanded on first call.
    fn coefficients(&self) -> &Polynomial<T> {
        self.cache().coefficients.get_or_init(|| {
            debug!(method = %Self::METHOD, nodes = self.len(), "expanding polynomial coefficients");
            self.expand()
        })
    }

    /// The rendered expression `P(x) = ...`, formatted on first call.
    fn polynomial_expression(&self) -> &str {
        self.cache().expression.get_or_init(|| {
            format_polynomial(self.coefficients().coefficients(), self.cache().options())
        })
    }

    /// Forward-stability probe.
    ///
    /// Adds `perturbation` to every y-value, builds a second interpolator of
    /// the same kind, and returns the largest relative deviation between the
    /// two over `num_samples` evenly spaced points of the domain. Where the
    /// original value is zero the absolute deviation is used instead.
    ///
    /// A single node (or zero samples) yields exactly `0.0`. A sample whose
    /// deviation overflows or is NaN makes the result `f64::INFINITY`.
    fn numerical_stability(
        &self,
        perturbation: &T,
        num_samples: usize,
    ) -> Result<f64, InterpolationError> {
        let nodes = self.nodes();
        if nodes.len() <= 1 || num_samples == 0 {
            return Ok(0.0);
        }

        let perturbed = Self::from_nodes(nodes.with_shifted_ys(perturbation))?;
        let mut worst = 0.0_f64;
        for x in nodes.sample_grid(num_samples) {
            let error = sample_error(&self.interpolate(&x), &perturbed.interpolate(&x));
            worst = worst.max(error);
        }

        debug!(
            method = %Self::METHOD,
            nodes = nodes.len(),
            num_samples,
            stability = worst,
            "computed numerical stability"
        );
        Ok(worst)
    }
}

/// Relative deviation of `shifted` from `original`, absolute where
/// `original` is zero. Non-finite results count as infinitely unstable so
/// they survive the `f64::max` fold.
fn sample_error<T: Number>(original: &T, shifted: &T) -> f64 {
    let delta = (shifted.clone() - original.clone()).magnitude();
    let error = if original.is_zero() {
        delta
    } else {
        delta / original.magnitude()
    };
    let error = error.to_f64();
    if error.is_finite() {
        error
    } else {
        f64::INFINITY
    }
}
