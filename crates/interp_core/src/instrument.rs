//! Timing and stability instrumentation.
//!
//! Timings are returned alongside the values they measure ([`Timed`]) rather
//! than accumulated inside the interpolators, so every measurement is an
//! explicit value the caller owns.
//!
//! [`profile`] measures a single method; [`compare`] runs all three methods
//! over the same dataset and returns one [`InterpolationReport`] each.

use crate::math::format::FormatOptions;
use crate::math::interpolators::{
    BarycentricInterpolator, Interpolator, LagrangeInterpolator, Method, NewtonInterpolator, Nodes,
};
use crate::types::{Exact, InterpolationError, Number, Precision};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default additive y-perturbation for the stability probe.
pub const DEFAULT_PERTURBATION: f64 = 1e-6;

/// Default number of sample points for the stability probe.
pub const DEFAULT_STABILITY_SAMPLES: usize = 100;

/// A value together with the wall-clock time it took to produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<V> {
    /// The computed value
    pub value: V,
    /// Time spent computing it
    pub elapsed: Duration,
}

impl<V> Timed<V> {
    /// Elapsed time in seconds.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Transforms the value, keeping the measurement.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }
}

/// Runs `f` and measures how long it took.
pub fn time<V>(f: impl FnOnce() -> V) -> Timed<V> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Evaluates `interp` at a single point, timing only the evaluation.
pub fn evaluate_timed<T: Number, I: Interpolator<T>>(interp: &I, x: &T) -> Timed<T> {
    time(|| interp.interpolate(x))
}

/// Evaluates `interp` at every point of `xs`, timing the whole batch.
pub fn evaluate_many_timed<T: Number, I: Interpolator<T>>(interp: &I, xs: &[T]) -> Timed<Vec<T>> {
    time(|| xs.iter().map(|x| interp.interpolate(x)).collect())
}

/// Parameters of the forward-stability probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityOptions {
    /// Amount added to every y-value
    pub perturbation: f64,
    /// Number of evenly spaced sample points over the node range
    pub samples: usize,
}

impl Default for StabilityOptions {
    fn default() -> Self {
        Self {
            perturbation: DEFAULT_PERTURBATION,
            samples: DEFAULT_STABILITY_SAMPLES,
        }
    }
}

/// Everything [`profile`] needs besides the nodes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfileOptions {
    /// Expression rendering
    pub format: FormatOptions,
    /// Stability probe parameters; the sample grid is reused for evaluation timing
    pub stability: StabilityOptions,
}

/// Measurements for one method on one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpolationReport {
    /// Which algorithm was measured
    pub method: Method,
    /// Arithmetic mode
    pub precision: Precision,
    /// Number of nodes
    pub nodes: usize,
    /// Rendered expression `P(x) = ...`
    pub expression: String,
    /// Construction time (weights / divided differences), seconds
    pub construction_secs: f64,
    /// Coefficient expansion plus formatting time, seconds
    pub expansion_secs: f64,
    /// Mean time of a single evaluation over the sample grid, seconds
    pub evaluation_secs: f64,
    /// Largest relative deviation under the stability perturbation
    pub stability: f64,
}

/// Builds one interpolator from `nodes` and measures it.
///
/// # Errors
///
/// * `DuplicateAbscissa` - Construction failed
/// * `InvalidInput` - The perturbation is not representable in `T`
pub fn profile<T: Number, I: Interpolator<T>>(
    nodes: Nodes<T>,
    options: &ProfileOptions,
) -> Result<InterpolationReport, InterpolationError> {
    let perturbation = T::from_f64(options.stability.perturbation).ok_or_else(|| {
        InterpolationError::InvalidInput(format!(
            "perturbation is not finite: {}",
            options.stability.perturbation
        ))
    })?;

    let built = time(|| I::from_nodes(nodes));
    let construction_secs = built.seconds();
    let interp = built.value?.with_format(options.format);

    let expansion = time(|| interp.polynomial_expression().to_string());
    let expansion_secs = expansion.seconds();

    let grid = interp.nodes().sample_grid(options.stability.samples);
    let evaluation = evaluate_many_timed(&interp, &grid);
    let evaluation_secs = if grid.is_empty() {
        0.0
    } else {
        evaluation.seconds() / grid.len() as f64
    };

    let stability = interp.numerical_stability(&perturbation, options.stability.samples)?;

    debug!(
        method = %I::METHOD,
        precision = %T::PRECISION,
        nodes = interp.len(),
        construction_secs,
        expansion_secs,
        evaluation_secs,
        stability,
        "profiled interpolator"
    );

    Ok(InterpolationReport {
        method: I::METHOD,
        precision: T::PRECISION,
        nodes: interp.len(),
        expression: expansion.value,
        construction_secs,
        expansion_secs,
        evaluation_secs,
        stability,
    })
}

/// Dispatches [`profile`] on a runtime [`Method`].
pub fn profile_method<T: Number>(
    method: Method,
    nodes: Nodes<T>,
    options: &ProfileOptions,
) -> Result<InterpolationReport, InterpolationError> {
    match method {
        Method::Lagrange => profile::<T, LagrangeInterpolator<T>>(nodes, options),
        Method::Newton => profile::<T, NewtonInterpolator<T>>(nodes, options),
        Method::Barycentric => profile::<T, BarycentricInterpolator<T>>(nodes, options),
    }
}

/// Profiles all three methods on the same dataset, in [`Method::ALL`] order.
///
/// # Errors
///
/// Fails on the first method that cannot be built; with distinct finite
/// inputs none can.
///
/// # Example
///
/// ```
/// use interp_core::instrument::{compare, ProfileOptions};
/// use interp_core::types::Precision;
///
/// let reports = compare(&[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0], Precision::Exact, &ProfileOptions::default())
///     .unwrap();
/// assert_eq!(reports.len(), 3);
/// assert!(reports.iter().all(|r| r.expression == "P(x) = x² + 1"));
/// ```
pub fn compare(
    xs: &[f64],
    ys: &[f64],
    precision: Precision,
    options: &ProfileOptions,
) -> Result<Vec<InterpolationReport>, InterpolationError> {
    match precision {
        Precision::Float => compare_in::<f64>(Nodes::from_f64(xs, ys)?, options),
        Precision::Exact => compare_in::<Exact>(Nodes::from_f64(xs, ys)?, options),
    }
}

fn compare_in<T: Number>(
    nodes: Nodes<T>,
    options: &ProfileOptions,
) -> Result<Vec<InterpolationReport>, InterpolationError> {
    Method::ALL
        .iter()
        .map(|&method| profile_method(method, nodes.clone(), options))
        .collect()
}
