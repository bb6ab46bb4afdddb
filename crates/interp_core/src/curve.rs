//! Curve sampling for plotting.

use crate::math::interpolators::{
    BarycentricInterpolator, Interpolator, LagrangeInterpolator, Method, NewtonInterpolator, Nodes,
};
use crate::types::{Exact, InterpolationError, Number, Precision};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of samples drawn per curve when the caller does not choose.
pub const DEFAULT_CURVE_SAMPLES: usize = 1000;

/// One sampled point of an interpolated curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Abscissa
    pub x: f64,
    /// Interpolated value
    pub y: f64,
}

/// Evaluates `interp` at `num_samples` evenly spaced points spanning the
/// node range, converting each sample to f64.
///
/// With a single node every sample sits at that node's x.
pub fn sample_curve<T: Number, I: Interpolator<T>>(interp: &I, num_samples: usize) -> Vec<CurvePoint> {
    let xs = interp.nodes().sample_grid(num_samples);

    debug!(method = %I::METHOD, num_samples, "sampling curve");
    xs.iter()
        .map(|x| CurvePoint {
            x: x.to_f64(),
            y: interp.interpolate(x).to_f64(),
        })
        .collect()
}

/// Builds the requested interpolator from raw f64 data and samples it.
///
/// # Errors
///
/// Propagates construction errors (`InvalidInput`, `InsufficientData`,
/// `DuplicateAbscissa`).
pub fn sample_method(
    method: Method,
    precision: Precision,
    xs: &[f64],
    ys: &[f64],
    num_samples: usize,
) -> Result<Vec<CurvePoint>, InterpolationError> {
    match precision {
        Precision::Float => sample_in::<f64>(method, Nodes::from_f64(xs, ys)?, num_samples),
        Precision::Exact => sample_in::<Exact>(method, Nodes::from_f64(xs, ys)?, num_samples),
    }
}

fn sample_in<T: Number>(
    method: Method,
    nodes: Nodes<T>,
    num_samples: usize,
) -> Result<Vec<CurvePoint>, InterpolationError> {
    Ok(match method {
        Method::Lagrange => sample_curve(&LagrangeInterpolator::from_nodes(nodes)?, num_samples),
        Method::Newton => sample_curve(&NewtonInterpolator::from_nodes(nodes)?, num_samples),
        Method::Barycentric => {
            sample_curve(&BarycentricInterpolator::from_nodes(nodes)?, num_samples)
        }
    })
}
