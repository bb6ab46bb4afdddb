//! Expand command implementation
//!
//! Prints the Lagrange, Newton and barycentric expressions of every line.

use tracing::info;

use super::{load_point_sets, resolve_precision};
use crate::config::CliConfig;
use crate::Result;
use interp_core::dataset::PointSet;
use interp_core::math::format::FormatOptions;
use interp_core::math::interpolators::{
    BarycentricInterpolator, Interpolator, LagrangeInterpolator, Method, NewtonInterpolator, Nodes,
};
use interp_core::types::{Exact, InterpolationError, Number, Precision};

/// Run the expand command
pub fn run(input: &str, precision: Option<&str>, line: Option<&str>, config: &CliConfig) -> Result<()> {
    let precision = resolve_precision(precision, config)?;
    let sets = load_point_sets(input, line)?;
    info!(lines = sets.len(), %precision, "expanding interpolants");

    print!("{}", render(&sets, precision, config.format_options())?);
    Ok(())
}

/// Renders one block per line: a header followed by one expression per method.
pub fn render(sets: &[PointSet], precision: Precision, format: FormatOptions) -> Result<String> {
    let mut out = String::new();
    for (i, set) in sets.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} ({} points, {})\n",
            set.label,
            set.points.len(),
            precision
        ));
        for (method, expression) in expressions(set, precision, format)? {
            out.push_str(&format!("  {:<13} {}\n", format!("{}:", method), expression));
        }
    }
    Ok(out)
}

fn expressions(
    set: &PointSet,
    precision: Precision,
    format: FormatOptions,
) -> Result<Vec<(Method, String)>> {
    let (xs, ys) = (set.xs(), set.ys());
    let rendered = match precision {
        Precision::Float => expressions_in::<f64>(Nodes::from_f64(&xs, &ys)?, format)?,
        Precision::Exact => expressions_in::<Exact>(Nodes::from_f64(&xs, &ys)?, format)?,
    };
    Ok(rendered)
}

fn expressions_in<T: Number>(
    nodes: Nodes<T>,
    format: FormatOptions,
) -> std::result::Result<Vec<(Method, String)>, InterpolationError> {
    Ok(vec![
        (
            Method::Lagrange,
            expression_of::<T, LagrangeInterpolator<T>>(nodes.clone(), format)?,
        ),
        (
            Method::Newton,
            expression_of::<T, NewtonInterpolator<T>>(nodes.clone(), format)?,
        ),
        (
            Method::Barycentric,
            expression_of::<T, BarycentricInterpolator<T>>(nodes, format)?,
        ),
    ])
}

fn expression_of<T: Number, I: Interpolator<T>>(
    nodes: Nodes<T>,
    format: FormatOptions,
) -> std::result::Result<String, InterpolationError> {
    let interp = I::from_nodes(nodes)?.with_format(format);
    Ok(interp.polynomial_expression().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use interp_core::dataset::decode_point_sets;

    #[test]
    fn test_render_float() {
        let sets = decode_point_sets(crate::commands::test_support::QUADRATIC_AND_PARABOLA).unwrap();
        let out = render(&sets, Precision::Float, FormatOptions::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Quadratic (3 points, float)");
        assert!(lines[1].trim_start().starts_with("Lagrange:"));
        assert!(lines[2].trim_start().starts_with("Newton:"));
        assert!(lines[3].trim_start().starts_with("Barycentric:"));
        assert!(lines[1..4].iter().all(|l| l.ends_with("P(x) = x² + 1")));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Parabola (3 points, float)");
        assert!(lines[6..9].iter().all(|l| l.ends_with("P(x) = x²")));
    }

    #[test]
    fn test_render_exact_fractions() {
        let sets = vec![PointSet::from_xy("halves", &[1.0, 2.0], &[0.5, 0.25])];
        let out = render(&sets, Precision::Exact, FormatOptions::default()).unwrap();
        assert!(out.starts_with("halves (2 points, exact)\n"));
        assert_eq!(out.matches("P(x) = -1/4x + 3/4").count(), 3);
    }

    #[test]
    fn test_render_respects_decimals() {
        let sets = vec![PointSet::from_xy("third", &[0.0, 3.0], &[0.0, 1.0])];
        let out = render(&sets, Precision::Float, FormatOptions::with_decimals(2)).unwrap();
        assert_eq!(out.matches("P(x) = 0.33x").count(), 3);
    }
}
