//! Unicode rendering of dense polynomials.
//!
//! One formatter serves every interpolator and both precision modes; the
//! only per-type behaviour is [`Number::render`] for individual coefficients.
//!
//! Rendering rules:
//! - terms run from the highest power down to the constant
//! - zero coefficients are skipped
//! - a coefficient of magnitude 1 is elided on `x` terms, never on the constant
//! - the first term carries a bare leading `-`, later terms are joined by ` + ` / ` - `
//! - powers of two and above use superscript digits (`x²`, `x¹⁰`)
//! - the zero polynomial renders as `0`
//!
//! A coefficient counts as zero or one by its rendered magnitude, so float
//! round-off below the display precision never produces `0x²` or `1x`.

use crate::types::{ExpressionParseError, Number};

/// Default number of decimal places for floating-point coefficients.
pub const DEFAULT_DECIMALS: usize = 4;

/// Prefix of a rendered polynomial expression.
pub const EXPRESSION_PREFIX: &str = "P(x) = ";

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Rendering options for polynomial expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Decimal places for floating-point coefficients (ignored for rationals)
    pub decimals: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl FormatOptions {
    /// Options with the given number of decimal places.
    pub fn with_decimals(decimals: usize) -> Self {
        Self { decimals }
    }
}

/// Renders `n` with Unicode superscript digits.
///
/// ```
/// use interp_core::math::format::to_superscript;
/// assert_eq!(to_superscript(12), "¹²");
/// ```
pub fn to_superscript(n: usize) -> String {
    map_digits(n, &SUPERSCRIPT_DIGITS)
}

/// Renders `n` with Unicode subscript digits.
///
/// ```
/// use interp_core::math::format::to_subscript;
/// assert_eq!(to_subscript(3), "₃");
/// ```
pub fn to_subscript(n: usize) -> String {
    map_digits(n, &SUBSCRIPT_DIGITS)
}

fn map_digits(n: usize, table: &[char; 10]) -> String {
    n.to_string()
        .bytes()
        .map(|b| table[usize::from(b - b'0')])
        .collect()
}

/// Renders the terms of a polynomial without the `P(x) = ` prefix.
///
/// # Example
///
/// ```
/// use interp_core::math::format::{format_terms, FormatOptions};
///
/// let coeffs = [1.0, 0.0, 1.0];
/// assert_eq!(format_terms(&coeffs, &FormatOptions::default()), "x² + 1");
/// ```
pub fn format_terms<T: Number>(coeffs: &[T], options: &FormatOptions) -> String {
    let mut out = String::new();

    for (power, coeff) in coeffs.iter().enumerate().rev() {
        let magnitude = coeff.magnitude().render(options.decimals);
        if magnitude == "0" {
            continue;
        }

        let negative = coeff.is_negative();
        if out.is_empty() {
            if negative {
                out.push('-');
            }
        } else {
            out.push_str(if negative { " - " } else { " + " });
        }

        if power == 0 || magnitude != "1" {
            out.push_str(&magnitude);
        }
        if power >= 1 {
            out.push('x');
        }
        if power >= 2 {
            out.push_str(&to_superscript(power));
        }
    }

    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Renders a full expression, `P(x) = <terms>`.
pub fn format_polynomial<T: Number>(coeffs: &[T], options: &FormatOptions) -> String {
    format!("{}{}", EXPRESSION_PREFIX, format_terms(coeffs, options))
}

/// Strips the `P(x) = ` prefix from a rendered expression, if present.
pub fn expression_body(expression: &str) -> &str {
    expression
        .trim()
        .strip_prefix(EXPRESSION_PREFIX.trim_end())
        .map(str::trim)
        .unwrap_or_else(|| expression.trim())
}

/// Reads a rendered expression back into dense f64 coefficients.
///
/// Accepts the output of [`format_polynomial`] or [`format_terms`];
/// powers may be superscript digits or `^k`.
///
/// # Errors
///
/// Returns [`ExpressionParseError`] for empty input, unreadable
/// coefficients, or terms that are not `[coefficient][x][power]`.
///
/// # Example
///
/// ```
/// use interp_core::math::format::parse_expression;
///
/// let coeffs = parse_expression("P(x) = -1/2x³ + 2x - 7").unwrap();
/// assert_eq!(coeffs, vec![-7.0, 2.0, 0.0, -0.5]);
/// ```
pub fn parse_expression(expression: &str) -> Result<Vec<f64>, ExpressionParseError> {
    let body: String = expression_body(expression)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if body.is_empty() {
        return Err(ExpressionParseError::Empty);
    }

    let mut terms: Vec<(f64, String)> = Vec::new();
    let mut sign = 1.0;
    let mut current = String::new();
    for ch in body.chars() {
        match ch {
            '+' | '-' => {
                if !current.is_empty() {
                    terms.push((sign, std::mem::take(&mut current)));
                } else if !terms.is_empty() || sign < 0.0 {
                    return Err(ExpressionParseError::MalformedTerm(body.clone()));
                }
                sign = if ch == '-' { -1.0 } else { 1.0 };
            }
            _ => current.push(ch),
        }
    }
    if current.is_empty() {
        return Err(ExpressionParseError::MalformedTerm(body));
    }
    terms.push((sign, current));

    let mut coeffs: Vec<f64> = Vec::new();
    for (sign, term) in terms {
        let (coeff, power) = parse_term(&term)?;
        if coeffs.len() <= power {
            coeffs.resize(power + 1, 0.0);
        }
        coeffs[power] += sign * coeff;
    }
    Ok(coeffs)
}

fn parse_term(term: &str) -> Result<(f64, usize), ExpressionParseError> {
    let Some((coeff_part, power_part)) = term.split_once('x') else {
        return Ok((parse_coefficient(term)?, 0));
    };

    let coeff = if coeff_part.is_empty() {
        1.0
    } else {
        parse_coefficient(coeff_part)?
    };

    let power = if power_part.is_empty() {
        1
    } else if let Some(ascii) = power_part.strip_prefix('^') {
        ascii
            .parse::<usize>()
            .map_err(|_| ExpressionParseError::MalformedTerm(term.to_string()))?
    } else {
        let digits: Option<String> = power_part
            .chars()
            .map(|c| {
                SUPERSCRIPT_DIGITS
                    .iter()
                    .position(|&s| s == c)
                    .and_then(|d| char::from_digit(d as u32, 10))
            })
            .collect();
        digits
            .and_then(|d| d.parse::<usize>().ok())
            .ok_or_else(|| ExpressionParseError::MalformedTerm(term.to_string()))?
    };

    Ok((coeff, power))
}

fn parse_coefficient(text: &str) -> Result<f64, ExpressionParseError> {
    let invalid = || ExpressionParseError::InvalidCoefficient(text.to_string());
    match text.split_once('/') {
        Some((numer, denom)) => {
            let numer: f64 = numer.parse().map_err(|_| invalid())?;
            let denom: f64 = denom.parse().map_err(|_| invalid())?;
            if denom == 0.0 {
                return Err(invalid());
            }
            Ok(numer / denom)
        }
        None => text.parse().map_err(|_| invalid()),
    }
}
