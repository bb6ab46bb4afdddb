//! Point-set records and their JSON wire format.
//!
//! A dataset file is a JSON list of lines:
//!
//! ```json
//! [
//!   {"label": "Line 1", "color": "#0000FF", "points": [{"x": 0, "y": 1}, {"x": 1, "y": 2}]}
//! ]
//! ```
//!
//! `label` and `color` are optional. Decoding is strict: unexpected keys,
//! non-numeric coordinates, and malformed colours are rejected with the
//! 1-based index of the offending line or point.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Colour assigned to lines that do not specify one.
pub const DEFAULT_COLOR: &str = "#0000FF";

const LINE_KEYS: [&str; 3] = ["label", "color", "points"];
const POINT_KEYS: [&str; 2] = ["x", "y"];

/// Errors produced while decoding point-set JSON.
///
/// Line and point indices are 1-based.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The text is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The root element is not a list
    #[error("Invalid format: root JSON element must be a list.")]
    NotAList,

    /// A line is not a JSON object
    #[error("Line {line} must be a JSON object.")]
    LineNotObject {
        /// Line index
        line: usize,
    },

    /// A line carries keys other than label, color, points
    #[error("Line {line} contains unexpected keys: {keys}")]
    UnexpectedLineKeys {
        /// Line index
        line: usize,
        /// Comma-separated offending keys
        keys: String,
    },

    /// The label is not a string
    #[error("Invalid type for 'label' in line {line}: must be a string.")]
    InvalidLabel {
        /// Line index
        line: usize,
    },

    /// The colour is not a `#RRGGBB` string
    #[error("Invalid color format in line {line}: '{color}' must be a hex string like '#RRGGBB'.")]
    InvalidColor {
        /// Line index
        line: usize,
        /// The rejected value as written
        color: String,
    },

    /// `points` is missing or not a list
    #[error("'points' in line {line} must be a list.")]
    PointsNotList {
        /// Line index
        line: usize,
    },

    /// A point is not a JSON object
    #[error("Point {point} in line {line} must be a dictionary.")]
    PointNotObject {
        /// Line index
        line: usize,
        /// Point index
        point: usize,
    },

    /// A point lacks `x` or `y`
    #[error("Point {point} in line {line} must contain 'x' and 'y' keys.")]
    MissingCoordinates {
        /// Line index
        line: usize,
        /// Point index
        point: usize,
    },

    /// A coordinate is not a number
    #[error("Invalid coordinate types in point {point} of line {line}: 'x' and 'y' must be numbers.")]
    InvalidCoordinates {
        /// Line index
        line: usize,
        /// Point index
        point: usize,
    },

    /// A point carries keys other than x, y
    #[error("Point {point} in line {line} has unexpected keys: {keys}")]
    UnexpectedPointKeys {
        /// Line index
        line: usize,
        /// Point index
        point: usize,
        /// Comma-separated offending keys
        keys: String,
    },
}

/// A single data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point {
    /// Abscissa
    pub x: f64,
    /// Ordinate
    pub y: f64,
}

/// A labelled, coloured sequence of points: one line on the plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointSet {
    /// Display label
    pub label: String,
    /// `#RRGGBB` colour
    pub color: String,
    /// Data points in input order
    pub points: Vec<Point>,
}

impl PointSet {
    /// Builds a point set from parallel coordinate slices; extra entries of
    /// the longer slice are ignored.
    pub fn from_xy(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        Self {
            label: label.into(),
            color: DEFAULT_COLOR.to_string(),
            points: xs.iter().zip(ys).map(|(&x, &y)| Point { x, y }).collect(),
        }
    }

    /// The x-values in input order.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// The y-values in input order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Decodes a JSON list of point sets, applying defaults and strict checks.
///
/// # Errors
///
/// See [`DatasetError`]; the first problem found is reported.
pub fn decode_point_sets(text: &str) -> Result<Vec<PointSet>, DatasetError> {
    let root: Value = serde_json::from_str(text)?;
    let lines = root.as_array().ok_or(DatasetError::NotAList)?;

    lines
        .iter()
        .enumerate()
        .map(|(i, value)| decode_line(i + 1, value))
        .collect()
}

/// Encodes point sets as pretty-printed JSON accepted by [`decode_point_sets`].
pub fn encode_point_sets(sets: &[PointSet]) -> Result<String, DatasetError> {
    Ok(serde_json::to_string_pretty(sets)?)
}

fn decode_line(line: usize, value: &Value) -> Result<PointSet, DatasetError> {
    let object = value.as_object().ok_or(DatasetError::LineNotObject { line })?;

    if let Some(keys) = unexpected_keys(object, &LINE_KEYS) {
        return Err(DatasetError::UnexpectedLineKeys { line, keys });
    }

    let label = match object.get("label") {
        None => format!("Line {}", line),
        Some(Value::String(label)) => label.clone(),
        Some(_) => return Err(DatasetError::InvalidLabel { line }),
    };

    let color = match object.get("color") {
        None => DEFAULT_COLOR.to_string(),
        Some(Value::String(color)) if is_hex_color(color) => color.clone(),
        Some(other) => {
            let color = match other {
                Value::String(s) => s.clone(),
                v => v.to_string(),
            };
            return Err(DatasetError::InvalidColor { line, color });
        }
    };

    let points = object
        .get("points")
        .and_then(Value::as_array)
        .ok_or(DatasetError::PointsNotList { line })?
        .iter()
        .enumerate()
        .map(|(j, point)| decode_point(line, j + 1, point))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PointSet {
        label,
        color,
        points,
    })
}

fn decode_point(line: usize, point: usize, value: &Value) -> Result<Point, DatasetError> {
    let object = value
        .as_object()
        .ok_or(DatasetError::PointNotObject { line, point })?;

    let (x, y) = match (object.get("x"), object.get("y")) {
        (Some(x), Some(y)) => (x, y),
        _ => return Err(DatasetError::MissingCoordinates { line, point }),
    };
    let (x, y) = match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => (x, y),
        _ => return Err(DatasetError::InvalidCoordinates { line, point }),
    };

    if let Some(keys) = unexpected_keys(object, &POINT_KEYS) {
        return Err(DatasetError::UnexpectedPointKeys { line, point, keys });
    }

    Ok(Point { x, y })
}

fn unexpected_keys(object: &Map<String, Value>, allowed: &[&str]) -> Option<String> {
    let extra: Vec<&str> = object
        .keys()
        .map(String::as_str)
        .filter(|key| !allowed.contains(key))
        .collect();
    (!extra.is_empty()).then(|| extra.join(", "))
}

fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
