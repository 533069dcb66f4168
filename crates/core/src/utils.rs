//! Geometry helpers shared by layout, painting and PDF output.
//!
//! All layout coordinates use a top-left origin with y growing downward,
//! the way a page canvas is addressed. Conversion to PDF user space
//! (bottom-left origin) happens only when a content stream is written.

use serde::{Deserialize, Serialize};

/// Small epsilon for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// A 2D point (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in top-left page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BBox {
    pub x0: f64,
    pub top: f64,
    pub x1: f64,
    pub bottom: f64,
}

impl BBox {
    /// Builds a box from its top-left corner and size.
    pub fn from_origin(x: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            x0: x,
            top,
            x1: x + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// True when the two boxes share interior area (touching edges do not count).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x0 < other.x1 - EPSILON
            && other.x0 < self.x1 - EPSILON
            && self.top < other.bottom - EPSILON
            && other.top < self.bottom - EPSILON
    }
}

/// Compares two floats for approximate equality.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Checks that a dimension is usable for layout: finite and strictly positive.
#[inline]
pub fn is_positive_dimension(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Formats a number the way PDF operands are written: no exponent,
/// at most four decimals, trailing zeros trimmed.
pub fn format_real(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{v:.0}");
    }
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
