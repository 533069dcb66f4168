//! Table layout parameters.
//!
//! Contains TableParams for controlling row geometry and label placement.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::utils::{Point, is_positive_dimension};

/// Parameters for the grouped table layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableParams {
    /// Height of one data row. A group of `n` records spans `n` rows.
    pub row_height: f64,

    /// Height of the header row. Header labels sit on the baseline at
    /// `origin.y + header_height`, which is also where the first data row starts.
    pub header_height: f64,

    /// Top-left corner of the table on the page.
    pub origin: Point,

    /// Offset of a cell label from the cell's top-left corner.
    pub text_inset: Point,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            row_height: 40.0,
            header_height: 40.0,
            origin: Point::new(56.0, 0.0),
            text_inset: Point::new(5.0, 25.0),
        }
    }
}

impl TableParams {
    /// Creates table parameters with the specified values.
    pub fn new(row_height: f64, header_height: f64, origin: Point) -> Self {
        Self {
            row_height,
            header_height,
            origin,
            ..Self::default()
        }
    }

    /// Rejects non-positive heights and non-finite coordinates.
    pub fn validate(&self) -> Result<()> {
        if !is_positive_dimension(self.row_height) {
            return Err(ReportError::invalid(format!(
                "row_height must be positive, got {}",
                self.row_height
            )));
        }
        if !is_positive_dimension(self.header_height) {
            return Err(ReportError::invalid(format!(
                "header_height must be positive, got {}",
                self.header_height
            )));
        }
        let coords = [
            self.origin.x,
            self.origin.y,
            self.text_inset.x,
            self.text_inset.y,
        ];
        if coords.iter().any(|v| !v.is_finite()) {
            return Err(ReportError::invalid("origin and text_inset must be finite"));
        }
        Ok(())
    }
}
