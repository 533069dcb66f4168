//! Presentation styles for painted cells.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::model::Color;
use crate::utils::is_positive_dimension;

/// Standard 14 font faces the document can reference without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
}

impl FontFace {
    /// PostScript name of the base font.
    pub const fn base_font(&self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }

    /// Resource name used in content streams.
    pub const fn resource_name(&self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }

    pub const ALL: [FontFace; 2] = [FontFace::Regular, FontFace::Bold];
}

/// Text styling for a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f64,
    pub color: Color,
}

/// Border styling for a cell outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
}

/// Styles for the whole table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub header: TextStyle,
    pub body: TextStyle,
    pub border: Stroke,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: TextStyle {
                face: FontFace::Bold,
                size: 15.0,
                color: Color::PURPLE_200,
            },
            body: TextStyle {
                face: FontFace::Regular,
                size: 12.0,
                color: Color::BLACK,
            },
            border: Stroke {
                width: 2.0,
                color: Color::BLACK,
            },
        }
    }
}

impl Theme {
    pub fn validate(&self) -> Result<()> {
        for (what, size) in [("header", self.header.size), ("body", self.body.size)] {
            if !is_positive_dimension(size) {
                return Err(ReportError::invalid(format!(
                    "{what} font size must be positive, got {size}"
                )));
            }
        }
        if !self.border.width.is_finite() || self.border.width < 0.0 {
            return Err(ReportError::invalid(format!(
                "border width must be finite and non-negative, got {}",
                self.border.width
            )));
        }
        Ok(())
    }
}
