use super::{Stroke, Surface, TextStyle};
use crate::utils::BBox;

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        bbox: BBox,
        stroke: Stroke,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        style: TextStyle,
    },
}

/// Surface that keeps every call for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Recorded text runs, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rect { .. } => None,
        })
    }

    /// Recorded rectangles, in drawing order.
    pub fn rects(&self) -> impl Iterator<Item = &BBox> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Rect { bbox, .. } => Some(bbox),
            DrawOp::Text { .. } => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn stroke_rect(&mut self, bbox: &BBox, stroke: &Stroke) {
        self.ops.push(DrawOp::Rect {
            bbox: *bbox,
            stroke: stroke.clone(),
        });
    }

    fn fill_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            style: style.clone(),
        });
    }
}
