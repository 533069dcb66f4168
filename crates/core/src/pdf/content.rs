//! Page content stream builder.
//!
//! Implements [`Surface`] by emitting PDF graphics operators. Layout
//! coordinates are top-left based; PDF user space is bottom-left based, so
//! every y is flipped against the page height here.

use super::encoding::encode_win_ansi;
use super::objects::escape_literal;
use crate::model::Color;
use crate::render::{Stroke, Surface, TextStyle};
use crate::utils::{BBox, format_real};

/// Accumulates the operators of one page.
#[derive(Debug, Clone)]
pub struct ContentStream {
    page_height: f64,
    buf: Vec<u8>,
}

impl ContentStream {
    pub fn new(page_height: f64) -> Self {
        Self {
            page_height,
            buf: Vec::new(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn op(&mut self, line: &str) {
        self.buf.extend_from_slice(line.as_bytes());
        self.buf.push(b'\n');
    }

    fn color_operands(color: &Color) -> String {
        let (r, g, b) = color.components();
        format!("{} {} {}", format_real(r), format_real(g), format_real(b))
    }
}

impl Surface for ContentStream {
    fn stroke_rect(&mut self, bbox: &BBox, stroke: &Stroke) {
        let y = self.page_height - bbox.bottom;
        self.op(&format!("{} w", format_real(stroke.width)));
        self.op(&format!("{} RG", Self::color_operands(&stroke.color)));
        self.op(&format!(
            "{} {} {} {} re S",
            format_real(bbox.x0),
            format_real(y),
            format_real(bbox.width()),
            format_real(bbox.height())
        ));
    }

    fn fill_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        self.op("BT");
        self.op(&format!(
            "/{} {} Tf",
            style.face.resource_name(),
            format_real(style.size)
        ));
        self.op(&format!("{} rg", Self::color_operands(&style.color)));
        self.op(&format!(
            "{} {} Td",
            format_real(x),
            format_real(self.page_height - y)
        ));
        self.buf.push(b'(');
        self.buf.extend(escape_literal(&encode_win_ansi(text)));
        self.op(") Tj");
        self.op("ET");
    }
}
