//! Drawing surface - paints laid-out cells.
//!
//! The [`Surface`] trait is the seam between layout and output formats.
//! [`paint_cells`] translates cells into surface calls; concrete surfaces
//! like the PDF [`ContentStream`](crate::pdf::ContentStream) or the
//! [`RecordingSurface`] decide what the calls produce.

mod recording;
mod theme;

pub use recording::{DrawOp, RecordingSurface};
pub use theme::{FontFace, Stroke, TextStyle, Theme};

use crate::layout::{Cell, CellKind};
use crate::utils::{BBox, Point};

/// Drawing surface trait - interface for painting table cells.
pub trait Surface {
    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, bbox: &BBox, stroke: &Stroke);

    /// Draw a left-aligned text run with its baseline starting at (x, y).
    fn fill_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle);
}

/// Paints cells in order.
///
/// Header cells get only their label, with its baseline on the header
/// line. Group and field cells get a border plus a label at `text_inset`
/// from the top-left corner.
pub fn paint_cells<S: Surface + ?Sized>(
    surface: &mut S,
    cells: &[Cell],
    theme: &Theme,
    text_inset: Point,
) {
    for cell in cells {
        match cell.kind {
            CellKind::Header => {
                surface.fill_text(cell.x, cell.y, &cell.text, &theme.header);
            }
            CellKind::Group | CellKind::Field => {
                surface.stroke_rect(&cell.bbox(), &theme.border);
                surface.fill_text(
                    cell.x + text_inset.x,
                    cell.y + text_inset.y,
                    &cell.text,
                    &theme.body,
                );
            }
        }
    }
}
