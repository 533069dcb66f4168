//! Grouped table layout.
//!
//! Maps a [`GroupedTable`] onto absolute cell rectangles:
//!
//! ```text
//!   Location   Name         Age   User Id        <- header labels
//! +----------+------------+-----+---------+
//! | London   | Alex Lee   | 22  | 003     |
//! |          +------------+-----+---------+
//! |          | Sarah T.   | 27  | 006     |      <- group cell spans
//! +----------+------------+-----+---------+         every member row
//! ```
//!
//! Every position is computed from (group start row, member index, column
//! index); nothing is threaded through the loops as a running cursor.

mod params;

pub use params::TableParams;

use serde::Serialize;

use crate::group::GroupedTable;
use crate::model::ColumnSpec;
use crate::utils::BBox;

/// What a cell represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Column label, drawn once above the data.
    Header,
    /// Group key, spanning all rows of its group.
    Group,
    /// One field of one record.
    Field,
}

/// A positioned, labelled rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub kind: CellKind,
    /// Index into the column spec.
    pub column: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
}

impl Cell {
    pub fn bbox(&self) -> BBox {
        BBox::from_origin(self.x, self.y, self.width, self.height)
    }
}

/// Left edge of every column, starting at `origin_x`.
pub fn column_offsets(columns: &ColumnSpec, origin_x: f64) -> Vec<f64> {
    columns
        .columns()
        .iter()
        .scan(origin_x, |x, column| {
            let left = *x;
            *x += column.width;
            Some(left)
        })
        .collect()
}

/// Vertical extent of the table measured from `origin.y`.
pub fn table_extent(groups: &GroupedTable, params: &TableParams) -> f64 {
    params.header_height + params.row_height * groups.record_count() as f64
}

/// Index of the first row of each group.
fn group_start_rows(groups: &GroupedTable) -> Vec<usize> {
    groups
        .spans()
        .into_iter()
        .scan(0usize, |row, span| {
            let start = *row;
            *row += span;
            Some(start)
        })
        .collect()
}

/// Lays out the table: header cells first, then for each group its spanning
/// key cell followed by the member cells row by row.
///
/// Text is never measured, so overflowing labels are left to the surface.
pub fn render(groups: &GroupedTable, columns: &ColumnSpec, params: &TableParams) -> Vec<Cell> {
    let offsets = column_offsets(columns, params.origin.x);
    let data_top = params.origin.y + params.header_height;
    let row_top = |row: usize| data_top + params.row_height * row as f64;

    let record_columns = columns.record_columns().len();
    let mut cells =
        Vec::with_capacity(columns.len() + groups.len() + groups.record_count() * record_columns);

    cells.extend(
        columns
            .columns()
            .iter()
            .zip(&offsets)
            .enumerate()
            .map(|(index, (column, &x))| Cell {
                kind: CellKind::Header,
                column: index,
                x,
                y: data_top,
                width: column.width,
                height: params.header_height,
                text: column.label.clone(),
            }),
    );

    let group_column = columns.group_column();
    for ((key, members), start_row) in groups.iter().zip(group_start_rows(groups)) {
        cells.push(Cell {
            kind: CellKind::Group,
            column: 0,
            x: offsets[0],
            y: row_top(start_row),
            width: group_column.width,
            height: params.row_height * members.len() as f64,
            text: key.to_string(),
        });

        for (member, record) in members.iter().enumerate() {
            let y = row_top(start_row + member);
            cells.extend(
                columns
                    .record_columns()
                    .iter()
                    .zip(&offsets[1..])
                    .enumerate()
                    .map(|(index, (column, &x))| Cell {
                        kind: CellKind::Field,
                        column: index + 1,
                        x,
                        y,
                        width: column.width,
                        height: params.row_height,
                        text: column.field.value(record).to_string(),
                    }),
            );
        }
    }

    tracing::debug!(
        cells = cells.len(),
        extent = table_extent(groups, params),
        "laid out table"
    );
    cells
}
