//! Text Converter - outputs the grouped table as plain text.

use std::io::{self, Write};

use itertools::Itertools;

use crate::group::GroupedTable;
use crate::model::ColumnSpec;

/// Text Converter - writes one line per record, columns separated by ` | `.
///
/// The group key is printed only on the first row of its group, mirroring
/// the spanned cell of the page layout.
pub struct TextConverter<'a, W: Write> {
    /// Output writer
    outfp: &'a mut W,
    /// Whether to print the header line
    show_header: bool,
}

impl<'a, W: Write> TextConverter<'a, W> {
    /// Create a new text converter.
    pub fn new(outfp: &'a mut W, show_header: bool) -> Self {
        Self {
            outfp,
            show_header,
        }
    }

    fn write_row<'s>(&mut self, fields: impl Iterator<Item = &'s str>) -> io::Result<()> {
        writeln!(self.outfp, "{}", fields.format(" | "))
    }

    /// Render the table.
    pub fn receive_table(&mut self, groups: &GroupedTable, columns: &ColumnSpec) -> io::Result<()> {
        if self.show_header {
            self.write_row(columns.columns().iter().map(|c| c.label.as_str()))?;
        }
        for (key, members) in groups.iter() {
            for (member, record) in members.iter().enumerate() {
                let lead = if member == 0 { key } else { "" };
                let rest = columns.record_columns().iter().map(|c| c.field.value(record));
                self.write_row(std::iter::once(lead).chain(rest))?;
            }
        }
        self.outfp.flush()
    }
}
