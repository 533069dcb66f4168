//! Column specification for the grouped table.

use serde::Serialize;

use crate::error::{ReportError, Result};
use crate::model::record::Record;
use crate::utils::is_positive_dimension;

/// Record field shown in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    GroupKey,
    Name,
    Age,
    UserId,
}

impl Field {
    /// Text of this field for a record.
    pub fn value<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Field::GroupKey => &record.group_key,
            Field::Name => &record.name,
            Field::Age => &record.age,
            Field::UserId => &record.id,
        }
    }
}

/// A labelled, fixed-width column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub label: String,
    pub width: f64,
    pub field: Field,
}

impl Column {
    pub fn new(label: impl Into<String>, width: f64, field: Field) -> Self {
        Self {
            label: label.into(),
            width,
            field,
        }
    }
}

/// Ordered columns of the table.
///
/// Column 0 always carries the group key and is drawn once per group,
/// spanning all member rows. The remaining columns are drawn per record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColumnSpec {
    columns: Vec<Column>,
}

impl ColumnSpec {
    /// Builds a validated column spec.
    ///
    /// Rejects an empty list, a first column not bound to the group key,
    /// and widths that are not finite and positive.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let Some(first) = columns.first() else {
            return Err(ReportError::invalid("column spec must not be empty"));
        };
        if first.field != Field::GroupKey {
            return Err(ReportError::invalid(format!(
                "first column '{}' must show the group key",
                first.label
            )));
        }
        for column in &columns {
            if !is_positive_dimension(column.width) {
                return Err(ReportError::invalid(format!(
                    "column '{}' has non-positive width {}",
                    column.label, column.width
                )));
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The spanning group-key column.
    pub fn group_column(&self) -> &Column {
        &self.columns[0]
    }

    /// Columns drawn once per record.
    pub fn record_columns(&self) -> &[Column] {
        &self.columns[1..]
    }

    pub fn total_width(&self) -> f64 {
        self.columns.iter().map(|c| c.width).sum()
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            columns: vec![
                Column::new("Location", 150.0, Field::GroupKey),
                Column::new("Name", 200.0, Field::Name),
                Column::new("Age", 50.0, Field::Age),
                Column::new("User Id", 100.0, Field::UserId),
            ],
        }
    }
}
