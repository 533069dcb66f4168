//! gridpage - grouped table layout and single-page PDF export.
//!
//! Records are grouped by key, laid out as a table whose first column spans
//! every row of its group, painted onto a page and written as a PDF.

pub mod api;
pub mod converter;
pub mod error;
pub mod group;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod render;
pub mod storage;
pub mod utils;

// Re-export high_level for convenience
pub use api::high_level;

pub use error::{ReportError, Result};
pub use group::{GroupOrder, GroupedTable, group_by_key, group_records};
