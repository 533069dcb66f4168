//! High-level API module for table documents.
//!
//! # Example
//!
//! ```no_run
//! use gridpage_core::api::{DocumentOptions, generate_document};
//! use gridpage_core::model::{ColumnSpec, sample_records};
//!
//! let path = generate_document(
//!     &sample_records(),
//!     &ColumnSpec::default(),
//!     "table.pdf",
//!     &DocumentOptions::default(),
//! )?;
//! println!("PDF file generated: {}", path.display());
//! # Ok::<(), gridpage_core::ReportError>(())
//! ```

pub mod high_level;

// Re-export for convenience
pub use high_level::{
    DocumentOptions, TableLayout, generate_document, generate_document_with, layout_records,
    render_document,
};
