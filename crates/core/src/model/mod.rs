//! Data model types - records, columns, and colours.
//!
//! This module contains:
//! - `record` - source records and the built-in dataset
//! - `columns` - the fixed column specification
//! - `color` - RGB colours for the theme

pub mod color;
pub mod columns;
pub mod record;

// Re-export main types for convenience
pub use color::Color;
pub use columns::{Column, ColumnSpec, Field};
pub use record::{Record, load_records, sample_records};
