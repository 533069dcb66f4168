//! Output converters for the grouped table besides the PDF page.
//!
//! - TextConverter: plain text listing

mod text;

pub use text::TextConverter;
