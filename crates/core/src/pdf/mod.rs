//! PDF output - object model, content streams and the document writer.
//!
//! This module contains:
//! - `objects` - PDF object types (PDFObject, PDFStream, PDFObjRef) and their syntax
//! - `encoding` - WinAnsiEncoding for standard-font text
//! - `content` - ContentStream, a Surface that emits page operators
//! - `writer` - PdfWriter and single-page document assembly

pub mod content;
pub mod encoding;
pub mod objects;
pub mod writer;

// Re-export main types for convenience
pub use content::ContentStream;
pub use objects::{PDFDict, PDFObjRef, PDFObject, PDFStream};
pub use writer::{DocumentInfo, PageSize, PdfWriter, write_single_page};
