//! Single-page PDF document writer.
//!
//! Produces a self-contained PDF 1.4 file: catalog, page tree with one
//! page, the two standard fonts, the page contents, an info dictionary,
//! and a classic xref table with exact byte offsets.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::objects::{PDFDict, PDFObjRef, PDFObject, PDFStream};
use crate::error::{ReportError, Result};
use crate::render::FontFace;
use crate::utils::is_positive_dimension;

const HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

/// Page dimensions in PDF units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl Default for PageSize {
    fn default() -> Self {
        Self {
            width: 792.0,
            height: 1120.0,
        }
    }
}

impl PageSize {
    pub fn validate(&self) -> Result<()> {
        if !is_positive_dimension(self.width) || !is_positive_dimension(self.height) {
            return Err(ReportError::invalid(format!(
                "page size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Document information dictionary entries.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub producer: String,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: None,
            producer: concat!("gridpage ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Write adapter that tracks the byte position for xref offsets.
struct CountingWriter<W> {
    inner: W,
    pos: usize,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.pos += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Collects indirect objects and serializes them as a PDF file.
#[derive(Debug, Default)]
pub struct PdfWriter {
    objects: Vec<Option<PDFObject>>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves an object number to be filled in later with [`PdfWriter::set`].
    pub fn alloc(&mut self) -> PDFObjRef {
        self.objects.push(None);
        PDFObjRef::new(self.objects.len() as u32, 0)
    }

    pub fn set(&mut self, r: PDFObjRef, obj: PDFObject) {
        if let Some(slot) = self.objects.get_mut(r.objid as usize - 1) {
            *slot = Some(obj);
        }
    }

    pub fn add(&mut self, obj: PDFObject) -> PDFObjRef {
        self.objects.push(Some(obj));
        PDFObjRef::new(self.objects.len() as u32, 0)
    }

    /// Writes header, objects, xref table and trailer.
    ///
    /// Reserved numbers that were never set are written as `null`.
    pub fn finish<W: Write>(self, out: W, root: PDFObjRef, info: PDFObjRef) -> io::Result<()> {
        let mut out = CountingWriter { inner: out, pos: 0 };
        out.write_all(HEADER)?;

        let mut offsets = Vec::with_capacity(self.objects.len());
        for (index, obj) in self.objects.iter().enumerate() {
            offsets.push(out.pos);
            writeln!(out, "{} 0 obj", index + 1)?;
            match obj {
                Some(obj) => obj.write_to(&mut out)?,
                None => PDFObject::Null.write_to(&mut out)?,
            }
            out.write_all(b"\nendobj\n")?;
        }

        let startxref = out.pos;
        write!(out, "xref\n0 {}\n", self.objects.len() + 1)?;
        out.write_all(b"0000000000 65535 f \n")?;
        for offset in offsets {
            writeln!(out, "{offset:010} 00000 n ")?;
        }

        let trailer = PDFObject::dict([
            ("Size", PDFObject::Int(self.objects.len() as i64 + 1)),
            ("Root", root.into()),
            ("Info", info.into()),
        ]);
        out.write_all(b"trailer\n")?;
        trailer.write_to(&mut out)?;
        write!(out, "\nstartxref\n{startxref}\n%%EOF\n")?;
        out.flush()
    }
}

/// Serializes a one-page document around an already painted content stream.
pub fn write_single_page(
    content: &[u8],
    page: &PageSize,
    info: &DocumentInfo,
    compress: bool,
) -> Result<Vec<u8>> {
    let mut writer = PdfWriter::new();
    let catalog = writer.alloc();
    let pages = writer.alloc();
    let page_ref = writer.alloc();

    let mut fonts = PDFDict::new();
    for face in FontFace::ALL {
        let font = writer.add(PDFObject::dict([
            ("Type", PDFObject::name("Font")),
            ("Subtype", PDFObject::name("Type1")),
            ("BaseFont", PDFObject::name(face.base_font())),
            ("Encoding", PDFObject::name("WinAnsiEncoding")),
        ]));
        fonts.insert(face.resource_name().to_string(), font.into());
    }

    let stream = if compress {
        PDFStream::flate(PDFDict::new(), content)?
    } else {
        PDFStream::new(PDFDict::new(), content.to_vec())
    };
    let contents = writer.add(PDFObject::Stream(Box::new(stream)));

    let mut info_dict = vec![("Producer", PDFObject::text(&info.producer))];
    if let Some(title) = &info.title {
        info_dict.push(("Title", PDFObject::text(title)));
    }
    let info_ref = writer.add(PDFObject::dict(info_dict));

    writer.set(
        catalog,
        PDFObject::dict([("Type", PDFObject::name("Catalog")), ("Pages", pages.into())]),
    );
    writer.set(
        pages,
        PDFObject::dict([
            ("Type", PDFObject::name("Pages")),
            ("Kids", PDFObject::Array(vec![page_ref.into()])),
            ("Count", PDFObject::Int(1)),
        ]),
    );
    writer.set(
        page_ref,
        PDFObject::dict([
            ("Type", PDFObject::name("Page")),
            ("Parent", pages.into()),
            (
                "MediaBox",
                PDFObject::Array(vec![
                    PDFObject::Int(0),
                    PDFObject::Int(0),
                    PDFObject::Real(page.width),
                    PDFObject::Real(page.height),
                ]),
            ),
            (
                "Resources",
                PDFObject::dict([("Font", PDFObject::Dict(fonts))]),
            ),
            ("Contents", contents.into()),
        ]),
    );

    let mut bytes = Vec::with_capacity(content.len() + 1024);
    writer.finish(&mut bytes, catalog, info_ref)?;
    tracing::debug!(
        content_bytes = content.len(),
        file_bytes = bytes.len(),
        compress,
        "serialized page"
    );
    Ok(bytes)
}
