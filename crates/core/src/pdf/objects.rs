//! PDF object types and their serialized syntax.
//!
//! Dictionaries preserve insertion order so that the same document always
//! serializes to the same bytes.

use std::io::{self, Write};

use bytes::Bytes;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use indexmap::IndexMap;

use crate::utils::format_real;

/// Ordered dictionary of PDF objects.
pub type PDFDict = IndexMap<String, PDFObject>;

/// PDF Object types - the fundamental value type in PDF.
#[derive(Debug, Clone, PartialEq)]
pub enum PDFObject {
    /// Null object
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Real (floating point) value
    Real(f64),
    /// Name object (e.g., /Type, /Font)
    Name(String),
    /// String (byte array)
    String(Vec<u8>),
    /// Array of objects
    Array(Vec<Self>),
    /// Dictionary (name -> object mapping)
    Dict(PDFDict),
    /// Stream (dictionary + binary data)
    Stream(Box<PDFStream>),
    /// Indirect object reference
    Ref(PDFObjRef),
}

impl PDFObject {
    pub fn name(name: &str) -> Self {
        Self::Name(name.to_string())
    }

    /// Text string. ASCII is stored as is; anything else is written as
    /// UTF-16BE behind a byte order mark.
    pub fn text(s: &str) -> Self {
        if s.is_ascii() {
            return Self::String(s.as_bytes().to_vec());
        }
        let mut bytes = vec![0xFE, 0xFF];
        bytes.extend(s.encode_utf16().flat_map(u16::to_be_bytes));
        Self::String(bytes)
    }

    /// Builds a dictionary from `(key, value)` pairs, keeping their order.
    pub fn dict<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, PDFObject)>,
    {
        Self::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    /// Serializes the object in PDF syntax.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Self::Null => out.write_all(b"null"),
            Self::Bool(b) => out.write_all(if *b { b"true" } else { b"false" }),
            Self::Int(n) => write!(out, "{n}"),
            Self::Real(v) => out.write_all(format_real(*v).as_bytes()),
            Self::Name(name) => write_name(out, name),
            Self::String(s) => write_literal_string(out, s),
            Self::Array(items) => {
                out.write_all(b"[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.write_all(b" ")?;
                    }
                    item.write_to(out)?;
                }
                out.write_all(b"]")
            }
            Self::Dict(dict) => write_dict(out, dict),
            Self::Stream(stream) => stream.write_to(out),
            Self::Ref(r) => write!(out, "{} {} R", r.objid, r.genno),
        }
    }
}

impl From<PDFObjRef> for PDFObject {
    fn from(r: PDFObjRef) -> Self {
        Self::Ref(r)
    }
}

/// PDF indirect object reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PDFObjRef {
    /// Object ID
    pub objid: u32,
    /// Generation number
    pub genno: u32,
}

impl PDFObjRef {
    /// Create a new object reference.
    pub const fn new(objid: u32, genno: u32) -> Self {
        Self { objid, genno }
    }
}

/// PDF Stream - dictionary attributes + encoded data.
#[derive(Debug, Clone, PartialEq)]
pub struct PDFStream {
    /// Stream dictionary attributes (without /Length, which is written from the data)
    pub attrs: PDFDict,
    /// Encoded data as it appears in the file
    rawdata: Bytes,
}

impl PDFStream {
    /// Create a new uncompressed stream.
    pub fn new(attrs: PDFDict, rawdata: impl Into<Bytes>) -> Self {
        Self {
            attrs,
            rawdata: rawdata.into(),
        }
    }

    /// Create a FlateDecode-compressed stream from decoded data.
    pub fn flate(mut attrs: PDFDict, data: &[u8]) -> io::Result<Self> {
        let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
        encoder.write_all(data)?;
        let encoded = encoder.finish()?;
        attrs.insert("Filter".to_string(), PDFObject::name("FlateDecode"));
        Ok(Self::new(attrs, encoded))
    }

    /// Get raw (encoded) data.
    pub fn get_rawdata(&self) -> &[u8] {
        self.rawdata.as_ref()
    }

    /// Get attribute by name.
    pub fn get(&self, name: &str) -> Option<&PDFObject> {
        self.attrs.get(name)
    }

    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut dict = self.attrs.clone();
        dict.insert(
            "Length".to_string(),
            PDFObject::Int(self.rawdata.len() as i64),
        );
        write_dict(out, &dict)?;
        out.write_all(b"\nstream\n")?;
        out.write_all(&self.rawdata)?;
        out.write_all(b"\nendstream")
    }
}

fn write_dict<W: Write>(out: &mut W, dict: &PDFDict) -> io::Result<()> {
    out.write_all(b"<<")?;
    for (key, value) in dict {
        out.write_all(b" ")?;
        write_name(out, key)?;
        out.write_all(b" ")?;
        value.write_to(out)?;
    }
    out.write_all(b" >>")
}

/// Writes `/Name`, hex-escaping delimiters and bytes outside printable ASCII.
fn write_name<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    out.write_all(b"/")?;
    for &byte in name.as_bytes() {
        match byte {
            b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' => {
                write!(out, "#{byte:02X}")?
            }
            0x21..=0x7E => out.write_all(&[byte])?,
            _ => write!(out, "#{byte:02X}")?,
        }
    }
    Ok(())
}

/// Escapes bytes for a `(...)` literal string.
pub(crate) fn escape_literal(s: &[u8]) -> Vec<u8> {
    let mut escaped = Vec::with_capacity(s.len() + 2);
    for &byte in s {
        match byte {
            b'(' | b')' | b'\\' => escaped.extend_from_slice(&[b'\\', byte]),
            b'\r' => escaped.extend_from_slice(b"\\r"),
            b'\n' => escaped.extend_from_slice(b"\\n"),
            _ => escaped.push(byte),
        }
    }
    escaped
}

fn write_literal_string<W: Write>(out: &mut W, s: &[u8]) -> io::Result<()> {
    out.write_all(b"(")?;
    out.write_all(&escape_literal(s))?;
    out.write_all(b")")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(obj: &PDFObject) -> String {
        let mut out = Vec::new();
        obj.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn scalars() {
        assert_eq!(serialize(&PDFObject::Null), "null");
        assert_eq!(serialize(&PDFObject::Bool(true)), "true");
        assert_eq!(serialize(&PDFObject::Int(-7)), "-7");
        assert_eq!(serialize(&PDFObject::Real(1120.0)), "1120");
        assert_eq!(serialize(&PDFObject::Real(0.25)), "0.25");
        assert_eq!(serialize(&PDFObject::Ref(PDFObjRef::new(3, 0))), "3 0 R");
    }

    #[test]
    fn names_and_strings_are_escaped() {
        assert_eq!(serialize(&PDFObject::name("Helvetica-Bold")), "/Helvetica-Bold");
        assert_eq!(serialize(&PDFObject::name("A B#")), "/A#20B#23");
        assert_eq!(serialize(&PDFObject::text("a(b)c\\")), "(a\\(b\\)c\\\\)");
    }

    #[test]
    fn non_ascii_text_is_utf16be() {
        assert_eq!(
            PDFObject::text("Zürich"),
            PDFObject::String(vec![
                0xFE, 0xFF, 0, b'Z', 0, 0xFC, 0, b'r', 0, b'i', 0, b'c', 0, b'h'
            ])
        );
        assert_eq!(PDFObject::text("Zurich"), PDFObject::String(b"Zurich".to_vec()));
    }

    #[test]
    fn dict_keeps_insertion_order() {
        let obj = PDFObject::dict([
            ("Type", PDFObject::name("Page")),
            ("MediaBox", PDFObject::Array(vec![PDFObject::Int(0), PDFObject::Int(0)])),
            ("Count", PDFObject::Int(1)),
        ]);
        assert_eq!(serialize(&obj), "<< /Type /Page /MediaBox [0 0] /Count 1 >>");
    }

    #[test]
    fn stream_writes_length() {
        let stream = PDFStream::new(PDFDict::new(), b"0 0 m".to_vec());
        let obj = PDFObject::Stream(Box::new(stream));
        assert_eq!(
            serialize(&obj),
            "<< /Length 5 >>\nstream\n0 0 m\nendstream"
        );
    }

    #[test]
    fn flate_stream_round_trips() {
        use std::io::Read;

        let stream = PDFStream::flate(PDFDict::new(), b"BT ET").unwrap();
        assert_eq!(stream.get("Filter"), Some(&PDFObject::name("FlateDecode")));

        let mut decoded = Vec::new();
        flate2::read::ZlibDecoder::new(stream.get_rawdata())
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, b"BT ET");
    }
}
