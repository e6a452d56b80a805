//! PDF Object Model
//!
//! The handful of PDF object types the exporter emits, and their serialized
//! byte form. Dictionaries keep keys sorted so output is deterministic.

use std::collections::BTreeMap;
use std::io::{self, Write};

/// A direct PDF object
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Boolean(bool),
    Integer(i64),
    Real(f64),
    /// Literal string, written in parentheses
    String(Vec<u8>),
    /// Name, written with a leading `/`
    Name(String),
    Array(Vec<PdfObject>),
    Dictionary(PdfDictionary),
    /// Indirect reference to object `n 0`
    Reference(u32),
}

impl PdfObject {
    pub fn name(name: impl Into<String>) -> Self {
        PdfObject::Name(name.into())
    }

    pub fn text(text: impl AsRef<str>) -> Self {
        PdfObject::String(text.as_ref().as_bytes().to_vec())
    }

    /// `[a b c d]` from four reals
    pub fn rect(llx: f64, lly: f64, urx: f64, ury: f64) -> Self {
        PdfObject::Array(vec![
            PdfObject::Real(llx),
            PdfObject::Real(lly),
            PdfObject::Real(urx),
            PdfObject::Real(ury),
        ])
    }

    pub fn references(numbers: &[u32]) -> Self {
        PdfObject::Array(numbers.iter().map(|n| PdfObject::Reference(*n)).collect())
    }
}

impl From<PdfDictionary> for PdfObject {
    fn from(dict: PdfDictionary) -> Self {
        PdfObject::Dictionary(dict)
    }
}

impl From<i64> for PdfObject {
    fn from(n: i64) -> Self {
        PdfObject::Integer(n)
    }
}

impl From<f64> for PdfObject {
    fn from(n: f64) -> Self {
        PdfObject::Real(n)
    }
}

/// A PDF dictionary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dictionary with its `/Type` entry set
    pub fn typed(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.insert("Type", PdfObject::name(type_name));
        dict
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PdfObject>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PdfObject>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PdfObject)> {
        self.entries.iter()
    }
}

/// Stream payload with its dictionary
#[derive(Debug, Clone)]
pub struct PdfStream {
    pub dict: PdfDictionary,
    pub data: Vec<u8>,
}

impl PdfStream {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: PdfDictionary::new(),
            data,
        }
    }
}

/// Writes objects in PDF syntax
pub struct PdfSerializer<W: Write> {
    writer: W,
}

impl<W: Write> PdfSerializer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn write_object(&mut self, obj: &PdfObject) -> io::Result<()> {
        match obj {
            PdfObject::Boolean(b) => write!(self.writer, "{}", b),
            PdfObject::Integer(n) => write!(self.writer, "{}", n),
            PdfObject::Real(n) => write!(self.writer, "{}", format_real(*n)),
            PdfObject::String(bytes) => self.write_string(bytes),
            PdfObject::Name(name) => self.write_name(name),
            PdfObject::Array(items) => {
                self.writer.write_all(b"[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.writer.write_all(b" ")?;
                    }
                    self.write_object(item)?;
                }
                self.writer.write_all(b"]")
            }
            PdfObject::Dictionary(dict) => self.write_dictionary(dict),
            PdfObject::Reference(n) => write!(self.writer, "{} 0 R", n),
        }
    }

    pub fn write_dictionary(&mut self, dict: &PdfDictionary) -> io::Result<()> {
        self.writer.write_all(b"<<")?;
        for (key, value) in dict.iter() {
            self.writer.write_all(b" ")?;
            self.write_name(key)?;
            self.writer.write_all(b" ")?;
            self.write_object(value)?;
        }
        self.writer.write_all(b" >>")
    }

    pub fn write_stream(&mut self, stream: &PdfStream) -> io::Result<()> {
        self.write_dictionary(&stream.dict)?;
        self.writer.write_all(b"\nstream\n")?;
        self.writer.write_all(&stream.data)?;
        self.writer.write_all(b"\nendstream")
    }

    fn write_string(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(b"(")?;
        self.writer.write_all(&escape_string(bytes))?;
        self.writer.write_all(b")")
    }

    fn write_name(&mut self, name: &str) -> io::Result<()> {
        self.writer.write_all(b"/")?;
        for byte in name.bytes() {
            let delimiter = b"()<>[]{}/%#".contains(&byte);
            if (0x21..=0x7E).contains(&byte) && !delimiter {
                self.writer.write_all(&[byte])?;
            } else {
                write!(self.writer, "#{:02X}", byte)?;
            }
        }
        Ok(())
    }
}

/// Escape the body of a literal string (without the parentheses)
pub fn escape_string(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b'(' | b')' | b'\\' => out.extend_from_slice(&[b'\\', byte]),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            0x20..=0x7E => out.push(byte),
            _ => out.extend_from_slice(format!("\\{:03o}", byte).as_bytes()),
        }
    }
    out
}

/// Shortest decimal form with at most four fractional digits
pub fn format_real(n: f64) -> String {
    if n.fract() == 0.0 {
        return format!("{:.0}", n);
    }
    let s = format!("{:.4}", n);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
