//! PDF Writer
//!
//! File structure: header, numbered objects, cross-reference table, trailer.
//! Objects are written in allocation order so offsets can be recorded as
//! they are emitted.

use super::document::PDF_VERSION;
use super::objects::{PdfDictionary, PdfObject, PdfSerializer, PdfStream};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Compression error: {0}")]
    Compression(String),
}

pub type Result<T> = std::result::Result<T, PdfError>;

/// Low-level PDF file writer
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    /// Byte offset of object `n` at index `n - 1`
    offsets: Vec<Option<u64>>,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W, compress: bool) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            compress,
        }
    }

    /// Reserve the next object number
    pub fn allocate(&mut self) -> u32 {
        self.offsets.push(None);
        self.offsets.len() as u32
    }

    pub fn write_header(&mut self) -> Result<()> {
        self.write_bytes(format!("%PDF-{}\n", PDF_VERSION).as_bytes())?;
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    pub fn write_object(&mut self, number: u32, object: &PdfObject) -> Result<()> {
        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(object)?;
        self.emit(number, &serializer.into_inner())
    }

    /// Write a stream, Flate-compressing it when compression is on
    pub fn write_stream(&mut self, number: u32, mut stream: PdfStream) -> Result<()> {
        if self.compress {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder
                .write_all(&stream.data)
                .map_err(|e| PdfError::Compression(e.to_string()))?;
            stream.data = encoder
                .finish()
                .map_err(|e| PdfError::Compression(e.to_string()))?;
            stream.dict.insert("Filter", PdfObject::name("FlateDecode"));
        }
        stream.dict.insert("Length", stream.data.len() as i64);

        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_stream(&stream)?;
        self.emit(number, &serializer.into_inner())
    }

    /// Write the xref table and trailer, then flush
    pub fn finish(mut self, catalog: u32, info: u32) -> Result<W> {
        let xref_offset = self.position;
        let size = self.offsets.len() + 1;

        let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", size);
        for (index, offset) in self.offsets.iter().enumerate() {
            let offset = offset.ok_or_else(|| {
                PdfError::InvalidDocument(format!("object {} was allocated but never written", index + 1))
            })?;
            table.push_str(&format!("{:010} 00000 n \n", offset));
        }
        self.write_bytes(table.as_bytes())?;

        let trailer = PdfDictionary::new()
            .with("Size", size as i64)
            .with("Root", PdfObject::Reference(catalog))
            .with("Info", PdfObject::Reference(info));
        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_dictionary(&trailer)?;
        self.write_bytes(b"trailer\n")?;
        self.write_bytes(&serializer.into_inner())?;
        self.write_bytes(format!("\nstartxref\n{}\n%%EOF\n", xref_offset).as_bytes())?;

        self.writer.flush()?;
        Ok(self.writer)
    }

    fn emit(&mut self, number: u32, body: &[u8]) -> Result<()> {
        let slot = self
            .offsets
            .get_mut((number as usize).wrapping_sub(1))
            .ok_or_else(|| PdfError::InvalidDocument(format!("object {} was not allocated", number)))?;
        if slot.is_some() {
            return Err(PdfError::InvalidDocument(format!("object {} written twice", number)));
        }
        *slot = Some(self.position);

        self.write_bytes(format!("{} 0 obj\n", number).as_bytes())?;
        self.write_bytes(body)?;
        self.write_bytes(b"\nendobj\n")
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }
}
