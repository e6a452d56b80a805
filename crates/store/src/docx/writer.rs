//! DOCX Writer Infrastructure
//!
//! Assembles every part into a ZIP archive with the DOCX layout.

use crate::docx::content_types::create_default_content_types;
use crate::docx::core_props::write_core_properties;
use crate::docx::document_writer::DocumentWriter;
use crate::docx::error::{DocxError, DocxResult};
use crate::docx::footer_writer::write_footer;
use crate::docx::numbering_writer::write_numbering;
use crate::docx::relationships::{create_document_rels, create_root_rels};
use crate::docx::styles_writer::StylesWriter;
use crate::docx::DocxDocument;
use std::io::{Cursor, Seek, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Default body font
pub const BODY_FONT: &str = "Helvetica";

/// Default run size in points
pub const BODY_SIZE: f32 = 11.0;

/// Main DOCX writer
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
}

impl<W: Write + Seek> DocxWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
        }
    }

    /// Write a complete package and return the underlying writer
    pub fn write(mut self, document: &DocxDocument) -> DocxResult<W> {
        if document.page.usable_width() <= 0.0 {
            return Err(DocxError::InvalidDocument(
                "page margins leave no content width".to_string(),
            ));
        }

        let (doc_rels, footer_id) = create_document_rels();
        let footer = write_footer(&document.footer, &document.page);

        self.write_file("[Content_Types].xml", &create_default_content_types().to_xml())?;
        self.write_file("_rels/.rels", &create_root_rels().to_xml())?;
        self.write_file("docProps/core.xml", &write_core_properties(&document.properties))?;
        self.write_file("word/document.xml", &DocumentWriter::new(&footer_id).write(document))?;
        self.write_file("word/styles.xml", &StylesWriter::new(BODY_FONT, BODY_SIZE).write())?;
        self.write_file("word/numbering.xml", &write_numbering())?;
        self.write_file("word/footer1.xml", &footer.xml)?;
        self.write_file("word/_rels/document.xml.rels", &doc_rels.to_xml())?;
        self.write_file("word/_rels/footer1.xml.rels", &footer.rels.to_xml())?;

        let inner = self.zip.finish()?;
        tracing::debug!(
            paragraphs = document.paragraphs.len(),
            footer_links = footer.rels.len(),
            "docx package written"
        );
        Ok(inner)
    }

    fn write_file(&mut self, path: &str, content: &str) -> DocxResult<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// Write a package into memory
pub fn write_docx(document: &DocxDocument) -> DocxResult<Vec<u8>> {
    let cursor = DocxWriter::new(Cursor::new(Vec::new())).write(document)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::{CoreProperties, FooterTemplate, Paragraph, TextRun};
    use chrono::Utc;
    use layout_engine::{FooterLink, PageGeometry};
    use std::io::Read;
    use zip::ZipArchive;

    fn document() -> DocxDocument {
        DocxDocument {
            paragraphs: vec![
                Paragraph::new(vec![TextRun::new("Interview Notes", 24.0).bold()]),
                Paragraph::new(vec![TextRun::new("Practised STAR answers", 11.0)]).bullet(),
            ],
            footer: FooterTemplate {
                links: vec![FooterLink::new("Website", "https://example.com")],
                ..Default::default()
            },
            properties: CoreProperties {
                title: "Interview Notes".to_string(),
                creator: "Mock Interview".to_string(),
                created: Utc::now(),
            },
            page: PageGeometry::default(),
        }
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_parts() {
        let bytes = write_docx(&document()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "docProps/core.xml",
                "word/_rels/document.xml.rels",
                "word/_rels/footer1.xml.rels",
                "word/document.xml",
                "word/footer1.xml",
                "word/numbering.xml",
                "word/styles.xml",
            ]
        );
    }

    #[test]
    fn test_footer_reference_resolves() {
        let bytes = write_docx(&document()).unwrap();
        let doc = read_part(&bytes, "word/document.xml");
        let rels = read_part(&bytes, "word/_rels/document.xml.rels");
        assert!(doc.contains(r#"<w:footerReference w:type="default" r:id="rId3"/>"#));
        assert!(rels.contains(r#"Id="rId3""#));
        assert!(rels.contains(r#"Target="footer1.xml""#));

        let footer_rels = read_part(&bytes, "word/_rels/footer1.xml.rels");
        assert!(footer_rels.contains(r#"Target="https://example.com" TargetMode="External""#));
    }

    #[test]
    fn test_core_properties_part() {
        let bytes = write_docx(&document()).unwrap();
        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Interview Notes</dc:title>"));
        assert!(core.contains("<dc:creator>Mock Interview</dc:creator>"));
    }

    #[test]
    fn test_rejects_zero_width_page() {
        let mut doc = document();
        doc.page.margin_left = 400.0;
        doc.page.margin_right = 400.0;
        assert!(matches!(write_docx(&doc), Err(DocxError::InvalidDocument(_))));
    }
}
