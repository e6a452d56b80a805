//! DOCX Export Module
//!
//! Writes Office Open XML (ECMA-376) word-processing packages.
//!
//! ## Structure
//!
//! A DOCX file is a ZIP archive containing XML parts:
//! - `[Content_Types].xml` - content type definitions
//! - `_rels/.rels` - package relationships
//! - `docProps/core.xml` - title, creator, creation date
//! - `word/document.xml` - body paragraphs and section properties
//! - `word/styles.xml` - document defaults and paragraph styles
//! - `word/numbering.xml` - the bullet list definition
//! - `word/footer1.xml` - page-number fields and footer links
//! - `word/_rels/document.xml.rels`, `word/_rels/footer1.xml.rels`

mod content_types;
mod core_props;
mod document_writer;
mod error;
mod footer_writer;
mod model;
mod numbering_writer;
mod relationships;
mod styles_writer;
mod writer;

pub use error::{DocxError, DocxResult};
pub use model::{CoreProperties, DocxDocument, FooterTemplate, Paragraph, TextRun};
pub use relationships::{Relationship, Relationships, TargetMode};
pub use writer::{write_docx, DocxWriter};

use std::borrow::Cow;

/// XML namespaces used in DOCX files
pub mod namespaces {
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    pub const CP: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
}

/// Relationship types used in DOCX
pub mod relationship_types {
    pub const DOCUMENT: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str = "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const NUMBERING: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    pub const FOOTER: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
    pub const HYPERLINK: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
}

/// Content types for DOCX parts
pub mod content_type_values {
    pub const DOCUMENT: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const NUMBERING: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
    pub const FOOTER: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml";
    pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
}

pub(crate) const XML_DECLARATION: &str =
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// Whether `c` may appear in an XML 1.0 document
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

/// Escape text content, dropping characters XML cannot represent
pub(crate) fn xml_text(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        quick_xml::escape::escape(s)
    } else {
        let cleaned: String = s.chars().filter(|c| is_xml_char(*c)).collect();
        Cow::Owned(quick_xml::escape::escape(cleaned.as_str()).into_owned())
    }
}

/// Escape an attribute value
pub(crate) fn xml_attr(s: &str) -> Cow<'_, str> {
    xml_text(s)
}

/// Points to twentieths of a point, the unit of page and spacing values
pub(crate) fn twips(points: f32) -> i64 {
    (points * 20.0).round() as i64
}
