//! PDF Export Module
//!
//! Writes a paginated, footer-stamped layout as a PDF 1.4 file.
//!
//! # Architecture
//!
//! - `objects`: PDF object model and serializer
//! - `content`: content stream operators
//! - `fonts`: standard Helvetica font resources
//! - `document`: catalog, page tree, Info dictionary, link annotations
//! - `writer`: object numbering, cross-reference table, trailer
//! - `renderer`: layout pages to content streams

mod content;
mod document;
mod fonts;
mod objects;
mod renderer;
mod writer;

pub use document::{pdf_date, DocumentInfo};
pub use renderer::{render_pdf, PdfOptions};
pub use writer::PdfError;
