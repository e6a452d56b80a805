//! Store - Artifact writers, settings, and download sinks
//!
//! This crate renders laid-out documents to PDF, assembles DOCX packages,
//! serializes Markdown, persists export settings, and hands finished
//! artifacts to a download sink.

mod error;
mod markdown;
mod meta;
mod settings;
mod sink;
pub mod docx;
pub mod pdf;

pub use error::*;
pub use markdown::*;
pub use meta::*;
pub use settings::*;
pub use sink::*;

// Re-export the writer entry points
pub use docx::{write_docx, DocxError, DocxResult};
pub use pdf::{render_pdf, PdfError, PdfOptions};
