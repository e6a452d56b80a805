//! Export - Format dispatch for CV artifacts
//!
//! `ExportOrchestrator` validates a call, hands an `ExportRequest` to the
//! registered `FormatGenerator` for the requested format, and offers the
//! resulting artifact to a `DownloadSink`. Built-in generators cover PDF,
//! Word (DOCX), and Markdown.

mod error;
mod format;
mod generator;
mod guides;
mod options;
mod orchestrator;
pub mod markdown;
pub mod pdf;
pub mod word;

pub use error::*;
pub use format::*;
pub use generator::*;
pub use guides::*;
pub use options::*;
pub use orchestrator::*;

pub use markdown::MarkdownGenerator;
pub use pdf::PdfGenerator;
pub use word::{DocumentComposer, WordGenerator};
