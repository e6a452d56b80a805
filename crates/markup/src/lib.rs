//! Markup - Lightweight markup handling for CV exports
//!
//! This crate turns the heading/bold/list/link dialect used for CV content into
//! the shapes the exporters need:
//! - plain text with list markers rewritten as bullet glyphs
//! - a flat sequence of heading-delimited sections
//! - bullet extraction
//! - glyph sanitization down to printable ASCII for the PDF font encoding

mod normalizer;
mod sanitizer;
mod section;

pub use normalizer::*;
pub use sanitizer::*;
pub use section::*;
