//! Error types for layout engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid page setup: {0}")]
    InvalidPageSetup(String),

    #[error("Cannot measure glyph {0:?}: outside the printable ASCII range")]
    UnmeasurableGlyph(char),

    #[error("Glyph {ch:?} is {width}pt wide, wider than the {max_width}pt content width")]
    GlyphTooWide { ch: char, width: f32, max_width: f32 },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
