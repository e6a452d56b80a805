//! Glyph Metrics
//!
//! Width measurement for the standard Helvetica faces. Advance widths come
//! from the Adobe font metrics (units per 1000 em) for the WinAnsi printable
//! ASCII range, which is the only range sanitized text contains.

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Font faces available to layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFace {
    Regular,
    Bold,
}

/// Measures rendered text width
pub trait TextMeasure: Send + Sync {
    /// Width of `text` in points when set in `font` at `size`
    fn measure(&self, text: &str, font: FontFace, size: f32) -> Result<f32>;
}

/// First code point covered by the width tables
const FIRST_CHAR: u32 = 0x20;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Helvetica / Helvetica-Bold advance widths
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl HelveticaMetrics {
    pub fn new() -> Self {
        Self
    }

    /// Advance width of a single glyph in 1/1000 em
    pub fn glyph_units(&self, ch: char, font: FontFace) -> Result<u16> {
        let table = match font {
            FontFace::Regular => &HELVETICA_WIDTHS,
            FontFace::Bold => &HELVETICA_BOLD_WIDTHS,
        };
        (ch as u32)
            .checked_sub(FIRST_CHAR)
            .and_then(|index| table.get(index as usize))
            .copied()
            .ok_or(LayoutError::UnmeasurableGlyph(ch))
    }
}

impl TextMeasure for HelveticaMetrics {
    fn measure(&self, text: &str, font: FontFace, size: f32) -> Result<f32> {
        let mut units: u32 = 0;
        for ch in text.chars() {
            units += u32::from(self.glyph_units(ch, font)?);
        }
        Ok(units as f32 * size / 1000.0)
    }
}
