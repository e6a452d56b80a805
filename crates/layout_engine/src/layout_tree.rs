//! Layout Tree
//!
//! Output of the layout pass: wrapped lines positioned on pages. Pages are
//! built front to back and are read-only once the pass completes.

use crate::{FontFace, PageGeometry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB color serialized as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Hex digits without the leading `#` (the form DOCX expects)
    pub fn hex_digits(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels scaled to `0.0..=1.0`
    pub fn to_unit(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex_digits())
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value).ok_or_else(|| format!("invalid color {:?}, expected #RRGGBB", value))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// Font, size, color and leading for one kind of line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font: FontFace,
    /// Font size in points
    pub size: f32,
    /// Vertical advance per line in points
    pub line_height: f32,
    pub color: Rgb,
}

impl TextStyle {
    pub const fn new(font: FontFace, size: f32, line_height: f32, color: Rgb) -> Self {
        Self {
            font,
            size,
            line_height,
            color,
        }
    }
}

/// One wrapped visual line
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    pub text: String,
    /// Width of `text` as measured during wrapping
    pub measured_width: f32,
}

impl LayoutLine {
    pub fn new(text: impl Into<String>, measured_width: f32) -> Self {
        Self {
            text: text.into(),
            measured_width,
        }
    }
}

/// A line placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub line: LayoutLine,
    pub style: TextStyle,
    /// Left edge of the text
    pub x: f32,
    /// Baseline, top-down
    pub baseline: f32,
}

/// A horizontal divider rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleMark {
    pub x1: f32,
    pub x2: f32,
    /// Vertical position, top-down
    pub y: f32,
    pub thickness: f32,
    pub color: Rgb,
}

/// Something drawn on a page
#[derive(Debug, Clone, PartialEq)]
pub enum PageItem {
    Text(PlacedLine),
    Rule(RuleMark),
}

/// A finished page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    number: usize,
    items: Vec<PageItem>,
    cursor: f32,
}

impl Page {
    pub(crate) fn new(number: usize, cursor: f32) -> Self {
        Self {
            number,
            items: Vec::new(),
            cursor,
        }
    }

    pub(crate) fn push(&mut self, item: PageItem) {
        self.items.push(item);
    }

    pub(crate) fn set_cursor(&mut self, cursor: f32) {
        self.cursor = cursor;
    }

    /// 1-based page number
    pub fn number(&self) -> usize {
        self.number
    }

    /// Items in drawing order
    pub fn items(&self) -> &[PageItem] {
        &self.items
    }

    /// Vertical cursor after the last item was placed
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Text lines on this page, in order
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.items.iter().filter_map(|item| match item {
            PageItem::Text(line) => Some(line),
            PageItem::Rule(_) => None,
        })
    }

    /// Divider rules on this page
    pub fn rules(&self) -> impl Iterator<Item = &RuleMark> {
        self.items.iter().filter_map(|item| match item {
            PageItem::Rule(rule) => Some(rule),
            PageItem::Text(_) => None,
        })
    }
}

/// The immutable result of the layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct PageList {
    pages: Vec<Page>,
    geometry: PageGeometry,
}

impl PageList {
    pub(crate) fn new(pages: Vec<Page>, geometry: PageGeometry) -> Self {
        Self { pages, geometry }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Total number of pages; always at least one
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Every placed line across all pages
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.pages.iter().flat_map(|page| page.lines())
    }
}

/// Metadata printed at the top of page 1
///
/// All strings must already be restricted to printable ASCII.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderBlock {
    pub title: String,
    pub service_name: String,
    /// Full "Generated: ..." line
    pub generated_line: String,
    /// "Score: N/100 (grade)" when a score is known
    pub score_line: Option<String>,
    /// "Improvement: +X%" when an improvement delta is known
    pub improvement_line: Option<String>,
}
