//! Word document model
//!
//! A flat list of paragraphs plus a footer template: the subset of
//! WordprocessingML the exporter produces.

use chrono::{DateTime, Utc};
use layout_engine::{FooterLink, PageGeometry, Rgb};

/// A run of uniformly formatted text
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Font size in points
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    pub color: Option<Rgb>,
}

impl TextRun {
    pub fn new(text: impl Into<String>, size: f32) -> Self {
        Self {
            text: text.into(),
            size,
            bold: false,
            italic: false,
            color: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn colored(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    /// Size in half-points, the unit of `w:sz`
    pub fn half_points(&self) -> u32 {
        (self.size * 2.0).round().max(1.0) as u32
    }
}

/// A body paragraph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    /// Rendered as a bulleted list item
    pub is_bullet: bool,
    /// Draw a bottom border under the paragraph
    pub divider: Option<Rgb>,
    /// Space after the paragraph in points
    pub spacing_after: f32,
}

impl Paragraph {
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self {
            runs,
            ..Default::default()
        }
    }

    /// An empty spacing paragraph
    pub fn blank(spacing_after: f32) -> Self {
        Self {
            spacing_after,
            ..Default::default()
        }
    }

    pub fn bullet(mut self) -> Self {
        self.is_bullet = true;
        self
    }

    pub fn with_divider(mut self, color: Rgb) -> Self {
        self.divider = Some(color);
        self
    }

    pub fn with_spacing_after(mut self, points: f32) -> Self {
        self.spacing_after = points;
        self
    }

    /// Concatenated run text
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Footer content: `Page {PAGE} of {NUMPAGES}` followed by link labels
#[derive(Debug, Clone, PartialEq)]
pub struct FooterTemplate {
    pub links: Vec<FooterLink>,
    /// Font size in points
    pub size: f32,
    pub color: Rgb,
    pub link_color: Rgb,
}

impl Default for FooterTemplate {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            size: 8.0,
            color: Rgb::new(0x6B, 0x72, 0x80),
            link_color: Rgb::new(0x25, 0x63, 0xEB),
        }
    }
}

/// Package metadata written to `docProps/core.xml`
#[derive(Debug, Clone, PartialEq)]
pub struct CoreProperties {
    pub title: String,
    pub creator: String,
    pub created: DateTime<Utc>,
}

/// Everything needed to write a `.docx` package
#[derive(Debug, Clone, PartialEq)]
pub struct DocxDocument {
    pub paragraphs: Vec<Paragraph>,
    pub footer: FooterTemplate,
    pub properties: CoreProperties,
    pub page: PageGeometry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_points() {
        assert_eq!(TextRun::new("x", 11.0).half_points(), 22);
        assert_eq!(TextRun::new("x", 10.5).half_points(), 21);
        assert_eq!(TextRun::new("x", 0.0).half_points(), 1);
    }

    #[test]
    fn test_paragraph_text() {
        let p = Paragraph::new(vec![TextRun::new("Score: ", 11.0).bold(), TextRun::new("82", 11.0)]);
        assert_eq!(p.text(), "Score: 82");
        assert!(!p.is_bullet);
        assert!(Paragraph::blank(6.0).runs.is_empty());
    }
}
