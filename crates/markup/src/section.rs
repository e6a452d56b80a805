//! Heading-delimited sections

use serde::{Deserialize, Serialize};

/// Level of a parsed section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLevel {
    H1,
    H2,
    H3,
    /// Content that appears before the first heading
    Body,
}

impl SectionLevel {
    /// Map a count of leading `#` characters to a heading level
    pub fn from_marker_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(SectionLevel::H1),
            2 => Some(SectionLevel::H2),
            3 => Some(SectionLevel::H3),
            _ => None,
        }
    }

    /// The heading marker for this level (empty for body sections)
    pub fn marker(&self) -> &'static str {
        match self {
            SectionLevel::H1 => "#",
            SectionLevel::H2 => "##",
            SectionLevel::H3 => "###",
            SectionLevel::Body => "",
        }
    }
}

/// A parsed unit of CV content
///
/// Sections are never nested: a `###` heading following a `#` heading simply
/// opens the next section in the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading level of this section
    pub level: SectionLevel,
    /// Heading text, `None` for leading body content
    pub title: Option<String>,
    /// Newline-joined, trimmed content lines (possibly empty)
    pub content: String,
}

impl Section {
    /// Create a section opened by a heading
    pub fn heading(level: SectionLevel, title: impl Into<String>) -> Self {
        Self {
            level,
            title: Some(title.into()),
            content: String::new(),
        }
    }

    /// Create the untitled section holding content before the first heading
    pub fn body(content: impl Into<String>) -> Self {
        Self {
            level: SectionLevel::Body,
            title: None,
            content: content.into(),
        }
    }

    /// Render this section back to markup
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        if let Some(ref title) = self.title {
            out.push_str(self.level.marker());
            out.push(' ');
            out.push_str(title);
        }
        if !self.content.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&self.content);
        }
        out
    }
}

/// Rebuild markup from a section sequence, one section after another
pub fn sections_to_markup(sections: &[Section]) -> String {
    sections
        .iter()
        .map(Section::to_markup)
        .collect::<Vec<_>>()
        .join("\n")
}
