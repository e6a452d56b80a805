//! Markdown export
//!
//! Prepends a metadata header to the content and otherwise passes the
//! content through byte for byte.

use crate::ArtifactMeta;

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownSerializer;

impl MarkdownSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Title heading, metadata lines, and a horizontal rule
    pub fn header(&self, meta: &ArtifactMeta) -> String {
        let mut out = format!("# {}\n\n", meta.title);
        out.push_str(&format!("**Service:** {}\n", meta.service_name));
        out.push_str(&format!("**Generated:** {}\n", meta.generated_text()));
        if let Some(score) = meta.score_text() {
            out.push_str(&format!("**Score:** {}\n", score));
        }
        if let Some(improvement) = meta.improvement_text() {
            out.push_str(&format!("**Improvement:** {}\n", improvement));
        }
        out.push_str("\n---\n\n");
        out
    }

    pub fn serialize(&self, meta: &ArtifactMeta, content: &str) -> String {
        let mut out = self.header(meta);
        out.push_str(content);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn meta() -> ArtifactMeta {
        let at = Local.with_ymd_and_hms(2024, 2, 29, 9, 5, 0).unwrap();
        ArtifactMeta::new("Cover Letter", "Letter Writer", at)
    }

    #[test]
    fn test_header_minimal() {
        assert_eq!(
            MarkdownSerializer::new().header(&meta()),
            "# Cover Letter\n\n**Service:** Letter Writer\n**Generated:** 2024-02-29 09:05\n\n---\n\n"
        );
    }

    #[test]
    fn test_header_with_scores() {
        let mut m = meta();
        m.score = Some(91.0);
        m.grade = Some("A".to_string());
        m.improvement_percent = Some(8.0);
        let header = MarkdownSerializer::new().header(&m);
        assert!(header.contains("**Score:** 91/100 (A)\n**Improvement:** +8%\n\n---\n\n"));
    }

    #[test]
    fn test_content_passes_through() {
        let content = "## Summary\n\n* **Bold** claim\n\n```\ncode\n```\n  trailing  ";
        let s = MarkdownSerializer::new();
        let out = s.serialize(&meta(), content);
        assert_eq!(out.strip_prefix(&s.header(&meta())), Some(content));
    }
}
