//! Markup Normalization
//!
//! Converts the lightweight CV markup dialect into plain text and into a flat
//! sequence of sections. The normalizer never fails: delimiters without a
//! matching closer are left in place as ordinary text.
//!
//! Line-level constructs (headings, list items, rules, code fences) are
//! recognized by hand; inline delimiters are stripped with a small ordered set
//! of patterns.

use crate::section::{Section, SectionLevel};
use regex_lite::Regex;

/// Prefix written in place of any list-item marker
pub const BULLET_PREFIX: &str = "• ";

/// Glyph used to draw a horizontal rule in plain text
pub const RULE_GLYPH: char = '─';

/// Number of rule glyphs emitted for a horizontal rule
pub const RULE_LENGTH: usize = 40;

/// Upper bound on repeated conversion passes over a single line
const MAX_PASSES: usize = 8;

/// Inline patterns, applied in order. Code spans go first so their content is
/// kept verbatim by the link rule.
const INLINE_PATTERNS: &[(&str, &str)] = &[
    (r"`([^`\n]+)`", "${1}"),
    (r"!?\[([^\]\n]*)\]\([^)\n]*\)", "${1}"),
    (r"\*\*([^*\n]+)\*\*", "${1}"),
    (r"__([^_\n]+)__", "${1}"),
    (r"~~([^~\n]+)~~", "${1}"),
    (r"\*([^\s*](?:[^*\n]*[^\s*])?)\*", "${1}"),
    (r"\b_([^_\n]+)_\b", "${1}"),
];

struct InlineRule {
    pattern: Regex,
    replacement: &'static str,
}

/// Markup to plain text / section converter
pub struct MarkupNormalizer {
    inline_rules: Vec<InlineRule>,
}

impl Default for MarkupNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupNormalizer {
    /// Create a normalizer with the standard inline rules
    pub fn new() -> Self {
        let inline_rules = INLINE_PATTERNS
            .iter()
            .filter_map(|(pattern, replacement)| match Regex::new(pattern) {
                Ok(pattern) => Some(InlineRule {
                    pattern,
                    replacement,
                }),
                Err(e) => {
                    tracing::warn!("Skipping inline markup pattern {}: {}", pattern, e);
                    None
                }
            })
            .collect();

        Self { inline_rules }
    }

    /// Convert markup to plain text
    ///
    /// Heading markers, emphasis delimiters, link syntax and code delimiters
    /// are removed; list items become `"• "` lines; horizontal rules become a
    /// fixed run of rule glyphs. Runs of blank lines collapse to a single blank
    /// line and the result is trimmed.
    pub fn to_plain_text(&self, markup: &str) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut in_fence = false;

        for raw in markup.lines() {
            if is_fence(raw) {
                in_fence = !in_fence;
                continue;
            }

            if in_fence {
                lines.push(raw.trim_end().to_string());
                continue;
            }

            lines.push(self.convert_line(raw));
        }

        collapse_blank_lines(lines).trim().to_string()
    }

    /// Convert markup to plain text and split it into logical lines
    pub fn to_plain_lines(&self, markup: &str) -> Vec<String> {
        let text = self.to_plain_text(markup);
        if text.is_empty() {
            return Vec::new();
        }
        text.split('\n').map(str::to_string).collect()
    }

    /// Split markup into a flat sequence of heading-delimited sections
    ///
    /// Only `#`, `##` and `###` headings open sections; deeper headings are
    /// kept as content, as are `#` lines inside a code fence. Content before
    /// the first heading becomes an untitled body section when it is not blank.
    pub fn to_sections(&self, markup: &str) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut level = SectionLevel::Body;
        let mut title: Option<String> = None;
        let mut pending: Vec<&str> = Vec::new();
        let mut in_fence = false;

        for line in markup.lines() {
            if is_fence(line) {
                in_fence = !in_fence;
                pending.push(line);
                continue;
            }
            if in_fence {
                pending.push(line);
                continue;
            }
            if let Some((next_level, heading)) = section_heading(line) {
                push_section(&mut sections, level, title.take(), &pending);
                pending.clear();
                level = next_level;
                title = Some(heading.to_string());
            } else {
                pending.push(line);
            }
        }
        push_section(&mut sections, level, title, &pending);

        sections
    }

    /// Extract the text of every list-item line, in document order
    pub fn extract_bullets(&self, content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim_end)
            .filter(|line| !is_rule(line))
            .filter_map(|line| list_item(line, true))
            .map(str::to_string)
            .collect()
    }

    /// Convert one line outside a fence, repeating until the output no
    /// longer changes so that markers exposed by an earlier pass (a list
    /// marker inside a heading, a rule inside emphasis) are resolved too
    fn convert_line(&self, raw: &str) -> String {
        let mut current = self.convert_once(raw);
        for _ in 0..MAX_PASSES {
            let next = self.convert_once(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    fn convert_once(&self, raw: &str) -> String {
        let line = raw.trim_end();
        let converted = if is_rule(line) {
            rule_line()
        } else if let Some(text) = heading_text(line) {
            self.strip_inline(text)
        } else if let Some(item) = list_item(line, false) {
            format!("{}{}", BULLET_PREFIX, self.strip_inline(item))
        } else {
            self.strip_inline(line)
        };
        converted.trim_end().to_string()
    }

    /// Strip inline delimiters until none remain, so nested emphasis such as
    /// `**a *b* c**` loses both layers
    fn strip_inline(&self, text: &str) -> String {
        let mut current = self.strip_inline_once(text);
        for _ in 0..MAX_PASSES {
            let next = self.strip_inline_once(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    fn strip_inline_once(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.inline_rules {
            let replaced = rule.pattern.replace_all(&current, rule.replacement);
            current = replaced.into_owned();
        }
        current
    }
}

/// Strip the bullet prefix from a normalized plain-text line
pub fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLET_PREFIX)
}

fn rule_line() -> String {
    std::iter::repeat(RULE_GLYPH).take(RULE_LENGTH).collect()
}

fn push_section(
    sections: &mut Vec<Section>,
    level: SectionLevel,
    title: Option<String>,
    lines: &[&str],
) {
    let content = lines.join("\n").trim().to_string();
    if title.is_none() && content.is_empty() {
        return;
    }
    sections.push(Section {
        level,
        title,
        content,
    });
}

fn collapse_blank_lines(lines: Vec<String>) -> String {
    let mut kept: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        let previous_blank = kept.last().is_some_and(|l| l.is_empty());
        if line.is_empty() && previous_blank {
            continue;
        }
        kept.push(line);
    }
    kept.join("\n")
}

fn is_fence(line: &str) -> bool {
    let t = line.trim_start();
    t.starts_with("```") || t.starts_with("~~~")
}

/// `---`, `***`, `___` and spaced variants, three or more marks
fn is_rule(line: &str) -> bool {
    let mut marks = line.chars().filter(|c| !c.is_whitespace());
    let Some(first) = marks.next() else {
        return false;
    };
    if !matches!(first, '-' | '*' | '_') {
        return false;
    }
    let mut count = 1;
    for c in marks {
        if c != first {
            return false;
        }
        count += 1;
    }
    count >= 3
}

/// Text of an ATX heading of any depth (`#` to `######`)
fn heading_text(line: &str) -> Option<&str> {
    let t = line.trim_start();
    let hashes = t.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &t[hashes..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim())
}

/// A heading that opens a section: one to three `#` followed by text
fn section_heading(line: &str) -> Option<(SectionLevel, &str)> {
    let t = line.trim();
    let hashes = t.bytes().take_while(|b| *b == b'#').count();
    let level = SectionLevel::from_marker_len(hashes)?;
    let rest = &t[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some((level, text))
}

/// The item text of a list line, marker and indentation removed
fn list_item(line: &str, allow_bullet_glyph: bool) -> Option<&str> {
    let t = line.trim_start();
    let first = t.chars().next()?;

    let marker_len = if matches!(first, '-' | '*' | '+') || (allow_bullet_glyph && first == '•') {
        first.len_utf8()
    } else if first.is_ascii_digit() {
        let digits = t.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits > 9 {
            return None;
        }
        match t.as_bytes().get(digits) {
            Some(b'.') | Some(b')') => digits + 1,
            _ => return None,
        }
    } else {
        return None;
    };

    let rest = &t[marker_len..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let item = rest.trim();
    if item.is_empty() {
        None
    } else {
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::sections_to_markup;

    fn normalizer() -> MarkupNormalizer {
        MarkupNormalizer::new()
    }

    #[test]
    fn test_strip_headings_and_emphasis() {
        let text = normalizer().to_plain_text("# Summary\n**Strong** _candidate_ with *grit*");
        assert_eq!(text, "Summary\nStrong candidate with grit");
    }

    #[test]
    fn test_links_keep_visible_text() {
        let text = normalizer().to_plain_text("See [my portfolio](https://example.com/me) now");
        assert_eq!(text, "See my portfolio now");
    }

    #[test]
    fn test_list_markers_become_bullets() {
        let text = normalizer().to_plain_text("- one\n* two\n  + three\n1. four\n2) five");
        assert_eq!(text, "• one\n• two\n• three\n• four\n• five");
    }

    #[test]
    fn test_code_delimiters_removed() {
        let text = normalizer().to_plain_text("Use `cargo` daily\n```rust\nlet x = 1;\n```");
        assert_eq!(text, "Use cargo daily\nlet x = 1;");
    }

    #[test]
    fn test_horizontal_rule() {
        let text = normalizer().to_plain_text("above\n---\nbelow");
        let rule: String = std::iter::repeat('─').take(RULE_LENGTH).collect();
        assert_eq!(text, format!("above\n{}\nbelow", rule));
    }

    #[test]
    fn test_spaced_rule_is_not_a_bullet() {
        let text = normalizer().to_plain_text("* * *");
        assert!(text.starts_with(RULE_GLYPH));
    }

    #[test]
    fn test_blank_lines_collapse() {
        let text = normalizer().to_plain_text("\n\na\n\n\n\nb\n\nc\n\n");
        assert_eq!(text, "a\n\nb\n\nc");
    }

    #[test]
    fn test_unclosed_delimiters_untouched() {
        let text = normalizer().to_plain_text("**unclosed and [broken](link");
        assert_eq!(text, "**unclosed and [broken](link");
    }

    #[test]
    fn test_arithmetic_asterisks_untouched() {
        let text = normalizer().to_plain_text("5 * 3 * 2");
        assert_eq!(text, "5 * 3 * 2");
    }

    #[test]
    fn test_snake_case_untouched() {
        let text = normalizer().to_plain_text("set max_line_width here");
        assert_eq!(text, "set max_line_width here");
    }

    #[test]
    fn test_plain_text_idempotent_on_sample() {
        let n = normalizer();
        let input = "# Summary\nStrong candidate.\n\n- Led team of 5\n- Increased revenue 20%\n---\n**Done**";
        let once = n.to_plain_text(input);
        assert_eq!(n.to_plain_text(&once), once);
    }

    #[test]
    fn test_nested_emphasis_stripped() {
        let n = normalizer();
        let text = n.to_plain_text("**Led *global* migration** and _kept **uptime** high_");
        assert_eq!(text, "Led global migration and kept uptime high");
        assert_eq!(n.to_plain_text(&text), text);
    }

    #[test]
    fn test_heading_with_list_marker() {
        let n = normalizer();
        let text = n.to_plain_text("# - Languages
## 1. Rust");
        assert_eq!(text, "• Languages
• Rust");
        assert_eq!(n.to_plain_text(&text), text);
    }

    #[test]
    fn test_emphasis_wrapping_list_marker() {
        let n = normalizer();
        let text = n.to_plain_text("**-** shipped");
        assert_eq!(text, "• shipped");
        assert_eq!(n.to_plain_text(&text), text);
    }

    #[test]
    fn test_sections_basic() {
        let sections = normalizer().to_sections(
            "Intro line\n# Summary\nStrong candidate.\n## Experience\n- Led team\n\n### Notes",
        );
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0], Section::body("Intro line"));
        assert_eq!(sections[1].level, SectionLevel::H1);
        assert_eq!(sections[1].title.as_deref(), Some("Summary"));
        assert_eq!(sections[1].content, "Strong candidate.");
        assert_eq!(sections[2].content, "- Led team");
        assert_eq!(sections[3].content, "");
    }

    #[test]
    fn test_sections_empty_input() {
        assert!(normalizer().to_sections("").is_empty());
        assert!(normalizer().to_sections("   \n\n").is_empty());
    }

    #[test]
    fn test_sections_deep_heading_is_content() {
        let sections = normalizer().to_sections("# Top\n#### Deep\ntext");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "#### Deep\ntext");
    }

    #[test]
    fn test_sections_ignore_fenced_hashes() {
        let markup = "# Skills
```bash
# install
cargo build
```
## Projects
shipped";
        let sections = normalizer().to_sections(markup);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title.as_deref(), Some("Skills"));
        assert_eq!(sections[0].content, "```bash\n# install\ncargo build\n```");
        assert_eq!(sections[1].title.as_deref(), Some("Projects"));
        assert_eq!(sections_to_markup(&sections), markup);
    }

    #[test]
    fn test_sections_unclosed_fence_runs_to_end() {
        let sections = normalizer().to_sections("# Notes
~~~
# not a heading");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "~~~\n# not a heading");
    }

    #[test]
    fn test_extract_bullets() {
        let bullets = normalizer()
            .extract_bullets("Intro\n- Led team of 5\n  * Increased revenue 20%\n---\n• Shipped v2\n3. Mentored");
        assert_eq!(
            bullets,
            vec!["Led team of 5", "Increased revenue 20%", "Shipped v2", "Mentored"]
        );
    }

    #[test]
    fn test_plain_lines() {
        let lines = normalizer().to_plain_lines("a\n\n- b");
        assert_eq!(lines, vec!["a", "", "• b"]);
        assert!(normalizer().to_plain_lines("  ").is_empty());
    }

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("• item"), Some("item"));
        assert_eq!(strip_bullet("item"), None);
    }
}
