//! Property tests for normalization and sanitization

use markup::{
    is_printable_ascii, sections_to_markup, GlyphSanitizer, MarkupNormalizer, TransliterationTable,
};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

/// A word wrapped in one of the supported inline constructs
fn inline_token() -> impl Strategy<Value = String> {
    (word(), word(), 0..10u8).prop_map(|(w, inner, kind)| match kind {
        0 => format!("**{}**", w),
        1 => format!("*{}*", w),
        2 => format!("__{}__", w),
        3 => format!("_{}_", w),
        4 => format!("~~{}~~", w),
        5 => format!("`{}`", w),
        6 => format!("[{}](https://example.com/{})", w, w),
        7 => format!("**{} *{}* {}**", w, inner, w),
        8 => format!("_{} **{}**_", w, inner),
        _ => w,
    })
}

fn inline_text() -> impl Strategy<Value = String> {
    prop::collection::vec(inline_token(), 1..6).prop_map(|tokens| tokens.join(" "))
}

/// One line built from a supported block construct
fn markup_line() -> impl Strategy<Value = String> {
    (inline_text(), 0..8u8, 1..4usize).prop_map(|(text, kind, depth)| match kind {
        0 => format!("{} {}", "#".repeat(depth), text),
        7 => format!("{} - {}", "#".repeat(depth), text),
        1 => format!("- {}", text),
        2 => format!("{}. {}", depth, text),
        3 => "---".to_string(),
        4 => String::new(),
        _ => text,
    })
}

fn markup_document() -> impl Strategy<Value = String> {
    prop::collection::vec(markup_line(), 0..20).prop_map(|lines| lines.join("\n"))
}

fn content_line() -> impl Strategy<Value = String> {
    (prop::collection::vec(word(), 1..5), any::<bool>()).prop_map(|(words, bullet)| {
        let text = words.join(" ");
        if bullet {
            format!("- {}", text)
        } else {
            text
        }
    })
}

fn section_markup() -> impl Strategy<Value = String> {
    (
        1..4usize,
        prop::collection::vec(word(), 1..4),
        prop::collection::vec(content_line(), 0..4),
    )
        .prop_map(|(depth, title, content)| {
            let mut lines = vec![format!("{} {}", "#".repeat(depth), title.join(" "))];
            lines.extend(content);
            lines.join("\n")
        })
}

fn sectioned_document() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(content_line(), 0..3),
        prop::collection::vec(section_markup(), 0..6),
    )
        .prop_map(|(body, sections)| {
            let mut parts = Vec::new();
            if !body.is_empty() {
                parts.push(body.join("\n"));
            }
            parts.extend(sections);
            parts.join("\n")
        })
}

proptest! {
    #[test]
    fn plain_text_is_idempotent(markup in markup_document()) {
        let normalizer = MarkupNormalizer::new();
        let once = normalizer.to_plain_text(&markup);
        let twice = normalizer.to_plain_text(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn plain_text_never_panics(markup in any::<String>()) {
        let normalizer = MarkupNormalizer::new();
        let _ = normalizer.to_plain_text(&markup);
        let _ = normalizer.to_sections(&markup);
        let _ = normalizer.extract_bullets(&markup);
    }

    #[test]
    fn sections_reconstruct_markup(markup in sectioned_document()) {
        let normalizer = MarkupNormalizer::new();
        let sections = normalizer.to_sections(&markup);
        prop_assert_eq!(sections_to_markup(&sections), markup);
    }

    #[test]
    fn sanitize_output_is_printable_ascii(text in any::<String>()) {
        let sanitized = GlyphSanitizer::new().sanitize(&text);
        prop_assert!(sanitized.chars().all(is_printable_ascii));
    }

    #[test]
    fn sanitize_with_empty_table_is_printable_ascii(text in "\\PC*") {
        let sanitizer = GlyphSanitizer::with_table(TransliterationTable::empty());
        let sanitized = sanitizer.sanitize(&text);
        prop_assert!(sanitized.chars().all(is_printable_ascii));
    }

    #[test]
    fn sanitize_keeps_printable_ascii(text in "[ -~]*") {
        let sanitized = GlyphSanitizer::new().sanitize(&text);
        prop_assert_eq!(sanitized, text);
    }
}
