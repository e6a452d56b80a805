//! Glyph Sanitization
//!
//! The PDF writer uses the standard Type1 fonts and can only measure and draw
//! printable ASCII. Everything else is mapped down before layout:
//!
//! 1. Typographic punctuation (curly quotes, dashes, ellipsis) becomes its
//!    ASCII spelling.
//! 2. Any Unicode whitespace becomes a regular space.
//! 3. Remaining characters outside `0x20..=0x7E` are looked up in a
//!    [`TransliterationTable`] and dropped when the table has no entry.
//!
//! Sanitization is total: every input has an output and nothing here fails.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built-in transliterations for common Latin letters, bullets and symbols
#[rustfmt::skip]
const BUILTIN_TRANSLITERATIONS: &[(char, &str)] = &[
    // Latin-1 uppercase
    ('À', "A"), ('Á', "A"), ('Â', "A"), ('Ã', "A"), ('Ä', "A"), ('Å', "A"),
    ('Æ', "AE"), ('Ç', "C"), ('È', "E"), ('É', "E"), ('Ê', "E"), ('Ë', "E"),
    ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"), ('Ð', "D"), ('Ñ', "N"),
    ('Ò', "O"), ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ö', "O"), ('Ø', "O"),
    ('Ù', "U"), ('Ú', "U"), ('Û', "U"), ('Ü', "U"), ('Ý', "Y"), ('Þ', "Th"),
    // Latin-1 lowercase
    ('ß', "ss"), ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"), ('ä', "a"),
    ('å', "a"), ('æ', "ae"), ('ç', "c"), ('è', "e"), ('é', "e"), ('ê', "e"),
    ('ë', "e"), ('ì', "i"), ('í', "i"), ('î', "i"), ('ï', "i"), ('ð', "d"),
    ('ñ', "n"), ('ò', "o"), ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ö', "o"),
    ('ø', "o"), ('ù', "u"), ('ú', "u"), ('û', "u"), ('ü', "u"), ('ý', "y"),
    ('þ', "th"), ('ÿ', "y"),
    // Latin Extended-A
    ('Ā', "A"), ('ā', "a"), ('Ă', "A"), ('ă', "a"), ('Ą', "A"), ('ą', "a"),
    ('Ć', "C"), ('ć', "c"), ('Č', "C"), ('č', "c"), ('Ď', "D"), ('ď', "d"),
    ('Đ', "D"), ('đ', "d"), ('Ē', "E"), ('ē', "e"), ('Ę', "E"), ('ę', "e"),
    ('Ě', "E"), ('ě', "e"), ('Ğ', "G"), ('ğ', "g"), ('Ī', "I"), ('ī', "i"),
    ('İ', "I"), ('ı', "i"), ('Ł', "L"), ('ł', "l"), ('Ń', "N"), ('ń', "n"),
    ('Ň', "N"), ('ň', "n"), ('Ō', "O"), ('ō', "o"), ('Ő', "O"), ('ő', "o"),
    ('Œ', "OE"), ('œ', "oe"), ('Ř', "R"), ('ř', "r"), ('Ś', "S"), ('ś', "s"),
    ('Ş', "S"), ('ş', "s"), ('Š', "S"), ('š', "s"), ('Ţ', "T"), ('ţ', "t"),
    ('Ť', "T"), ('ť', "t"), ('Ū', "U"), ('ū', "u"), ('Ů', "U"), ('ů', "u"),
    ('Ű', "U"), ('ű', "u"), ('Ÿ', "Y"), ('Ź', "Z"), ('ź', "z"), ('Ż', "Z"),
    ('ż', "z"), ('Ž', "Z"), ('ž', "z"),
    // Bullets and rules
    ('•', "-"), ('◦', "-"), ('▪', "-"), ('▫', "-"), ('‣', "-"), ('⁃', "-"),
    ('●', "-"), ('○', "-"), ('■', "-"), ('□', "-"), ('·', "-"), ('─', "-"),
    ('━', "-"), ('═', "="),
    // Symbols
    ('€', "EUR"), ('£', "GBP"), ('¥', "JPY"), ('©', "(c)"), ('®', "(R)"),
    ('™', "(TM)"), ('°', " deg"), ('±', "+/-"), ('×', "x"), ('÷', "/"),
    ('→', "->"), ('←', "<-"), ('⇒', "=>"), ('✓', "v"), ('✔', "v"),
    ('½', "1/2"), ('¼', "1/4"), ('¾', "3/4"), ('¹', "1"), ('²', "2"), ('³', "3"),
];

/// A configurable character-to-ASCII mapping
///
/// Replacements are filtered to printable ASCII on insertion, so no table
/// content can push non-printable characters into sanitized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<char, String>", into = "BTreeMap<char, String>")]
pub struct TransliterationTable {
    entries: BTreeMap<char, String>,
}

impl From<BTreeMap<char, String>> for TransliterationTable {
    fn from(entries: BTreeMap<char, String>) -> Self {
        let mut table = Self::empty();
        for (ch, replacement) in entries {
            table.insert(ch, replacement);
        }
        table
    }
}

impl From<TransliterationTable> for BTreeMap<char, String> {
    fn from(table: TransliterationTable) -> Self {
        table.entries
    }
}

impl Default for TransliterationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TransliterationTable {
    /// Create a table with no entries (every non-ASCII glyph is dropped)
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Create the built-in table
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (ch, replacement) in BUILTIN_TRANSLITERATIONS {
            table.insert(*ch, *replacement);
        }
        table
    }

    /// Add or replace a mapping
    pub fn insert(&mut self, ch: char, replacement: impl Into<String>) {
        let replacement: String = replacement
            .into()
            .chars()
            .filter(|c| is_printable_ascii(*c))
            .collect();
        self.entries.insert(ch, replacement);
    }

    /// Merge overrides on top of this table
    pub fn merge(&mut self, overrides: &TransliterationTable) {
        for (ch, replacement) in &overrides.entries {
            self.insert(*ch, replacement.clone());
        }
    }

    /// Look up the replacement for a character
    pub fn get(&self, ch: char) -> Option<&str> {
        self.entries.get(&ch).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps arbitrary text to the printable ASCII range
#[derive(Debug, Clone, Default)]
pub struct GlyphSanitizer {
    table: TransliterationTable,
}

impl GlyphSanitizer {
    /// Create a sanitizer with the built-in table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sanitizer with a custom table
    pub fn with_table(table: TransliterationTable) -> Self {
        Self { table }
    }

    /// The transliteration table in use
    pub fn table(&self) -> &TransliterationTable {
        &self.table
    }

    /// Sanitize text so every character lies in `0x20..=0x7E`
    pub fn sanitize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if let Some(ascii) = punctuation_equivalent(ch) {
                out.push_str(ascii);
            } else if is_printable_ascii(ch) {
                out.push(ch);
            } else if ch.is_whitespace() {
                out.push(' ');
            } else if let Some(replacement) = self.table.get(ch) {
                out.push_str(replacement);
            }
        }
        out
    }
}

/// Check if a character is in the printable ASCII range
pub fn is_printable_ascii(ch: char) -> bool {
    matches!(ch, '\u{20}'..='\u{7E}')
}

fn punctuation_equivalent(ch: char) -> Option<&'static str> {
    match ch {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' | '\u{2039}'
        | '\u{203A}' => Some("'"),
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' | '\u{00AB}'
        | '\u{00BB}' => Some("\""),
        '\u{2010}'..='\u{2015}' | '\u{2212}' => Some("-"),
        '\u{2026}' => Some("..."),
        '\u{00A0}' | '\u{202F}' | '\u{2007}' => Some(" "),
        _ => None,
    }
}
