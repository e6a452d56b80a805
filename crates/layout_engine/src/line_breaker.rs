//! Line Breaking Algorithm
//!
//! Greedy word wrap against measured glyph widths:
//! 1. Split the logical line on whitespace
//! 2. Append words to the current line while the candidate still fits
//! 3. Flush the current line when the next word would overflow
//!
//! A single word wider than the content width is split at glyph boundaries,
//! so every produced line fits.

use crate::{LayoutError, LayoutLine, Result, TextMeasure, TextStyle};

/// Greedy line breaker over a width measure
#[derive(Debug, Clone)]
pub struct LineBreaker<M> {
    measure: M,
}

impl<M: TextMeasure> LineBreaker<M> {
    pub fn new(measure: M) -> Self {
        Self { measure }
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// Wrap one logical line into visual lines no wider than `max_width`
    ///
    /// Whitespace-only input produces no lines.
    pub fn wrap(&self, text: &str, style: &TextStyle, max_width: f32) -> Result<Vec<LayoutLine>> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in text.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            let width = self.width(&candidate, style)?;

            if width <= max_width {
                current = candidate;
                current_width = width;
                continue;
            }

            if !current.is_empty() {
                lines.push(LayoutLine::new(std::mem::take(&mut current), current_width));
            }

            let word_width = self.width(word, style)?;
            if word_width <= max_width {
                current = word.to_string();
                current_width = word_width;
            } else {
                let mut chunks = self.split_word(word, style, max_width)?;
                if let Some(last) = chunks.pop() {
                    current_width = last.measured_width;
                    current = last.text;
                }
                lines.extend(chunks);
            }
        }

        if !current.is_empty() {
            lines.push(LayoutLine::new(current, current_width));
        }

        Ok(lines)
    }

    /// Split an overlong word into the longest fitting glyph runs
    fn split_word(&self, word: &str, style: &TextStyle, max_width: f32) -> Result<Vec<LayoutLine>> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0;

        for ch in word.chars() {
            let mut candidate = current.clone();
            candidate.push(ch);
            let width = self.width(&candidate, style)?;

            if width <= max_width {
                current = candidate;
                current_width = width;
                continue;
            }

            if current.is_empty() {
                return Err(LayoutError::GlyphTooWide {
                    ch,
                    width,
                    max_width,
                });
            }

            chunks.push(LayoutLine::new(std::mem::take(&mut current), current_width));
            current.push(ch);
            current_width = self.width(&current, style)?;
            if current_width > max_width {
                return Err(LayoutError::GlyphTooWide {
                    ch,
                    width: current_width,
                    max_width,
                });
            }
        }

        if !current.is_empty() {
            chunks.push(LayoutLine::new(current, current_width));
        }

        Ok(chunks)
    }

    fn width(&self, text: &str, style: &TextStyle) -> Result<f32> {
        self.measure.measure(text, style.font, style.size)
    }
}
