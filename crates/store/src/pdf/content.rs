//! PDF Content Stream Generation
//!
//! Builder for the page operators the exporter uses:
//! - `q`/`Q` graphics state
//! - `rg`/`RG` fill and stroke colors, `w` line width
//! - `m`, `l`, `S` for divider rules
//! - `BT`, `Tf`, `Td`, `Tj`, `ET` for text

use super::objects::{escape_string, format_real};
use std::io::Write;

#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.line("q")
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.line("Q")
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.op(&[width], "w")
    }

    pub fn set_fill_rgb(&mut self, (r, g, b): (f64, f64, f64)) -> &mut Self {
        self.op(&[r, g, b], "rg")
    }

    pub fn set_stroke_rgb(&mut self, (r, g, b): (f64, f64, f64)) -> &mut Self {
        self.op(&[r, g, b], "RG")
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(&[x, y], "m")
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(&[x, y], "l")
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.line("S")
    }

    pub fn begin_text(&mut self) -> &mut Self {
        self.line("BT")
    }

    pub fn end_text(&mut self) -> &mut Self {
        self.line("ET")
    }

    /// Select a font resource (`/F1 11 Tf`)
    pub fn set_font(&mut self, resource: &str, size: f64) -> &mut Self {
        let _ = writeln!(self.data, "/{} {} Tf", resource, format_real(size));
        self
    }

    pub fn move_text(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.op(&[tx, ty], "Td")
    }

    /// Show a string; bytes are written as-is inside a literal string
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.data.push(b'(');
        self.data.extend_from_slice(&escape_string(text.as_bytes()));
        self.data.extend_from_slice(b") Tj\n");
        self
    }

    fn op(&mut self, operands: &[f64], operator: &str) -> &mut Self {
        for operand in operands {
            let _ = write!(self.data, "{} ", format_real(*operand));
        }
        self.line(operator)
    }

    fn line(&mut self, s: &str) -> &mut Self {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
        self
    }
}
