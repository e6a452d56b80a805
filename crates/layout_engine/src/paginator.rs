//! Pagination Algorithm (layout pass)
//!
//! Flows wrapped lines onto pages front to back:
//! - page 1 opens with the header block (title, service, date, optional score
//!   and improvement lines) and a divider rule
//! - every later page starts at the top margin with no header
//! - before each line or blank-line advance, a line that would cross the bottom
//!   margin starts a new page
//!
//! Footers are not drawn here: they depend on the total page count, which is
//! only known once this pass has produced the final [`PageList`].

use crate::{
    FontFace, HeaderBlock, LayoutLine, LineBreaker, Page, PageGeometry, PageItem, PageList,
    PlacedLine, Result, Rgb, RuleMark, TextMeasure, TextStyle,
};
use serde::{Deserialize, Serialize};

/// Text styles and spacing used by the layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Typography {
    pub title: TextStyle,
    pub service: TextStyle,
    /// Generated-at line
    pub meta: TextStyle,
    /// Score and improvement lines
    pub score: TextStyle,
    pub body: TextStyle,
    pub footer: TextStyle,
    /// Footer link labels
    pub footer_link: TextStyle,
    /// Cursor advance for an empty content line
    pub blank_line_height: f32,
    /// Space between the last header line and the divider
    pub divider_gap_before: f32,
    /// Space between the divider and the first content line
    pub divider_gap_after: f32,
    pub divider_thickness: f32,
    pub divider_color: Rgb,
}

impl Default for Typography {
    fn default() -> Self {
        let accent = Rgb::new(0x25, 0x63, 0xEB);
        let muted = Rgb::new(0x6B, 0x72, 0x80);
        Self {
            title: TextStyle::new(FontFace::Bold, 20.0, 26.0, accent),
            service: TextStyle::new(FontFace::Regular, 12.0, 17.0, Rgb::new(0x37, 0x41, 0x51)),
            meta: TextStyle::new(FontFace::Regular, 9.0, 14.0, muted),
            score: TextStyle::new(FontFace::Bold, 11.0, 16.0, Rgb::new(0x11, 0x18, 0x27)),
            body: TextStyle::new(FontFace::Regular, 11.0, 15.0, Rgb::new(0x1F, 0x29, 0x37)),
            footer: TextStyle::new(FontFace::Regular, 8.0, 10.0, muted),
            footer_link: TextStyle::new(FontFace::Regular, 8.0, 10.0, accent),
            blank_line_height: 8.0,
            divider_gap_before: 6.0,
            divider_gap_after: 14.0,
            divider_thickness: 0.75,
            divider_color: Rgb::new(0xD1, 0xD5, 0xDB),
        }
    }
}

impl Typography {
    /// Tallest line height among the flowed styles
    pub fn max_line_height(&self) -> f32 {
        [
            self.title.line_height,
            self.service.line_height,
            self.meta.line_height,
            self.score.line_height,
            self.body.line_height,
            self.blank_line_height,
        ]
        .into_iter()
        .fold(0.0, f32::max)
    }
}

/// Flows header and content lines onto pages
pub struct Paginator<M> {
    breaker: LineBreaker<M>,
    geometry: PageGeometry,
    typography: Typography,
}

impl<M: TextMeasure> Paginator<M> {
    pub fn new(measure: M, geometry: PageGeometry, typography: Typography) -> Self {
        Self {
            breaker: LineBreaker::new(measure),
            geometry,
            typography,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    pub fn breaker(&self) -> &LineBreaker<M> {
        &self.breaker
    }

    /// Run the layout pass
    ///
    /// `lines` are logical content lines, already sanitized; an empty string
    /// is a blank line. The result always holds at least one page.
    pub fn layout(&self, header: &HeaderBlock, lines: &[String]) -> Result<PageList> {
        self.geometry.validate(self.typography.max_line_height())?;

        let mut flow = PageFlow::new(&self.geometry);
        self.layout_header(&mut flow, header)?;

        let body = self.typography.body;
        for line in lines {
            if line.trim().is_empty() {
                flow.advance_blank(self.typography.blank_line_height);
                continue;
            }
            for wrapped in self.breaker.wrap(line, &body, self.geometry.usable_width())? {
                flow.place(wrapped, body);
            }
        }

        let pages = flow.finish();
        tracing::debug!(
            pages = pages.len(),
            lines = pages.lines().count(),
            "layout pass complete"
        );
        Ok(pages)
    }

    fn layout_header(&self, flow: &mut PageFlow<'_>, header: &HeaderBlock) -> Result<()> {
        let t = &self.typography;
        let mut block: Vec<(&str, TextStyle)> = vec![
            (header.title.as_str(), t.title),
            (header.service_name.as_str(), t.service),
            (header.generated_line.as_str(), t.meta),
        ];
        if let Some(ref score) = header.score_line {
            block.push((score.as_str(), t.score));
        }
        if let Some(ref improvement) = header.improvement_line {
            block.push((improvement.as_str(), t.score));
        }

        for (text, style) in block {
            for wrapped in self.breaker.wrap(text, &style, self.geometry.usable_width())? {
                flow.place(wrapped, style);
            }
        }

        flow.divider(t.divider_gap_before, t.divider_gap_after, t.divider_thickness, t.divider_color);
        Ok(())
    }
}

/// Mutable page state during the layout pass
struct PageFlow<'a> {
    geometry: &'a PageGeometry,
    finished: Vec<Page>,
    current: Page,
    cursor: f32,
}

impl<'a> PageFlow<'a> {
    fn new(geometry: &'a PageGeometry) -> Self {
        Self {
            geometry,
            finished: Vec::new(),
            current: Page::new(1, geometry.margin_top),
            cursor: geometry.margin_top,
        }
    }

    /// Start a new page when `height` more would cross the bottom margin
    fn ensure_room(&mut self, height: f32) {
        if self.cursor + height > self.geometry.content_bottom() {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        let number = self.current.number() + 1;
        let next = Page::new(number, self.geometry.margin_top);
        let mut done = std::mem::replace(&mut self.current, next);
        done.set_cursor(self.cursor);
        self.finished.push(done);
        self.cursor = self.geometry.margin_top;
    }

    fn place(&mut self, line: LayoutLine, style: TextStyle) {
        self.ensure_room(style.line_height);
        let baseline = self.cursor + style.size;
        self.current.push(PageItem::Text(PlacedLine {
            line,
            style,
            x: self.geometry.margin_left,
            baseline,
        }));
        self.cursor += style.line_height;
    }

    fn advance_blank(&mut self, height: f32) {
        self.ensure_room(height);
        self.cursor += height;
    }

    fn divider(&mut self, gap_before: f32, gap_after: f32, thickness: f32, color: Rgb) {
        self.cursor += gap_before;
        self.current.push(PageItem::Rule(RuleMark {
            x1: self.geometry.margin_left,
            x2: self.geometry.content_right(),
            y: self.cursor,
            thickness,
            color,
        }));
        self.cursor += gap_after;
    }

    fn finish(mut self) -> PageList {
        self.current.set_cursor(self.cursor);
        self.finished.push(self.current);
        PageList::new(self.finished, *self.geometry)
    }
}
