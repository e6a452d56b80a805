//! Footer Stamping (second pass)
//!
//! Runs over a finished [`PageList`] and computes, for every page, the
//! left-aligned "Page K of N" label and the right-aligned, pipe-separated link
//! labels. The page list is only read; the total is taken from it, so the
//! stamped total always equals the number of pages produced by layout.

use crate::{PageList, Result, TextMeasure, TextStyle};
use serde::{Deserialize, Serialize};

/// Separator between footer link labels
pub const LINK_SEPARATOR: &str = " | ";

/// A labelled footer hyperlink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

impl FooterLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A link label positioned in a footer
#[derive(Debug, Clone, PartialEq)]
pub struct StampedLink {
    pub label: String,
    pub url: String,
    /// Left edge of the label
    pub x: f32,
    pub width: f32,
}

/// Footer content for one page
#[derive(Debug, Clone, PartialEq)]
pub struct FooterStamp {
    pub page_number: usize,
    pub total_pages: usize,
    /// "Page K of N"
    pub label: String,
    pub label_x: f32,
    pub label_style: TextStyle,
    /// Link labels joined by [`LINK_SEPARATOR`]
    pub links_text: String,
    /// Left edge of `links_text`
    pub links_x: f32,
    pub links: Vec<StampedLink>,
    pub link_style: TextStyle,
    /// Baseline, top-down
    pub baseline: f32,
}

/// Format the page label for page `number` of `total`
pub fn page_label(number: usize, total: usize) -> String {
    format!("Page {} of {}", number, total)
}

/// Computes footers once the total page count is known
pub struct FooterStamper<'a, M> {
    measure: &'a M,
    label_style: TextStyle,
    link_style: TextStyle,
    links: &'a [FooterLink],
}

impl<'a, M: TextMeasure> FooterStamper<'a, M> {
    pub fn new(
        measure: &'a M,
        label_style: TextStyle,
        link_style: TextStyle,
        links: &'a [FooterLink],
    ) -> Self {
        Self {
            measure,
            label_style,
            link_style,
            links,
        }
    }

    /// Stamp every page of a finished layout
    pub fn stamp(&self, pages: &PageList) -> Result<Vec<FooterStamp>> {
        let geometry = pages.geometry();
        let total = pages.len();
        let baseline = geometry.footer_baseline();

        let (links_text, links_width, placed) = self.place_links()?;
        let links_x = geometry.content_right() - links_width;
        let links: Vec<StampedLink> = placed
            .into_iter()
            .map(|(link, offset, width)| StampedLink {
                label: link.label.clone(),
                url: link.url.clone(),
                x: links_x + offset,
                width,
            })
            .collect();

        let stamps = pages
            .pages()
            .iter()
            .map(|page| FooterStamp {
                page_number: page.number(),
                total_pages: total,
                label: page_label(page.number(), total),
                label_x: geometry.margin_left,
                label_style: self.label_style,
                links_text: links_text.clone(),
                links_x,
                links: links.clone(),
                link_style: self.link_style,
                baseline,
            })
            .collect();

        Ok(stamps)
    }

    /// Join link labels and measure each label's offset within the joined text
    fn place_links(&self) -> Result<(String, f32, Vec<(&'a FooterLink, f32, f32)>)> {
        let style = &self.link_style;
        let mut text = String::new();
        let mut placed = Vec::with_capacity(self.links.len());

        for link in self.links {
            if !text.is_empty() {
                text.push_str(LINK_SEPARATOR);
            }
            let offset = self.measure.measure(&text, style.font, style.size)?;
            let width = self.measure.measure(&link.label, style.font, style.size)?;
            placed.push((link, offset, width));
            text.push_str(&link.label);
        }

        let total_width = self.measure.measure(&text, style.font, style.size)?;
        Ok((text, total_width, placed))
    }

    pub fn label_style(&self) -> &TextStyle {
        &self.label_style
    }

    pub fn link_style(&self) -> &TextStyle {
        &self.link_style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeaderBlock, HelveticaMetrics, PageGeometry, Paginator, Typography};

    fn links() -> Vec<FooterLink> {
        vec![
            FooterLink::new("Website", "https://example.com"),
            FooterLink::new("Guides", "https://example.com/guides"),
        ]
    }

    fn layout(lines: usize) -> PageList {
        let paginator = Paginator::new(
            HelveticaMetrics::new(),
            PageGeometry::default(),
            Typography::default(),
        );
        let content: Vec<String> = (0..lines).map(|i| format!("line {}", i)).collect();
        paginator.layout(&HeaderBlock::default(), &content).unwrap()
    }

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(2, 5), "Page 2 of 5");
    }

    #[test]
    fn test_stamp_every_page() {
        let pages = layout(150);
        let metrics = HelveticaMetrics::new();
        let typography = Typography::default();
        let links = links();
        let stamper = FooterStamper::new(&metrics, typography.footer, typography.footer_link, &links);
        let stamps = stamper.stamp(&pages).unwrap();

        assert_eq!(stamps.len(), pages.len());
        for (i, stamp) in stamps.iter().enumerate() {
            assert_eq!(stamp.page_number, i + 1);
            assert_eq!(stamp.total_pages, pages.len());
            assert_eq!(stamp.label, format!("Page {} of {}", i + 1, pages.len()));
            assert_eq!(stamp.baseline, 810.0);
        }
    }

    #[test]
    fn test_links_right_aligned() {
        let pages = layout(1);
        let metrics = HelveticaMetrics::new();
        let typography = Typography::default();
        let links = links();
        let stamper = FooterStamper::new(&metrics, typography.footer, typography.footer_link, &links);
        let stamp = stamper.stamp(&pages).unwrap().remove(0);

        assert_eq!(stamp.links_text, "Website | Guides");
        let total = metrics
            .measure(&stamp.links_text, typography.footer_link.font, typography.footer_link.size)
            .unwrap();
        assert!((stamp.links_x + total - 545.0).abs() < 1e-3);
        assert_eq!(stamp.links[0].x, stamp.links_x);
        let last = &stamp.links[1];
        assert!((last.x + last.width - 545.0).abs() < 1e-3);
        assert_eq!(last.url, "https://example.com/guides");
    }

    #[test]
    fn test_no_links() {
        let pages = layout(1);
        let metrics = HelveticaMetrics::new();
        let typography = Typography::default();
        let stamper = FooterStamper::new(&metrics, typography.footer, typography.footer_link, &[]);
        let stamp = stamper.stamp(&pages).unwrap().remove(0);
        assert!(stamp.links.is_empty());
        assert_eq!(stamp.links_text, "");
        assert_eq!(stamp.label, "Page 1 of 1");
    }
}
