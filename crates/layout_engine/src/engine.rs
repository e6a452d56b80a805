//! Two-pass layout
//!
//! Pass one flows the header and content onto pages. Pass two stamps every
//! page footer with the final page total.

use crate::{
    FooterLink, FooterStamp, FooterStamper, HeaderBlock, HelveticaMetrics, Page, PageGeometry,
    PageList, Paginator, Result, TextMeasure, Typography,
};

/// Pages paired with their footers
#[derive(Debug, Clone, PartialEq)]
pub struct StampedDocument {
    pages: PageList,
    footers: Vec<FooterStamp>,
}

impl StampedDocument {
    pub fn pages(&self) -> &PageList {
        &self.pages
    }

    pub fn footers(&self) -> &[FooterStamp] {
        &self.footers
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn geometry(&self) -> &PageGeometry {
        self.pages.geometry()
    }

    /// Each page with its footer, in order
    pub fn iter(&self) -> impl Iterator<Item = (&Page, &FooterStamp)> {
        self.pages.pages().iter().zip(self.footers.iter())
    }
}

/// Layout facade running both passes
pub struct LayoutEngine<M = HelveticaMetrics> {
    paginator: Paginator<M>,
    links: Vec<FooterLink>,
}

impl LayoutEngine<HelveticaMetrics> {
    pub fn helvetica(geometry: PageGeometry, typography: Typography) -> Self {
        Self::new(HelveticaMetrics::new(), geometry, typography)
    }
}

impl<M: TextMeasure> LayoutEngine<M> {
    pub fn new(measure: M, geometry: PageGeometry, typography: Typography) -> Self {
        Self {
            paginator: Paginator::new(measure, geometry, typography),
            links: Vec::new(),
        }
    }

    /// Links printed right-aligned in every footer
    pub fn with_footer_links(mut self, links: Vec<FooterLink>) -> Self {
        self.links = links;
        self
    }

    pub fn footer_links(&self) -> &[FooterLink] {
        &self.links
    }

    pub fn paginator(&self) -> &Paginator<M> {
        &self.paginator
    }

    /// Lay out `lines` under `header` and stamp footers
    pub fn run(&self, header: &HeaderBlock, lines: &[String]) -> Result<StampedDocument> {
        let pages = self.paginator.layout(header, lines)?;

        let typography = self.paginator.typography();
        let stamper = FooterStamper::new(
            self.paginator.breaker().measure(),
            typography.footer,
            typography.footer_link,
            &self.links,
        );
        let footers = stamper.stamp(&pages)?;
        tracing::debug!(pages = pages.len(), "footer pass complete");

        Ok(StampedDocument { pages, footers })
    }
}
