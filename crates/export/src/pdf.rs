//! PDF generator
//!
//! Markup is normalized to plain lines, every string is sanitized to
//! printable ASCII, and the layout engine flows the lines onto pages before
//! the footer pass stamps "Page K of N".

use crate::{ExportFormat, ExportRequest, FormatGenerator};
use anyhow::Context;
use chrono::Utc;
use layout_engine::{FooterLink, HeaderBlock, LayoutEngine, StampedDocument};
use markup::{GlyphSanitizer, MarkupNormalizer};
use store::pdf::{DocumentInfo, PdfOptions};
use store::{render_pdf, ArtifactMeta, ExportSettings};

pub struct PdfGenerator {
    normalizer: MarkupNormalizer,
    sanitizer: GlyphSanitizer,
    engine: LayoutEngine,
    product_name: String,
    compress: bool,
}

impl PdfGenerator {
    pub fn new(settings: &ExportSettings) -> Self {
        let sanitizer = GlyphSanitizer::with_table(settings.transliteration_table());

        let mut typography = settings.typography;
        typography.title.color = settings.branding.accent_color;
        typography.footer_link.color = settings.branding.accent_color;

        let links = settings
            .branding
            .footer_links
            .iter()
            .map(|link| FooterLink::new(sanitizer.sanitize(&link.label), link.url.clone()))
            .collect();
        let engine = LayoutEngine::helvetica(settings.page, typography).with_footer_links(links);

        Self {
            normalizer: MarkupNormalizer::new(),
            sanitizer,
            engine,
            product_name: settings.branding.product_name.clone(),
            compress: true,
        }
    }

    /// Leave content streams uncompressed
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn header_block(&self, meta: &ArtifactMeta) -> HeaderBlock {
        let clean = |text: &str| self.sanitizer.sanitize(text);
        HeaderBlock {
            title: clean(&meta.title),
            service_name: clean(&meta.service_name),
            generated_line: clean(&format!("Generated: {}", meta.generated_text())),
            score_line: meta.score_text().map(|s| clean(&format!("Score: {}", s))),
            improvement_line: meta
                .improvement_text()
                .map(|s| clean(&format!("Improvement: {}", s))),
        }
    }

    /// Plain, sanitized content lines; empty strings are blank lines
    pub fn content_lines(&self, content: &str) -> Vec<String> {
        self.normalizer
            .to_plain_lines(content)
            .iter()
            .map(|line| self.sanitizer.sanitize(line))
            .collect()
    }

    /// Both layout passes, without rendering
    pub fn layout(&self, request: &ExportRequest) -> layout_engine::Result<StampedDocument> {
        let header = self.header_block(&request.meta);
        let lines = self.content_lines(&request.content);
        self.engine.run(&header, &lines)
    }

    /// Info dictionary values, sanitized like the visible header text
    pub fn document_info(&self, meta: &ArtifactMeta) -> DocumentInfo {
        let clean = |text: &str| Some(self.sanitizer.sanitize(text));
        DocumentInfo {
            title: clean(&meta.title),
            author: clean(&meta.service_name),
            creator: clean(&self.product_name),
            producer: clean(&self.product_name),
            creation_date: Some(meta.generated_at.with_timezone(&Utc)),
        }
    }
}

impl FormatGenerator for PdfGenerator {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn generate(&self, request: &ExportRequest) -> anyhow::Result<Vec<u8>> {
        let document = self.layout(request).context("layout failed")?;
        tracing::debug!(
            pages = document.page_count(),
            lines = document.pages().lines().count(),
            "pdf layout complete"
        );

        let options = PdfOptions::default()
            .with_compression(self.compress)
            .with_info(self.document_info(&request.meta));
        let bytes = render_pdf(&document, &options).context("pdf rendering failed")?;
        Ok(bytes)
    }
}
