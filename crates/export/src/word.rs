//! Word (DOCX) generator
//!
//! The composer turns request metadata and content into an ordered paragraph
//! list; `store::docx` packages it. Text keeps its Unicode form here, only
//! XML-illegal characters are dropped by the package writer.

use crate::{ExportFormat, ExportRequest, FormatGenerator};
use anyhow::Context;
use chrono::Utc;
use layout_engine::{FooterLink, PageGeometry, Rgb};
use markup::{strip_bullet, MarkupNormalizer, RULE_GLYPH};
use store::docx::{CoreProperties, DocxDocument, FooterTemplate, Paragraph, TextRun};
use store::{write_docx, ArtifactMeta, ExportSettings};

const TITLE_SIZE: f32 = 24.0;
const SERVICE_SIZE: f32 = 12.0;
const META_SIZE: f32 = 9.0;
const BODY_SIZE: f32 = 11.0;
const BLANK_SPACING: f32 = 6.0;

const SERVICE_COLOR: Rgb = Rgb::new(0x37, 0x41, 0x51);
const MUTED_COLOR: Rgb = Rgb::new(0x6B, 0x72, 0x80);
const DIVIDER_COLOR: Rgb = Rgb::new(0xD1, 0xD5, 0xDB);

/// Builds the paragraph list of a Word document
pub struct DocumentComposer {
    normalizer: MarkupNormalizer,
    accent: Rgb,
    links: Vec<FooterLink>,
    page: PageGeometry,
}

impl DocumentComposer {
    pub fn new(settings: &ExportSettings) -> Self {
        Self {
            normalizer: MarkupNormalizer::new(),
            accent: settings.branding.accent_color,
            links: settings.branding.footer_links.clone(),
            page: settings.page,
        }
    }

    /// Title, service, generated date, optional score and improvement, divider
    pub fn header_paragraphs(&self, meta: &ArtifactMeta) -> Vec<Paragraph> {
        let mut paragraphs = vec![
            Paragraph::new(vec![TextRun::new(meta.title.as_str(), TITLE_SIZE)
                .bold()
                .colored(self.accent)])
            .with_spacing_after(4.0),
            Paragraph::new(vec![
                TextRun::new(meta.service_name.as_str(), SERVICE_SIZE).colored(SERVICE_COLOR)
            ]),
            Paragraph::new(vec![TextRun::new(
                format!("Generated: {}", meta.generated_text()),
                META_SIZE,
            )
            .colored(MUTED_COLOR)]),
        ];

        if let Some(score) = meta.score_text() {
            paragraphs.push(Paragraph::new(vec![
                TextRun::new(format!("Score: {}", score), BODY_SIZE).bold()
            ]));
        }
        if let Some(improvement) = meta.improvement_text() {
            paragraphs.push(Paragraph::new(vec![TextRun::new(
                format!("Improvement: {}", improvement),
                BODY_SIZE,
            )]));
        }

        paragraphs.push(Paragraph::blank(12.0).with_divider(DIVIDER_COLOR));
        paragraphs
    }

    /// One paragraph per plain-text line
    pub fn content_paragraphs(&self, content: &str) -> Vec<Paragraph> {
        self.normalizer
            .to_plain_lines(content)
            .iter()
            .map(|line| {
                if line.is_empty() {
                    Paragraph::blank(BLANK_SPACING)
                } else if line.chars().all(|c| c == RULE_GLYPH) {
                    Paragraph::blank(BLANK_SPACING).with_divider(DIVIDER_COLOR)
                } else if let Some(item) = strip_bullet(line) {
                    Paragraph::new(vec![TextRun::new(item, BODY_SIZE)]).bullet()
                } else {
                    Paragraph::new(vec![TextRun::new(line.as_str(), BODY_SIZE)])
                }
            })
            .collect()
    }

    pub fn compose(&self, request: &ExportRequest) -> DocxDocument {
        let mut paragraphs = self.header_paragraphs(&request.meta);
        paragraphs.extend(self.content_paragraphs(&request.content));

        DocxDocument {
            paragraphs,
            footer: FooterTemplate {
                links: self.links.clone(),
                link_color: self.accent,
                ..Default::default()
            },
            properties: CoreProperties {
                title: request.meta.title.clone(),
                creator: request.meta.service_name.clone(),
                created: request.meta.generated_at.with_timezone(&Utc),
            },
            page: self.page,
        }
    }
}

pub struct WordGenerator {
    composer: DocumentComposer,
}

impl WordGenerator {
    pub fn new(settings: &ExportSettings) -> Self {
        Self {
            composer: DocumentComposer::new(settings),
        }
    }

    pub fn composer(&self) -> &DocumentComposer {
        &self.composer
    }
}

impl FormatGenerator for WordGenerator {
    fn format(&self) -> ExportFormat {
        ExportFormat::Word
    }

    fn generate(&self, request: &ExportRequest) -> anyhow::Result<Vec<u8>> {
        let document = self.composer.compose(request);
        tracing::debug!(paragraphs = document.paragraphs.len(), "docx composed");
        let bytes = write_docx(&document).context("docx packaging failed")?;
        Ok(bytes)
    }
}
