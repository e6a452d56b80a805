//! Layout to PDF Conversion
//!
//! Turns a [`StampedDocument`] into a complete PDF file. Layout positions are
//! top-down; PDF user space is bottom-up, so every y is flipped against the
//! page height here.

use super::content::ContentStream;
use super::document::{create_catalog, create_link_annotation, create_pages, DocumentInfo};
use super::fonts::StandardFont;
use super::objects::{PdfDictionary, PdfObject, PdfStream};
use super::writer::{PdfError, PdfWriter, Result};
use layout_engine::{FooterStamp, Page, PageItem, PlacedLine, RuleMark, StampedDocument, TextStyle};

/// PDF output settings
#[derive(Debug, Clone)]
pub struct PdfOptions {
    /// Flate-compress content streams
    pub compress: bool,
    pub info: DocumentInfo,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            compress: true,
            info: DocumentInfo::default(),
        }
    }
}

impl PdfOptions {
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }
}

/// Render a stamped layout to PDF bytes
pub fn render_pdf(document: &StampedDocument, options: &PdfOptions) -> Result<Vec<u8>> {
    if document.page_count() == 0 {
        return Err(PdfError::InvalidDocument("no pages to render".to_string()));
    }
    if document.footers().len() != document.page_count() {
        return Err(PdfError::InvalidDocument(format!(
            "{} footers for {} pages",
            document.footers().len(),
            document.page_count()
        )));
    }

    let renderer = PdfRenderer {
        height: f64::from(document.geometry().height),
    };
    let width = f64::from(document.geometry().width);

    let mut pdf = PdfWriter::new(Vec::new(), options.compress);
    pdf.write_header()?;

    let catalog_ref = pdf.allocate();
    let pages_ref = pdf.allocate();
    let info_ref = pdf.allocate();
    let font_refs: Vec<(StandardFont, u32)> = StandardFont::ALL
        .iter()
        .map(|font| (*font, pdf.allocate()))
        .collect();

    let mut fonts = PdfDictionary::new();
    for (font, number) in &font_refs {
        fonts.insert(font.resource_name(), PdfObject::Reference(*number));
    }
    let resources = PdfDictionary::new()
        .with("Font", fonts)
        .with("ProcSet", PdfObject::Array(vec![PdfObject::name("PDF"), PdfObject::name("Text")]));

    let mut page_refs = Vec::with_capacity(document.page_count());
    let mut page_objects = Vec::with_capacity(document.page_count());
    for (page, footer) in document.iter() {
        let page_ref = pdf.allocate();
        let content_ref = pdf.allocate();
        let annotation_refs: Vec<u32> = footer.links.iter().map(|_| pdf.allocate()).collect();
        page_refs.push(page_ref);
        page_objects.push((page, footer, page_ref, content_ref, annotation_refs));
    }

    pdf.write_object(catalog_ref, &create_catalog(pages_ref).into())?;
    pdf.write_object(pages_ref, &create_pages(&page_refs).into())?;
    pdf.write_object(info_ref, &options.info.to_dictionary().into())?;
    for (font, number) in &font_refs {
        pdf.write_object(*number, &font.to_dictionary().into())?;
    }

    for (page, footer, page_ref, content_ref, annotation_refs) in page_objects {
        let content = renderer.page_content(page, footer);
        pdf.write_stream(content_ref, PdfStream::new(content.into_bytes()))?;

        for (link, number) in footer.links.iter().zip(&annotation_refs) {
            let baseline = renderer.flip(footer.baseline);
            let size = f64::from(footer.link_style.size);
            let x = f64::from(link.x);
            let rect = [x, baseline - size * 0.25, x + f64::from(link.width), baseline + size];
            pdf.write_object(*number, &create_link_annotation(rect, &link.url).into())?;
        }

        let mut dict = PdfDictionary::typed("Page")
            .with("Parent", PdfObject::Reference(pages_ref))
            .with("MediaBox", PdfObject::rect(0.0, 0.0, width, renderer.height))
            .with("Contents", PdfObject::Reference(content_ref))
            .with("Resources", resources.clone());
        if !annotation_refs.is_empty() {
            dict.insert("Annots", PdfObject::references(&annotation_refs));
        }
        pdf.write_object(page_ref, &dict.into())?;
    }

    let bytes = pdf.finish(catalog_ref, info_ref)?;
    tracing::debug!(
        pages = document.page_count(),
        bytes = bytes.len(),
        compressed = options.compress,
        "pdf written"
    );
    Ok(bytes)
}

struct PdfRenderer {
    height: f64,
}

impl PdfRenderer {
    fn flip(&self, y: f32) -> f64 {
        self.height - f64::from(y)
    }

    fn page_content(&self, page: &Page, footer: &FooterStamp) -> ContentStream {
        let mut cs = ContentStream::new();
        for item in page.items() {
            match item {
                PageItem::Text(line) => self.text_line(&mut cs, line),
                PageItem::Rule(rule) => self.rule(&mut cs, rule),
            }
        }

        self.text(&mut cs, &footer.label, footer.label_x, footer.baseline, &footer.label_style);
        if !footer.links_text.is_empty() {
            self.text(&mut cs, &footer.links_text, footer.links_x, footer.baseline, &footer.link_style);
        }
        cs
    }

    fn text_line(&self, cs: &mut ContentStream, line: &PlacedLine) {
        self.text(cs, &line.line.text, line.x, line.baseline, &line.style);
    }

    fn text(&self, cs: &mut ContentStream, text: &str, x: f32, baseline: f32, style: &TextStyle) {
        let font = StandardFont::for_face(style.font);
        cs.begin_text()
            .set_font(font.resource_name(), f64::from(style.size))
            .set_fill_rgb(style.color.to_unit())
            .move_text(f64::from(x), self.flip(baseline))
            .show_text(text)
            .end_text();
    }

    fn rule(&self, cs: &mut ContentStream, rule: &RuleMark) {
        let y = self.flip(rule.y);
        cs.save_state()
            .set_stroke_rgb(rule.color.to_unit())
            .set_line_width(f64::from(rule.thickness))
            .move_to(f64::from(rule.x1), y)
            .line_to(f64::from(rule.x2), y)
            .stroke()
            .restore_state();
    }
}
