//! Document.xml writer
//!
//! Paragraphs become `w:p` elements; the section properties carry the page
//! size, margins, and the default footer reference.

use crate::docx::numbering_writer::BULLET_NUM_ID;
use crate::docx::{namespaces, twips, xml_text, DocxDocument, Paragraph, TextRun, XML_DECLARATION};
use layout_engine::PageGeometry;

/// Writer for document.xml
pub struct DocumentWriter<'a> {
    footer_rel_id: &'a str,
}

impl<'a> DocumentWriter<'a> {
    pub fn new(footer_rel_id: &'a str) -> Self {
        Self { footer_rel_id }
    }

    pub fn write(&self, document: &DocxDocument) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R
        ));
        xml.push_str("<w:body>");
        for paragraph in &document.paragraphs {
            write_paragraph(&mut xml, paragraph);
        }
        self.write_section(&mut xml, &document.page);
        xml.push_str("</w:body></w:document>");
        xml
    }

    fn write_section(&self, xml: &mut String, page: &PageGeometry) {
        xml.push_str("<w:sectPr>");
        xml.push_str(&format!(
            r#"<w:footerReference w:type="default" r:id="{}"/>"#,
            self.footer_rel_id
        ));
        xml.push_str(&format!(
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            twips(page.width),
            twips(page.height)
        ));
        xml.push_str(&format!(
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="708" w:footer="{}" w:gutter="0"/>"#,
            twips(page.margin_top),
            twips(page.margin_right),
            twips(page.margin_bottom),
            twips(page.margin_left),
            twips(page.footer_offset)
        ));
        xml.push_str("</w:sectPr>");
    }
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) {
    xml.push_str("<w:p><w:pPr>");
    if paragraph.is_bullet {
        xml.push_str(r#"<w:pStyle w:val="ListParagraph"/>"#);
        xml.push_str(&format!(
            r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="{}"/></w:numPr>"#,
            BULLET_NUM_ID
        ));
    }
    if let Some(color) = paragraph.divider {
        xml.push_str(&format!(
            r#"<w:pBdr><w:bottom w:val="single" w:sz="6" w:space="1" w:color="{}"/></w:pBdr>"#,
            color.hex_digits()
        ));
    }
    xml.push_str(&format!(
        r#"<w:spacing w:before="0" w:after="{}"/>"#,
        twips(paragraph.spacing_after)
    ));
    xml.push_str("</w:pPr>");

    for run in &paragraph.runs {
        write_run(xml, run);
    }
    xml.push_str("</w:p>");
}

pub(crate) fn write_run(xml: &mut String, run: &TextRun) {
    xml.push_str("<w:r>");
    write_run_properties(xml, run, false);
    xml.push_str(&format!(
        r#"<w:t xml:space="preserve">{}</w:t>"#,
        xml_text(&run.text)
    ));
    xml.push_str("</w:r>");
}

pub(crate) fn write_run_properties(xml: &mut String, run: &TextRun, underline: bool) {
    xml.push_str("<w:rPr>");
    if run.bold {
        xml.push_str("<w:b/><w:bCs/>");
    }
    if run.italic {
        xml.push_str("<w:i/><w:iCs/>");
    }
    if let Some(color) = run.color {
        xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, color.hex_digits()));
    }
    if underline {
        xml.push_str(r#"<w:u w:val="single"/>"#);
    }
    let size = run.half_points();
    xml.push_str(&format!(r#"<w:sz w:val="{}"/><w:szCs w:val="{}"/>"#, size, size));
    xml.push_str("</w:rPr>");
}
