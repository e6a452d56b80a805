//! Footer1.xml writer
//!
//! The footer paragraph reads `Page {PAGE} of {NUMPAGES}`, then a
//! right-aligned tab and the link labels separated by `" | "`. Page numbers
//! are complex fields, so the consuming application fills them in. Each link
//! label is a `w:hyperlink` whose target lives in the footer's own `.rels`.

use crate::docx::document_writer::{write_run, write_run_properties};
use crate::docx::{namespaces, twips, xml_text, FooterTemplate, Relationships, TextRun, XML_DECLARATION};
use layout_engine::{PageGeometry, LINK_SEPARATOR};

/// Footer XML together with the relationships it references
pub struct FooterPart {
    pub xml: String,
    pub rels: Relationships,
}

pub fn write_footer(template: &FooterTemplate, page: &PageGeometry) -> FooterPart {
    let mut rels = Relationships::new();
    let plain = |text: &str| TextRun::new(text, template.size).colored(template.color);

    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<w:ftr xmlns:w="{}" xmlns:r="{}">"#,
        namespaces::W,
        namespaces::R
    ));
    xml.push_str(r#"<w:p><w:pPr><w:pStyle w:val="Footer"/>"#);
    xml.push_str(&format!(
        r#"<w:tabs><w:tab w:val="right" w:pos="{}"/></w:tabs>"#,
        twips(page.usable_width())
    ));
    xml.push_str("</w:pPr>");

    write_run(&mut xml, &plain("Page "));
    write_field(&mut xml, "PAGE", &plain("1"));
    write_run(&mut xml, &plain(" of "));
    write_field(&mut xml, "NUMPAGES", &plain("1"));

    if !template.links.is_empty() {
        xml.push_str("<w:r><w:tab/></w:r>");
        for (i, link) in template.links.iter().enumerate() {
            if i > 0 {
                write_run(&mut xml, &plain(LINK_SEPARATOR));
            }
            let id = rels.add_hyperlink(&link.url);
            let label = TextRun::new(link.label.as_str(), template.size).colored(template.link_color);
            xml.push_str(&format!(r#"<w:hyperlink r:id="{}" w:history="1"><w:r>"#, id));
            write_run_properties(&mut xml, &label, true);
            xml.push_str(&format!(
                r#"<w:t xml:space="preserve">{}</w:t></w:r></w:hyperlink>"#,
                xml_text(&label.text)
            ));
        }
    }

    xml.push_str("</w:p></w:ftr>");
    FooterPart { xml, rels }
}

/// A complex field: begin, instruction, separate, cached result, end
fn write_field(xml: &mut String, instruction: &str, placeholder: &TextRun) {
    let mut props = String::new();
    write_run_properties(&mut props, placeholder, false);

    xml.push_str(&format!(r#"<w:r>{}<w:fldChar w:fldCharType="begin"/></w:r>"#, props));
    xml.push_str(&format!(
        r#"<w:r>{}<w:instrText xml:space="preserve"> {} </w:instrText></w:r>"#,
        props, instruction
    ));
    xml.push_str(&format!(r#"<w:r>{}<w:fldChar w:fldCharType="separate"/></w:r>"#, props));
    write_run(xml, placeholder);
    xml.push_str(&format!(r#"<w:r>{}<w:fldChar w:fldCharType="end"/></w:r>"#, props));
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_engine::FooterLink;

    fn template(links: Vec<FooterLink>) -> FooterTemplate {
        FooterTemplate {
            links,
            ..Default::default()
        }
    }

    #[test]
    fn test_page_fields() {
        let part = write_footer(&template(vec![]), &PageGeometry::default());
        let xml = &part.xml;
        assert!(xml.contains("> PAGE </w:instrText>"));
        assert!(xml.contains("> NUMPAGES </w:instrText>"));
        assert_eq!(xml.matches(r#"w:fldCharType="begin""#).count(), 2);
        assert_eq!(xml.matches(r#"w:fldCharType="end""#).count(), 2);
        assert!(xml.contains(">Page </w:t>"));
        assert!(xml.contains("> of </w:t>"));
        assert!(part.rels.is_empty());
        assert!(!xml.contains("<w:tab/>"));
    }

    #[test]
    fn test_links_are_hyperlinks() {
        let part = write_footer(
            &template(vec![
                FooterLink::new("Website", "https://example.com"),
                FooterLink::new("Guides & Tips", "https://example.com/guides"),
            ]),
            &PageGeometry::default(),
        );
        let xml = &part.xml;
        assert!(xml.contains(r#"<w:hyperlink r:id="rId1" w:history="1">"#));
        assert!(xml.contains(r#"<w:hyperlink r:id="rId2" w:history="1">"#));
        assert!(xml.contains(">Guides &amp; Tips</w:t>"));
        assert!(xml.contains("> | </w:t>"));
        assert_eq!(part.rels.get("rId2").unwrap().target, "https://example.com/guides");
        assert!(xml.contains(r#"<w:tab w:val="right" w:pos="9900"/>"#));
    }
}
