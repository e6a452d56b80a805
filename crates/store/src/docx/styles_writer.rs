//! Styles.xml writer
//!
//! Document defaults plus the Normal, ListParagraph, Footer, and Hyperlink
//! styles the body and footer refer to.

use crate::docx::{namespaces, xml_attr, XML_DECLARATION};

/// Writer for styles.xml
pub struct StylesWriter<'a> {
    font: &'a str,
    /// Default run size in half-points
    size: u32,
}

impl<'a> StylesWriter<'a> {
    pub fn new(font: &'a str, size_pt: f32) -> Self {
        Self {
            font,
            size: (size_pt * 2.0).round().max(1.0) as u32,
        }
    }

    pub fn write(&self) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(&format!(r#"<w:styles xmlns:w="{}">"#, namespaces::W));

        let font = xml_attr(self.font);
        xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
            font
        ));
        xml.push_str(&format!(
            r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#,
            self.size
        ));
        xml.push_str("</w:rPr></w:rPrDefault><w:pPrDefault><w:pPr>");
        xml.push_str(r#"<w:spacing w:after="0" w:line="264" w:lineRule="auto"/>"#);
        xml.push_str("</w:pPr></w:pPrDefault></w:docDefaults>");

        xml.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#);
        xml.push_str(r#"<w:style w:type="paragraph" w:styleId="ListParagraph"><w:name w:val="List Paragraph"/><w:basedOn w:val="Normal"/><w:pPr><w:ind w:left="720"/></w:pPr></w:style>"#);
        xml.push_str(r#"<w:style w:type="paragraph" w:styleId="Footer"><w:name w:val="footer"/><w:basedOn w:val="Normal"/></w:style>"#);
        xml.push_str(r#"<w:style w:type="character" w:styleId="Hyperlink"><w:name w:val="Hyperlink"/><w:rPr><w:u w:val="single"/></w:rPr></w:style>"#);

        xml.push_str("</w:styles>");
        xml
    }
}
