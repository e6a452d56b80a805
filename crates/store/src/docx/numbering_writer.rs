//! Numbering.xml writer
//!
//! A single bullet list definition shared by every bulleted paragraph.

use crate::docx::{namespaces, XML_DECLARATION};

/// `w:numId` referenced by bullet paragraphs
pub const BULLET_NUM_ID: u32 = 1;

const BULLET_ABSTRACT_ID: u32 = 0;

pub fn write_numbering() -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(r#"<w:numbering xmlns:w="{}">"#, namespaces::W));

    xml.push_str(&format!(r#"<w:abstractNum w:abstractNumId="{}">"#, BULLET_ABSTRACT_ID));
    xml.push_str(r#"<w:multiLevelType w:val="singleLevel"/>"#);
    xml.push_str(r#"<w:lvl w:ilvl="0">"#);
    xml.push_str(r#"<w:start w:val="1"/><w:numFmt w:val="bullet"/>"#);
    xml.push_str("<w:lvlText w:val=\"\u{2022}\"/><w:lvlJc w:val=\"left\"/>");
    xml.push_str(r#"<w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr>"#);
    xml.push_str("</w:lvl></w:abstractNum>");

    xml.push_str(&format!(
        r#"<w:num w:numId="{}"><w:abstractNumId w:val="{}"/></w:num>"#,
        BULLET_NUM_ID, BULLET_ABSTRACT_ID
    ));
    xml.push_str("</w:numbering>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_definition() {
        let xml = write_numbering();
        assert!(xml.contains(r#"<w:numFmt w:val="bullet"/>"#));
        assert!(xml.contains("<w:lvlText w:val=\"\u{2022}\"/>"));
        assert!(xml.contains(r#"<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>"#));
    }
}
