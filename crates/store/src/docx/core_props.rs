//! docProps/core.xml writer

use crate::docx::{namespaces, xml_text, CoreProperties, XML_DECLARATION};
use chrono::SecondsFormat;

pub fn write_core_properties(props: &CoreProperties) -> String {
    let created = props.created.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<cp:coreProperties xmlns:cp="{}" xmlns:dc="{}" xmlns:dcterms="{}" xmlns:xsi="{}">"#,
        namespaces::CP,
        namespaces::DC,
        namespaces::DCTERMS,
        namespaces::XSI,
    ));
    xml.push_str(&format!("<dc:title>{}</dc:title>", xml_text(&props.title)));
    xml.push_str(&format!("<dc:creator>{}</dc:creator>", xml_text(&props.creator)));
    xml.push_str(&format!(
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
        created
    ));
    xml.push_str("</cp:coreProperties>");
    xml
}
