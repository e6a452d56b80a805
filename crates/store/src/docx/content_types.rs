//! [Content_Types].xml generation

use crate::docx::content_type_values;
use std::collections::BTreeMap;

/// Content types by extension and by part name
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    defaults: BTreeMap<String, String>,
    overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    pub fn new() -> Self {
        let mut ct = Self::default();
        ct.add_default("rels", content_type_values::RELATIONSHIPS);
        ct.add_default("xml", "application/xml");
        ct
    }

    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults.insert(extension.to_string(), content_type.to_string());
    }

    /// Override the type of one part; a leading `/` is added when missing
    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        let part = if part_name.starts_with('/') {
            part_name.to_string()
        } else {
            format!("/{}", part_name)
        };
        self.overrides.insert(part, content_type.to_string());
    }

    /// Content type of a part, by override then by extension
    pub fn get(&self, part_name: &str) -> Option<&str> {
        let part = format!("/{}", part_name.trim_start_matches('/'));
        self.overrides
            .get(&part)
            .or_else(|| {
                part.rsplit_once('.')
                    .and_then(|(_, ext)| self.defaults.get(ext))
            })
            .map(String::as_str)
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from(crate::docx::XML_DECLARATION);
        xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
        for (ext, ct) in &self.defaults {
            xml.push_str(&format!(r#"<Default Extension="{}" ContentType="{}"/>"#, ext, ct));
        }
        for (part, ct) in &self.overrides {
            xml.push_str(&format!(r#"<Override PartName="{}" ContentType="{}"/>"#, part, ct));
        }
        xml.push_str("</Types>");
        xml
    }
}

/// Content types for every part the exporter writes
pub fn create_default_content_types() -> ContentTypes {
    let mut ct = ContentTypes::new();
    ct.add_override("word/document.xml", content_type_values::DOCUMENT);
    ct.add_override("word/styles.xml", content_type_values::STYLES);
    ct.add_override("word/numbering.xml", content_type_values::NUMBERING);
    ct.add_override("word/footer1.xml", content_type_values::FOOTER);
    ct.add_override("docProps/core.xml", content_type_values::CORE_PROPERTIES);
    ct
}
