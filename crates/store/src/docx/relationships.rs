//! Relationships (.rels) generation
//!
//! Each package part that points at other parts or at external URLs carries
//! a `.rels` file. IDs are assigned in insertion order (`rId1`, `rId2`, ...).

use crate::docx::{relationship_types, xml_attr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    Internal,
    External,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
    pub target_mode: TargetMode,
}

/// Ordered relationships of one part
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its ID
    pub fn add(&mut self, rel_type: &str, target: &str, target_mode: TargetMode) -> String {
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
            target_mode,
        });
        id
    }

    /// Add an external hyperlink target and return its ID
    pub fn add_hyperlink(&mut self, url: &str) -> String {
        self.add(relationship_types::HYPERLINK, url, TargetMode::External)
    }

    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.entries.iter().find(|r| r.id == id)
    }

    pub fn get_by_type(&self, rel_type: &str) -> Option<&Relationship> {
        self.entries.iter().find(|r| r.rel_type == rel_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.entries.iter()
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from(crate::docx::XML_DECLARATION);
        xml.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
        for rel in &self.entries {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}""#,
                rel.id,
                rel.rel_type,
                xml_attr(&rel.target)
            ));
            if rel.target_mode == TargetMode::External {
                xml.push_str(r#" TargetMode="External""#);
            }
            xml.push_str("/>");
        }
        xml.push_str("</Relationships>");
        xml
    }
}

/// Package-level relationships: main document and core properties
pub fn create_root_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(relationship_types::DOCUMENT, "word/document.xml", TargetMode::Internal);
    rels.add(relationship_types::CORE_PROPERTIES, "docProps/core.xml", TargetMode::Internal);
    rels
}

/// Relationships of `word/document.xml`; returns them with the footer's ID
pub fn create_document_rels() -> (Relationships, String) {
    let mut rels = Relationships::new();
    rels.add(relationship_types::STYLES, "styles.xml", TargetMode::Internal);
    rels.add(relationship_types::NUMBERING, "numbering.xml", TargetMode::Internal);
    let footer = rels.add(relationship_types::FOOTER, "footer1.xml", TargetMode::Internal);
    (rels, footer)
}
