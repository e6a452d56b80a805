//! PDF Document Structure
//!
//! Catalog, page tree, Info dictionary, and link annotations.

use super::objects::{PdfDictionary, PdfObject};
use chrono::{DateTime, Utc};

/// PDF version written in the header
pub const PDF_VERSION: &str = "1.4";

/// Values for the Info dictionary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl DocumentInfo {
    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        let text_entries = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Creator", &self.creator),
            ("Producer", &self.producer),
        ];
        for (key, value) in text_entries {
            if let Some(value) = value {
                dict.insert(key, PdfObject::text(value));
            }
        }
        if let Some(date) = self.creation_date {
            dict.insert("CreationDate", PdfObject::text(pdf_date(&date)));
        }
        dict
    }
}

/// Format a timestamp as a PDF date string (`D:YYYYMMDDHHmmSS+00'00'`)
pub fn pdf_date(date: &DateTime<Utc>) -> String {
    format!("D:{}+00'00'", date.format("%Y%m%d%H%M%S"))
}

pub fn create_catalog(pages_ref: u32) -> PdfDictionary {
    PdfDictionary::typed("Catalog").with("Pages", PdfObject::Reference(pages_ref))
}

pub fn create_pages(page_refs: &[u32]) -> PdfDictionary {
    PdfDictionary::typed("Pages")
        .with("Kids", PdfObject::references(page_refs))
        .with("Count", page_refs.len() as i64)
}

/// A `/Link` annotation opening `url`, over `[llx lly urx ury]` in PDF space
pub fn create_link_annotation(rect: [f64; 4], url: &str) -> PdfDictionary {
    let action = PdfDictionary::typed("Action")
        .with("S", PdfObject::name("URI"))
        .with("URI", PdfObject::text(url));
    PdfDictionary::typed("Annot")
        .with("Subtype", PdfObject::name("Link"))
        .with("Rect", PdfObject::rect(rect[0], rect[1], rect[2], rect[3]))
        .with("Border", PdfObject::Array(vec![0i64.into(), 0i64.into(), 0i64.into()]))
        .with("A", action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pdf_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(pdf_date(&date), "D:20240309140500+00'00'");
    }

    #[test]
    fn test_info_dictionary_skips_missing() {
        let info = DocumentInfo {
            title: Some("CV Review".to_string()),
            author: Some("Resume Analysis".to_string()),
            ..Default::default()
        };
        let dict = info.to_dictionary();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("Title"), Some(&PdfObject::text("CV Review")));
        assert!(dict.get("Creator").is_none());
    }

    #[test]
    fn test_pages_tree() {
        let pages = create_pages(&[4, 6, 8]);
        assert_eq!(pages.get("Count"), Some(&PdfObject::Integer(3)));
        assert_eq!(pages.get("Kids"), Some(&PdfObject::references(&[4, 6, 8])));
    }

    #[test]
    fn test_link_annotation() {
        let annot = create_link_annotation([10.0, 20.0, 30.0, 40.0], "https://example.com");
        assert_eq!(annot.get("Subtype"), Some(&PdfObject::name("Link")));
        match annot.get("A") {
            Some(PdfObject::Dictionary(action)) => {
                assert_eq!(action.get("URI"), Some(&PdfObject::text("https://example.com")));
            }
            other => panic!("unexpected action {:?}", other),
        }
    }
}
