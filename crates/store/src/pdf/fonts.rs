//! PDF Font Handling
//!
//! Only the standard Type1 Helvetica faces are used; they need no embedding
//! and their widths match the layout metrics.

use super::objects::{PdfDictionary, PdfObject};
use layout_engine::FontFace;

/// Standard 14 fonts used by the exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    pub const ALL: [StandardFont; 2] = [StandardFont::Helvetica, StandardFont::HelveticaBold];

    pub fn for_face(face: FontFace) -> Self {
        match face {
            FontFace::Regular => StandardFont::Helvetica,
            FontFace::Bold => StandardFont::HelveticaBold,
        }
    }

    /// BaseFont name
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Name of the font in page resources
    pub fn resource_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
        }
    }

    /// Font dictionary for a non-embedded Type1 font
    pub fn to_dictionary(&self) -> PdfDictionary {
        PdfDictionary::typed("Font")
            .with("Subtype", PdfObject::name("Type1"))
            .with("BaseFont", PdfObject::name(self.base_font()))
            .with("Encoding", PdfObject::name("WinAnsiEncoding"))
    }
}
