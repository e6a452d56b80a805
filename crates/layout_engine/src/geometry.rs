//! Page Geometry
//!
//! Page size and margins in points (1/72 inch). Layout works in top-down
//! coordinates: `y = 0` is the top edge of the page and the vertical cursor
//! grows toward the bottom edge.

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Standard page sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageSize {
    /// A4 (210mm x 297mm)
    A4,
    /// US Letter (8.5" x 11")
    Letter,
}

impl PageSize {
    /// Get the width and height in points
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

/// Page dimensions, margins, and footer placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    /// Content never extends below `height - margin_bottom`
    pub margin_bottom: f32,
    pub margin_left: f32,
    /// Distance from the bottom edge to the footer baseline
    pub footer_offset: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::for_size(PageSize::A4)
    }
}

impl PageGeometry {
    /// Geometry for a standard page size with the default margins
    pub fn for_size(size: PageSize) -> Self {
        let (width, height) = size.dimensions();
        Self {
            width,
            height,
            margin_top: 56.0,
            margin_right: 50.0,
            margin_bottom: 64.0,
            margin_left: 50.0,
            footer_offset: 32.0,
        }
    }

    /// Width available to content between the side margins
    pub fn usable_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Lowest y (top-down) a line may extend to
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin_bottom
    }

    /// Height available to content between the top and bottom margins
    pub fn content_height(&self) -> f32 {
        self.content_bottom() - self.margin_top
    }

    /// Baseline of the footer line (top-down)
    pub fn footer_baseline(&self) -> f32 {
        self.height - self.footer_offset
    }

    /// Right edge of the content area
    pub fn content_right(&self) -> f32 {
        self.width - self.margin_right
    }

    /// Check that the geometry leaves room for at least `min_line_height`
    pub fn validate(&self, min_line_height: f32) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(LayoutError::InvalidPageSetup(format!(
                "page size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if [
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
            self.footer_offset,
        ]
        .iter()
        .any(|m| *m < 0.0)
        {
            return Err(LayoutError::InvalidPageSetup(
                "margins must not be negative".to_string(),
            ));
        }
        if self.usable_width() <= 0.0 {
            return Err(LayoutError::InvalidPageSetup(format!(
                "side margins leave no content width ({}pt)",
                self.usable_width()
            )));
        }
        if self.content_height() < min_line_height {
            return Err(LayoutError::InvalidPageSetup(format!(
                "content height {}pt cannot hold a {}pt line",
                self.content_height(),
                min_line_height
            )));
        }
        Ok(())
    }
}
