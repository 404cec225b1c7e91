//! Paragraph type.

use super::BBox;
use serde::{Deserialize, Serialize};

/// Role tag the analyzer assigns to section headings.
pub const ROLE_SECTION_HEADINGS: &str = "section_headings";

/// A detected block of text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Region on the page image
    #[serde(rename = "box")]
    pub bbox: BBox,

    /// Global reading position
    pub order: i64,

    /// Recognized text, lines separated by `\n`
    #[serde(default)]
    pub contents: String,

    /// Category tag (e.g. "section_headings"); open-ended
    #[serde(default)]
    pub role: Option<String>,
}

impl Paragraph {
    /// Create a plain text paragraph.
    pub fn new(bbox: BBox, order: i64, contents: impl Into<String>) -> Self {
        Self {
            bbox,
            order,
            contents: contents.into(),
            role: None,
        }
    }

    /// Create a section heading.
    pub fn heading(bbox: BBox, order: i64, contents: impl Into<String>) -> Self {
        Self::new(bbox, order, contents).with_role(ROLE_SECTION_HEADINGS)
    }

    /// Set the role tag.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Check if this paragraph is a section heading.
    pub fn is_heading(&self) -> bool {
        self.role.as_deref() == Some(ROLE_SECTION_HEADINGS)
    }
}
