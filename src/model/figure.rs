//! Figure type.

use super::{BBox, Paragraph};
use serde::{Deserialize, Serialize};

/// A figure region, with the text found inside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Figure {
    /// Region on the page image
    #[serde(rename = "box")]
    pub bbox: BBox,

    /// Global reading position
    pub order: i64,

    /// Paragraphs physically contained in the figure
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl Figure {
    /// Create a figure without nested text.
    pub fn new(bbox: BBox, order: i64) -> Self {
        Self {
            bbox,
            order,
            paragraphs: Vec::new(),
        }
    }

    /// Add a nested paragraph.
    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    /// Nested paragraphs in their own reading order.
    ///
    /// Sorting is stable, so paragraphs sharing an order keep input order.
    pub fn sorted_paragraphs(&self) -> Vec<&Paragraph> {
        let mut paragraphs: Vec<&Paragraph> = self.paragraphs.iter().collect();
        paragraphs.sort_by_key(|p| p.order);
        paragraphs
    }
}
