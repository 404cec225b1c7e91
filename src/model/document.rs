//! Page-level analyzer output.

use super::{Figure, Paragraph, Table};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// Everything the analyzer detected on one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Text blocks
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Tables
    #[serde(default)]
    pub tables: Vec<Table>,

    /// Figures
    #[serde(default)]
    pub figures: Vec<Figure>,
}

impl DocumentResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Add a figure.
    pub fn add_figure(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    /// Check if nothing was detected.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty() && self.figures.is_empty()
    }

    /// Copy of this result with every `\n` removed from text contents.
    pub fn without_line_breaks(&self) -> Self {
        let strip = |p: &Paragraph| Paragraph {
            contents: p.contents.replace('\n', ""),
            ..p.clone()
        };

        Self {
            paragraphs: self.paragraphs.iter().map(strip).collect(),
            tables: self
                .tables
                .iter()
                .map(|t| {
                    let mut t = t.clone();
                    for cell in &mut t.cells {
                        if let Some(ref mut contents) = cell.contents {
                            *contents = contents.replace('\n', "");
                        }
                    }
                    t
                })
                .collect(),
            figures: self
                .figures
                .iter()
                .map(|f| Figure {
                    paragraphs: f.paragraphs.iter().map(strip).collect(),
                    ..f.clone()
                })
                .collect(),
        }
    }
}

/// One page ready for export: analyzer output plus the page raster.
#[derive(Debug, Clone)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Analyzer output for this page
    pub result: DocumentResult,

    /// Decoded page image, needed only for figure export
    pub image: Option<DynamicImage>,
}

impl Page {
    /// Create a page without a raster.
    pub fn new(number: u32, result: DocumentResult) -> Self {
        Self {
            number,
            result,
            image: None,
        }
    }

    /// Attach the page raster.
    pub fn with_image(mut self, image: DynamicImage) -> Self {
        self.image = Some(image);
        self
    }
}
