//! Rendering result with figure artifacts and statistics.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Result of rendering one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered document text
    pub content: String,

    /// Figure images written while rendering
    pub figures: Vec<PathBuf>,

    /// Rendering statistics
    pub stats: ExportStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, figures: Vec<PathBuf>, stats: ExportStats) -> Self {
        Self {
            content,
            figures,
            stats,
        }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            figures: Vec::new(),
            stats: ExportStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Counts collected while rendering a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStats {
    /// Top-level paragraphs rendered
    pub paragraph_count: u32,

    /// Paragraphs rendered as headings
    pub heading_count: u32,

    /// Tables rendered
    pub table_count: u32,

    /// Figures seen
    pub figure_count: u32,

    /// Figure images written
    pub figures_written: u32,

    /// Figures skipped because their region was empty
    pub figures_skipped: u32,

    /// Paragraphs rendered from inside figures
    pub figure_text_count: u32,

    /// Table cells dropped because they were outside the declared grid
    pub dropped_cells: u32,
}

impl ExportStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExportStats) {
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.table_count += other.table_count;
        self.figure_count += other.figure_count;
        self.figures_written += other.figures_written;
        self.figures_skipped += other.figures_skipped;
        self.figure_text_count += other.figure_text_count;
        self.dropped_cells += other.dropped_cells;
    }
}
