//! # unlayout
//!
//! Reconstruction and export layer for document layout analysis.
//!
//! Takes what a layout analyzer detected on a scanned page (paragraphs,
//! tables with spanning cells, figures, each with a bounding box and a
//! reading-order index) plus the page image, and produces HTML, Markdown,
//! CSV or JSON documents.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unlayout::{read_results, DocumentExporter, ExportOptions, Page};
//!
//! fn main() -> unlayout::Result<()> {
//!     let results = read_results("scan.json")?;
//!     let pages: Vec<Page> = results
//!         .into_iter()
//!         .enumerate()
//!         .map(|(i, result)| Page::new(i as u32 + 1, result))
//!         .collect();
//!
//!     let exporter = DocumentExporter::from_format_name("markdown", "results", "scan")?
//!         .with_options(ExportOptions::new().with_ignore_line_break(true));
//!
//!     for output in exporter.export_pages(&pages) {
//!         println!("{}", output?.path.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Table reconstruction**: spanning cells to dense grids or `rowspan`/`colspan` rows
//! - **Reading order**: tables, paragraphs and figures merged by analyzer order
//! - **Figure extraction**: crops written as PNG and referenced from the output
//! - **Parallel processing**: Uses Rayon for multi-page export

pub mod error;
pub mod export;
pub mod format;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{
    exporter_for, output_path, DocumentExporter, ExportOutput, PageExporter, Visualization,
};
pub use format::{OutputFormat, SUPPORTED_FORMATS};
pub use model::{BBox, Cell, DocumentResult, Figure, Page, Paragraph, Table};
pub use render::{ExportOptions, ExportStats, JsonFormat, RenderResult};

use serde::Deserialize;
use std::path::Path;

/// Analyzer output on disk: one page, or one entry per page.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResultsFile {
    Pages(Vec<DocumentResult>),
    Single(DocumentResult),
}

/// Load analyzer results from a JSON file.
///
/// The file holds either a single page result or an array with one result
/// per page.
///
/// # Example
///
/// ```no_run
/// use unlayout::read_results;
///
/// let pages = read_results("scan.json").unwrap();
/// println!("Pages: {}", pages.len());
/// ```
pub fn read_results<P: AsRef<Path>>(path: P) -> Result<Vec<DocumentResult>> {
    let data = std::fs::read_to_string(path)?;
    read_results_str(&data)
}

/// Load analyzer results from a JSON string.
pub fn read_results_str(json: &str) -> Result<Vec<DocumentResult>> {
    let results = match serde_json::from_str(json)? {
        ResultsFile::Pages(pages) => pages,
        ResultsFile::Single(page) => vec![page],
    };
    log::debug!("Loaded {} page result(s)", results.len());
    Ok(results)
}

/// Convert one page result to Markdown without figures.
///
/// # Example
///
/// ```
/// use unlayout::{to_markdown, BBox, DocumentResult, Paragraph};
///
/// let mut doc = DocumentResult::new();
/// doc.add_paragraph(Paragraph::new(BBox::default(), 0, "Hello"));
/// assert_eq!(to_markdown(&doc).unwrap(), "Hello\n");
/// ```
pub fn to_markdown(doc: &DocumentResult) -> Result<String> {
    render::to_markdown(doc, None, Path::new(""), &ExportOptions::default())
}

/// Convert one page result to HTML without figures.
pub fn to_html(doc: &DocumentResult) -> Result<String> {
    render::to_html(doc, None, Path::new(""), &ExportOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_single_result() {
        let json = r#"{
            "paragraphs": [{"box": [0, 0, 10, 10], "order": 0, "contents": "hi", "role": null}],
            "tables": [],
            "figures": []
        }"#;
        let pages = read_results_str(json).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].paragraphs[0].contents, "hi");
    }

    #[test]
    fn test_read_multiple_results() {
        let json = r#"[{"paragraphs": []}, {"tables": [{"box": [0,0,1,1], "order": 0, "n_row": 1, "n_col": 1, "cells": []}]}]"#;
        let pages = read_results_str(json).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].tables.len(), 1);
    }

    #[test]
    fn test_read_invalid_results() {
        assert!(matches!(read_results_str("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_results("/nonexistent/results.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_to_markdown_shortcut() {
        let mut doc = DocumentResult::new();
        doc.add_paragraph(Paragraph::heading(BBox::default(), 0, "Title"));
        assert_eq!(to_markdown(&doc).unwrap(), "Title\n");
        assert!(to_html(&doc).unwrap().contains("<h1>Title</h1>"));
    }
}
