//! Page export: file naming, writing, and multi-page export.
//!
//! Each page is written to `<out_dir>/<stem>_p<page>.<ext>`. Pages are
//! independent, so [`DocumentExporter::export_pages`] runs them in parallel
//! and reports one result per page.
//!
//! # Example
//!
//! ```no_run
//! use unlayout::export::DocumentExporter;
//! use unlayout::model::{DocumentResult, Page};
//!
//! fn main() -> unlayout::Result<()> {
//!     let exporter = DocumentExporter::from_format_name("markdown", "results", "scan")?;
//!     let output = exporter.export_page(&Page::new(1, DocumentResult::new()))?;
//!     println!("{}", output.path.display());
//!     Ok(())
//! }
//! ```

mod formats;
mod visualization;

pub use formats::{CsvExporter, HtmlExporter, JsonExporter, MarkdownExporter};
pub use visualization::{visualization_path, write_visualization, Visualization};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::format::OutputFormat;
use crate::model::Page;
use crate::render::{ExportOptions, ExportStats, RenderResult};

/// Renders one page in a specific output format.
///
/// Implement this trait to add an output format.
pub trait PageExporter: Send + Sync {
    /// Format produced by this exporter.
    fn format(&self) -> OutputFormat;

    /// Render a page that will be written to `out_path`.
    ///
    /// Side files (figure images) may be written relative to `out_path`.
    fn render(&self, page: &Page, out_path: &Path, options: &ExportOptions) -> Result<RenderResult>;

    /// File extension of the output.
    fn extension(&self) -> &str {
        self.format().extension()
    }
}

/// Built-in exporter for a format.
pub fn exporter_for(format: OutputFormat) -> Arc<dyn PageExporter> {
    match format {
        OutputFormat::Json => Arc::new(JsonExporter),
        OutputFormat::Csv => Arc::new(CsvExporter),
        OutputFormat::Html => Arc::new(HtmlExporter),
        OutputFormat::Markdown => Arc::new(MarkdownExporter),
    }
}

/// `<out_dir>/<stem>_p<page>.<extension>`
pub fn output_path(out_dir: &Path, stem: &str, page: u32, extension: &str) -> PathBuf {
    out_dir.join(format!("{}_p{}.{}", stem, page, extension))
}

/// Files written for one page.
#[derive(Debug, Clone)]
pub struct ExportOutput {
    /// Page number (1-indexed)
    pub page: u32,

    /// The exported document
    pub path: PathBuf,

    /// Figure images written alongside
    pub figures: Vec<PathBuf>,

    /// Rendering statistics
    pub stats: ExportStats,
}

/// Exports the pages of one source document.
#[derive(Clone)]
pub struct DocumentExporter {
    exporter: Arc<dyn PageExporter>,
    out_dir: PathBuf,
    stem: String,
    options: ExportOptions,
}

impl DocumentExporter {
    /// Create an exporter writing `<out_dir>/<stem>_p<page>.<ext>` files.
    pub fn new(format: OutputFormat, out_dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            exporter: exporter_for(format),
            out_dir: out_dir.into(),
            stem: stem.into(),
            options: ExportOptions::default(),
        }
    }

    /// Create an exporter from a format name.
    ///
    /// Unsupported names are rejected here, before any file is touched.
    pub fn from_format_name(
        format: &str,
        out_dir: impl Into<PathBuf>,
        stem: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::new(OutputFormat::parse(format)?, out_dir, stem))
    }

    /// Set export options.
    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a custom page exporter.
    pub fn with_exporter(mut self, exporter: Arc<dyn PageExporter>) -> Self {
        self.exporter = exporter;
        self
    }

    /// Export options in use.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Output format in use.
    pub fn format(&self) -> OutputFormat {
        self.exporter.format()
    }

    /// Path the given page will be written to.
    pub fn page_path(&self, page: u32) -> PathBuf {
        output_path(&self.out_dir, &self.stem, page, self.exporter.extension())
    }

    /// Render and write one page.
    ///
    /// Errors are wrapped in [`Error::Page`].
    pub fn export_page(&self, page: &Page) -> Result<ExportOutput> {
        self.export_page_inner(page)
            .map_err(|e| e.on_page(page.number))
    }

    fn export_page_inner(&self, page: &Page) -> Result<ExportOutput> {
        if self.options.export_figures
            && self.exporter.format().supports_figures()
            && page.image.is_none()
        {
            return Err(Error::MissingImage);
        }

        fs::create_dir_all(&self.out_dir).map_err(|source| Error::CreateDir {
            path: self.out_dir.clone(),
            source,
        })?;

        let path = self.page_path(page.number);
        let rendered = self.exporter.render(page, &path, &self.options)?;

        fs::write(&path, rendered.content.as_bytes()).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        log::info!(
            "Exported page {} to {} ({} figures)",
            page.number,
            path.display(),
            rendered.figures.len()
        );

        Ok(ExportOutput {
            page: page.number,
            path,
            figures: rendered.figures,
            stats: rendered.stats,
        })
    }

    /// Export every page, one result per page in input order.
    ///
    /// A failing page does not stop the others.
    pub fn export_pages(&self, pages: &[Page]) -> Vec<Result<ExportOutput>> {
        if self.options.parallel {
            pages.par_iter().map(|page| self.export_page(page)).collect()
        } else {
            pages.iter().map(|page| self.export_page(page)).collect()
        }
    }
}

impl std::fmt::Debug for DocumentExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentExporter")
            .field("format", &self.exporter.format())
            .field("out_dir", &self.out_dir)
            .field("stem", &self.stem)
            .field("options", &self.options)
            .finish()
    }
}
