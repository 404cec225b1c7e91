//! Page exporters for the built-in formats.

use std::path::Path;

use crate::error::Result;
use crate::format::OutputFormat;
use crate::model::Page;
use crate::render::{
    to_csv, to_json, ExportOptions, HtmlRenderer, MarkdownRenderer, RenderResult,
};

use super::PageExporter;

/// JSON dump of the analyzer output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl PageExporter for JsonExporter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, page: &Page, _out_path: &Path, options: &ExportOptions) -> Result<RenderResult> {
        let content = to_json(&page.result, options.json_format, options.ignore_line_break)?;
        Ok(RenderResult::content_only(content))
    }
}

/// CSV dump of paragraphs and table grids.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl PageExporter for CsvExporter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }

    fn render(&self, page: &Page, _out_path: &Path, options: &ExportOptions) -> Result<RenderResult> {
        let content = to_csv(&page.result, options.ignore_line_break)?;
        Ok(RenderResult::content_only(content))
    }
}

/// HTML document with tables, figures and reading order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExporter;

impl PageExporter for HtmlExporter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(&self, page: &Page, out_path: &Path, options: &ExportOptions) -> Result<RenderResult> {
        HtmlRenderer::new(options.clone()).render(&page.result, page.image.as_ref(), out_path)
    }
}

/// Markdown document with tables, figures and reading order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownExporter;

impl PageExporter for MarkdownExporter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }

    fn render(&self, page: &Page, out_path: &Path, options: &ExportOptions) -> Result<RenderResult> {
        MarkdownRenderer::new(options.clone()).render(&page.result, page.image.as_ref(), out_path)
    }
}
