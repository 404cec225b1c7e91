//! Output format names and validation.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Format names accepted on the command line and in configuration.
pub const SUPPORTED_FORMATS: &[&str] = &["json", "csv", "html", "markdown", "md"];

/// Output format of a page export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Structural JSON dump
    Json,
    /// Paragraphs and table grids as CSV
    Csv,
    /// HTML document
    Html,
    /// Markdown document
    Markdown,
}

impl OutputFormat {
    /// All formats.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Json,
        OutputFormat::Csv,
        OutputFormat::Html,
        OutputFormat::Markdown,
    ];

    /// Parse a format name, case-insensitively. `markdown` and `md` are
    /// the same format.
    ///
    /// # Example
    /// ```
    /// use unlayout::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::parse("MD").unwrap(), OutputFormat::Markdown);
    /// assert!(OutputFormat::parse("docx").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(Error::UnsupportedFormat(name.to_string())),
        }
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "md",
        }
    }

    /// MIME type of the output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Html => "text/html",
            OutputFormat::Markdown => "text/markdown",
        }
    }

    /// Check if this format can embed extracted figures.
    pub fn supports_figures(&self) -> bool {
        matches!(self, OutputFormat::Html | OutputFormat::Markdown)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Check if a format name is supported.
pub fn is_supported(name: &str) -> bool {
    OutputFormat::parse(name).is_ok()
}
