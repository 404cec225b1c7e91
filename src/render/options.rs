//! Export options and configuration.

use super::JsonFormat;

/// Default display width of embedded figures, in pixels.
pub const DEFAULT_FIGURE_WIDTH: u32 = 200;

/// Default subdirectory for extracted figure images.
pub const DEFAULT_FIGURE_DIR: &str = "figures";

/// Options controlling how a page is rendered and exported.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Delete embedded newlines instead of converting them to `<br>`
    pub ignore_line_break: bool,

    /// Crop figures to image files and reference them (HTML, Markdown)
    pub export_figures: bool,

    /// Also render the text found inside figures
    pub export_figure_letters: bool,

    /// Display width of embedded figures in pixels
    pub figure_width: u32,

    /// Subdirectory (next to the output file) receiving figure images
    pub figure_dir: String,

    /// JSON layout
    pub json_format: JsonFormat,

    /// Export pages in parallel
    pub parallel: bool,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable newline removal.
    pub fn with_ignore_line_break(mut self, ignore: bool) -> Self {
        self.ignore_line_break = ignore;
        self
    }

    /// Enable or disable figure export.
    pub fn with_figures(mut self, export: bool) -> Self {
        self.export_figures = export;
        self
    }

    /// Enable or disable export of text nested in figures.
    pub fn with_figure_letters(mut self, export: bool) -> Self {
        self.export_figure_letters = export;
        self
    }

    /// Set the figure display width.
    pub fn with_figure_width(mut self, width: u32) -> Self {
        self.figure_width = width;
        self
    }

    /// Set the figure subdirectory.
    pub fn with_figure_dir(mut self, dir: impl Into<String>) -> Self {
        self.figure_dir = dir.into();
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Disable parallel page export.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            ignore_line_break: false,
            export_figures: false,
            export_figure_letters: false,
            figure_width: DEFAULT_FIGURE_WIDTH,
            figure_dir: DEFAULT_FIGURE_DIR.to_string(),
            json_format: JsonFormat::Pretty,
            parallel: true,
        }
    }
}
