//! Rendering module for converting analyzed pages to output formats.
//!
//! HTML and Markdown go through the full reconstruction pipeline: table
//! grids, figure extraction, reading-order merge. JSON and CSV are
//! structural dumps of the analyzer output.

mod compose;
mod delimited;
pub mod escape;
pub mod figure;
pub mod grid;
mod html;
mod json;
mod markdown;
mod options;
pub mod order;
mod result;
mod sanitize;

pub use compose::{compose, Composition, ElementRenderer};
pub use delimited::to_csv;
pub use escape::{escape_html, escape_markdown, normalize, unescape_markdown, TextTarget};
pub use figure::{crop_figure, figure_file_name, ExtractedFigure, FigureExtractor};
pub use grid::{group_rows, TableGrid};
pub use html::{to_html, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{ExportOptions, DEFAULT_FIGURE_DIR, DEFAULT_FIGURE_WIDTH};
pub use order::{merge, Fragment, FragmentKind, ReadingOrder};
pub use result::{ExportStats, RenderResult};
pub use sanitize::reformat as reformat_html;
