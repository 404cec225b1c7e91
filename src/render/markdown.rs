//! Markdown rendering for analyzed pages.

use std::path::Path;

use image::DynamicImage;

use crate::error::Result;
use crate::model::{DocumentResult, Paragraph, Table};

use super::compose::{compose, ElementRenderer};
use super::escape::{normalize, TextTarget};
use super::figure::ExtractedFigure;
use super::grid::TableGrid;
use super::{ExportOptions, RenderResult};

/// Convert a page to Markdown.
///
/// `out_path` is where the document will be written; figure images are
/// placed relative to it when figure export is enabled.
pub fn to_markdown(
    doc: &DocumentResult,
    image: Option<&DynamicImage>,
    out_path: &Path,
    options: &ExportOptions,
) -> Result<String> {
    Ok(MarkdownRenderer::new(options.clone())
        .render(doc, image, out_path)?
        .content)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: ExportOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Render a page, writing figure images as a side effect.
    ///
    /// Each fragment ends with a newline and fragments are separated by an
    /// extra newline. Fragment markup is emitted verbatim.
    pub fn render(
        &self,
        doc: &DocumentResult,
        image: Option<&DynamicImage>,
        out_path: &Path,
    ) -> Result<RenderResult> {
        let composition = compose(self, doc, image, out_path, &self.options)?;

        let content = composition
            .fragments
            .iter()
            .map(|f| f.markup.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        Ok(RenderResult::new(
            content,
            composition.figures,
            composition.stats,
        ))
    }

    fn text(&self, text: &str) -> String {
        normalize(text, TextTarget::Markdown, self.options.ignore_line_break)
    }
}

impl ElementRenderer for MarkdownRenderer {
    fn table(&self, table: &Table) -> (String, usize) {
        let grid = TableGrid::build(table, |cell| self.text(cell.text()));
        (grid.to_markdown(), grid.dropped_cells())
    }

    fn paragraph(&self, paragraph: &Paragraph) -> String {
        format!("{}\n", self.text(&paragraph.contents))
    }

    fn figure(&self, figure: &ExtractedFigure) -> String {
        format!(
            "<img src=\"{}\" width=\"{}px\"><br>\n",
            figure.src, self.options.figure_width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BBox, Cell};

    fn render(doc: &DocumentResult, options: ExportOptions) -> String {
        to_markdown(doc, None, Path::new("page.md"), &options).unwrap()
    }

    #[test]
    fn test_render_simple_paragraph() {
        let mut doc = DocumentResult::new();
        doc.add_paragraph(Paragraph::new(BBox::default(), 0, "Visit https://x.com now!"));

        let md = render(&doc, ExportOptions::new().with_ignore_line_break(true));
        assert_eq!(md, "Visit https://x\\.com now\\!\n");
    }

    #[test]
    fn test_render_line_breaks() {
        let mut doc = DocumentResult::new();
        doc.add_paragraph(Paragraph::new(BBox::default(), 0, "one\ntwo"));

        assert_eq!(render(&doc, ExportOptions::new()), "one<br>two\n");
        assert_eq!(
            render(&doc, ExportOptions::new().with_ignore_line_break(true)),
            "onetwo\n"
        );
    }

    #[test]
    fn test_fragments_separated_by_blank_line() {
        let mut doc = DocumentResult::new();
        doc.add_paragraph(Paragraph::new(BBox::default(), 2, "second"));
        doc.add_paragraph(Paragraph::new(BBox::default(), 1, "first"));
        doc.add_table(Table::new(BBox::default(), 3, 1, 2)
            .with_cell(Cell::new(1, 1, "a"))
            .with_cell(Cell::new(1, 2, "b")));

        let md = render(&doc, ExportOptions::new());
        assert_eq!(md, "first\n\nsecond\n\n|a|b|\n|-|-|\n");
    }

    #[test]
    fn test_table_cells_escaped_once() {
        let mut doc = DocumentResult::new();
        doc.add_table(
            Table::new(BBox::default(), 0, 2, 2)
                .with_cell(Cell::new(1, 1, "1.5").with_span(2, 2)),
        );

        let md = render(&doc, ExportOptions::new());
        assert_eq!(md, "|1\\.5||\n|-|-|\n|||\n");
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let mut doc = DocumentResult::new();
        doc.add_table(Table::new(BBox::default(), 0, 2, 2));
        doc.add_paragraph(Paragraph::new(BBox::default(), 1, "after"));

        assert_eq!(render(&doc, ExportOptions::new()), "\nafter\n");
    }

    #[test]
    fn test_render_with_stats() {
        let mut doc = DocumentResult::new();
        doc.add_paragraph(Paragraph::heading(BBox::default(), 0, "Title"));
        doc.add_table(
            Table::new(BBox::default(), 1, 1, 1)
                .with_cell(Cell::new(1, 1, "x"))
                .with_cell(Cell::new(4, 4, "lost")),
        );

        let result = MarkdownRenderer::new(ExportOptions::new())
            .render(&doc, None, Path::new("page.md"))
            .unwrap();
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.heading_count, 1);
        assert_eq!(result.stats.table_count, 1);
        assert_eq!(result.stats.dropped_cells, 1);
        assert!(result.figures.is_empty());
    }
}
