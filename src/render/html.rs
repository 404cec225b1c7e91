//! HTML rendering for analyzed pages.

use std::path::Path;

use image::DynamicImage;

use crate::error::Result;
use crate::model::{DocumentResult, Paragraph, Table};

use super::compose::{compose, ElementRenderer};
use super::escape::{normalize, TextTarget};
use super::figure::ExtractedFigure;
use super::grid::group_rows;
use super::sanitize::reformat;
use super::{ExportOptions, RenderResult};

/// Convert a page to HTML.
///
/// `out_path` is where the document will be written; figure images are
/// placed relative to it when figure export is enabled.
pub fn to_html(
    doc: &DocumentResult,
    image: Option<&DynamicImage>,
    out_path: &Path,
    options: &ExportOptions,
) -> Result<String> {
    Ok(HtmlRenderer::new(options.clone())
        .render(doc, image, out_path)?
        .content)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: ExportOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Render a page, writing figure images as a side effect.
    pub fn render(
        &self,
        doc: &DocumentResult,
        image: Option<&DynamicImage>,
        out_path: &Path,
    ) -> Result<RenderResult> {
        let composition = compose(self, doc, image, out_path, &self.options)?;

        let body: String = composition
            .fragments
            .iter()
            .map(|f| f.markup.as_str())
            .collect();
        let content = reformat(&format!("<html><body>{}</body></html>", body));

        Ok(RenderResult::new(
            content,
            composition.figures,
            composition.stats,
        ))
    }

    fn text(&self, text: &str) -> String {
        normalize(text, TextTarget::Html, self.options.ignore_line_break)
    }
}

impl ElementRenderer for HtmlRenderer {
    fn table(&self, table: &Table) -> (String, usize) {
        let mut output = String::from(r#"<table border="1" style="border-collapse: collapse">"#);

        for row in group_rows(&table.cells) {
            output.push_str("<tr>");
            for cell in row {
                output.push_str(&format!(
                    r#"<td rowspan="{}" colspan="{}">{}</td>"#,
                    cell.row_span,
                    cell.col_span,
                    self.text(cell.text())
                ));
            }
            output.push_str("</tr>");
        }

        output.push_str("</table>");
        (output, 0)
    }

    fn paragraph(&self, paragraph: &Paragraph) -> String {
        let contents = self.text(&paragraph.contents);
        if paragraph.is_heading() {
            format!("<h1>{}</h1>", contents)
        } else {
            format!("<p>{}</p>", contents)
        }
    }

    fn figure(&self, figure: &ExtractedFigure) -> String {
        format!(
            r#"<img src="{}" width="{}"><br>"#,
            figure.src, self.options.figure_width
        )
    }
}
