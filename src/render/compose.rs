//! Fragment collection shared by the HTML and Markdown renderers.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::{Error, Result};
use crate::model::{DocumentResult, Paragraph, Table};

use super::figure::{ExtractedFigure, FigureExtractor};
use super::order::{Fragment, FragmentKind, ReadingOrder};
use super::{ExportOptions, ExportStats};

/// Per-element markup for one output format.
pub trait ElementRenderer {
    /// Render a table. Returns the markup and the number of dropped cells.
    fn table(&self, table: &Table) -> (String, usize);

    /// Render a paragraph.
    fn paragraph(&self, paragraph: &Paragraph) -> String;

    /// Reference an extracted figure image.
    fn figure(&self, figure: &ExtractedFigure) -> String;
}

/// Fragments of a page in reading order, plus what was written to disk.
#[derive(Debug, Clone)]
pub struct Composition {
    /// Ordered fragments
    pub fragments: Vec<Fragment>,
    /// Figure images written
    pub figures: Vec<PathBuf>,
    /// Counts
    pub stats: ExportStats,
}

/// Render every element of a page and merge the fragments.
///
/// Fragments are collected tables, paragraphs, then figures, so equal
/// `order` values keep that sequence after the stable sort. Figure text is
/// tagged with its figure's order and follows the figure image.
pub fn compose<R: ElementRenderer>(
    renderer: &R,
    doc: &DocumentResult,
    image: Option<&DynamicImage>,
    out_path: &Path,
    options: &ExportOptions,
) -> Result<Composition> {
    let image = match (options.export_figures, image) {
        (true, None) => return Err(Error::MissingImage),
        (true, Some(image)) => Some(image),
        (false, _) => None,
    };

    let mut stats = ExportStats::new();
    let mut order = ReadingOrder::new();

    for table in &doc.tables {
        let (markup, dropped) = renderer.table(table);
        stats.table_count += 1;
        stats.dropped_cells += dropped as u32;
        order.push(Fragment::new(FragmentKind::Table, table.order, markup));
    }

    for paragraph in &doc.paragraphs {
        stats.paragraph_count += 1;
        if paragraph.is_heading() {
            stats.heading_count += 1;
        }
        order.push(Fragment::new(
            FragmentKind::Paragraph,
            paragraph.order,
            renderer.paragraph(paragraph),
        ));
    }

    let mut written = Vec::new();
    if let Some(image) = image {
        let extractor = FigureExtractor::new(out_path, options.figure_dir.as_str());
        let extracted = extractor.extract(&doc.figures, image)?;

        for (figure, target) in doc.figures.iter().zip(&extracted) {
            stats.figure_count += 1;
            if target.written {
                stats.figures_written += 1;
                written.push(target.path.clone());
                order.push(Fragment::new(
                    FragmentKind::Figure,
                    figure.order,
                    renderer.figure(target),
                ));
            } else {
                stats.figures_skipped += 1;
            }

            if options.export_figure_letters {
                for paragraph in figure.sorted_paragraphs() {
                    stats.figure_text_count += 1;
                    order.push(Fragment::new(
                        FragmentKind::FigureText,
                        figure.order,
                        renderer.paragraph(paragraph),
                    ));
                }
            }
        }
    }

    Ok(Composition {
        fragments: order.into_sorted(),
        figures: written,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BBox, Cell, Figure};
    use image::RgbImage;

    /// Tags each fragment with its element.
    struct Labels;

    impl ElementRenderer for Labels {
        fn table(&self, table: &Table) -> (String, usize) {
            (format!("table:{}", table.cells[0].text()), 0)
        }

        fn paragraph(&self, paragraph: &Paragraph) -> String {
            format!("text:{}", paragraph.contents)
        }

        fn figure(&self, figure: &ExtractedFigure) -> String {
            format!("figure:{}", figure.index)
        }
    }

    fn markup(composition: &Composition) -> Vec<&str> {
        composition
            .fragments
            .iter()
            .map(|f| f.markup.as_str())
            .collect()
    }

    #[test]
    fn test_equal_order_tables_paragraphs_figures() {
        let dir = tempfile::tempdir().unwrap();
        let image = DynamicImage::ImageRgb8(RgbImage::new(20, 20));

        // Inserted in the opposite sequence of the tie-break
        let mut doc = DocumentResult::new();
        doc.add_figure(
            Figure::new(BBox::new(0.0, 0.0, 10.0, 10.0), 4)
                .with_paragraph(Paragraph::new(BBox::default(), 1, "label")),
        );
        doc.add_paragraph(Paragraph::new(BBox::default(), 4, "body"));
        doc.add_table(Table::new(BBox::default(), 4, 1, 1).with_cell(Cell::new(1, 1, "grid")));
        doc.add_paragraph(Paragraph::new(BBox::default(), 3, "before"));

        let options = ExportOptions::new()
            .with_figures(true)
            .with_figure_letters(true);
        let composition = compose(
            &Labels,
            &doc,
            Some(&image),
            &dir.path().join("page.md"),
            &options,
        )
        .unwrap();

        assert_eq!(
            markup(&composition),
            vec!["text:before", "table:grid", "text:body", "figure:0", "text:label"]
        );
        let kinds: Vec<FragmentKind> = composition.fragments.iter().map(|f| f.kind).collect();
        assert_eq!(kinds[4], FragmentKind::FigureText);
        assert_eq!(composition.fragments[4].order, 4);
        assert_eq!(composition.figures.len(), 1);
    }

    #[test]
    fn test_paragraph_before_figure_on_equal_order() {
        let dir = tempfile::tempdir().unwrap();
        let image = DynamicImage::ImageRgb8(RgbImage::new(20, 20));

        let mut doc = DocumentResult::new();
        doc.add_figure(Figure::new(BBox::new(2.0, 2.0, 8.0, 8.0), 0));
        doc.add_paragraph(Paragraph::new(BBox::default(), 0, "caption"));

        let composition = compose(
            &Labels,
            &doc,
            Some(&image),
            &dir.path().join("page.html"),
            &ExportOptions::new().with_figures(true),
        )
        .unwrap();

        assert_eq!(markup(&composition), vec!["text:caption", "figure:0"]);
        assert_eq!(composition.stats.figures_written, 1);
    }

    #[test]
    fn test_missing_image_with_figure_export() {
        let result = compose(
            &Labels,
            &DocumentResult::new(),
            None,
            Path::new("page.md"),
            &ExportOptions::new().with_figures(true),
        );
        assert!(matches!(result, Err(Error::MissingImage)));
    }
}
