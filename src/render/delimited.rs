//! CSV dump of paragraphs and tables.
//!
//! Elements are written in reading order (tables before paragraphs on
//! equal order). A paragraph is one single-field record, a table is its
//! dense grid, and every element is followed by a record holding one empty
//! field. Figures are not included.

use crate::error::{Error, Result};
use crate::model::DocumentResult;

use super::grid::TableGrid;

/// Serialize a page result to CSV.
///
/// With `ignore_line_break`, newlines are removed; otherwise they are kept
/// and the field is quoted.
pub fn to_csv(doc: &DocumentResult, ignore_line_break: bool) -> Result<String> {
    let text = |s: &str| {
        if ignore_line_break {
            s.replace('\n', "")
        } else {
            s.to_string()
        }
    };

    let mut elements: Vec<(i64, Vec<Vec<String>>)> = Vec::new();

    for table in &doc.tables {
        let grid = TableGrid::build(table, |cell| text(cell.text()));
        let rows = grid.rows().map(|row| row.to_vec()).collect();
        elements.push((table.order, rows));
    }

    for paragraph in &doc.paragraphs {
        elements.push((paragraph.order, vec![vec![text(&paragraph.contents)]]));
    }

    elements.sort_by_key(|(order, _)| *order);

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    for (_, rows) in &elements {
        for row in rows {
            writer.write_record(row)?;
        }
        writer.write_record([""])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Render(format!("CSV flush error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::Render(format!("CSV encoding error: {}", e)))
}
