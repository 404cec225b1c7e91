//! Table types.

use super::BBox;
use serde::{Deserialize, Serialize};

/// A table with its logical grid size and spanning cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Region on the page image
    #[serde(rename = "box")]
    pub bbox: BBox,

    /// Global reading position
    pub order: i64,

    /// Number of logical rows
    pub n_row: usize,

    /// Number of logical columns
    pub n_col: usize,

    /// Cells in row-major order
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Table {
    /// Create an empty table with the given grid size.
    pub fn new(bbox: BBox, order: i64, n_row: usize, n_col: usize) -> Self {
        Self {
            bbox,
            order,
            n_row,
            n_col,
            cells: Vec::new(),
        }
    }

    /// Add a cell.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Builder-style variant of [`Table::add_cell`].
    pub fn with_cell(mut self, cell: Cell) -> Self {
        self.add_cell(cell);
        self
    }

    /// Check if the table has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if any cell spans more than one row or column.
    pub fn has_merged_cells(&self) -> bool {
        self.cells
            .iter()
            .any(|c| c.row_span > 1 || c.col_span > 1)
    }
}

/// A table cell anchored at its top-left grid position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// Anchor row (1-indexed)
    pub row: usize,

    /// Anchor column (1-indexed)
    pub col: usize,

    /// Rows covered
    #[serde(default = "one")]
    pub row_span: usize,

    /// Columns covered
    #[serde(default = "one")]
    pub col_span: usize,

    /// Cell text, if any was recognized
    #[serde(default)]
    pub contents: Option<String>,

    /// Region on the page image
    #[serde(rename = "box", default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BBox>,
}

fn one() -> usize {
    1
}

impl Cell {
    /// Create a 1x1 cell.
    pub fn new(row: usize, col: usize, contents: impl Into<String>) -> Self {
        Self {
            row,
            col,
            row_span: 1,
            col_span: 1,
            contents: Some(contents.into()),
            bbox: None,
        }
    }

    /// Create a 1x1 cell without contents.
    pub fn empty(row: usize, col: usize) -> Self {
        Self {
            contents: None,
            ..Self::new(row, col, "")
        }
    }

    /// Set row and column spans.
    pub fn with_span(mut self, row_span: usize, col_span: usize) -> Self {
        self.row_span = row_span;
        self.col_span = col_span;
        self
    }

    /// Cell text, empty when absent.
    pub fn text(&self) -> &str {
        self.contents.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_cells() {
        let table = Table::new(BBox::default(), 0, 2, 2)
            .with_cell(Cell::new(1, 1, "a").with_span(1, 2))
            .with_cell(Cell::new(2, 1, "b"));
        assert!(table.has_merged_cells());
        assert!(!table.is_empty());
    }

    #[test]
    fn test_cell_defaults_from_json() {
        let cell: Cell = serde_json::from_str(r#"{"row": 2, "col": 3}"#).unwrap();
        assert_eq!((cell.row_span, cell.col_span), (1, 1));
        assert_eq!(cell.text(), "");
    }
}
