//! Table structure reconstruction from spanning cells.
//!
//! Two shapes are produced from the same flat cell list:
//!
//! - [`group_rows`] keeps spans intact and only splits cells into rows, for
//!   formats with native span support (HTML).
//! - [`TableGrid`] flattens spans into a dense `n_row x n_col` grid where
//!   only the anchor position of each cell holds its text, for formats
//!   without span syntax (Markdown, CSV).
//!
//! Neither validates spans. A cell anchored outside the declared grid is
//! dropped; when two cells share an anchor the later one wins. A declared
//! size above [`MAX_GRID_CELLS`] is shrunk to the anchors in use, and the
//! whole table is dropped if that is still too large.

use crate::model::{Cell, Table};

/// Split cells into rows, starting a new row whenever a cell's `row`
/// differs from the previous cell's.
pub fn group_rows(cells: &[Cell]) -> Vec<Vec<&Cell>> {
    let mut rows: Vec<Vec<&Cell>> = Vec::new();
    let mut current_row = None;

    for cell in cells {
        if current_row != Some(cell.row) {
            rows.push(Vec::new());
            current_row = Some(cell.row);
        }
        if let Some(row) = rows.last_mut() {
            row.push(cell);
        }
    }

    rows
}

/// Largest number of positions a dense grid may hold.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Grid dimensions for a table, bounded by [`MAX_GRID_CELLS`].
///
/// An oversized declared size is shrunk to the extent of the cell anchors.
/// Returns `None` when even that is too large.
fn grid_size(table: &Table) -> Option<(usize, usize)> {
    let (n_row, n_col) = (table.n_row, table.n_col);
    if matches!(n_row.checked_mul(n_col), Some(n) if n <= MAX_GRID_CELLS) {
        return Some((n_row, n_col));
    }

    let last_row = table.cells.iter().map(|c| c.row).max().unwrap_or(0);
    let last_col = table.cells.iter().map(|c| c.col).max().unwrap_or(0);
    let (rows, cols) = (n_row.min(last_row), n_col.min(last_col));
    log::debug!(
        "Shrinking declared {}x{} table to {}x{}",
        n_row,
        n_col,
        rows,
        cols
    );

    match rows.checked_mul(cols) {
        Some(n) if n <= MAX_GRID_CELLS => Some((rows, cols)),
        _ => None,
    }
}

/// Dense, row-major grid of rendered cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    n_row: usize,
    n_col: usize,
    cells: Vec<String>,
    dropped: usize,
}

impl TableGrid {
    /// Build the grid, rendering each placed cell with `render`.
    ///
    /// A table without cells yields an empty (0 x 0) grid.
    pub fn build<F>(table: &Table, render: F) -> Self
    where
        F: Fn(&Cell) -> String,
    {
        if table.cells.is_empty() {
            return Self::empty();
        }

        let (n_row, n_col) = match grid_size(table) {
            Some(size) => size,
            None => {
                log::debug!(
                    "Dropping {} cells of oversized {}x{} table",
                    table.cells.len(),
                    table.n_row,
                    table.n_col
                );
                return Self {
                    dropped: table.cells.len(),
                    ..Self::empty()
                };
            }
        };
        let mut grid = Self {
            n_row,
            n_col,
            cells: vec![String::new(); n_row * n_col],
            dropped: 0,
        };

        for cell in &table.cells {
            let in_range = (1..=n_row).contains(&cell.row) && (1..=n_col).contains(&cell.col);
            if !in_range {
                log::debug!(
                    "Dropping cell anchored at ({}, {}) outside {}x{} table",
                    cell.row,
                    cell.col,
                    n_row,
                    n_col
                );
                grid.dropped += 1;
                continue;
            }
            let idx = (cell.row - 1) * n_col + (cell.col - 1);
            grid.cells[idx] = render(cell);
        }

        grid
    }

    fn empty() -> Self {
        Self {
            n_row: 0,
            n_col: 0,
            cells: Vec::new(),
            dropped: 0,
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.n_row
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.n_col
    }

    /// Check if the grid has no positions.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells that fell outside the declared grid.
    pub fn dropped_cells(&self) -> usize {
        self.dropped
    }

    /// Text at a 0-based position, `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        if row >= self.n_row || col >= self.n_col {
            return None;
        }
        self.cells.get(row * self.n_col + col).map(String::as_str)
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.chunks(self.n_col.max(1))
    }

    /// Render as a pipe table, with a separator line after the first row.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        for (i, row) in self.rows().enumerate() {
            output.push('|');
            output.push_str(&row.join("|"));
            output.push_str("|\n");

            if i == 0 {
                output.push('|');
                output.push_str(&vec!["-"; self.n_col].join("|"));
                output.push_str("|\n");
            }
        }

        output
    }
}
