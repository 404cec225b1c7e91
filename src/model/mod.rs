//! Document model types for analyzed page content.
//!
//! These types mirror what the layout analyzer produces for one page:
//! paragraphs, tables with spanning cells, and figures, each tagged with a
//! bounding box and a global reading-order index. The export layer only
//! reads them.

mod document;
mod figure;
mod geometry;
mod paragraph;
mod table;

pub use document::{DocumentResult, Page};
pub use figure::Figure;
pub use geometry::{BBox, PixelRect};
pub use paragraph::{Paragraph, ROLE_SECTION_HEADINGS};
pub use table::{Cell, Table};
