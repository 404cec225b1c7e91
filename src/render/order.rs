//! Reading-order merge of rendered fragments.

/// Element type a fragment was rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// A table
    Table,
    /// A top-level paragraph
    Paragraph,
    /// A figure image reference
    Figure,
    /// A paragraph nested inside a figure
    FigureText,
}

/// A rendered unit of output with its reading-order key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// What the fragment came from
    pub kind: FragmentKind,
    /// Global reading position
    pub order: i64,
    /// Format-specific markup
    pub markup: String,
}

impl Fragment {
    /// Create a fragment.
    pub fn new(kind: FragmentKind, order: i64, markup: impl Into<String>) -> Self {
        Self {
            kind,
            order,
            markup: markup.into(),
        }
    }
}

/// Collects fragments and orders them for linear rendering.
///
/// Callers push tables, then paragraphs, then figures. The final sort is
/// stable, so fragments with equal `order` come out in that sequence.
#[derive(Debug, Clone, Default)]
pub struct ReadingOrder {
    fragments: Vec<Fragment>,
}

impl ReadingOrder {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one fragment.
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Add several fragments, keeping their relative order.
    pub fn extend<I: IntoIterator<Item = Fragment>>(&mut self, fragments: I) {
        self.fragments.extend(fragments);
    }

    /// Number of collected fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Sort by `order`, stable with respect to insertion.
    pub fn into_sorted(self) -> Vec<Fragment> {
        merge(self.fragments)
    }
}

/// Stable ascending sort of fragments by `order`.
pub fn merge(mut fragments: Vec<Fragment>) -> Vec<Fragment> {
    fragments.sort_by_key(|f| f.order);
    fragments
}
