use serde::{Deserialize, Serialize};

///
/// PageView
/// Materialized pipeline result: page count, filtered-set cardinality, and
/// the rows visible on the requested page.
///

#[derive(Debug)]
pub struct PageView<'a, R> {
    pub total_pages: u32,
    pub matched: usize,
    pub rows: Vec<&'a R>,
}

impl<R> PageView<'_, R> {
    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn count(&self) -> usize {
        self.rows.len()
    }

    /// Whether this page carries no rows.
    ///
    /// An empty page does not imply an empty result set; a stale page
    /// request past the end also yields no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the active result set is empty after search and filter.
    #[must_use]
    pub const fn no_matches(&self) -> bool {
        self.matched == 0
    }
}

///
/// PageMeta
/// Header metadata for "page X of Y" style surfaces.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageMeta {
    pub page: u32,
    pub total_pages: u32,
    pub matched: usize,
}

///
/// TESTS
///
