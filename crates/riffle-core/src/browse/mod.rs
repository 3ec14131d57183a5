//! Module: browse
//! Responsibility: engine configuration and the search/filter/paginate pipeline.
//! Does not own: label math or session state.
//! Boundary: pure per call; page-state correction stays with the session.

pub mod session;

#[cfg(test)]
mod tests;

use crate::{
    error::BrowseError,
    obs,
    predicate::{FilterSet, casefold, contains_folded},
    response::PageView,
};

///
/// SearchKey
///
/// Accessor for the record text attribute the search stage matches against.
///

pub type SearchKey<R> = Box<dyn Fn(&R) -> &str>;

///
/// Browser
///
/// Engine configuration: search key, named filter modes, and page size.
/// Owns no record data and no UI state; every run recomputes from its
/// inputs.
///

pub struct Browser<R> {
    search_key: SearchKey<R>,
    filters: FilterSet<R>,
    page_size: u32,
}

impl<R> std::fmt::Debug for Browser<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Browser")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl<R> Browser<R> {
    /// Build an engine around a text accessor and a fixed page size.
    pub fn new(
        search_key: impl Fn(&R) -> &str + 'static,
        page_size: u32,
    ) -> Result<Self, BrowseError> {
        if page_size == 0 {
            return Err(BrowseError::ZeroPageSize);
        }

        Ok(Self {
            search_key: Box::new(search_key),
            filters: FilterSet::new(),
            page_size,
        })
    }

    // ------------------------------------------------------------------
    // Configuration builders
    // ------------------------------------------------------------------

    /// Register a named filter mode. Selector names must be unique.
    pub fn filter(
        mut self,
        selector: &'static str,
        predicate: impl Fn(&R) -> bool + 'static,
    ) -> Result<Self, BrowseError> {
        self.filters.insert(selector, predicate)?;
        Ok(self)
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterSet<R> {
        &self.filters
    }

    // ------------------------------------------------------------------
    // Pipeline
    // ------------------------------------------------------------------

    /// Run the search/filter/count/slice pipeline for one page request.
    ///
    /// Search keeps records whose key text contains `query` under casefold;
    /// the selector's predicate then intersects with that subset. The
    /// pipeline never clamps `page`: an out-of-range request yields an
    /// empty row set and correction stays with the caller.
    #[must_use]
    pub fn paginate<'a>(
        &self,
        records: &'a [R],
        query: &str,
        selector: &str,
        page: u32,
    ) -> PageView<'a, R> {
        let needle = casefold(query);

        let filtered: Vec<&'a R> = records
            .iter()
            .filter(|record| contains_folded((self.search_key)(record), &needle))
            .filter(|record| self.filters.matches(selector, record))
            .collect();

        let matched = filtered.len();
        let total_pages = total_pages(matched, self.page_size);
        let rows = page_rows(filtered, page, self.page_size);

        obs::record_pipeline(records.len(), matched);

        PageView {
            total_pages,
            matched,
            rows,
        }
    }
}

/// `ceil(matched / page_size)`; zero matches yield zero pages.
fn total_pages(matched: usize, page_size: u32) -> u32 {
    let size = usize::try_from(page_size).unwrap_or(usize::MAX);

    u32::try_from(matched.div_ceil(size)).unwrap_or(u32::MAX)
}

// Slice stage: 1-based page window over the filtered rows.
fn page_rows<R>(filtered: Vec<&R>, page: u32, page_size: u32) -> Vec<&R> {
    let size = usize::try_from(page_size).unwrap_or(usize::MAX);
    let start = usize::try_from(page.saturating_sub(1))
        .unwrap_or(usize::MAX)
        .saturating_mul(size);

    filtered.into_iter().skip(start).take(size).collect()
}
