use crate::{
    browse::Browser,
    obs,
    response::{PageMeta, PageView},
    window::{PageLabel, page_labels},
};
use serde::{Deserialize, Serialize};

///
/// BrowseSession
///
/// Stateful driver over a [`Browser`]: owns the current UI selections
/// (query, selector, page) and applies the reset/clamp/navigation contract
/// so rendering layers never see a stale page.
///
/// Selection changes reset the page to 1. Navigation is bounded by the
/// page count of the latest run and refuses to move while the active
/// result set is empty.
///

pub struct BrowseSession<R> {
    browser: Browser<R>,
    query: String,
    selector: String,
    page: u32,
    total_pages: u32,
    matched: usize,
}

impl<R> BrowseSession<R> {
    #[must_use]
    pub const fn new(browser: Browser<R>) -> Self {
        Self {
            browser,
            query: String::new(),
            selector: String::new(),
            page: 1,
            total_pages: 0,
            matched: 0,
        }
    }

    // ------------------------------------------------------------------
    // Selection state
    // ------------------------------------------------------------------

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Replace the search query and return to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Replace the filter selector and return to the first page.
    pub fn set_selector(&mut self, selector: impl Into<String>) {
        self.selector = selector.into();
        self.page = 1;
    }

    /// Clear query and selector back to defaults (match-all) on page 1.
    pub fn reset(&mut self) {
        self.query.clear();
        self.selector.clear();
        self.page = 1;
    }

    // ------------------------------------------------------------------
    // Pipeline
    // ------------------------------------------------------------------

    /// Run the pipeline for the current selections.
    ///
    /// If the page count shrank below the current page (a filter or query
    /// narrowed the result set since the last run), the page is clamped to
    /// the last non-empty page and the slice is recomputed, so the caller
    /// never renders a stale empty page.
    pub fn run<'a>(&mut self, records: &'a [R]) -> PageView<'a, R> {
        let view = self
            .browser
            .paginate(records, &self.query, &self.selector, self.page);

        let floor = view.total_pages.max(1);
        let view = if self.page > floor {
            self.page = floor;
            self.browser
                .paginate(records, &self.query, &self.selector, self.page)
        } else {
            view
        };

        self.total_pages = view.total_pages;
        self.matched = view.matched;

        view
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Step back one page. No-op at the floor or on an empty result set.
    pub fn previous(&mut self) -> bool {
        let moved = self.matched > 0 && self.page > 1;
        if moved {
            self.page -= 1;
        }

        obs::record_nav(moved);

        moved
    }

    /// Step forward one page. No-op at the cap or on an empty result set.
    pub fn next(&mut self) -> bool {
        let moved = self.matched > 0 && self.page < self.total_pages;
        if moved {
            self.page += 1;
        }

        obs::record_nav(moved);

        moved
    }

    /// Jump to a numeric label. Rejects targets outside `1..=total_pages`
    /// and any request while the active result set is empty.
    pub fn go_to(&mut self, page: u32) -> bool {
        let moved = self.matched > 0 && page >= 1 && page <= self.total_pages;
        if moved {
            self.page = page;
        }

        obs::record_nav(moved);

        moved
    }

    // ------------------------------------------------------------------
    // Control surface
    // ------------------------------------------------------------------

    /// Enabled-state for the relative controls, per the latest run.
    #[must_use]
    pub const fn controls(&self) -> NavControls {
        NavControls {
            previous: self.matched > 0 && self.page > 1,
            next: self.matched > 0 && self.page < self.total_pages,
        }
    }

    /// Label strip for the latest run.
    #[must_use]
    pub fn labels(&self) -> Vec<PageLabel> {
        obs::record_labels();

        page_labels(self.total_pages, self.page)
    }

    /// Header metadata for the latest run.
    #[must_use]
    pub const fn meta(&self) -> PageMeta {
        PageMeta {
            page: self.page,
            total_pages: self.total_pages,
            matched: self.matched,
        }
    }
}

///
/// NavControls
/// Enabled-state for the previous/next controls.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NavControls {
    pub previous: bool,
    pub next: bool,
}
