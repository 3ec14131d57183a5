//! Riffle — typed search, filter, and pagination for in-memory record sets.
//!
//! ## Crate layout
//! - `core`: filter predicates, the result pipeline, page-window labels,
//!   the session driver, and observability counters.
//! - `error`: public error type over core configuration errors.
//!
//! The `prelude` module mirrors the runtime surface a rendering layer
//! consumes: build a [`core::browse::Browser`] around a record type, drive
//! it through a [`core::browse::session::BrowseSession`], and render the
//! returned rows, labels, and controls.

pub use riffle_core as core;

pub mod error;

pub use error::Error;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// Mirrors the runtime surface used by rendering layers.
///

pub mod prelude {
    pub use crate::{
        core::{
            PAGE_LABEL_SLOTS,
            browse::{
                Browser, SearchKey,
                session::{BrowseSession, NavControls},
            },
            predicate::{FilterSet, RecordPredicate},
            response::{PageMeta, PageView},
            window::{PageLabel, page_labels},
        },
        error::Error,
    };
}

///
/// TESTS
///
