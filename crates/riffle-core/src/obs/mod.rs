//! Observability: ephemeral, in-memory counters for engine operations.
//!
//! Engine logic MUST NOT read counters; recording is one-way and flows
//! through the `record_*` hooks only.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<EventOps> = RefCell::new(EventOps::default());
}

///
/// EventOps
/// Counters for pipeline and navigation activity since the last reset.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Pipeline entrypoints
    pub pipeline_runs: u64,
    pub rows_scanned: u64,
    pub rows_matched: u64,

    // Control-strip computation
    pub label_runs: u64,

    // Navigation outcomes
    pub nav_moves: u64,
    pub nav_rejected: u64,
}

pub(crate) fn record_pipeline(scanned: usize, matched: usize) {
    STATE.with(|state| {
        let mut ops = state.borrow_mut();
        ops.pipeline_runs = ops.pipeline_runs.saturating_add(1);
        ops.rows_scanned = ops.rows_scanned.saturating_add(scanned as u64);
        ops.rows_matched = ops.rows_matched.saturating_add(matched as u64);
    });
}

pub(crate) fn record_labels() {
    STATE.with(|state| {
        let mut ops = state.borrow_mut();
        ops.label_runs = ops.label_runs.saturating_add(1);
    });
}

pub(crate) fn record_nav(moved: bool) {
    STATE.with(|state| {
        let mut ops = state.borrow_mut();
        if moved {
            ops.nav_moves = ops.nav_moves.saturating_add(1);
        } else {
            ops.nav_rejected = ops.nav_rejected.saturating_add(1);
        }
    });
}

/// Snapshot the counters for this thread.
#[must_use]
pub fn metrics_report() -> EventOps {
    STATE.with(|state| state.borrow().clone())
}

/// Zero the counters for this thread.
pub fn metrics_reset() {
    STATE.with(|state| *state.borrow_mut() = EventOps::default());
}

///
/// TESTS
///
