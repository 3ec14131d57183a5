use thiserror::Error as ThisError;

///
/// BrowseError
///
/// Configuration-time errors raised while assembling an engine.
/// The browse operations themselves never fail: degenerate page requests
/// return empty row sets and unknown selectors degrade to match-all.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum BrowseError {
    #[error("duplicate filter selector: {selector}")]
    DuplicateSelector { selector: String },

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

impl BrowseError {
    pub(crate) fn duplicate_selector(selector: impl Into<String>) -> Self {
        Self::DuplicateSelector {
            selector: selector.into(),
        }
    }
}
