use crate::PAGE_LABEL_SLOTS;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// PageLabel
///
/// One slot of the pagination control strip: a 1-based page number, an
/// ellipsis marker, or a blank placeholder. Only numbers are interactive;
/// blanks exist so short strips keep a constant rendered width.
///

#[derive(Clone, Copy, Debug, Display, Deserialize, Eq, PartialEq, Serialize)]
pub enum PageLabel {
    #[display("{_0}")]
    Number(u32),

    #[display("...")]
    Ellipsis,

    #[display("")]
    Blank,
}

impl PageLabel {
    /// Only numeric labels may trigger a page change.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    #[must_use]
    pub const fn page(&self) -> Option<u32> {
        match self {
            Self::Number(page) => Some(*page),
            Self::Ellipsis | Self::Blank => None,
        }
    }
}

/// Compute the ordered label strip for the current page.
///
/// Short lists enumerate every page and pad with blanks up to
/// [`PAGE_LABEL_SLOTS`]. Longer lists anchor the first and last page around
/// a local window, collapsing the gaps to at most two ellipsis markers, so
/// the strip is exactly seven labels wide.
#[must_use]
pub fn page_labels(total_pages: u32, current_page: u32) -> Vec<PageLabel> {
    let short = usize::try_from(total_pages).is_ok_and(|count| count <= PAGE_LABEL_SLOTS);

    if short {
        let mut labels: Vec<PageLabel> = (1..=total_pages).map(PageLabel::Number).collect();
        labels.resize(PAGE_LABEL_SLOTS, PageLabel::Blank);

        return labels;
    }

    if current_page <= 3 {
        return vec![
            PageLabel::Number(1),
            PageLabel::Number(2),
            PageLabel::Number(3),
            PageLabel::Number(4),
            PageLabel::Ellipsis,
            PageLabel::Number(total_pages - 1),
            PageLabel::Number(total_pages),
        ];
    }

    if current_page >= total_pages - 2 {
        return vec![
            PageLabel::Number(1),
            PageLabel::Number(2),
            PageLabel::Ellipsis,
            PageLabel::Number(total_pages - 3),
            PageLabel::Number(total_pages - 2),
            PageLabel::Number(total_pages - 1),
            PageLabel::Number(total_pages),
        ];
    }

    vec![
        PageLabel::Number(1),
        PageLabel::Ellipsis,
        PageLabel::Number(current_page - 1),
        PageLabel::Number(current_page),
        PageLabel::Number(current_page + 1),
        PageLabel::Ellipsis,
        PageLabel::Number(total_pages),
    ]
}

///
/// TESTS
///
