//! Pagination math and page-label compression

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Range;

/// Most page labels shown before gaps are introduced
pub const MAX_PAGES_SHOWN: usize = 5;

/// Gap marker text
pub const GAP: &str = "…";

/// One entry of the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageLabel {
    /// A clickable 1-based page number
    Page(usize),
    /// Elided run of pages
    Gap,
}

impl PageLabel {
    pub fn page(&self) -> Option<usize> {
        match self {
            Self::Page(n) => Some(*n),
            Self::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{}", n),
            Self::Gap => f.write_str(GAP),
        }
    }
}

/// Pages serialize as numbers, gaps as the "…" string
impl Serialize for PageLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Page(n) => serializer.serialize_u64(*n as u64),
            Self::Gap => serializer.serialize_str(GAP),
        }
    }
}

/// Number of pages for `total` items; never less than 1.
///
/// A `page_size` of 0 means "everything on one page".
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Index range of `page` (1-based) within `total` items.
///
/// No clamping of `page`: page 0 or a page past the end is an empty range.
pub fn page_bounds(total: usize, page: usize, page_size: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    if page_size == 0 {
        return if page == 1 { 0..total } else { total..total };
    }
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// Page labels for a pagination control.
///
/// - up to [`MAX_PAGES_SHOWN`] pages: every page
/// - near the start: `1 2 3 4 … N`
/// - near the end: `1 … N-3 N-2 N-1 N`
/// - otherwise: `1 … c-1 c c+1 … N`
pub fn page_labels(page_count: usize, current: usize) -> Vec<PageLabel> {
    if page_count <= MAX_PAGES_SHOWN {
        return (1..=page_count).map(PageLabel::Page).collect();
    }

    let mut labels = Vec::with_capacity(7);
    if current <= 3 {
        labels.extend((1..=4).map(PageLabel::Page));
        labels.push(PageLabel::Gap);
        labels.push(PageLabel::Page(page_count));
    } else if current >= page_count - 2 {
        labels.push(PageLabel::Page(1));
        labels.push(PageLabel::Gap);
        labels.extend((page_count - 3..=page_count).map(PageLabel::Page));
    } else {
        labels.push(PageLabel::Page(1));
        labels.push(PageLabel::Gap);
        labels.extend((current - 1..=current + 1).map(PageLabel::Page));
        labels.push(PageLabel::Gap);
        labels.push(PageLabel::Page(page_count));
    }
    labels
}
