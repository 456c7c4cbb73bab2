//! List view engine
//!
//! Turns a product collection plus sort key and page number into the page
//! of products to render and the pagination metadata. The engine is a pure
//! recomputation: it holds no state, performs no I/O and never fails.
//! Callers own the [`ViewState`] and recompute on every change.

mod page;
mod sort;
mod state;

pub use page::{GAP, MAX_PAGES_SHOWN, PageLabel, page_bounds, page_count, page_labels};
pub use sort::{SortKey, compare_names, sort_products};
pub use state::ViewState;

use crate::models::Product;
use serde::Serialize;

/// Products per page in the listing grid
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// One computed page of a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult {
    /// Products on the requested page, in sort order
    pub items: Vec<Product>,
    /// Requested page (1-based), as given
    pub page: usize,
    pub page_size: usize,
    /// Total pages, at least 1
    pub page_count: usize,
    /// Products across all pages
    pub total: usize,
    /// Labels for the pagination control
    pub page_labels: Vec<PageLabel>,
}

impl PageResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// 1-based `(first, last, total)` for a "Showing 1-24 of 200" caption.
    /// `None` when the page is empty.
    pub fn showing(&self) -> Option<(usize, usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = page_bounds(self.total, self.page, self.page_size).start;
        Some((start + 1, start + self.items.len(), self.total))
    }
}

/// Sort `products` by `sort_key` and slice out `page` (1-based).
///
/// `page` is not clamped: a page outside `1..=page_count` yields an empty
/// `items` list, which is a valid result. Only the products on the page are
/// cloned.
pub fn compute_view(
    products: &[Product],
    sort_key: SortKey,
    page: usize,
    page_size: usize,
) -> PageResult {
    let total = products.len();
    let pages = page_count(total, page_size);
    let ordered = sort::sort_refs(products, sort_key);
    let items = ordered[page_bounds(total, page, page_size)]
        .iter()
        .map(|p| (*p).clone())
        .collect();

    tracing::trace!(total, page, page_count = pages, sort = %sort_key, "computed list view");

    PageResult {
        items,
        page,
        page_size,
        page_count: pages,
        total,
        page_labels: page_labels(pages, page),
    }
}
