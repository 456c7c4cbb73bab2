//! Caller-owned listing state

use super::{DEFAULT_PAGE_SIZE, PageResult, SortKey, compute_view, page_count};
use crate::models::Product;

/// Everything needed to recompute a listing page
///
/// This is the caller side of the engine: it owns the active product set,
/// sort key and page, and does the clamping the engine leaves to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    products: Vec<Product>,
    sort_key: SortKey,
    current_page: usize,
    page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ViewState {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            sort_key: SortKey::default(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self.current_page = 1;
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        page_count(self.products.len(), self.page_size)
    }

    /// Replace the product set for a new query; back to page 1
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.current_page = 1;
    }

    /// Drop all products; back to page 1
    pub fn clear(&mut self) {
        self.set_products(Vec::new());
    }

    /// Change the sort order. The current page is kept.
    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    /// Jump to `page`, clamped to `1..=page_count`. Returns the page landed on.
    pub fn goto_page(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.page_count());
        self.current_page
    }

    /// Advance one page; no-op on the last page
    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.page_count() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; no-op on the first page
    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Recompute the visible page
    pub fn view(&self) -> PageResult {
        compute_view(&self.products, self.sort_key, self.current_page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product {
                code: i.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::default();
        assert_eq!(state.page_size(), 24);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.sort_key(), SortKey::NameAsc);
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn test_goto_page_clamps() {
        let mut state = ViewState::new(products(60));
        assert_eq!(state.goto_page(0), 1);
        assert_eq!(state.goto_page(99), 3);
        assert_eq!(state.view().items.len(), 12);
    }

    #[test]
    fn test_next_prev_stop_at_bounds() {
        let mut state = ViewState::new(products(30));
        assert!(!state.prev_page());
        assert!(state.next_page());
        assert_eq!(state.current_page(), 2);
        assert!(!state.next_page());
        assert!(state.prev_page());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_new_products_reset_page() {
        let mut state = ViewState::new(products(100));
        state.goto_page(4);
        state.set_products(products(10));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.view().items.len(), 10);
    }

    #[test]
    fn test_set_sort_keeps_page() {
        let mut state = ViewState::new(products(100));
        state.goto_page(2);
        state.set_sort(SortKey::NutritionAsc);
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.view().page, 2);
    }

    #[test]
    fn test_clear() {
        let mut state = ViewState::new(products(5)).with_page_size(2);
        state.goto_page(3);
        state.clear();
        let view = state.view();
        assert!(view.is_empty());
        assert_eq!(view.page_count, 1);
    }
}
