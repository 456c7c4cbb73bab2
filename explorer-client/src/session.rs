//! Catalog session
//!
//! Caller-side state around the list view engine: the active filter, the
//! fetched product set, sort key and page, the loading flag and the last
//! error. Fetches are sequenced so only the newest request publishes.
//!
//! Recovery policy at this boundary:
//! - fetch or parse failure: product list cleared, error recorded
//! - barcode with no match: product list cleared, not-found recorded

use crate::{CatalogApi, ClientResult, RequestSequencer};
use parking_lot::RwLock;
use shared::error::{AppError, AppResult};
use shared::listing::{PageResult, SortKey, ViewState};
use shared::models::RawProduct;
use shared::normalize_all;
use std::future::Future;

/// Query that produced the current product set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Name(String),
    Barcode(String),
    Category(String),
}

/// What a fetch did to the session
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Results published; number of products
    Loaded(usize),
    /// Barcode lookup matched nothing
    NotFound,
    /// Fetch or parse failure; list cleared
    Failed(AppError),
    /// A newer request was issued meanwhile; result discarded
    Stale,
}

enum Lookup {
    Products(Vec<RawProduct>),
    Missing(String),
}

#[derive(Debug, Default)]
struct SessionState {
    view: ViewState,
    filter: Filter,
    loading: bool,
    error: Option<AppError>,
    categories: Vec<String>,
}

/// Point-in-time copy of the session for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub filter: Filter,
    pub loading: bool,
    pub error: Option<AppError>,
    pub categories: Vec<String>,
    pub sort_key: SortKey,
    pub page: PageResult,
}

/// Catalog browsing session over a [`CatalogApi`]
pub struct CatalogSession<A> {
    api: A,
    sequencer: RequestSequencer,
    state: RwLock<SessionState>,
}

impl<A: CatalogApi> CatalogSession<A> {
    pub fn new(api: A) -> Self {
        Self::with_view(api, ViewState::default())
    }

    /// Start from a preconfigured view (page size, sort key)
    pub fn with_view(api: A, view: ViewState) -> Self {
        Self {
            api,
            sequencer: RequestSequencer::new(),
            state: RwLock::new(SessionState {
                view,
                ..Default::default()
            }),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ========== Fetches ==========

    /// Unfiltered listing
    pub async fn load_initial(&self) -> FetchOutcome {
        self.fetch(Filter::All, async {
            self.api.initial_products().await.map(Lookup::Products)
        })
        .await
    }

    /// Search by product name; a blank query reloads the unfiltered listing
    pub async fn search_by_name(&self, query: &str) -> FetchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return self.load_initial().await;
        }
        self.fetch(Filter::Name(query.to_string()), async {
            self.api.search_by_name(query).await.map(Lookup::Products)
        })
        .await
    }

    /// Barcode lookup; a blank code reloads the unfiltered listing
    pub async fn search_by_barcode(&self, code: &str) -> FetchOutcome {
        let code = code.trim();
        if code.is_empty() {
            return self.load_initial().await;
        }
        self.fetch(Filter::Barcode(code.to_string()), async {
            self.api.search_by_barcode(code).await.map(|found| match found {
                Some(product) => Lookup::Products(vec![product]),
                None => Lookup::Missing(code.to_string()),
            })
        })
        .await
    }

    /// Category listing; a blank category reloads the unfiltered listing
    pub async fn select_category(&self, category: &str) -> FetchOutcome {
        let category = category.trim();
        if category.is_empty() {
            return self.load_initial().await;
        }
        self.fetch(Filter::Category(category.to_string()), async {
            self.api.list_by_category(category).await.map(Lookup::Products)
        })
        .await
    }

    /// Drop every filter and reload the unfiltered listing
    pub async fn clear_filters(&self) -> FetchOutcome {
        self.load_initial().await
    }

    /// Refresh the category picker. On failure the previous list is kept.
    pub async fn load_categories(&self) -> AppResult<usize> {
        match self.api.list_categories().await {
            Ok(categories) => {
                let names: Vec<String> =
                    categories.into_iter().filter_map(|c| c.name).collect();
                let count = names.len();
                self.state.write().categories = names;
                tracing::info!(count, "categories loaded");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load categories");
                Err(e.into())
            }
        }
    }

    async fn fetch<F>(&self, filter: Filter, lookup: F) -> FetchOutcome
    where
        F: Future<Output = ClientResult<Lookup>>,
    {
        let ticket = self.sequencer.issue();
        tracing::debug!(ticket = ticket.id(), ?filter, "fetch started");
        {
            let mut state = self.state.write();
            state.filter = filter;
            state.loading = true;
            state.error = None;
        }

        let result = lookup.await.map(|found| match found {
            Lookup::Products(raws) => Ok(normalize_all(&raws)),
            Lookup::Missing(code) => Err(code),
        });

        let mut state = self.state.write();
        if !self.sequencer.is_current(ticket) {
            tracing::warn!(ticket = ticket.id(), "discarding stale response");
            return FetchOutcome::Stale;
        }
        state.loading = false;

        match result {
            Ok(Ok(products)) => {
                let count = products.len();
                state.view.set_products(products);
                tracing::info!(ticket = ticket.id(), count, "products loaded");
                FetchOutcome::Loaded(count)
            }
            Ok(Err(code)) => {
                state.view.clear();
                state.error = Some(AppError::product_not_found(code));
                FetchOutcome::NotFound
            }
            Err(e) => {
                tracing::warn!(ticket = ticket.id(), error = %e, "fetch failed");
                let err = AppError::from(e);
                state.view.clear();
                state.error = Some(err.clone());
                FetchOutcome::Failed(err)
            }
        }
    }

    // ========== View state ==========

    pub fn set_sort(&self, sort_key: SortKey) {
        self.state.write().view.set_sort(sort_key);
    }

    /// Jump to a page, clamped to the valid range. Returns the page landed on.
    pub fn goto_page(&self, page: usize) -> usize {
        self.state.write().view.goto_page(page)
    }

    pub fn next_page(&self) -> bool {
        self.state.write().view.next_page()
    }

    pub fn prev_page(&self) -> bool {
        self.state.write().view.prev_page()
    }

    /// Recompute the visible page
    pub fn view(&self) -> PageResult {
        self.state.read().view.view()
    }

    pub fn filter(&self) -> Filter {
        self.state.read().filter.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn last_error(&self) -> Option<AppError> {
        self.state.read().error.clone()
    }

    pub fn categories(&self) -> Vec<String> {
        self.state.read().categories.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read();
        SessionSnapshot {
            filter: state.filter.clone(),
            loading: state.loading,
            error: state.error.clone(),
            categories: state.categories.clone(),
            sort_key: state.view.sort_key(),
            page: state.view.view(),
        }
    }
}
