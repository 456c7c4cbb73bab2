//! Shared types for Food Explorer
//!
//! Pure domain crate: product models, the catalog normalizer, the list view
//! engine, the cart store and the unified error codes. Nothing in here
//! performs I/O.

pub mod cart;
pub mod error;
pub mod listing;
pub mod models;
pub mod normalize;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{CartStore, SharedCart};
pub use error::{AppError, AppResult, ErrorCode};
pub use listing::{
    DEFAULT_PAGE_SIZE, PageLabel, PageResult, SortKey, ViewState, compute_view, page_count,
    page_labels,
};
pub use models::{CartLine, Category, NutritionGrade, Nutrient, Nutrients, Product, RawProduct};
pub use normalize::{normalize, normalize_all};
