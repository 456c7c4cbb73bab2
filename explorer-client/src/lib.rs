//! Food Explorer client
//!
//! Async access to the Open Food Facts catalog plus the browsing session
//! that feeds fetched products through the list view engine in `shared`.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod sequencer;
pub mod session;

pub use api::{CatalogApi, FoodFactsClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use logger::{init_logger, init_logger_with_file};
pub use sequencer::{RequestSequencer, RequestTicket};
pub use session::{CatalogSession, FetchOutcome, Filter, SessionSnapshot};

// Re-export shared types for convenience
pub use shared::{
    AppError, CartStore, Category, PageLabel, PageResult, Product, RawProduct, SharedCart,
    SortKey, ViewState,
};
