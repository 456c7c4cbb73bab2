//! Unified error system for Food Explorer
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! The normalizer and the list view engine never fail; errors only come out
//! of the cart store (uncorrelatable products) and the network boundary.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::product_not_found("737628064502");
//! assert_eq!(err.code, ErrorCode::ProductNotFound);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
