//! Data models
//!
//! [`RawProduct`] is the upstream wire shape; [`Product`] is the canonical
//! record every view works from.

pub mod cart;
pub mod category;
pub mod product;
pub mod raw;
pub mod serde_helpers;

// Re-exports
pub use cart::*;
pub use category::*;
pub use product::*;
pub use raw::*;
