//! Category Model

use super::serde_helpers::flexible_string;
use serde::{Deserialize, Serialize};

/// Category entry from the categories listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Taxonomy id, e.g. "en:snacks"
    #[serde(default, deserialize_with = "flexible_string")]
    pub id: Option<String>,
    /// Display name; entries without one are skipped by the client
    #[serde(default, deserialize_with = "flexible_string")]
    pub name: Option<String>,
    /// Number of products in the category, when reported
    #[serde(default)]
    pub products: Option<u64>,
}

impl Category {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            products: None,
        }
    }
}
