//! Cart line model

use super::product::Product;
use serde::{Deserialize, Serialize};

/// One product in the cart with its quantity (always at least 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn code(&self) -> &str {
        &self.product.code
    }
}
