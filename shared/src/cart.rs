//! Cart store
//!
//! Keyed-list upsert store over [`CartLine`]s, correlated by product code.
//! The store is an explicit object handed to whoever needs it; share one
//! between components through [`SharedCart`].

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{CartLine, Product};
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory cart. Lines keep the order they were first added in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.code() == code)
    }

    /// Add one unit of `product`, creating the line on first add.
    ///
    /// Returns the line's new quantity. Products without a code cannot be
    /// correlated and are rejected.
    pub fn add_or_increment(&mut self, product: &Product) -> AppResult<u32> {
        if !product.is_cartable() {
            return Err(AppError::new(ErrorCode::ProductCodeMissing)
                .with_detail("name", product.display_name()));
        }

        let quantity = match self.position(&product.code) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine::new(product.clone()));
                1
            }
        };
        tracing::debug!(code = %product.code, quantity, "cart line updated");
        Ok(quantity)
    }

    /// Set a line's quantity; `quantity <= 0` removes the line.
    ///
    /// Returns the resulting quantity (0 when removed or absent). Unknown
    /// codes are left alone.
    pub fn set_quantity(&mut self, code: &str, quantity: i64) -> u32 {
        if quantity <= 0 {
            self.remove(code);
            return 0;
        }
        let Some(idx) = self.position(code) else {
            return 0;
        };
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.lines[idx].quantity = quantity;
        quantity
    }

    /// Take one unit off a line, removing it when it reaches zero
    pub fn decrement(&mut self, code: &str) -> u32 {
        let current = self.quantity_of(code);
        if current == 0 {
            return 0;
        }
        self.set_quantity(code, i64::from(current) - 1)
    }

    /// Remove a line. Returns the removed line, if any.
    pub fn remove(&mut self, code: &str) -> Option<CartLine> {
        let idx = self.position(code)?;
        let line = self.lines.remove(idx);
        tracing::debug!(code, "cart line removed");
        Some(line)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities
    pub fn total_quantity(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Quantity of a product in the cart, 0 when absent
    pub fn quantity_of(&self, code: &str) -> u32 {
        self.get(code).map_or(0, |line| line.quantity)
    }

    pub fn get(&self, code: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.code() == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cloneable handle to one cart, for injection into several components
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<RwLock<CartStore>>,
}

impl SharedCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_or_increment(&self, product: &Product) -> AppResult<u32> {
        self.inner.write().add_or_increment(product)
    }

    pub fn set_quantity(&self, code: &str, quantity: i64) -> u32 {
        self.inner.write().set_quantity(code, quantity)
    }

    pub fn decrement(&self, code: &str) -> u32 {
        self.inner.write().decrement(code)
    }

    pub fn remove(&self, code: &str) -> Option<CartLine> {
        self.inner.write().remove(code)
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn total_quantity(&self) -> u32 {
        self.inner.read().total_quantity()
    }

    pub fn quantity_of(&self, code: &str) -> u32 {
        self.inner.read().quantity_of(code)
    }

    /// Copy of the current lines
    pub fn lines(&self) -> Vec<CartLine> {
        self.inner.read().lines().to_vec()
    }

    /// Run `f` against the store under a read lock
    pub fn read<R>(&self, f: impl FnOnce(&CartStore) -> R) -> R {
        f(&self.inner.read())
    }
}
