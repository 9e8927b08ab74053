//! Core traits for product storage
//!
//! This module defines the storage abstraction the shell talks to, so the
//! file-backed store can be swapped for another implementation in tests.

use crate::types::{InventoryError, Product, STORE_CAPACITY};

/// Result of clearing the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Stored records existed and were removed
    Cleared,

    /// There was nothing to remove
    NothingToClear,
}

/// Trait for persisting products
///
/// Implementations never enforce capacity themselves: callers check the
/// current count from `load_all` against `capacity` before calling `append`.
pub trait InventoryStore {
    /// Read every decodable product, in stored order
    ///
    /// Malformed records are skipped. A missing backing resource is an
    /// empty store, not an error.
    fn load_all(&self) -> Result<Vec<Product>, InventoryError>;

    /// Persist one more product after the existing ones
    fn append(&mut self, product: &Product) -> Result<(), InventoryError>;

    /// Remove every stored product
    fn clear(&mut self) -> Result<ClearOutcome, InventoryError>;

    /// Maximum number of products the store should hold
    fn capacity(&self) -> usize {
        STORE_CAPACITY
    }
}
