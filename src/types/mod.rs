//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `product`: The stock item entity and its display format
//! - `error`: Error types for the inventory tracker

pub mod error;
pub mod product;

pub use error::{InventoryError, RecordError};
pub use product::{Product, Quantity, STORE_CAPACITY};
