//! Core storage module
//!
//! This module contains the product storage components:
//! - `traits` - Storage abstraction used by the shell
//! - `file_store` - Text-file implementation of the storage abstraction

pub mod file_store;
pub mod traits;

pub use file_store::{FileStore, DEFAULT_STORE_FILE};
pub use traits::{ClearOutcome, InventoryStore};
