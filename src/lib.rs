//! Inventory Tracker Library
//! # Overview
//!
//! This library provides a single-user stock tracker backed by a plain text
//! file and driven from an interactive console menu.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Product, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`io`] - Store line format (encode and lenient decode)
//! - [`core`] - Product storage:
//!   - [`core::traits`] - Storage abstraction
//!   - [`core::file_store`] - Text-file store
//! - [`shell`] - Interactive menu loop
//!
//! # Menu Actions
//!
//! - **Insert**: Add a product, refused once the store holds five
//! - **List**: Show every stored product with the total count
//! - **Clear**: Delete the store file after an `S`/`SIM` confirmation
//! - **Exit**: Leave the menu
//!
//! # Store File
//!
//! One product per line, `name,quantity,price`, with `.` as decimal point.
//! Lines that do not decode are skipped when reading.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod shell;
pub mod types;

pub use crate::core::{ClearOutcome, FileStore, InventoryStore};
pub use shell::{Shell, ShellConfig};
pub use types::{InventoryError, Product, Quantity, RecordError, STORE_CAPACITY};
