//! I/O module
//!
//! Handles the line format of the product store.
//!
//! # Components
//!
//! - `record_format` - Product encoding and lenient line decoding

pub mod record_format;

pub use record_format::{convert_record, decode, encode, write_record};
