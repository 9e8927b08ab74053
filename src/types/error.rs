//! Error types for the inventory tracker
//!
//! Errors are designed to be shown directly to the operator, so their
//! `Display` output is the message printed by the shell.
//!
//! # Error Categories
//!
//! - **Validation Errors**: empty name, malformed or negative quantity/price
//! - **Capacity Errors**: the store already holds the maximum number of products
//! - **I/O Errors**: the store file cannot be read, written or deleted
//! - **Record Errors**: a stored line cannot be decoded (never shown, the line is skipped)

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the inventory tracker
///
/// Every variant is recoverable: the shell reports it and returns to the menu.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    /// Product name is empty or whitespace only
    #[error("Nome do produto não pode estar vazio!")]
    InvalidName,

    /// Quantity input is not an integer
    #[error("Quantidade inválida: '{input}'")]
    InvalidQuantity {
        /// The text the operator typed
        input: String,
    },

    /// Quantity input parsed but is below zero
    #[error("Quantidade não pode ser negativa! ({quantity})")]
    NegativeQuantity {
        /// The parsed quantity
        quantity: i32,
    },

    /// Price input is not a decimal number
    #[error("Preço inválido: '{input}'")]
    InvalidPrice {
        /// The text the operator typed
        input: String,
    },

    /// Price input parsed but is below zero
    #[error("Preço não pode ser negativo! ({price})")]
    NegativePrice {
        /// The parsed price
        price: Decimal,
    },

    /// The store already holds the maximum number of products
    #[error("Limite de produtos atingido! (máximo {capacity})")]
    CapacityReached {
        /// The store capacity
        capacity: usize,
    },

    /// I/O error while reading, writing or deleting the store file
    #[error("Erro de E/S: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

/// Reason a stored line could not be decoded into a product
///
/// Load treats every variant the same way: the line is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Empty or whitespace-only line
    #[error("blank line")]
    Blank,

    /// Line does not split into exactly three fields
    #[error("expected 3 fields, found {found}")]
    FieldCount {
        /// Number of fields found
        found: usize,
    },

    /// Quantity field is not an integer
    #[error("invalid quantity '{value}'")]
    Quantity {
        /// The raw field
        value: String,
    },

    /// Price field is not a decimal number
    #[error("invalid price '{value}'")]
    Price {
        /// The raw field
        value: String,
    },

    /// Line is not valid UTF-8
    #[error("line is not valid UTF-8")]
    Encoding,
}

impl From<std::io::Error> for InventoryError {
    fn from(error: std::io::Error) -> Self {
        InventoryError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for InventoryError {
    fn from(error: csv::Error) -> Self {
        InventoryError::Io {
            message: error.to_string(),
        }
    }
}

impl InventoryError {
    /// Create an InvalidQuantity error
    pub fn invalid_quantity(input: &str) -> Self {
        InventoryError::InvalidQuantity {
            input: input.to_string(),
        }
    }

    /// Create a NegativeQuantity error
    pub fn negative_quantity(quantity: i32) -> Self {
        InventoryError::NegativeQuantity { quantity }
    }

    /// Create an InvalidPrice error
    pub fn invalid_price(input: &str) -> Self {
        InventoryError::InvalidPrice {
            input: input.to_string(),
        }
    }

    /// Create a NegativePrice error
    pub fn negative_price(price: Decimal) -> Self {
        InventoryError::NegativePrice { price }
    }

    /// Create a CapacityReached error
    pub fn capacity_reached(capacity: usize) -> Self {
        InventoryError::CapacityReached { capacity }
    }
}
