//! Product type for the inventory tracker
//!
//! A product is the only entity kept in the store: a name, a quantity in
//! stock and a unit price. Products have no identity beyond their position
//! in the store file, so two products with the same name are both kept.

use super::error::InventoryError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Stock quantity
///
/// Signed so that records read back from disk can carry negative values
/// as-is; interactive input rejects them.
pub type Quantity = i32;

/// Maximum number of products the store may hold
///
/// Checked before every insert, never retroactively.
pub const STORE_CAPACITY: usize = 5;

/// A stock item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Free-form name. Must not contain `,` to survive a round trip through the store.
    pub name: String,

    /// Units in stock
    pub quantity: Quantity,

    /// Price per unit, fixed-point
    pub unit_price: Decimal,
}

impl Product {
    /// Create a product without validation
    ///
    /// Used when reading records back from the store, where the values are
    /// taken as they were written.
    pub fn new(name: impl Into<String>, quantity: Quantity, unit_price: Decimal) -> Self {
        Product {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Create a product from operator input
    ///
    /// The name is trimmed and must not be empty; quantity and price must
    /// not be negative.
    ///
    /// # Returns
    ///
    /// * `Ok(Product)` if every field is valid
    /// * `Err(InventoryError)` naming the first invalid field
    pub fn try_new(
        name: &str,
        quantity: Quantity,
        unit_price: Decimal,
    ) -> Result<Self, InventoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InventoryError::InvalidName);
        }
        if quantity < 0 {
            return Err(InventoryError::negative_quantity(quantity));
        }
        if unit_price < Decimal::ZERO {
            return Err(InventoryError::negative_price(unit_price));
        }
        Ok(Product::new(name, quantity, unit_price))
    }

    /// Unit price rounded to cents and rendered with a comma separator (`1,50`)
    pub fn display_price(&self) -> String {
        let cents = self
            .unit_price
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", cents).replace('.', ",")
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {} | Quantidade: {} | Preço: R$ {}",
            self.name,
            self.quantity,
            self.display_price()
        )
    }
}
