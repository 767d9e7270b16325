//! Cart line item type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::price::Price;
use crate::types::validate::{
    ValidationError, require_object, required_price, required_quantity, required_trimmed_string,
};

/// A single line in the cart: one product at some quantity.
///
/// Identity key is `name`; a product appears at most once in a cart, so
/// repeated adds increment `quantity` instead of duplicating lines. The
/// quantity is never zero - a line whose quantity would drop to zero is
/// removed from the cart instead.
///
/// This is also the wire shape of the persisted snapshot: a JSON array of
/// these objects, with `price` as a plain number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product name, non-empty after trimming.
    pub name: String,
    /// Unit price captured at the time the product was added.
    pub price: Price,
    /// Number of units, always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Validate a raw snapshot entry.
    ///
    /// Same shape rules as the in-memory type: non-empty `name` string,
    /// numeric `price` > 0, integer `quantity` >= 1.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first rule the entry
    /// breaks. Callers drop the entry and log the reason.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let entry = require_object(value)?;

        Ok(Self {
            name: required_trimmed_string(entry, "name")?,
            price: required_price(entry, "price")?,
            quantity: required_quantity(entry, "quantity")?,
        })
    }

    /// The line's contribution to the cart total: price x quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount() * Decimal::from(self.quantity)
    }
}
