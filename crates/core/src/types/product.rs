//! Catalog product type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::price::Price;
use crate::types::validate::{
    ValidationError, optional_string, require_object, required_price, required_trimmed_string,
};

/// A purchasable product from the external catalog.
///
/// Products are read-only passthrough data: the cart engine validates them at
/// the catalog boundary and hands them to the display layer, but never owns
/// or mutates them. Identity key is `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, non-empty after trimming. Doubles as the identity key.
    pub name: String,
    /// Optional marketing copy.
    pub description: Option<String>,
    /// Unit price, strictly positive.
    pub price: Price,
    /// Image URL or path, non-empty after trimming.
    pub image: String,
}

impl Product {
    /// Validate a raw catalog entry.
    ///
    /// Rules: `name` and `image` must be strings that are non-empty after
    /// trimming, `price` must be a JSON number > 0, `description` is optional
    /// (a wrongly typed description reads as absent rather than rejecting the
    /// product).
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first rule the entry
    /// breaks. Callers drop the entry and log the reason.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let entry = require_object(value)?;

        Ok(Self {
            name: required_trimmed_string(entry, "name")?,
            description: optional_string(entry, "description"),
            price: required_price(entry, "price")?,
            image: required_trimmed_string(entry, "image")?,
        })
    }
}
