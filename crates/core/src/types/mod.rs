//! Core types for Greengrocer.
//!
//! External data (the catalog payload, the persisted cart snapshot) is never
//! deserialized straight into these types. It is parsed as loose JSON first
//! and each entry goes through the `from_value` constructors, so one bad
//! entry can be dropped without discarding the rest of the batch.

pub mod cart;
pub mod price;
pub mod product;
pub mod validate;

pub use cart::CartItem;
pub use price::{Price, PriceError};
pub use product::Product;
pub use validate::ValidationError;
