//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as _;
use serde::ser::Error as _;

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is zero or negative.
    #[error("price must be greater than zero")]
    NotPositive,
    /// The amount cannot be represented as a decimal (NaN, infinity, or out
    /// of range).
    #[error("price is not a representable number")]
    NotRepresentable,
}

/// A strictly positive unit price.
///
/// Amounts are held as [`Decimal`] so that totals do not accumulate binary
/// floating-point error. On the wire (catalog payload, cart snapshot) a price
/// is a plain JSON number, matching the shape external collaborators produce
/// and expect.
///
/// ## Examples
///
/// ```
/// use greengrocer_core::Price;
///
/// let price = Price::from_f64(3.50).unwrap();
/// assert_eq!(price.to_string(), "$3.50");
///
/// assert!(Price::from_f64(0.0).is_err());
/// assert!(Price::from_f64(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if the amount is not strictly
    /// positive.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }
        Ok(Self(amount))
    }

    /// Create a `Price` from a floating-point amount, as found in JSON
    /// payloads.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is non-finite, out of decimal range,
    /// or not strictly positive.
    pub fn from_f64(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::NotRepresentable);
        }
        let amount = Decimal::from_f64(amount).ok_or(PriceError::NotRepresentable)?;
        Self::new(amount)
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let amount = self
            .0
            .to_f64()
            .ok_or_else(|| S::Error::custom("price amount out of f64 range"))?;
        serializer.serialize_f64(amount)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(amount).map_err(D::Error::custom)
    }
}
