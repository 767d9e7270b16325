//! Field-level validation for external JSON entries.
//!
//! Both the catalog payload and the persisted cart snapshot arrive as loose
//! JSON arrays. Each entry is checked here; a failure is a *warning* at the
//! boundary that consumes it - the entry is dropped and logged, never turned
//! into a hard error for the whole batch.

use serde_json::{Map, Value};

use crate::types::price::{Price, PriceError};

/// Why a single catalog or snapshot entry was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The entry is not a JSON object.
    #[error("entry is not an object")]
    NotAnObject,
    /// A required field is absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    /// A field that must be a string holds another type.
    #[error("field `{0}` must be a string")]
    NotAString(&'static str),
    /// A string field is empty after trimming.
    #[error("field `{0}` must not be empty")]
    EmptyString(&'static str),
    /// A field that must be a number holds another type.
    #[error("field `{0}` must be a number")]
    NotANumber(&'static str),
    /// A numeric field is not a valid price.
    #[error("field `{field}` is not a valid price: {source}")]
    InvalidPrice {
        /// Field name.
        field: &'static str,
        /// Underlying price failure.
        source: PriceError,
    },
    /// A quantity field is not an integer greater than or equal to 1.
    #[error("field `{0}` must be an integer greater than or equal to 1")]
    InvalidQuantity(&'static str),
}

/// Require the entry to be a JSON object.
pub(crate) fn require_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value.as_object().ok_or(ValidationError::NotAnObject)
}

/// Require a string field that is non-empty after trimming.
///
/// The trimmed content is what matters for the emptiness check, but the
/// original (untrimmed) value is preserved, matching how the storefront
/// displays names verbatim.
pub(crate) fn required_trimmed_string(
    entry: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    let value = entry.get(field).ok_or(ValidationError::MissingField(field))?;
    let s = value.as_str().ok_or(ValidationError::NotAString(field))?;
    if s.trim().is_empty() {
        return Err(ValidationError::EmptyString(field));
    }
    Ok(s.to_owned())
}

/// Read an optional string field. Absent or wrongly typed values both read
/// as `None`.
pub(crate) fn optional_string(entry: &Map<String, Value>, field: &str) -> Option<String> {
    entry
        .get(field)
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
}

/// Require a strictly positive numeric price field.
pub(crate) fn required_price(
    entry: &Map<String, Value>,
    field: &'static str,
) -> Result<Price, ValidationError> {
    let value = entry.get(field).ok_or(ValidationError::MissingField(field))?;
    let amount = value.as_f64().ok_or(ValidationError::NotANumber(field))?;
    Price::from_f64(amount).map_err(|source| ValidationError::InvalidPrice { field, source })
}

/// Require an integer quantity field >= 1.
pub(crate) fn required_quantity(
    entry: &Map<String, Value>,
    field: &'static str,
) -> Result<u32, ValidationError> {
    let value = entry.get(field).ok_or(ValidationError::MissingField(field))?;
    let quantity = value
        .as_u64()
        .filter(|&q| q >= 1)
        .and_then(|q| u32::try_from(q).ok())
        .ok_or(ValidationError::InvalidQuantity(field))?;
    Ok(quantity)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_require_object() {
        assert!(require_object(&json!({})).is_ok());
        assert_eq!(
            require_object(&json!("string")),
            Err(ValidationError::NotAnObject)
        );
        assert_eq!(require_object(&json!(null)), Err(ValidationError::NotAnObject));
    }

    #[test]
    fn test_required_trimmed_string() {
        let entry = obj(json!({"name": "Oat Milk"}));
        assert_eq!(
            required_trimmed_string(&entry, "name").unwrap(),
            "Oat Milk"
        );

        let entry = obj(json!({"name": "   "}));
        assert_eq!(
            required_trimmed_string(&entry, "name"),
            Err(ValidationError::EmptyString("name"))
        );

        let entry = obj(json!({"name": 42}));
        assert_eq!(
            required_trimmed_string(&entry, "name"),
            Err(ValidationError::NotAString("name"))
        );

        let entry = obj(json!({}));
        assert_eq!(
            required_trimmed_string(&entry, "name"),
            Err(ValidationError::MissingField("name"))
        );
    }

    #[test]
    fn test_optional_string_lenient() {
        let entry = obj(json!({"description": "Fresh"}));
        assert_eq!(
            optional_string(&entry, "description"),
            Some("Fresh".to_owned())
        );

        // Absent and wrongly typed both degrade to None.
        assert_eq!(optional_string(&obj(json!({})), "description"), None);
        assert_eq!(
            optional_string(&obj(json!({"description": 7})), "description"),
            None
        );
    }

    #[test]
    fn test_required_price() {
        let entry = obj(json!({"price": 3.5}));
        assert_eq!(
            required_price(&entry, "price").unwrap(),
            Price::from_f64(3.5).unwrap()
        );

        let entry = obj(json!({"price": "3.5"}));
        assert_eq!(
            required_price(&entry, "price"),
            Err(ValidationError::NotANumber("price"))
        );

        let entry = obj(json!({"price": 0}));
        assert!(matches!(
            required_price(&entry, "price"),
            Err(ValidationError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_required_quantity() {
        let entry = obj(json!({"quantity": 2}));
        assert_eq!(required_quantity(&entry, "quantity").unwrap(), 2);

        for bad in [json!({"quantity": 0}), json!({"quantity": -1}), json!({"quantity": 1.5})] {
            assert_eq!(
                required_quantity(&obj(bad), "quantity"),
                Err(ValidationError::InvalidQuantity("quantity"))
            );
        }
    }
}
