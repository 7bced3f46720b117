//! Structural validation of a parsed manifest payload.

use serde_json::Value;
use thiserror::Error;

/// Why a parsed payload was rejected. Only used for diagnostics; every
/// variant leads to the same failure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The top-level JSON value is not an object.
    #[error("manifest is not a JSON object")]
    NotAnObject,
    /// The object has no `items` field.
    #[error("manifest has no `items` field")]
    MissingItems,
    /// `items` is present but not an array.
    #[error("manifest `items` is not an array")]
    ItemsNotArray,
    /// `items` is an empty array.
    #[error("manifest `items` is empty")]
    EmptyItems,
}

/// Checks that `payload` is an object with a non-empty `items` array and
/// returns the items.
pub fn validate(payload: &Value) -> Result<&[Value], SchemaError> {
    let obj = payload.as_object().ok_or(SchemaError::NotAnObject)?;
    let items = obj.get("items").ok_or(SchemaError::MissingItems)?;
    let items = items.as_array().ok_or(SchemaError::ItemsNotArray)?;
    if items.is_empty() {
        return Err(SchemaError::EmptyItems);
    }
    Ok(items)
}
