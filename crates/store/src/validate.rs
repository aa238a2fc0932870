//! Payload validation for product create and replace.
//!
//! Rules run in order and the first failure wins:
//!
//! 1. `name`, `description`, `price` and `category` are present and truthy
//!    (empty string, `null`, `false` and numeric zero are rejected, except
//!    that a numeric `price` is left to rule 2), and `inStock` is present.
//!    `inStock: false` is valid; only its absence is rejected.
//! 2. `price` is a JSON number strictly greater than zero.
//! 3. Text fields are strings and `inStock` is a boolean.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::product::ProductPayload;

/// Check a raw JSON body and produce the typed payload it describes.
///
/// Anything other than a JSON object is checked as if it were `{}`.
///
/// ```rust
/// use serde_json::json;
/// use store::{validate_product, ValidationError};
///
/// let missing_stock = json!({
///     "name": "Desk",
///     "description": "Standing desk",
///     "price": 300,
///     "category": "office"
/// });
/// assert_eq!(validate_product(&missing_stock), Err(ValidationError::MissingFields));
/// ```
pub fn validate_product(body: &Value) -> Result<ProductPayload, ValidationError> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);

    let name = fields.get("name");
    let description = fields.get("description");
    let price = fields.get("price");
    let category = fields.get("category");
    let in_stock = fields.get("inStock");

    let price_present = match price {
        Some(Value::Number(_)) => true,
        other => is_truthy(other),
    };
    if !is_truthy(name)
        || !is_truthy(description)
        || !price_present
        || !is_truthy(category)
        || in_stock.is_none()
    {
        return Err(ValidationError::MissingFields);
    }

    let price = price
        .and_then(Value::as_f64)
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or(ValidationError::InvalidPrice)?;

    Ok(ProductPayload {
        name: text(name)?,
        description: text(description)?,
        price,
        category: text(category)?,
        in_stock: in_stock
            .and_then(Value::as_bool)
            .ok_or(ValidationError::MissingFields)?,
    })
}

/// Truthiness as clients of the API expect it: absent, `null`, `false`, `0`
/// and `""` are falsy; everything else is truthy.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn text(value: Option<&Value>) -> Result<String, ValidationError> {
    value
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ValidationError::MissingFields)
}
