//! Serialization helper for prices.
//!
//! Whole prices go out as JSON integers (`1200`, not `1200.0`) so a record
//! echoes back the number a client sent.

use serde::{Deserialize, Deserializer, Serializer};

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialize a price, using an integer when it has no fractional part.
pub fn serialize<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.fract() == 0.0 && price.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Deserialize a price from any JSON number.
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer)
}
