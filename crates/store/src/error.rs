//! Error types produced by the store crate.
//!
//! | Error | Raised by | Meaning |
//! |-------|-----------|---------|
//! | [`StoreError::NotFound`] | [`ProductStore`](crate::ProductStore) | id does not resolve to a live product |
//! | [`StoreError::Poisoned`] | [`ProductStore`](crate::ProductStore) | a writer panicked while holding the lock |
//! | [`ValidationError`] | [`validate_product`](crate::validate_product) | payload rule violation |
//! | [`FilterError`] | [`ProductFilter`](crate::ProductFilter) | a price bound is not a number |
//!
//! The `Display` text of [`ValidationError`] is the exact reason string sent
//! back to API clients, so changing it changes the wire contract.

use thiserror::Error;

/// Errors returned by [`ProductStore`](crate::ProductStore) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// No live product carries the requested id.
    #[error("product '{0}' not found")]
    NotFound(String),

    /// The collection lock was poisoned.
    #[error("product store lock poisoned")]
    Poisoned,
}

/// Payload rule violations, checked in declaration order.
///
/// ```rust
/// use store::ValidationError;
///
/// assert_eq!(
///     ValidationError::MissingFields.to_string(),
///     "All product fields are required."
/// );
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent, empty, or of the wrong shape.
    #[error("All product fields are required.")]
    MissingFields,

    /// `price` is not a number strictly greater than zero.
    #[error("Price must be a positive number.")]
    InvalidPrice,
}

/// Errors raised while turning query text into a [`ProductFilter`](crate::ProductFilter).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A `minPrice`/`maxPrice` value did not parse as a finite number.
    #[error("Invalid {param} filter: '{value}' is not a number.")]
    InvalidPriceBound { param: &'static str, value: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
