//! Catalog Store Layer
//!
//! Everything the catalog knows about products, with no HTTP in sight:
//!
//! - **[`Product`]** - the single record type, serialized with camelCase fields
//! - **[`ProductStore`]** - the live, insertion-ordered collection behind a lock
//! - **[`validate_product`]** - turns an untrusted JSON body into a [`ProductPayload`]
//! - **[`ProductFilter`]** - optional list predicates, AND-composed
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use store::{validate_product, ProductFilter, ProductStore};
//!
//! let store = ProductStore::seeded();
//! let payload = validate_product(&json!({
//!     "name": "Monitor",
//!     "description": "27 inch display",
//!     "price": 250,
//!     "category": "electronics",
//!     "inStock": false
//! }))
//! .unwrap();
//!
//! let created = store.insert(payload).unwrap();
//! let electronics = store
//!     .list(&ProductFilter::new().with_category("Electronics"))
//!     .unwrap();
//! assert!(electronics.iter().any(|p| p.id == created.id));
//! ```

mod error;
mod filter;
mod product;
mod serde_price;
mod store;
mod validate;

pub use crate::error::{FilterError, StoreError, StoreResult, ValidationError};
pub use crate::filter::ProductFilter;
pub use crate::product::{seed_products, Product, ProductPayload};
pub use crate::store::ProductStore;
pub use crate::validate::validate_product;
