//! Workspace umbrella crate for the product catalog API.
//!
//! Re-exports the store layer (model, validation, filters) and the HTTP
//! server so callers can depend on a single crate.
//!
//! ```
//! use catalog::{build_router, ServerConfig, ServerState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(ServerState::new(ServerConfig::with_api_key("secret")));
//! let _app = build_router(state);
//! ```

pub use server::{
    build_router, start_server, ApiError, ApiResult, ServerConfig, ServerState,
};
pub use store::{
    seed_products, validate_product, FilterError, Product, ProductFilter, ProductPayload,
    ProductStore, StoreError, StoreResult, ValidationError,
};
