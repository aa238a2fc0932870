//! API route handlers
//!
//! - `products`: product CRUD under `/api/products`
//!
//! plus the public welcome text and the shared 404 fallback.

pub mod products;

use crate::error::ApiError;

/// Plain-text body served at `/`.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Product API! Go to /api/products to see all products.";

/// Root endpoint (GET /), no authentication.
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes and for
/// methods a known path does not support.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
