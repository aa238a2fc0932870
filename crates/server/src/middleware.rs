//! Request pipeline stages.
//!
//! Each stage either answers immediately with an [`ApiError`] or hands the
//! request on with `next.run`. The router fixes their order: logging,
//! authentication for `/api` paths, then payload validation on mutating
//! product routes.

use crate::error::ApiError;
use crate::state::ServerState;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Path prefix guarded by [`api_key_auth`].
pub const API_PREFIX: &str = "/api";

/// Whether `path` falls under the authenticated API prefix.
pub fn is_api_path(path: &str) -> bool {
    path == API_PREFIX
        || path
            .strip_prefix(API_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// API key authentication middleware
///
/// Requests outside [`API_PREFIX`] pass straight through.
pub async fn api_key_auth(
    State(state): State<Arc<ServerState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !is_api_path(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let api_key = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match api_key {
        Some(key) if state.is_valid_api_key(key) => Ok(next.run(request).await),
        _ => {
            tracing::debug!(path = %request.uri().path(), "Rejected request without valid API key");
            Err(ApiError::Unauthorized)
        }
    }
}

/// Product payload validation middleware
///
/// Buffers the body up to the configured limit, checks it, and hands the
/// typed [`ProductPayload`](store::ProductPayload) to the handler as a request
/// extension. Bodies that are empty or not JSON are checked as `{}`.
pub async fn validate_product_body(
    State(state): State<Arc<ServerState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, state.config.max_body_size()).await?;

    let value = if is_json_content(&parts.headers) && !bytes.is_empty() {
        serde_json::from_slice::<Value>(&bytes)?
    } else {
        Value::Object(Default::default())
    };

    let payload = store::validate_product(&value)?;

    let mut request = Request::from_parts(parts, Body::from(bytes));
    request.extensions_mut().insert(payload);
    Ok(next.run(request).await)
}

fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Logging middleware
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    tracing::info!(
        timestamp = %chrono::Utc::now().to_rfc3339(),
        method = %method,
        uri = %uri,
        "Request started"
    );

    let response = next.run(request).await;
    let duration = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %status,
        duration_ms = %duration.as_millis(),
        "Request completed"
    );

    response
}
