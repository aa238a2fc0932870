//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with the product endpoints
//! - Middleware stack (logging, auth, validation, panic recovery)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::error::panic_response;
use crate::middleware::{api_key_auth, log_requests, validate_product_body};
use crate::routes::{not_found, products, welcome};
use crate::state::ServerState;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post, put};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Every request passes, in order, through:
/// 1. Request logging
/// 2. CORS
/// 3. API key authentication (`/api` paths only, including unknown ones)
/// 4. Panic recovery
/// 5. Payload validation (POST/PUT product routes only)
/// 6. The route handler, or the 404 fallback
pub fn build_router(state: Arc<ServerState>) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let validate = from_fn_with_state(state.clone(), validate_product_body);

    Router::new()
        .route("/", get(welcome))
        .route(
            "/api/products",
            get(products::list_products)
                .merge(post(products::create_product).route_layer(validate.clone())),
        )
        .route(
            "/api/products/{id}",
            get(products::get_product)
                .delete(products::delete_product)
                .merge(put(products::update_product).route_layer(validate)),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(from_fn_with_state(state.clone(), api_key_auth))
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the catalog HTTP server
///
/// Initializes logging, seeds the product store, and serves until SIGTERM
/// or Ctrl+C.
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .json()
        .init();

    if !config.has_api_key() {
        tracing::warn!("No API_KEY configured, every /api request will be rejected");
    }

    // Create server state
    let state = Arc::new(ServerState::new(config.clone()));
    let product_count = state.store.len()?;

    // Build router
    let app = build_router(state);

    // Parse bind address
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        "Server is running on http://{} with {} seed products",
        addr,
        product_count
    );
    tracing::info!(
        "Max body: {}KB, CORS: {}",
        config.max_body_size_kb,
        config.enable_cors
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
