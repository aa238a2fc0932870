//! Catalog Server - HTTP REST API over the in-memory product catalog
//!
//! Every request runs through a fixed pipeline:
//!
//! - **Logging**: method, URI and timestamp for every request, then status and duration
//! - **Authentication**: `x-api-key` must match the configured key on every `/api` path
//! - **Validation**: POST/PUT product bodies are checked before the store is touched
//! - **Handlers**: the only stage that reads or mutates the [`store::ProductStore`]
//! - **Error responses**: every failure becomes `{"error": "<message>"}`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! ## Public Endpoints (No Authentication)
//!
//! - `GET /` - Welcome text
//!
//! ## Protected Endpoints (API Key Required)
//!
//! - `GET /api/products` - List products (`category`, `minPrice`, `maxPrice`, `name` filters)
//! - `GET /api/products/{id}` - Get product by ID
//! - `POST /api/products` - Create product
//! - `PUT /api/products/{id}` - Replace product
//! - `DELETE /api/products/{id}` - Delete product

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
