use crate::error::ApiResult;
use crate::state::ServerState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use store::{Product, ProductFilter, ProductPayload};

/// Query parameters for the product listing. All optional, all text.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    /// Case-insensitive exact category
    #[serde(default)]
    pub category: Option<String>,

    /// Inclusive lower price bound
    #[serde(default)]
    pub min_price: Option<String>,

    /// Inclusive upper price bound
    #[serde(default)]
    pub max_price: Option<String>,

    /// Case-insensitive name substring
    #[serde(default)]
    pub name: Option<String>,
}

impl ListProductsQuery {
    pub fn to_filter(&self) -> ApiResult<ProductFilter> {
        Ok(ProductFilter::from_query(
            self.category.as_deref(),
            self.min_price.as_deref(),
            self.max_price.as_deref(),
            self.name.as_deref(),
        )?)
    }
}

/// Response from product delete
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteProductResponse {
    pub message: String,
    pub product: Product,
}

/// List products, optionally filtered
pub async fn list_products(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let filter = query.to_filter()?;
    let products = state.store.list(&filter)?;

    tracing::debug!(
        filtered = !filter.is_empty(),
        count = products.len(),
        "Listed products"
    );

    Ok(Json(products))
}

/// Get a product by id
pub async fn get_product(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.store.get(&id)?))
}

/// Create a product from a validated payload
pub async fn create_product(
    State(state): State<Arc<ServerState>>,
    Extension(payload): Extension<ProductPayload>,
) -> ApiResult<impl IntoResponse> {
    let product = state.store.insert(payload)?;
    tracing::info!(id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace every field of an existing product
pub async fn update_product(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    Extension(payload): Extension<ProductPayload>,
) -> ApiResult<impl IntoResponse> {
    let product = state.store.replace(&id, payload)?;
    tracing::info!(id = %product.id, "Product updated");
    Ok(Json(product))
}

/// Delete a product, echoing the removed record
pub async fn delete_product(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteProductResponse>> {
    let product = state.store.delete(&id)?;
    tracing::info!(id = %product.id, "Product deleted");
    Ok(Json(DeleteProductResponse {
        message: "Product deleted".to_string(),
        product,
    }))
}
