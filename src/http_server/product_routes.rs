//! Product HTTP Routes
//!
//! CRUD endpoints for the product resource:
//!
//! - `GET    /products`       list, paged by `start` and `count`
//! - `POST   /products`       create
//! - `GET    /products/:id`   fetch one
//! - `PUT    /products/:id`   overwrite
//! - `DELETE /products/:id`   remove

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{debug, error, info};

use super::errors::{ApiError, ApiResult, INTERNAL_ERROR_MESSAGE};
use crate::store::{Product, ProductPayload, ProductStore, StoreError};

/// Largest page returned by the list endpoint, also the default page size
pub const MAX_PAGE_SIZE: i64 = 10;

// ==================
// Shared State
// ==================

/// Product state shared across handlers
pub struct ProductState {
    store: Arc<dyn ProductStore>,
    expose_store_errors: bool,
}

impl ProductState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            store,
            expose_store_errors: false,
        }
    }

    /// Echo raw store error text to clients instead of a generic message
    pub fn with_exposed_store_errors(mut self, expose: bool) -> Self {
        self.expose_store_errors = expose;
        self
    }

    /// Map a store failure to its API error, logging anything unexpected
    fn store_error(&self, operation: &'static str, err: StoreError) -> ApiError {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            other => {
                error!(operation, error = %other, "product store operation failed");
                if self.expose_store_errors {
                    ApiError::Internal(other.to_string())
                } else {
                    ApiError::Internal(INTERNAL_ERROR_MESSAGE.to_string())
                }
            }
        }
    }
}

// ==================
// Request/Response Types
// ==================

/// Paging parameters after clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub start: i64,
    pub count: i64,
}

impl ListParams {
    /// Read `start` and `count` from query parameters.
    ///
    /// `count` outside `1..=MAX_PAGE_SIZE`, missing or unparsable falls back
    /// to `MAX_PAGE_SIZE`. `start` that is negative, missing or unparsable
    /// falls back to 0.
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let parse = |key: &str| query.get(key).and_then(|v| v.parse::<i64>().ok());

        let count = parse("count")
            .filter(|c| (1..=MAX_PAGE_SIZE).contains(c))
            .unwrap_or(MAX_PAGE_SIZE);
        let start = parse("start").filter(|s| *s >= 0).unwrap_or(0);

        Self { start, count }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            start: 0,
            count: MAX_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: &'static str,
}

impl ResultResponse {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}

/// Parse a path id. Only plain decimal digits that fit an `i32` are accepted.
pub fn parse_product_id(raw: &str) -> ApiResult<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidProductId);
    }
    raw.parse::<i32>().map_err(|_| ApiError::InvalidProductId)
}

// ==================
// Product Routes
// ==================

/// Create product routes
pub fn product_routes(state: Arc<ProductState>) -> Router {
    Router::new()
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/products/:id",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_products_handler(
    State(state): State<Arc<ProductState>>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<Product>>> {
    let params = ListParams::from_query(&query);
    debug!(start = params.start, count = params.count, "listing products");

    let products = state
        .store
        .list(params.start, params.count)
        .await
        .map_err(|e| state.store_error("list", e))?;

    Ok(Json(products))
}

async fn get_product_handler(
    State(state): State<Arc<ProductState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_product_id(&id)?;

    let product = state
        .store
        .fetch(id)
        .await
        .map_err(|e| state.store_error("fetch", e))?;

    Ok(Json(product))
}

async fn create_product_handler(
    State(state): State<Arc<ProductState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let payload = ProductPayload::from_json(&body).map_err(|e| {
        debug!(error = %e, "rejected product payload");
        ApiError::InvalidPayload
    })?;

    let product = state
        .store
        .create(payload)
        .await
        .map_err(|e| state.store_error("create", e))?;

    info!(id = product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product_handler(
    State(state): State<Arc<ProductState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Product>> {
    let id = parse_product_id(&id)?;
    let payload = ProductPayload::from_json(&body).map_err(|e| {
        debug!(error = %e, "rejected product payload");
        ApiError::InvalidPayload
    })?;

    let product = payload.with_id(id);
    state
        .store
        .update(&product)
        .await
        .map_err(|e| state.store_error("update", e))?;

    Ok(Json(product))
}

async fn delete_product_handler(
    State(state): State<Arc<ProductState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ResultResponse>> {
    let id = parse_product_id(&id)?;

    state
        .store
        .delete(id)
        .await
        .map_err(|e| state.store_error("delete", e))?;

    info!(id, "product deleted");
    Ok(Json(ResultResponse::success()))
}
