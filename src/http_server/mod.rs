//! # HTTP Server Module
//!
//! JSON API over the product store, served with axum.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/products` - List and create products
//! - `/products/:id` - Fetch, overwrite and delete one product

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod product_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use product_routes::{ListParams, ProductState, MAX_PAGE_SIZE};
pub use server::{build_router, HttpServer};
