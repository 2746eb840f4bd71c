//! product-api - JSON CRUD service for product records
//!
//! Layers, leaf first:
//! - `store`: product data access over PostgreSQL (or memory)
//! - `http_server`: axum routes, handlers and server bootstrap
//! - `cli`: configuration loading and process entry points

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
