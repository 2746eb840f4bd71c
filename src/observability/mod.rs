//! Observability for the product API
//!
//! Structured logging through `tracing`. HTTP request spans come from the
//! trace layer installed by the server.

mod logger;

pub use logger::{init_logging, LogConfig, LogFormat};
