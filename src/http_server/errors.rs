//! # API Errors
//!
//! Error kinds surfaced by the product endpoints and their HTTP mapping.
//! Every error body has the shape `{"error": <message>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Message returned for 5xx errors unless store errors are exposed
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Product API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id is not a non-negative 32-bit integer
    #[error("Invalid product ID")]
    InvalidProductId,

    /// Request body failed to decode
    #[error("Invalid request payload")]
    InvalidPayload,

    /// No product with the requested id
    #[error("Product not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure; carries the message shown to the client
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidProductId => StatusCode::BAD_REQUEST,
            ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidProductId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidPayload.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ErrorResponse::from(ApiError::NotFound)).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Product not found"}));
    }
}
