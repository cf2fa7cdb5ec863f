//! # API Errors
//!
//! Request-level errors and their mapping onto HTTP status codes and the
//! error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;

use super::response::ErrorResponse;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error reported by the record store
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Body absent, empty, or an empty object
    #[error("Request body is required")]
    BodyRequired,

    /// Body exceeds the buffering limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Body is not a JSON object of string fields
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Update body tried to set the id
    #[error("Employee ID cannot be updated")]
    IdImmutable,

    /// Required query parameter missing or blank
    #[error("{0} parameter is required")]
    MissingParam(&'static str),

    /// Path id is not a positive integer
    #[error("Employee with ID {0} not found")]
    InvalidId(String),

    /// No route matches the path
    #[error("Resource not found")]
    RouteNotFound,

    /// Route exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::DuplicateEmail { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,

            ApiError::BodyRequired => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::IdImmutable => StatusCode::BAD_REQUEST,
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,

            ApiError::InvalidId(_) => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Message safe to return to clients
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Store(StoreError::Unavailable(_)) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            let detail = self.to_string();
            Logger::error("HTTP_INTERNAL_ERROR", &[("detail", detail.as_str())]);
        }
        let body = Json(ErrorResponse::new(self.public_message()));
        (status, body).into_response()
    }
}
