//! # Response Envelope
//!
//! Every response body is either `{"success": true, "data": ...}` or
//! `{"success": false, "error": "..."}`.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Successful response body
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Plain message payload (delete confirmation)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check payload
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Wraps `data` in the success envelope with the given status
pub fn respond<T: Serialize>(status: StatusCode, data: T) -> (StatusCode, Json<SuccessResponse<T>>) {
    (status, Json(SuccessResponse::new(data)))
}
