//! Health HTTP Route
//!
//! Static liveness payload; never touches the record store.

use axum::{http::StatusCode, routing::get, Json, Router};

use super::employee_routes::method_not_allowed;
use super::response::{respond, HealthResponse, SuccessResponse};

/// Health check route (mounted under `/api`)
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler).fallback(method_not_allowed))
}

async fn health_handler() -> (StatusCode, Json<SuccessResponse<HealthResponse>>) {
    respond(
        StatusCode::OK,
        HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
    }
}
