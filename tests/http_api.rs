//! HTTP API Tests
//!
//! Drives the full router in-process and checks status codes and the
//! success/error envelope for every route.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use employee_registry::http_server::{HttpServer, ServerConfig};
use employee_registry::InMemoryEmployeeStore;
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn app() -> Router {
    HttpServer::build_router(
        &ServerConfig::default(),
        Arc::new(InMemoryEmployeeStore::new()),
    )
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(body) => Body::from(body.to_string()),
        None => Body::empty(),
    };
    send_raw(app, method, uri, body).await
}

async fn send_raw(app: &Router, method: &str, uri: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn john() -> Value {
    json!({
        "name": "John Doe",
        "email": "john@x.com",
        "department": "Engineering",
        "role": "Engineer",
        "hire_date": "2024-01-15"
    })
}

// =============================================================================
// Health and Fallbacks
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/nothing-here", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Resource not found"}));
}

#[tokio::test]
async fn test_wrong_method_is_json_405() {
    let app = app();
    let (status, body) = send(&app, "PATCH", "/api/employees", Some(john())).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"success": false, "error": "Method not allowed"}));
}

// =============================================================================
// CRUD Scenario
// =============================================================================

#[tokio::test]
async fn test_crud_scenario() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/employees", Some(john())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["hire_date"], "2024-01-15");

    let (status, body) = send(&app, "POST", "/api/employees", Some(john())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Employee with email john@x.com already exists");

    let (status, body) = send(
        &app,
        "PUT",
        "/api/employees/1",
        Some(json!({"role": "Senior Engineer"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "Senior Engineer");
    assert_eq!(body["data"]["name"], "John Doe");
    assert_eq!(body["data"]["email"], "john@x.com");

    let (status, body) = send(&app, "GET", "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "Senior Engineer");

    let (status, body) = send(&app, "DELETE", "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "Employee 1 deleted successfully");

    let (status, body) = send(&app, "GET", "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Employee with ID 1 not found");
}

#[tokio::test]
async fn test_list_returns_all_in_id_order() {
    let app = app();
    send(&app, "POST", "/api/employees", Some(john())).await;
    let mut jane = john();
    jane["name"] = json!("Jane Roe");
    jane["email"] = json!("jane@x.com");
    send(&app, "POST", "/api/employees", Some(jane)).await;

    let (status, body) = send(&app, "GET", "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

// =============================================================================
// Request Validation
// =============================================================================

#[tokio::test]
async fn test_validation_errors_are_400_with_all_fields() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/employees",
        Some(json!({"name": "J", "email": "nope"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Name must be at least 2 characters long"));
    assert!(message.contains("Email must be a valid email address"));
    assert!(message.contains("Hire date is required"));
}

#[tokio::test]
async fn test_missing_body_is_400() {
    let app = app();
    let (status, body) = send(&app, "POST", "/api/employees", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Request body is required");

    let (status, _) = send(&app, "POST", "/api/employees", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_rejects_id_in_body() {
    let app = app();
    send(&app, "POST", "/api/employees", Some(john())).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/employees/1",
        Some(json!({"id": 5, "role": "Lead"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Employee ID cannot be updated");
}

#[tokio::test]
async fn test_update_with_null_field_is_rejected() {
    let app = app();
    send(&app, "POST", "/api/employees", Some(john())).await;

    let (status, body) = send(&app, "PUT", "/api/employees/1", Some(json!({"name": null}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "error": "Name is required"}));

    let (_, body) = send(&app, "GET", "/api/employees/1", None).await;
    assert_eq!(body["data"]["name"], "John Doe");
}

#[tokio::test]
async fn test_oversized_body_uses_error_envelope() {
    let app = app();
    let padding = "x".repeat(3 * 1024 * 1024);
    let body = Body::from(format!(r#"{{"name": "{}"}}"#, padding));

    let (status, body) = send_raw(&app, "POST", "/api/employees", body).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body, json!({"success": false, "error": "Request body too large"}));
}

#[tokio::test]
async fn test_update_missing_employee_is_404() {
    let app = app();
    let (status, _) = send(
        &app,
        "PUT",
        "/api/employees/7",
        Some(json!({"role": "Lead"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_404() {
    let app = app();
    for uri in ["/api/employees/abc", "/api/employees/0", "/api/employees/-1"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["success"], false);
    }

    let (status, _) = send(&app, "DELETE", "/api/employees/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_undecodable_id_is_404_envelope() {
    let app = app();
    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, method, "/api/employees/%FF", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(
            body,
            json!({"success": false, "error": "Employee with ID %FF not found"})
        );
    }

    let (status, body) = send(
        &app,
        "PUT",
        "/api/employees/%FF",
        Some(json!({"role": "Lead"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_by_department() {
    let app = app();
    send(&app, "POST", "/api/employees", Some(john())).await;

    let (status, body) = send(&app, "GET", "/api/employees/search?department=engineering", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["department"], "Engineering");

    let (status, body) = send(&app, "GET", "/api/employees/search?department=Finance", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_search_requires_department() {
    let app = app();
    for uri in ["/api/employees/search", "/api/employees/search?department=%20"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "Department parameter is required");
    }
}
