//! Employee HTTP Routes
//!
//! Each route performs exactly one record store call. Bodies are parsed into
//! `EmployeeFields` here, so the store never sees raw JSON.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, Query, State,
    },
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::employee::{
    Employee, EmployeeFields, EmployeeId, Field, FieldViolation, ValidationError,
};
use crate::store::{EmployeeRepository, StoreError};

use super::errors::{ApiError, ApiResult};
use super::response::{respond, MessageResponse, SuccessResponse};

type EnvelopeResult<T> = ApiResult<(StatusCode, Json<SuccessResponse<T>>)>;

/// Create employee routes (mounted under `/api`)
pub fn employee_routes<R: EmployeeRepository + 'static>(store: Arc<R>) -> Router {
    Router::new()
        .route(
            "/employees",
            get(list_handler::<R>)
                .post(create_handler::<R>)
                .fallback(method_not_allowed),
        )
        .route(
            "/employees/search",
            get(search_handler::<R>).fallback(method_not_allowed),
        )
        .route(
            "/employees/:id",
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>)
                .fallback(method_not_allowed),
        )
        .with_state(store)
}

// ==================
// Request Parsing
// ==================

/// Parses a path id; anything but a positive integer is treated as absent.
fn parse_id(raw: &str) -> ApiResult<EmployeeId> {
    raw.parse::<EmployeeId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::InvalidId(raw.to_string()))
}

/// Resolves the `:id` segment, including ids axum could not decode.
fn path_id(path: Result<Path<String>, PathRejection>, uri: &Uri) -> ApiResult<EmployeeId> {
    match path {
        Ok(Path(raw)) => parse_id(&raw),
        Err(_) => {
            let raw = uri.path().rsplit('/').next().unwrap_or_default();
            Err(ApiError::InvalidId(raw.to_string()))
        }
    }
}

/// Unwraps the buffered body, mapping axum's rejection onto the envelope.
fn body_bytes(body: Result<Bytes, BytesRejection>) -> ApiResult<Bytes> {
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::InvalidBody(rejection.body_text())
        }
    })
}

/// Parses a JSON object body into employee fields.
///
/// Unknown keys are ignored. With `reject_id` (updates), a body carrying
/// `id` is refused, and a field explicitly set to `null` is reported as
/// missing instead of being left unchanged.
fn parse_fields(body: &[u8], reject_id: bool) -> ApiResult<EmployeeFields> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BodyRequired);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let object = match value {
        Value::Object(map) if !map.is_empty() => map,
        Value::Object(_) | Value::Null => return Err(ApiError::BodyRequired),
        _ => {
            return Err(ApiError::InvalidBody(
                "expected a JSON object".to_string(),
            ))
        }
    };

    if reject_id && object.contains_key("id") {
        return Err(ApiError::IdImmutable);
    }

    // An update that names a field must supply a value for it
    if reject_id {
        let cleared: Vec<FieldViolation> = Field::ALL
            .into_iter()
            .filter(|field| matches!(object.get(field.as_str()), Some(Value::Null)))
            .map(FieldViolation::missing)
            .collect();
        if !cleared.is_empty() {
            return Err(StoreError::from(ValidationError::new(cleared)).into());
        }
    }

    serde_json::from_value(Value::Object(object)).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

// ==================
// Handlers
// ==================

async fn create_handler<R: EmployeeRepository>(
    State(store): State<Arc<R>>,
    body: Result<Bytes, BytesRejection>,
) -> EnvelopeResult<Employee> {
    let body = body_bytes(body)?;
    let fields = parse_fields(&body, false)?;
    let employee = store.create(&fields)?;
    Ok(respond(StatusCode::CREATED, employee))
}

async fn list_handler<R: EmployeeRepository>(
    State(store): State<Arc<R>>,
) -> EnvelopeResult<Vec<Employee>> {
    Ok(respond(StatusCode::OK, store.get_all()?))
}

async fn search_handler<R: EmployeeRepository>(
    State(store): State<Arc<R>>,
    Query(query): Query<HashMap<String, String>>,
) -> EnvelopeResult<Vec<Employee>> {
    let department = query
        .get("department")
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .ok_or(ApiError::MissingParam("Department"))?;

    Ok(respond(StatusCode::OK, store.search_by_department(department)?))
}

async fn get_handler<R: EmployeeRepository>(
    State(store): State<Arc<R>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> EnvelopeResult<Employee> {
    let id = path_id(path, &uri)?;
    Ok(respond(StatusCode::OK, store.get_by_id(id)?))
}

async fn update_handler<R: EmployeeRepository>(
    State(store): State<Arc<R>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> EnvelopeResult<Employee> {
    let id = path_id(path, &uri)?;
    let body = body_bytes(body)?;
    let fields = parse_fields(&body, true)?;
    Ok(respond(StatusCode::OK, store.update(id, &fields)?))
}

async fn delete_handler<R: EmployeeRepository>(
    State(store): State<Arc<R>>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> EnvelopeResult<MessageResponse> {
    let id = path_id(path, &uri)?;
    store.delete(id)?;
    Ok(respond(
        StatusCode::OK,
        MessageResponse {
            message: format!("Employee {} deleted successfully", id),
        },
    ))
}

/// Method fallback for known paths
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
