//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::observability::{Logger, Severity, Timer};

/// Logs one `HTTP_REQUEST` event per request with method, path, status and
/// duration. Server errors are logged at ERROR, client errors at WARN.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let timer = Timer::new();

    let response = next.run(request).await;

    let status = response.status();
    let severity = if status.is_server_error() {
        Severity::Error
    } else if status.is_client_error() {
        Severity::Warn
    } else {
        Severity::Info
    };
    let status_text = status.as_u16().to_string();
    let elapsed = timer.elapsed_ms();

    Logger::log(
        severity,
        "HTTP_REQUEST",
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("status", status_text.as_str()),
            ("duration_ms", elapsed.as_str()),
        ],
    );

    response
}
