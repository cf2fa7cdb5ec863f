//! # HTTP Server
//!
//! Combines the health and employee routers under `/api`, adds the JSON
//! 404 fallback, request logging and CORS, and serves them with axum.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::store::EmployeeRepository;

use super::config::ServerConfig;
use super::employee_routes::employee_routes;
use super::errors::ApiError;
use super::health_routes::health_routes;
use super::middleware::log_requests;

/// HTTP server for the employee API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an explicitly constructed store
    pub fn new<R: EmployeeRepository + 'static>(config: ServerConfig, store: Arc<R>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router<R: EmployeeRepository + 'static>(
        config: &ServerConfig,
        store: Arc<R>,
    ) -> Router {
        let api = health_routes().merge(employee_routes(store));

        Router::new()
            .nest("/api", api)
            .fallback(route_not_found)
            .layer(middleware::from_fn(log_requests))
            .layer(cors_layer(config))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let local_addr = listener.local_addr()?.to_string();

        Logger::info("SERVER_STARTED", &[("addr", local_addr.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::info("SERVER_STOPPED", &[("addr", local_addr.as_str())]);
        Ok(())
    }
}

/// Permissive CORS when no origins are configured, otherwise the listed ones
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        Logger::warn("SHUTDOWN_SIGNAL_UNAVAILABLE", &[]);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryEmployeeStore;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(
            ServerConfig::default(),
            Arc::new(InMemoryEmployeeStore::new()),
        );
        assert_eq!(server.socket_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..ServerConfig::with_port(8080)
        };
        let server = HttpServer::new(config, Arc::new(InMemoryEmployeeStore::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
        let _router = server.router();
    }
}
