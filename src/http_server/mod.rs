//! # HTTP API
//!
//! Axum front end for the employee store.
//!
//! # Endpoints
//!
//! - `GET /api/health` - Health check
//! - `POST /api/employees` - Create
//! - `GET /api/employees` - List all
//! - `GET /api/employees/search?department=X` - Department search
//! - `GET|PUT|DELETE /api/employees/{id}` - Read, update, delete

pub mod config;
pub mod employee_routes;
pub mod errors;
pub mod health_routes;
pub mod middleware;
pub mod response;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
