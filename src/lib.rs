//! employee-registry - REST API for employee records
//!
//! The core is the record model (`employee`) and the concurrency-safe record
//! store (`store`); `http_server` and `cli` are the outer surfaces.

pub mod cli;
pub mod employee;
pub mod http_server;
pub mod observability;
pub mod store;

pub use employee::{Employee, EmployeeFields, EmployeeId, ValidationError};
pub use store::{EmployeeRepository, InMemoryEmployeeStore, StoreError, StoreResult};
