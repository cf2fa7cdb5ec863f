//! Observability for the employee registry
//!
//! Structured JSON event logging plus a request timer.
//!
//! ```ignore
//! use employee_registry::observability::Logger;
//!
//! Logger::info("EMPLOYEE_CREATED", &[("id", "42")]);
//! ```

mod logger;
mod timer;

pub use logger::{Logger, Severity};
pub use timer::Timer;
