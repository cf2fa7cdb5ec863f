//! Employee record model
//!
//! Defines the employee entity and enforces field-level validity both for
//! full construction and for validating a merged update candidate.

pub mod errors;
pub mod model;
pub mod validate;

pub use errors::{Field, FieldViolation, ValidationError, ViolationReason};
pub use model::{Employee, EmployeeFields, EmployeeId};
