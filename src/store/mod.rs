//! Employee record store
//!
//! Owns the authoritative collection of employees: identity assignment,
//! email uniqueness across records, and point/filtered queries.
//!
//! # Invariants
//!
//! - At most one record per id; ids are never reused after deletion.
//! - At most one live record per email (exact, case-sensitive match).
//! - Every operation either fully succeeds or leaves the store unchanged.
//! - Callers receive clones; the store alone owns the stored records.

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryEmployeeStore;

use crate::employee::{Employee, EmployeeFields, EmployeeId};

/// Record store operations
pub trait EmployeeRepository: Send + Sync {
    /// Validate `fields`, enforce email uniqueness, assign the next id.
    fn create(&self, fields: &EmployeeFields) -> StoreResult<Employee>;

    /// Snapshot of every record, ascending by id.
    fn get_all(&self) -> StoreResult<Vec<Employee>>;

    /// The record with `id`.
    fn get_by_id(&self, id: EmployeeId) -> StoreResult<Employee>;

    /// Overlay the supplied fields onto record `id` and validate the result.
    fn update(&self, id: EmployeeId, fields: &EmployeeFields) -> StoreResult<Employee>;

    /// Remove record `id`, returning what was removed.
    fn delete(&self, id: EmployeeId) -> StoreResult<Employee>;

    /// Records whose department equals `department`, trimmed and
    /// case-insensitively. Ascending by id.
    fn search_by_department(&self, department: &str) -> StoreResult<Vec<Employee>>;

    /// Number of live records.
    fn count(&self) -> StoreResult<usize>;
}
