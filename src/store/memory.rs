//! In-memory employee store.
//!
//! One mutex guards both the record map and the id counter. Every operation
//! holds it for its whole duration, so operations are totally ordered and a
//! failed operation never leaves a partial write behind. Logging happens
//! after the guard is released.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::employee::{Employee, EmployeeFields, EmployeeId, Field, FieldViolation, ValidationError};
use crate::observability::Logger;

use super::errors::{StoreError, StoreResult};
use super::EmployeeRepository;

struct StoreState {
    employees: BTreeMap<EmployeeId, Employee>,
    next_id: EmployeeId,
}

impl StoreState {
    fn email_taken(&self, email: &str, except: Option<EmployeeId>) -> bool {
        self.employees
            .values()
            .any(|e| e.email() == email && Some(e.id()) != except)
    }

    fn insert_new(&mut self, fields: &EmployeeFields) -> StoreResult<Employee> {
        let employee = Employee::from_fields(self.next_id, fields)?;

        if self.email_taken(employee.email(), None) {
            return Err(StoreError::DuplicateEmail {
                email: employee.email().to_string(),
            });
        }

        // Counter only advances on success; ids are never handed out twice
        self.next_id += 1;
        self.employees.insert(employee.id(), employee.clone());
        Ok(employee)
    }

    fn replace(&mut self, id: EmployeeId, patch: &EmployeeFields) -> StoreResult<Employee> {
        let current = self
            .employees
            .get(&id)
            .ok_or(StoreError::NotFound { id })?;
        let candidate = current.merged_with(patch)?;

        if candidate.email() != current.email() && self.email_taken(candidate.email(), Some(id)) {
            return Err(StoreError::DuplicateEmail {
                email: candidate.email().to_string(),
            });
        }

        self.employees.insert(id, candidate.clone());
        Ok(candidate)
    }

    fn remove(&mut self, id: EmployeeId) -> StoreResult<Employee> {
        self.employees
            .remove(&id)
            .ok_or(StoreError::NotFound { id })
    }

    fn in_department(&self, department_lower: &str) -> Vec<Employee> {
        self.employees
            .values()
            .filter(|e| e.department().to_lowercase() == department_lower)
            .cloned()
            .collect()
    }
}

/// Thread-safe in-memory employee store
pub struct InMemoryEmployeeStore {
    state: Mutex<StoreState>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                employees: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, StoreState>> {
        self.state
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl Default for InMemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeRepository for InMemoryEmployeeStore {
    fn create(&self, fields: &EmployeeFields) -> StoreResult<Employee> {
        let result = self.lock().and_then(|mut state| state.insert_new(fields));
        log_mutation("create", "EMPLOYEE_CREATED", &result);
        result
    }

    fn get_all(&self) -> StoreResult<Vec<Employee>> {
        let state = self.lock()?;
        Ok(state.employees.values().cloned().collect())
    }

    fn get_by_id(&self, id: EmployeeId) -> StoreResult<Employee> {
        let state = self.lock()?;
        state
            .employees
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn update(&self, id: EmployeeId, fields: &EmployeeFields) -> StoreResult<Employee> {
        let result = self.lock().and_then(|mut state| state.replace(id, fields));
        log_mutation("update", "EMPLOYEE_UPDATED", &result);
        result
    }

    fn delete(&self, id: EmployeeId) -> StoreResult<Employee> {
        let result = self.lock().and_then(|mut state| state.remove(id));
        log_mutation("delete", "EMPLOYEE_DELETED", &result);
        result
    }

    fn search_by_department(&self, department: &str) -> StoreResult<Vec<Employee>> {
        let query = department.trim().to_lowercase();
        if query.is_empty() {
            return Err(ValidationError::single(FieldViolation::missing(Field::Department)).into());
        }

        let state = self.lock()?;
        Ok(state.in_department(&query))
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.lock()?.employees.len())
    }
}

fn log_mutation(operation: &str, event: &str, result: &StoreResult<Employee>) {
    match result {
        Ok(employee) => {
            let id = employee.id().to_string();
            Logger::info(event, &[("id", id.as_str())]);
        }
        Err(StoreError::Unavailable(reason)) => {
            Logger::error(
                "EMPLOYEE_STORE_UNAVAILABLE",
                &[("operation", operation), ("reason", reason.as_str())],
            );
        }
        Err(err) => {
            Logger::warn(
                "EMPLOYEE_REJECTED",
                &[("operation", operation), ("reason", err.kind())],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, department: &str) -> EmployeeFields {
        EmployeeFields::new()
            .name(name)
            .email(email)
            .department(department)
            .role("Engineer")
            .hire_date("2020-05-01")
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let store = InMemoryEmployeeStore::new();
        let a = store.create(&fields("Ann Lee", "ann@x.com", "Sales")).unwrap();
        let b = store.create(&fields("Bob Ray", "bob@x.com", "Sales")).unwrap();
        assert_eq!((a.id(), b.id()), (1, 2));
    }

    #[test]
    fn test_failed_create_does_not_consume_id() {
        let store = InMemoryEmployeeStore::new();
        store.create(&fields("Ann Lee", "ann@x.com", "Sales")).unwrap();
        assert!(store.create(&fields("A", "bad", "Sales")).is_err());
        assert!(store.create(&fields("Ann Two", "ann@x.com", "Sales")).is_err());

        let next = store.create(&fields("Cy Ko", "cy@x.com", "Sales")).unwrap();
        assert_eq!(next.id(), 2);
    }

    #[test]
    fn test_update_may_keep_own_email() {
        let store = InMemoryEmployeeStore::new();
        let ann = store.create(&fields("Ann Lee", "ann@x.com", "Sales")).unwrap();
        let updated = store
            .update(ann.id(), &EmployeeFields::new().email("ann@x.com").role("Lead"))
            .unwrap();
        assert_eq!(updated.role(), "Lead");
    }

    #[test]
    fn test_search_requires_department() {
        let store = InMemoryEmployeeStore::new();
        let err = store.search_by_department("   ").unwrap_err();
        assert!(matches!(err, StoreError::Validation(ref v) if v.has_field(Field::Department)));
    }

    #[test]
    fn test_poisoned_guard_reports_unavailable() {
        let store = std::sync::Arc::new(InMemoryEmployeeStore::new());
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.state.lock().unwrap();
            panic!("poison the store guard");
        })
        .join();

        assert!(matches!(store.get_all(), Err(StoreError::Unavailable(_))));
    }
}
