//! Employee record and the field mapping it is built from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::errors::{FieldViolation, ValidationError};
use super::validate::{
    today, validate_department, validate_email, validate_hire_date_on, validate_name,
    validate_role, HIRE_DATE_FORMAT,
};

/// Store-assigned employee identifier (starts at 1, never reused)
pub type EmployeeId = u64;

/// Raw employee fields as supplied by a caller.
///
/// `None` means "not supplied". On create every field must be present; on
/// update absent fields keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
}

impl EmployeeFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn hire_date(mut self, hire_date: impl Into<String>) -> Self {
        self.hire_date = Some(hire_date.into());
        self
    }

    /// Returns `self` with every field supplied in `patch` replaced.
    pub fn overlay(mut self, patch: &EmployeeFields) -> Self {
        if let Some(name) = &patch.name {
            self.name = Some(name.clone());
        }
        if let Some(email) = &patch.email {
            self.email = Some(email.clone());
        }
        if let Some(department) = &patch.department {
            self.department = Some(department.clone());
        }
        if let Some(role) = &patch.role {
            self.role = Some(role.clone());
        }
        if let Some(hire_date) = &patch.hire_date {
            self.hire_date = Some(hire_date.clone());
        }
        self
    }
}

/// A fully validated employee record.
///
/// Fields are private: the only ways to obtain an `Employee` are the
/// validating constructors, so every instance satisfies the field rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    email: String,
    department: String,
    role: String,
    hire_date: NaiveDate,
}

impl Employee {
    /// Validates `fields` and builds a record with the given id.
    ///
    /// All fields are checked; every violation is reported in the error.
    pub fn from_fields(id: EmployeeId, fields: &EmployeeFields) -> Result<Self, ValidationError> {
        Self::from_fields_on(id, fields, today())
    }

    /// Like [`Employee::from_fields`] with an explicit current date.
    pub fn from_fields_on(
        id: EmployeeId,
        fields: &EmployeeFields,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        let name = keep(validate_name(fields.name.as_deref()), &mut violations);
        let email = keep(validate_email(fields.email.as_deref()), &mut violations);
        let department = keep(
            validate_department(fields.department.as_deref()),
            &mut violations,
        );
        let role = keep(validate_role(fields.role.as_deref()), &mut violations);
        let hire_date = keep(
            validate_hire_date_on(fields.hire_date.as_deref(), today),
            &mut violations,
        );

        match (name, email, department, role, hire_date) {
            (Some(name), Some(email), Some(department), Some(role), Some(hire_date)) => Ok(Self {
                id,
                name,
                email,
                department,
                role,
                hire_date,
            }),
            _ => Err(ValidationError::new(violations)),
        }
    }

    /// Builds the candidate produced by applying `patch` to this record.
    ///
    /// The whole candidate is re-validated; `self` is left untouched.
    pub fn merged_with(&self, patch: &EmployeeFields) -> Result<Self, ValidationError> {
        let merged = self.to_fields().overlay(patch);
        Self::from_fields(self.id, &merged)
    }

    /// Current values as a field mapping (without the id)
    pub fn to_fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            department: Some(self.department.clone()),
            role: Some(self.role.clone()),
            hire_date: Some(self.hire_date_text()),
        }
    }

    /// Plain JSON object of all attributes, including `id`
    pub fn to_value(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
            "department": self.department,
            "role": self.role,
            "hire_date": self.hire_date_text(),
        })
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    fn hire_date_text(&self) -> String {
        self.hire_date.format(HIRE_DATE_FORMAT).to_string()
    }
}

fn keep<T>(result: Result<T, FieldViolation>, violations: &mut Vec<FieldViolation>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(violation) => {
            violations.push(violation);
            None
        }
    }
}
