//! Employee validation errors
//!
//! A single `ValidationError` carries every field violation found in one
//! construction attempt, so callers can report the complete set at once.

use std::fmt;

/// Employee fields subject to validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Department,
    Role,
    HireDate,
}

impl Field {
    /// Every field, in declaration order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Department,
        Field::Role,
        Field::HireDate,
    ];

    /// Wire name of the field (as used in request bodies)
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Department => "department",
            Field::Role => "role",
            Field::HireDate => "hire_date",
        }
    }

    /// Human-readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Department => "Department",
            Field::Role => "Role",
            Field::HireDate => "Hire date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationReason {
    /// Absent, or empty after trimming
    Missing,
    /// Shorter than `min` characters after trimming
    TooShort { min: usize },
    /// Longer than `max` characters after trimming
    TooLong { max: usize },
    /// Does not match the expected textual shape
    Malformed { expected: &'static str },
    /// Well-formed but outside the accepted range
    OutOfRange { detail: String },
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Field,
    pub reason: ViolationReason,
}

impl FieldViolation {
    pub fn new(field: Field, reason: ViolationReason) -> Self {
        Self { field, reason }
    }

    pub fn missing(field: Field) -> Self {
        Self::new(field, ViolationReason::Missing)
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.field.label();
        match &self.reason {
            ViolationReason::Missing => write!(f, "{} is required", label),
            ViolationReason::TooShort { min } => {
                write!(f, "{} must be at least {} characters long", label, min)
            }
            ViolationReason::TooLong { max } => {
                write!(f, "{} must be at most {} characters long", label, max)
            }
            ViolationReason::Malformed { expected } => {
                write!(f, "{} must be {}", label, expected)
            }
            ViolationReason::OutOfRange { detail } => write!(f, "{} {}", label, detail),
        }
    }
}

/// One or more field violations from a single validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Builds an error from collected violations.
    ///
    /// Callers only construct this when at least one violation was found.
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn single(violation: FieldViolation) -> Self {
        Self::new(vec![violation])
    }

    /// All violations, in field declaration order
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns the reason recorded for `field`, if it was rejected
    pub fn reason_for(&self, field: Field) -> Option<&ViolationReason> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| &v.reason)
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.reason_for(field).is_some()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<FieldViolation> for ValidationError {
    fn from(violation: FieldViolation) -> Self {
        Self::single(violation)
    }
}
