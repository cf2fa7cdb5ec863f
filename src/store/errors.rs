//! # Store Errors
//!
//! Error types for record store operations. Every error leaves the store
//! unchanged and usable.

use thiserror::Error;

use crate::employee::{EmployeeId, ValidationError};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// One or more fields failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Another live record already uses this email
    #[error("Employee with email {email} already exists")]
    DuplicateEmail { email: String },

    /// No live record has this id
    #[error("Employee with ID {id} not found")]
    NotFound { id: EmployeeId },

    /// The store guard was poisoned by a panicking holder
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Stable short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Validation(_) => "validation",
            StoreError::DuplicateEmail { .. } => "duplicate_email",
            StoreError::NotFound { .. } => "not_found",
            StoreError::Unavailable(_) => "unavailable",
        }
    }
}
