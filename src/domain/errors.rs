// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by entities, value objects and repositories.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input that breaks a field rule (blank title, bad email...).
    #[error("validation error: {0}")]
    Validation(String),
    /// State clash: duplicate names, repeated reviews, stale writes.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{what} not found"))
    }

    /// An optimistic write lost to a concurrent one.
    pub fn stale(what: &str) -> Self {
        Self::Conflict(format!("{what} conflict, please retry"))
    }
}
