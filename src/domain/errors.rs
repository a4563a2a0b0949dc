// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    /// Carries the name of the field whose value collided.
    #[error("{0} already exists")]
    Conflict(String),
    /// Carries the name of the missing resource.
    #[error("{0} not found")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
