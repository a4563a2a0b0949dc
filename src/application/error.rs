// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    /// Carries the missing resource, e.g. `blog` or `category`.
    #[error("{0} not found")]
    NotFound(String),

    /// Carries the colliding field, e.g. `slug`.
    #[error("{0} already exists")]
    Conflict(String),

    #[error("image upload failed: {0}")]
    Upload(String),

    #[error("persistence failure: {0}")]
    Persistence(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    pub fn conflict(field: impl Into<String>) -> Self {
        Self::Conflict(field.into())
    }

    pub fn upload(msg: impl Into<String>) -> Self {
        Self::Upload(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::Conflict(field) => Self::Conflict(field),
            DomainError::NotFound(resource) => Self::NotFound(resource),
            DomainError::Persistence(msg) => Self::Persistence(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_kind() {
        assert!(matches!(
            ApplicationError::from(DomainError::Conflict("slug".into())),
            ApplicationError::Conflict(field) if field == "slug"
        ));
        assert!(matches!(
            ApplicationError::from(DomainError::Persistence("boom".into())),
            ApplicationError::Persistence(_)
        ));
    }

    #[test]
    fn not_found_message_names_the_resource() {
        assert_eq!(ApplicationError::not_found("category").to_string(), "category not found");
    }
}
