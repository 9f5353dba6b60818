//! Framework-free business logic used by the HTTP routes.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;
use crate::storage::StorageError;

pub mod listing;
pub mod school;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Submitted data failed validation; one message per field.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Invalid(messages) => ServiceError::Validation(messages),
        }
    }
}
