//! Services composing the repository with the listing view state.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod listings;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
