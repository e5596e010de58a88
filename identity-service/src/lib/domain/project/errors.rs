use thiserror::Error;

use crate::domain::errors::StoreError;
use crate::domain::identity::errors::AuthError;

/// Error type for project operations.
#[derive(Debug, Clone, Error)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
