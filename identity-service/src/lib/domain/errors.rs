use thiserror::Error;

/// Error type shared by all persistence ports.
///
/// Store adapters translate their backend-specific failures into these
/// variants; domain services map them onto domain errors.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Record already exists: {0}")]
    Duplicate(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}
