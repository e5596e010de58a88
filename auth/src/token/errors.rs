use thiserror::Error;

/// Error type for token operations.
///
/// `Malformed` and `Expired` must both collapse to a generic
/// "unauthenticated" signal at the service boundary; only internal logs may
/// distinguish them.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token is malformed or its signature is invalid: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Signing secret must not be empty")]
    EmptySecret,
}
