use auth::PasswordError;
use auth::PolicyError;
use auth::TokenError;
use thiserror::Error;

use crate::domain::errors::StoreError;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Registration flow errors.
///
/// Policy violations carry the specific unmet rule so the caller can tell
/// the user what to fix; nothing is persisted when any variant is returned.
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("Password rejected: {0}")]
    Policy(#[from] PolicyError),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Storage error: {0}")]
    Store(StoreError),
}

/// Authentication and authorization failures.
///
/// Variants are deliberately coarse: `InvalidCredentials` covers both
/// unknown-username and wrong-password, and `Unauthenticated` covers every
/// token failure, so callers cannot enumerate accounts or probe token state.
/// The specific internal cause is logged at the point of failure.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Not enough permissions")]
    Forbidden,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}
