//! Authentication primitives library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id) and registration-time password policy
//! - Signed, time-limited bearer token issuance and verification (HS256)
//!
//! The library is storage-agnostic: services own their user records and
//! inject these primitives where credentials are checked or tokens minted.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("Sup3r!secret").unwrap();
//! assert!(hasher.verify("Sup3r!secret", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Password Policy
//! ```
//! use auth::PasswordPolicy;
//!
//! assert!(PasswordPolicy::validate("Password1!").is_ok());
//! assert!(PasswordPolicy::validate("abc").is_err());
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let token = tokens.issue("alice", "admin").unwrap();
//! let claims = tokens.verify(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! assert_eq!(claims.role, "admin");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordPolicy;
pub use password::PolicyError;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
