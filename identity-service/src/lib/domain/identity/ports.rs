use async_trait::async_trait;

use crate::domain::errors::StoreError;
use crate::domain::identity::errors::AuthError;
use crate::domain::identity::errors::RegistrationError;
use crate::domain::identity::models::AccessToken;
use crate::domain::identity::models::RegisterUserCommand;
use crate::domain::identity::models::User;
use crate::domain::identity::models::Username;

/// Read-only user query port.
///
/// The only lookup the authentication and authorization paths need; kept
/// separate from [`UserStore`] so guards depend on nothing they cannot use.
#[async_trait]
pub trait UserLookup: Send + Sync + 'static {
    /// Retrieve a user record (including password hash) by username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Backend` - Storage operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, StoreError>;
}

/// Full persistence port for the user aggregate.
#[async_trait]
pub trait UserStore: UserLookup {
    /// Persist a new user record.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `Duplicate` - Username is already taken
    /// * `Backend` - Storage operation failed
    async fn insert(&self, user: User) -> Result<User, StoreError>;
}

/// Port for identity domain service operations.
#[async_trait]
pub trait IdentityServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// Password policy is checked before anything is hashed or persisted;
    /// no user record exists after any failure.
    ///
    /// # Arguments
    /// * `command` - Command containing username, role, and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `Policy` - Password violates the registration policy
    /// * `DuplicateUsername` - Username is already taken
    /// * `Store` - Storage operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, RegistrationError>;

    /// Check a username/password pair against the stored record.
    ///
    /// # Arguments
    /// * `username` - Presented username
    /// * `password` - Presented plaintext password
    ///
    /// # Returns
    /// The stored user identity on success
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    ///   (externally indistinguishable)
    /// * `Store` - Storage operation failed
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError>;

    /// Authenticate and issue a session token.
    ///
    /// # Arguments
    /// * `username` - Presented username
    /// * `password` - Presented plaintext password
    ///
    /// # Returns
    /// Bearer access token encoding the user's current role
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Store` - Storage operation failed
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError>;

    /// Resolve the principal for an inbound bearer token.
    ///
    /// Verifies the token, then re-fetches the user from storage: the
    /// returned record carries the live role, never the role embedded in
    /// the token.
    ///
    /// # Arguments
    /// * `token` - Bare token string (already stripped of `Bearer ` prefix)
    ///
    /// # Returns
    /// The live user identity for the token's subject
    ///
    /// # Errors
    /// * `Unauthenticated` - Malformed/expired token, or subject no longer
    ///   exists (externally indistinguishable)
    /// * `Store` - Storage operation failed
    async fn current_principal(&self, token: &str) -> Result<User, AuthError>;
}
