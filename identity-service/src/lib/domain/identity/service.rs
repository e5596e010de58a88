use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::PasswordPolicy;
use auth::TokenService;
use chrono::Utc;

use crate::domain::errors::StoreError;
use crate::domain::identity::errors::AuthError;
use crate::domain::identity::errors::RegistrationError;
use crate::domain::identity::models::AccessToken;
use crate::domain::identity::models::RegisterUserCommand;
use crate::domain::identity::models::User;
use crate::domain::identity::models::UserId;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::IdentityServicePort;
use crate::domain::identity::ports::UserStore;

/// Domain service for registration, authentication, and principal
/// resolution.
///
/// Coordinates the password hasher, password policy, and token service over
/// an injected user store. Holds no mutable state: the hasher and token
/// service are pure, so the service can be shared across request handlers.
pub struct IdentityService<S>
where
    S: UserStore,
{
    store: Arc<S>,
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

impl<S> IdentityService<S>
where
    S: UserStore,
{
    /// Create a new identity service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    /// * `token_service` - Configured token service (secret already validated)
    pub fn new(store: Arc<S>, token_service: TokenService) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            token_service,
        }
    }
}

/// Enforce an exact role match for a protected operation.
///
/// Every protected operation passes through this check after resolving its
/// principal; there is no role hierarchy.
///
/// # Arguments
/// * `principal` - Resolved user identity for the current request
/// * `required_role` - Role tag the operation demands
///
/// # Errors
/// * `Forbidden` - Principal's role does not match
pub fn require_role(principal: &User, required_role: &str) -> Result<(), AuthError> {
    if principal.role.as_str() == required_role {
        Ok(())
    } else {
        tracing::warn!(
            username = %principal.username,
            role = %principal.role,
            required_role,
            "Authorization denied: insufficient role"
        );
        Err(AuthError::Forbidden)
    }
}

#[async_trait]
impl<S> IdentityServicePort for IdentityService<S>
where
    S: UserStore,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, RegistrationError> {
        // Policy runs before hashing or persistence: a rejected password
        // leaves no trace of the attempted registration.
        PasswordPolicy::validate(&command.password)?;

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            role: command.role,
            password_hash,
            created_at: Utc::now(),
        };

        self.store.insert(user).await.map_err(|e| match e {
            StoreError::Duplicate(username) => RegistrationError::DuplicateUsername(username),
            other => RegistrationError::Store(other),
        })
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError> {
        // A syntactically invalid username cannot name an account; treat it
        // like an unknown user.
        let Ok(username) = Username::new(username.to_string()) else {
            tracing::warn!(username, "Authentication failed: invalid username format");
            return Err(AuthError::InvalidCredentials);
        };

        let Some(user) = self.store.find_by_username(&username).await? else {
            tracing::warn!(%username, "Authentication failed: user not found");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.password_hasher.verify(password, &user.password_hash) {
            tracing::warn!(%username, "Authentication failed: incorrect password");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError> {
        let user = self.authenticate(username, password).await?;

        let token = self
            .token_service
            .issue(user.username.as_str(), user.role.as_str())?;

        Ok(AccessToken::bearer(token))
    }

    async fn current_principal(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.token_service.verify(token).map_err(|e| {
            tracing::warn!(error = %e, "Token rejected");
            AuthError::Unauthenticated
        })?;

        let Ok(username) = Username::new(claims.sub.clone()) else {
            tracing::warn!(subject = %claims.sub, "Token subject is not a valid username");
            return Err(AuthError::Unauthenticated);
        };

        // The enforced role is always the live one from storage. The role
        // embedded in the token reflects issuance time only and is never
        // used for authorization decisions.
        let Some(user) = self.store.find_by_username(&username).await? else {
            tracing::warn!(%username, "Token subject no longer exists");
            return Err(AuthError::Unauthenticated);
        };

        Ok(user)
    }
}
