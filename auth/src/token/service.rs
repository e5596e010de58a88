use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Default session lifetime when the caller does not override it.
pub const DEFAULT_TTL_MINUTES: i64 = 30;

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256). The signing secret is provided once at
/// construction and is immutable afterwards; the service holds no other
/// state, so it can be shared freely across request handlers.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    default_ttl: Duration,
}

impl TokenService {
    /// Create a token service with the default 30 minute session lifetime.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret (at least 32 bytes recommended)
    ///
    /// # Errors
    /// * `EmptySecret` - The secret is empty; signing with a null key is
    ///   refused rather than silently producing forgeable tokens
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        Self::with_ttl(secret, Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    /// Create a token service with a custom default session lifetime.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret
    /// * `default_ttl` - Lifetime applied by [`TokenService::issue`]
    ///
    /// # Errors
    /// * `EmptySecret` - The secret is empty
    pub fn with_ttl(secret: &[u8], default_ttl: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            default_ttl,
        })
    }

    /// Issue a token for `subject` with the service's default lifetime.
    ///
    /// # Arguments
    /// * `subject` - Username the token authenticates
    /// * `role` - Role held at issuance time
    ///
    /// # Returns
    /// Encoded token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, role: &str) -> Result<String, TokenError> {
        self.issue_with_ttl(subject, role, self.default_ttl)
    }

    /// Issue a token with an explicit lifetime.
    ///
    /// # Arguments
    /// * `subject` - Username the token authenticates
    /// * `role` - Role held at issuance time
    /// * `ttl` - Time until the token expires
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_with_ttl(
        &self,
        subject: &str,
        role: &str,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let claims = Claims::for_session(subject, role, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and expiration, returning its claims.
    ///
    /// Expiration is checked with zero leeway against the current time.
    ///
    /// # Arguments
    /// * `token` - Encoded token string
    ///
    /// # Errors
    /// * `Expired` - Signature is valid but `exp` is in the past
    /// * `Malformed` - Decode failure or invalid signature
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_verify() {
        let service = TokenService::new(SECRET).expect("Failed to create service");

        let token = service.issue("alice", "admin").expect("Failed to issue");
        assert!(!token.is_empty());

        let claims = service.verify(&token).expect("Failed to verify");
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_verify_garbage_token() {
        let service = TokenService::new(SECRET).expect("Failed to create service");

        let result = service.verify("invalid.token.here");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = TokenService::new(b"secret1_at_least_32_bytes_long_key!").unwrap();
        let verifier = TokenService::new(b"secret2_at_least_32_bytes_long_key!").unwrap();

        let token = issuer.issue("alice", "admin").expect("Failed to issue");

        let result = verifier.verify(&token);
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_verify_expired_token() {
        let service = TokenService::new(SECRET).expect("Failed to create service");

        let token = service
            .issue_with_ttl("alice", "admin", Duration::seconds(-5))
            .expect("Failed to issue");

        let result = service.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_empty_secret_rejected() {
        let result = TokenService::new(b"");
        assert!(matches!(result, Err(TokenError::EmptySecret)));
    }

    #[test]
    fn test_custom_default_ttl() {
        let service = TokenService::with_ttl(SECRET, Duration::minutes(5)).unwrap();

        let token = service.issue("bob", "user").expect("Failed to issue");
        let claims = service.verify(&token).expect("Failed to verify");

        let remaining = claims.exp - chrono::Utc::now().timestamp();
        assert!(remaining > 4 * 60 && remaining <= 5 * 60);
    }
}
