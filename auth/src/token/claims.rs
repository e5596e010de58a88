use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set embedded in a session token.
///
/// Carries the subject (username), the role held at issuance time, and the
/// absolute expiration instant. Tokens are self-contained: validity is
/// determined purely by signature and expiration, nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Role held at issuance time
    pub role: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create a claim set for a new session expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Username the token authenticates
    /// * `role` - Role held at issuance time
    /// * `ttl` - Time until expiration
    pub fn for_session(subject: impl Into<String>, role: impl Into<String>, ttl: Duration) -> Self {
        Self {
            sub: subject.into(),
            role: role.into(),
            exp: (Utc::now() + ttl).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_session() {
        let claims = Claims::for_session("alice", "admin", Duration::minutes(30));

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "admin");

        let remaining = claims.exp - Utc::now().timestamp();
        assert!(remaining > 29 * 60 && remaining <= 30 * 60);
    }
}
