use std::env;

use auth::TokenError;
use auth::TokenService;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Symmetric token signing secret. Required; the process must not start
    /// without one.
    pub secret: String,

    /// Session token lifetime in minutes.
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,
}

fn default_token_ttl_minutes() -> i64 {
    auth::token::service::DEFAULT_TTL_MINUTES
}

impl AuthConfig {
    /// Build a token service from the configured secret and TTL override.
    ///
    /// # Errors
    /// * `EmptySecret` - The configured secret is empty
    pub fn token_service(&self) -> Result<TokenService, TokenError> {
        TokenService::with_ttl(
            self.secret.as_bytes(),
            Duration::minutes(self.token_ttl_minutes),
        )
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__SECRET, AUTH__TOKEN_TTL_MINUTES)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// A missing or empty signing secret is a load error: startup must fail
    /// rather than fall back to signing tokens with a null key.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__SECRET=... overrides auth.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        if config.auth.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "auth.secret must be set to a non-empty value".to_string(),
            ));
        }

        Ok(config)
    }
}
