use std::path::Path;

use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

use super::constants::{defaults, env};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("A non-empty JWT secret is required (set {})", env::JWT_SECRET_ENV_VAR)]
    MissingJwtSecret,
    #[error("Token TTL must be positive, got {0} seconds")]
    InvalidTokenTtl(i64),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
    pub postgres: PostgresSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Option<Secret<String>>,
    pub max_connections: u32,
}

/// CORS origins permitted to call the service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0
            .iter()
            .any(|allowed| allowed.as_bytes() == origin.as_bytes())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Settings {
    /// Load settings from `config/`, the environment and an optional `.env`
    /// file, in increasing order of precedence.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::load_from(Path::new(defaults::CONFIG_DIR))
    }

    pub fn load_from(config_dir: &Path) -> Result<Self, SettingsError> {
        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| defaults::APP_ENVIRONMENT.to_owned());

        let settings: Settings = Config::builder()
            .set_default("application.address", defaults::APP_ADDRESS)?
            .set_default("auth.jwt_secret", "")?
            .set_default("auth.token_ttl_in_seconds", defaults::TOKEN_TTL_IN_SECONDS)?
            .set_default("auth.allowed_origins", Vec::<String>::new())?
            .set_default(
                "postgres.max_connections",
                i64::from(defaults::POSTGRES_MAX_CONNECTIONS),
            )?
            .add_source(File::from(config_dir.join("base")).required(false))
            .add_source(File::from(config_dir.join(&environment)).required(false))
            .add_source(
                Environment::with_prefix(env::APP_ENV_PREFIX)
                    .prefix_separator(env::APP_ENV_SEPARATOR)
                    .separator(env::APP_ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("auth.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("auth.jwt_secret", std::env::var(env::JWT_SECRET_ENV_VAR).ok())?
            .set_override_option("postgres.url", std::env::var(env::DATABASE_URL_ENV_VAR).ok())?
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.auth.jwt_secret.expose_secret().is_empty() {
            return Err(SettingsError::MissingJwtSecret);
        }
        if self.auth.token_ttl_in_seconds <= 0 {
            return Err(SettingsError::InvalidTokenTtl(self.auth.token_ttl_in_seconds));
        }
        Ok(())
    }
}
