use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::infrastructure::logging::parse_log_level;

/// Config file read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "courier.yaml";

/// Plain environment variables accepted for hosting platforms, with the
/// config key each one sets
const PLATFORM_ENV_KEYS: [(&str, &str); 4] = [
    ("TELEGRAM_TOKEN", "telegram.token"),
    ("GEMINI_API_KEY", "gemini.api_key"),
    ("FIREBASE_DATABASE_URL", "firebase.database_url"),
    ("PORT", "liveness.port"),
];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Telegram token is missing. Set TELEGRAM_TOKEN or telegram.token")]
    MissingTelegramToken,

    #[error("Firebase database URL is missing. Set FIREBASE_DATABASE_URL or firebase.database_url")]
    EmptyDatabaseUrl,

    #[error("Invalid Firebase database URL: {0}. Must start with http:// or https://")]
    InvalidDatabaseUrl(String),

    #[error("Firebase queue path cannot be empty")]
    EmptyQueuePath,

    #[error("Invalid liveness port: 0")]
    InvalidPort,

    #[error("Invalid {0} timeout: must be at least 1 second")]
    InvalidTimeout(&'static str),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. YAML file (`path`, or `courier.yaml` in the working directory, optional)
    /// 3. Environment variables (COURIER_* prefix, `__` for nesting)
    /// 4. Hosting platform variables (TELEGRAM_TOKEN, GEMINI_API_KEY,
    ///    FIREBASE_DATABASE_URL, PORT)
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config: Config = Self::figment(path)
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Build the layered figment without extracting it
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed("COURIER_").split("__"));

        for (var, key) in PLATFORM_ENV_KEYS {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }

        figment
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let token = config.telegram.token.as_deref().unwrap_or_default();
        if token.trim().is_empty() {
            return Err(ConfigError::MissingTelegramToken);
        }

        let database_url = config.firebase.database_url.trim();
        if database_url.is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }
        if !(database_url.starts_with("https://") || database_url.starts_with("http://")) {
            return Err(ConfigError::InvalidDatabaseUrl(database_url.to_string()));
        }

        if config.firebase.queue_path.trim_matches('/').trim().is_empty() {
            return Err(ConfigError::EmptyQueuePath);
        }

        if config.liveness.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if config.gemini.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("gemini"));
        }
        if config.firebase.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("firebase"));
        }

        if parse_log_level(&config.logging.level).is_err() {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
