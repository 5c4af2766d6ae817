use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for courier
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Telegram bot configuration
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Gemini language model configuration
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Firebase Realtime Database queue configuration
    #[serde(default)]
    pub firebase: FirebaseConfig,

    /// Liveness HTTP endpoint configuration
    #[serde(default)]
    pub liveness: LivenessConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TelegramConfig {
    /// Bot API token (also read from `TELEGRAM_TOKEN`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Gemini language model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GeminiConfig {
    /// API key (also read from `GEMINI_API_KEY`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL for the Generative Language API (for testing/proxies)
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Model to use, e.g. `gemini-1.5-flash`; discovered when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Substrings a discovered model name should contain to be preferred
    #[serde(default = "default_preferred_model_tokens")]
    pub preferred_model_tokens: Vec<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_preferred_model_tokens() -> Vec<String> {
    vec!["flash".to_string()]
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gemini_base_url(),
            model: None,
            preferred_model_tokens: default_preferred_model_tokens(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Firebase Realtime Database queue configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FirebaseConfig {
    /// Database root URL (also read from `FIREBASE_DATABASE_URL`)
    #[serde(default)]
    pub database_url: String,

    /// Collection that receives queued commands
    #[serde(default = "default_queue_path")]
    pub queue_path: String,

    /// Service-account key file
    #[serde(default = "default_credentials_path")]
    pub credentials_path: PathBuf,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_queue_path() -> String {
    "task_queue".to_string()
}

fn default_credentials_path() -> PathBuf {
    PathBuf::from("firebase-service-account.json")
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            queue_path: default_queue_path(),
            credentials_path: default_credentials_path(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Liveness HTTP endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LivenessConfig {
    /// Interface to bind
    #[serde(default = "default_liveness_host")]
    pub host: String,

    /// Port to bind (also read from `PORT`)
    #[serde(default = "default_liveness_port")]
    pub port: u16,
}

fn default_liveness_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_liveness_port() -> u16 {
    8080
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self {
            host: default_liveness_host(),
            port: default_liveness_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Stdout format
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for rolling JSON log files (stdout only when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation policy
    #[serde(default)]
    pub rotation: RotationPolicy,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}
