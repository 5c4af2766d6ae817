use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the service-account JSON document inline
pub const INLINE_CREDENTIALS_ENV: &str = "FIREBASE_CREDENTIALS_JSON";

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Errors raised while loading service-account credentials
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("Firebase credentials not found: no {INLINE_CREDENTIALS_ENV} and no file at {0}")]
    Missing(PathBuf),

    #[error("Failed to read credentials file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse service-account JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid service-account key: {0}")]
    InvalidKey(String),
}

/// A Google service-account key as downloaded from the Firebase console
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,

    pub private_key: String,

    #[serde(default = "default_token_uri")]
    pub token_uri: String,

    #[serde(default)]
    pub project_id: Option<String>,

    #[serde(default)]
    pub private_key_id: Option<String>,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"[REDACTED]")
            .field("token_uri", &self.token_uri)
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .finish()
    }
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> Result<Self, CredentialsError> {
        let key: Self = serde_json::from_str(json)?;
        key.check()?;
        Ok(key)
    }

    pub fn from_file(path: &Path) -> Result<Self, CredentialsError> {
        let json = std::fs::read_to_string(path).map_err(|source| CredentialsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Resolve credentials from a key file or an inline JSON document
    ///
    /// The file at `path` wins when it exists. Otherwise a non-blank `inline`
    /// document is used, and [`CredentialsError::Missing`] is returned when
    /// neither is available.
    pub fn load(path: &Path, inline: Option<&str>) -> Result<Self, CredentialsError> {
        if path.exists() {
            return Self::from_file(path);
        }
        match inline.map(str::trim).filter(|j| !j.is_empty()) {
            Some(json) => Self::from_json(json),
            None => Err(CredentialsError::Missing(path.to_path_buf())),
        }
    }

    fn check(&self) -> Result<(), CredentialsError> {
        if self.client_email.trim().is_empty() {
            return Err(CredentialsError::InvalidKey("client_email is empty".to_string()));
        }
        if !self.private_key.contains("PRIVATE KEY") {
            return Err(CredentialsError::InvalidKey(
                "private_key is not a PEM-encoded key".to_string(),
            ));
        }
        Ok(())
    }
}
