use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::token::AccessTokenSource;
use crate::domain::models::{FirebaseConfig, QueueEntry};
use crate::domain::ports::{QueueStore, QueueStoreError};
use crate::infrastructure::logging::scrub;

/// Response body of a Realtime Database `POST`
#[derive(Debug, Deserialize)]
struct PushResponse {
    name: Option<String>,
}

/// Appends queue entries to a Firebase Realtime Database path over REST
///
/// Every push is a `POST {database_url}/{queue_path}.json`, so the database
/// generates a fresh chronologically ordered key for each entry.
pub struct FirebaseQueueStore {
    http_client: ReqwestClient,
    push_url: String,
    tokens: Arc<dyn AccessTokenSource>,
}

impl FirebaseQueueStore {
    pub fn new(
        database_url: &str,
        queue_path: &str,
        http_client: ReqwestClient,
        tokens: Arc<dyn AccessTokenSource>,
    ) -> Self {
        let push_url = format!(
            "{}/{}.json",
            database_url.trim().trim_end_matches('/'),
            queue_path.trim().trim_matches('/')
        );

        Self {
            http_client,
            push_url,
            tokens,
        }
    }

    /// Build a store from configuration with its own HTTP client
    pub fn from_config(
        config: &FirebaseConfig,
        tokens: Arc<dyn AccessTokenSource>,
    ) -> Result<Self, QueueStoreError> {
        let http_client = http_client(config.request_timeout_secs)?;
        Ok(Self::new(
            &config.database_url,
            &config.queue_path,
            http_client,
            tokens,
        ))
    }

    pub fn push_url(&self) -> &str {
        &self.push_url
    }
}

/// HTTP client shared by the queue store and the token exchange
pub fn http_client(timeout_secs: u64) -> Result<ReqwestClient, QueueStoreError> {
    ReqwestClient::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .pool_max_idle_per_host(10)
        .tcp_nodelay(true)
        .build()
        .map_err(|e| QueueStoreError::Transport(e.to_string()))
}

#[async_trait]
impl QueueStore for FirebaseQueueStore {
    #[instrument(skip(self, entry), fields(from = %entry.from))]
    async fn push(&self, entry: &QueueEntry) -> Result<String, QueueStoreError> {
        let token = self.tokens.access_token().await?;

        debug!("POST {}", self.push_url);
        let response = self
            .http_client
            .post(&self.push_url)
            .bearer_auth(token)
            .json(entry)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            let body = scrub(&body);
            warn!(status = status.as_u16(), body = %body, "Firebase push rejected");

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    QueueStoreError::Authentication(body)
                }
                _ => QueueStoreError::Api {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let body: PushResponse = response
            .json()
            .await
            .map_err(|e| QueueStoreError::InvalidResponse(e.to_string()))?;

        body.name
            .filter(|key| !key.is_empty())
            .ok_or_else(|| QueueStoreError::InvalidResponse("missing `name` in push response".to_string()))
    }
}

fn transport_error(err: reqwest::Error) -> QueueStoreError {
    if err.is_timeout() {
        QueueStoreError::Timeout
    } else {
        QueueStoreError::Transport(scrub(&err.to_string()))
    }
}
